use std::time::{Duration, Instant};

use crate::eval::context::FrameContext;
use crate::eval::evaluator::Evaluator;
use crate::eval::visual::FrameOutput;
use crate::foundation::core::{Track, TrackDurations};
use crate::foundation::math::non_negative;
use crate::present::style::Presenter;
use crate::seek::backend::{MediaBackend, usable_duration};
use crate::seek::guard::PlaybackGuard;
use crate::seek::scheduler::SeekScheduler;
use crate::session::frame_loop::FrameLoop;
use crate::timeline::segments::Timeline;

/// Single-threaded driver wiring evaluator, frame loop and both seek schedulers.
///
/// The embedding forwards its events (scroll, resize, metadata, seek completion, pointer
/// drag, activation) and calls [`ScrollSession::on_animation_frame`] from its frame callback.
#[derive(Debug)]
pub struct ScrollSession<A, B> {
    evaluator: Evaluator,
    timeline: Timeline,
    durations: TrackDurations,
    viewport_height: f64,
    activated: bool,
    seek_verified: bool,
    frames: FrameLoop,
    guard: PlaybackGuard,
    first: SeekScheduler<A>,
    second: SeekScheduler<B>,
    last: Option<FrameOutput>,
}

impl<A: MediaBackend, B: MediaBackend> ScrollSession<A, B> {
    /// Attach both media backends. The timeline starts locked.
    pub fn new(evaluator: Evaluator, first: A, second: B, viewport_height: f64) -> Self {
        let deadband = evaluator.config().seek_deadband_s;
        let mut durations = TrackDurations::default();
        if let Some(d) = usable_duration(&first) {
            durations.update(Track::First, d);
        }
        if let Some(d) = usable_duration(&second) {
            durations.update(Track::Second, d);
        }
        let viewport_height = non_negative(viewport_height);
        let timeline = evaluator.timeline(durations, viewport_height);
        Self {
            evaluator,
            timeline,
            durations,
            viewport_height,
            activated: false,
            seek_verified: false,
            frames: FrameLoop::default(),
            guard: PlaybackGuard::default(),
            first: SeekScheduler::with_deadband(Track::First, first, deadband),
            second: SeekScheduler::with_deadband(Track::Second, second, deadband),
            last: None,
        }
    }

    /// Current timeline.
    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    /// Height for the scroll spacer, in whole pixels.
    pub fn scroll_extent_px(&self) -> u64 {
        self.timeline.scroll_extent_px()
    }

    /// Durations the timeline was derived from.
    pub fn durations(&self) -> TrackDurations {
        self.durations
    }

    /// The evaluator in use.
    pub fn evaluator(&self) -> &Evaluator {
        &self.evaluator
    }

    /// Frame coalescing state.
    pub fn frame_loop(&self) -> &FrameLoop {
        &self.frames
    }

    /// Scheduler of the first clip.
    pub fn first(&self) -> &SeekScheduler<A> {
        &self.first
    }

    /// Scheduler of the second clip.
    pub fn second(&self) -> &SeekScheduler<B> {
        &self.second
    }

    /// Output of the last evaluated frame.
    pub fn last_frame(&self) -> Option<&FrameOutput> {
        self.last.as_ref()
    }

    /// Whether both activation signals have been received.
    pub fn is_unlocked(&self) -> bool {
        self.activated && self.seek_verified
    }

    /// Scroll event. Returns `true` when the caller must schedule a frame callback.
    pub fn on_scroll(&mut self) -> bool {
        self.frames.request_tick()
    }

    /// Viewport resize: only the trailing pad changes.
    pub fn on_resize(&mut self, viewport_height: f64) -> bool {
        self.viewport_height = non_negative(viewport_height);
        self.rederive();
        self.frames.request_tick()
    }

    /// Metadata event for one clip.
    ///
    /// Returns `true` when the caller must schedule a frame callback.
    pub fn on_metadata(&mut self, track: Track) -> bool {
        let changed = match track {
            Track::First => self.first.on_metadata(),
            Track::Second => self.second.on_metadata(),
        };
        if let Some(d) = changed
            && self.durations.update(track, d)
        {
            self.rederive();
        }
        self.frames.request_tick()
    }

    /// Poll both backends for durations, for when metadata events may have been missed.
    ///
    /// Returns `true` when the timeline changed.
    pub fn refresh_timeline(&mut self) -> bool {
        let mut changed = false;
        if let Some(d) = self.first.on_metadata() {
            changed |= self.durations.update(Track::First, d);
        }
        if let Some(d) = self.second.on_metadata() {
            changed |= self.durations.update(Track::Second, d);
        }
        if changed {
            self.rederive();
        }
        changed
    }

    /// The gesture-unlock flow completed.
    pub fn activate(&mut self) -> bool {
        self.activated = true;
        self.frames.request_tick()
    }

    /// Record whether both backends were seen to seek.
    pub fn set_seek_verified(&mut self, verified: bool) -> bool {
        self.seek_verified = verified;
        self.frames.request_tick()
    }

    /// Open a brief window during which playback is tolerated.
    pub fn allow_brief_play(&mut self, now: Instant, window: Duration) {
        self.guard.allow_brief_play(now, window);
    }

    /// A `play`, `playing` or `ended` event fired on one clip.
    ///
    /// Returns `true` when the clip was paused.
    pub fn on_play_event(&mut self, track: Track, now: Instant) -> bool {
        match track {
            Track::First => self.guard.enforce_paused(now, self.first.backend_mut()),
            Track::Second => self.guard.enforce_paused(now, self.second.backend_mut()),
        }
    }

    /// A seek on one clip completed.
    pub fn on_seek_completed(&mut self, track: Track) {
        match track {
            Track::First => self.first.on_seek_completed(),
            Track::Second => self.second.on_seek_completed(),
        }
    }

    /// Pointer or touch drag started. Returns `true` when a per-frame loop must start.
    pub fn start_interacting(&mut self) -> bool {
        self.frames.start_interacting()
    }

    /// Pointer or touch drag ended.
    pub fn stop_interacting(&mut self) {
        self.frames.stop_interacting();
    }

    /// Animation-frame callback.
    ///
    /// Evaluates only when a frame was requested or a drag is in progress; returns the
    /// evaluated frame in that case.
    pub fn on_animation_frame<P: Presenter + ?Sized>(
        &mut self,
        scroll_offset: f64,
        now: Instant,
        presenter: &mut P,
    ) -> Option<&FrameOutput> {
        if !self.frames.begin_frame() {
            return None;
        }
        Some(self.render_now(scroll_offset, now, presenter))
    }

    /// Evaluate and apply one frame unconditionally.
    pub fn render_now<P: Presenter + ?Sized>(
        &mut self,
        scroll_offset: f64,
        now: Instant,
        presenter: &mut P,
    ) -> &FrameOutput {
        let ctx = FrameContext {
            scroll_offset,
            viewport_height: self.viewport_height,
            activated: self.activated,
            seek_verified: self.seek_verified,
            durations: self.durations,
        };
        let out = self.evaluator.evaluate_with(&self.timeline, &ctx);

        if ctx.is_unlocked() {
            self.guard.enforce_paused(now, self.first.backend_mut());
            self.guard.enforce_paused(now, self.second.backend_mut());
            if let Some(t) = out.seeks.first {
                self.first.request_seek(t);
            }
            if let Some(t) = out.seeks.second {
                self.second.request_seek(t);
            }
        }

        presenter.present(&out.visual);
        self.last.insert(out)
    }

    /// Tear down, handing both backends back.
    pub fn detach(self) -> (A, B) {
        (self.first.detach(), self.second.detach())
    }

    fn rederive(&mut self) {
        self.timeline = self.evaluator.timeline(self.durations, self.viewport_height);
        tracing::debug!(
            first_s = self.durations.first,
            second_s = self.durations.second,
            viewport_height = self.viewport_height,
            total = self.timeline.total,
            "timeline re-derived"
        );
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/scroll_session.rs"]
mod tests;
