use crate::animation::ease::Ease;
use crate::config::settings::ScrubConfig;
use crate::eval::context::FrameContext;
use crate::eval::slides::{slide_state, slideshow_state};
use crate::eval::visual::{FrameOutput, LinkState, SeekTargets, VisualState, WipeState};
use crate::foundation::core::{DeviceClass, TrackDurations};
use crate::foundation::error::ScrubResult;
use crate::foundation::math::{clamp01, lerp, non_negative};
use crate::timeline::segments::{
    Located, SegmentRole, Timeline, compute_segments, non_negative_offset,
};

/// Fraction bounds applied to `second_full_opacity_at` before dividing by it.
const FULL_OPACITY_MIN: f64 = 0.05;
const FULL_OPACITY_MAX: f64 = 0.95;

/// Stateless mapping from scroll offset to presentation state and seek targets.
#[derive(Clone, Debug)]
pub struct Evaluator {
    config: ScrubConfig,
    device: DeviceClass,
}

impl Evaluator {
    /// Build an evaluator after validating `config`.
    pub fn new(config: ScrubConfig, device: DeviceClass) -> ScrubResult<Self> {
        config.validate()?;
        Ok(Self { config, device })
    }

    /// Active configuration.
    pub fn config(&self) -> &ScrubConfig {
        &self.config
    }

    /// Device class chosen at startup.
    pub fn device(&self) -> DeviceClass {
        self.device
    }

    /// Derive the timeline for the given durations and viewport height.
    pub fn timeline(&self, durations: TrackDurations, viewport_height: f64) -> Timeline {
        compute_segments(durations, self.device, &self.config, viewport_height)
    }

    /// Evaluate one frame, deriving the timeline from `ctx`.
    pub fn evaluate(&self, ctx: &FrameContext) -> FrameOutput {
        let timeline = self.timeline(ctx.durations, ctx.viewport_height);
        self.evaluate_with(&timeline, ctx)
    }

    #[tracing::instrument(level = "trace", skip(self, timeline))]
    /// Evaluate one frame against a cached timeline.
    ///
    /// `timeline` must have been derived from the same durations as `ctx`.
    pub fn evaluate_with(&self, timeline: &Timeline, ctx: &FrameContext) -> FrameOutput {
        // Past the end every layer is already settled.
        let offset = non_negative_offset(ctx.scroll_offset).min(timeline.total);
        let slide_count = timeline.slide_count();
        let mut visual = VisualState::start(slide_count, self.config.slides.slideshow_images);

        if !ctx.is_unlocked() {
            return FrameOutput {
                offset,
                segment: None,
                progress: 0.0,
                visual,
                seeks: SeekTargets::default(),
            };
        }

        let at = timeline.locate(offset);
        visual.first_opacity = 0.0;
        let seeks = self.dispatch(at, slide_count, ctx.durations, &mut visual);

        let link_opacity = clamp01(visual.message_two_opacity);
        visual.link = LinkState {
            opacity: link_opacity,
            interactive: link_opacity > self.config.link_interactive_above,
        };
        visual.hint_opacity = 1.0 - clamp01(offset / self.config.hint_fade_out_px);
        visual.intro_opacity = 1.0 - clamp01(offset / self.config.intro_fade_out_px);

        tracing::trace!(segment = ?at.role, progress = at.progress, "evaluated frame");
        FrameOutput {
            offset,
            segment: Some(at.role),
            progress: at.progress,
            visual,
            seeks,
        }
    }

    fn dispatch(
        &self,
        at: Located,
        slide_count: usize,
        durations: TrackDurations,
        v: &mut VisualState,
    ) -> SeekTargets {
        let cfg = &self.config;
        let d1 = non_negative(durations.first);
        let d2 = non_negative(durations.second);
        let p = at.progress;
        let full_at = cfg
            .second_full_opacity_at
            .clamp(FULL_OPACITY_MIN, FULL_OPACITY_MAX);
        let preroll_t = d2 * non_negative(cfg.second_preroll);
        let second_ramp = |t: f64| clamp01(t / (d2 * full_at));

        match at.role {
            SegmentRole::ScrubFirst => {
                v.first_opacity = 1.0;
                let t = lerp(0.0, d1, cfg.first_curve.map(p));
                SeekTargets {
                    first: Some(t),
                    second: Some(0.0),
                }
            }
            SegmentRole::Wipe => {
                v.first_opacity = 1.0;
                v.message_one_opacity = 1.0;
                v.wipe = WipeState {
                    opacity: 1.0,
                    offset_pct: (1.0 - Ease::InOutCubic.apply(p)) * 100.0,
                };
                SeekTargets {
                    first: Some(d1),
                    second: Some(0.0),
                }
            }
            SegmentRole::Slide(i) => {
                v.message_one_opacity = 1.0;
                v.wipe = WipeState::COVERING;
                if let Some(slot) = v.slides.get_mut(i) {
                    *slot = slide_state(i, slide_count, p, 1.0, &cfg.slides);
                }
                if cfg.slides.slideshow_slide == Some(i) {
                    v.slideshow = slideshow_state(p, cfg.slides.slideshow_images, &cfg.slides);
                }
                SeekTargets {
                    first: Some(d1),
                    second: Some(0.0),
                }
            }
            SegmentRole::CrossFadeToSecond => {
                let split = cfg.slides.crossfade_split;
                v.wipe = WipeState::COVERING;
                if p < split {
                    // Fade the last slide out in a fixed pose.
                    let a = clamp01(p / split);
                    v.message_one_opacity = 1.0;
                    if let Some(last) = slide_count.checked_sub(1) {
                        v.slides[last] = slide_state(
                            last,
                            slide_count,
                            cfg.slides.crossfade_pose,
                            1.0 - a,
                            &cfg.slides,
                        );
                    }
                    SeekTargets {
                        first: Some(d1),
                        second: Some(0.0),
                    }
                } else {
                    // The second clip only shows as fast as it seeks forward.
                    let b = clamp01((p - split) / (1.0 - split));
                    v.message_one_opacity = 1.0 - b;
                    let t = lerp(0.0, preroll_t, b);
                    v.second_opacity = second_ramp(t) * b;
                    SeekTargets {
                        first: Some(d1),
                        second: Some(t),
                    }
                }
            }
            SegmentRole::ScrubSecond => {
                let t = lerp(preroll_t, d2, p);
                v.second_opacity = second_ramp(t);
                SeekTargets {
                    first: None,
                    second: Some(t),
                }
            }
            SegmentRole::CrossFadeToMessage => {
                v.second_opacity = 1.0 - p;
                v.message_two_opacity = p;
                SeekTargets {
                    first: None,
                    second: Some(d2),
                }
            }
            SegmentRole::Hold => {
                v.message_two_opacity = 1.0;
                SeekTargets {
                    first: None,
                    second: Some(d2),
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/eval/evaluator.rs"]
mod tests;
