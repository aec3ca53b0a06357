use crate::foundation::core::{PROVISIONAL_DURATION_S, Track};
use crate::seek::backend::{MediaBackend, usable_duration};

/// Default minimum seek delta in seconds.
pub const DEFAULT_DEADBAND_S: f64 = 0.04;

/// Seek state of one track.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SeekPhase {
    /// No seek outstanding; the next request is applied immediately.
    Idle,
    /// A seek was accepted and its completion has not been reported yet.
    Seeking,
}

/// Position bookkeeping for one scrubbable clip.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct MediaTrack {
    /// Duration in seconds; provisional until metadata arrives.
    pub duration: f64,
    /// Last position handed to the backend successfully.
    pub applied: Option<f64>,
    /// Latest requested position not yet handed over.
    pub pending: Option<f64>,
}

impl Default for MediaTrack {
    fn default() -> Self {
        Self {
            duration: PROVISIONAL_DURATION_S,
            applied: None,
            pending: None,
        }
    }
}

/// Counters for one scheduler.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct SeekStats {
    /// Seeks accepted by the backend.
    pub issued: u64,
    /// Targets dropped inside the deadband.
    pub dropped: u64,
    /// Seeks the backend rejected.
    pub rejected: u64,
    /// Requests that overwrote a still-pending target.
    pub superseded: u64,
}

/// Applies seek requests to one backend with at most one seek in flight.
///
/// Requests arriving while a seek is outstanding overwrite a single pending slot; the
/// latest one is applied when the outstanding seek completes. Targets closer than the
/// deadband to the last applied position are dropped.
#[derive(Debug)]
pub struct SeekScheduler<B> {
    track: Track,
    backend: B,
    media: MediaTrack,
    phase: SeekPhase,
    deadband_s: f64,
    stats: SeekStats,
}

impl<B: MediaBackend> SeekScheduler<B> {
    /// Attach a scheduler to `backend` with the default deadband.
    pub fn new(track: Track, backend: B) -> Self {
        Self::with_deadband(track, backend, DEFAULT_DEADBAND_S)
    }

    /// Attach a scheduler to `backend` with a custom deadband in seconds.
    pub fn with_deadband(track: Track, backend: B, deadband_s: f64) -> Self {
        let mut media = MediaTrack::default();
        if let Some(d) = usable_duration(&backend) {
            media.duration = d;
        }
        Self {
            track,
            backend,
            media,
            phase: SeekPhase::Idle,
            deadband_s: if deadband_s.is_finite() {
                deadband_s.max(0.0)
            } else {
                DEFAULT_DEADBAND_S
            },
            stats: SeekStats::default(),
        }
    }

    /// Which track this scheduler drives.
    pub fn track(&self) -> Track {
        self.track
    }

    /// Current phase.
    pub fn phase(&self) -> SeekPhase {
        self.phase
    }

    /// Position bookkeeping.
    pub fn media(&self) -> &MediaTrack {
        &self.media
    }

    /// Counters since attachment.
    pub fn stats(&self) -> SeekStats {
        self.stats
    }

    /// Borrow the backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Mutably borrow the backend.
    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    /// Detach from the backend, dropping any pending target.
    pub fn detach(self) -> B {
        self.backend
    }

    /// Re-read the backend duration after a metadata event.
    ///
    /// Returns the new duration when it changed.
    pub fn on_metadata(&mut self) -> Option<f64> {
        let d = usable_duration(&self.backend)?;
        if d == self.media.duration {
            return None;
        }
        tracing::debug!(track = ?self.track, duration_s = d, "media duration updated");
        self.media.duration = d;
        Some(d)
    }

    /// Ask for the playback position `target_s`. Never blocks and never fails.
    ///
    /// A `Seeking` phase is re-checked against [`MediaBackend::is_seeking`], so a lost
    /// completion event does not stall the track.
    pub fn request_seek(&mut self, target_s: f64) {
        let target = self.clamp_target(target_s);
        if self.media.pending.replace(target).is_some() {
            self.stats.superseded += 1;
        }
        if self.phase == SeekPhase::Seeking && !self.backend.is_seeking() {
            // The completion event for the last seek never arrived.
            tracing::debug!(track = ?self.track, "seek settled without completion");
            self.phase = SeekPhase::Idle;
        }
        if self.phase == SeekPhase::Idle {
            self.apply_pending();
        }
    }

    /// Report that the outstanding seek finished.
    pub fn on_seek_completed(&mut self) {
        self.phase = SeekPhase::Idle;
        self.apply_pending();
    }

    fn clamp_target(&self, target_s: f64) -> f64 {
        let t = if target_s.is_nan() { 0.0 } else { target_s };
        match usable_duration(&self.backend) {
            Some(d) => t.clamp(0.0, d),
            None if t.is_finite() => t.max(0.0),
            None => 0.0,
        }
    }

    fn apply_pending(&mut self) {
        let Some(next) = self.media.pending.take() else {
            return;
        };

        if let Some(last) = self.media.applied
            && (next - last).abs() < self.deadband_s
        {
            self.stats.dropped += 1;
            return;
        }

        match self.backend.set_position(next) {
            Ok(()) => {
                self.media.applied = Some(next);
                self.phase = SeekPhase::Seeking;
                self.stats.issued += 1;
            }
            Err(err) => {
                // The next scroll-driven request supersedes this one.
                self.stats.rejected += 1;
                tracing::debug!(track = ?self.track, error = %err, "seek rejected");
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/seek/scheduler.rs"]
mod tests;
