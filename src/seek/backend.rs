/// A media resource refused a position change.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[error("seek to {target_s}s rejected: {reason}")]
pub struct SeekRejected {
    /// Requested position in seconds.
    pub target_s: f64,
    /// Backend-provided reason.
    pub reason: String,
}

impl SeekRejected {
    /// Build a rejection for `target_s`.
    pub fn new(target_s: f64, reason: impl Into<String>) -> Self {
        Self {
            target_s,
            reason: reason.into(),
        }
    }
}

/// The part of a media element the engine drives.
///
/// Completion of an accepted seek is reported separately, through
/// [`SeekScheduler::on_seek_completed`](crate::SeekScheduler::on_seek_completed).
pub trait MediaBackend {
    /// Duration in seconds once metadata is available.
    fn duration(&self) -> Option<f64>;

    /// Start moving the playback position to `seconds`.
    fn set_position(&mut self, seconds: f64) -> Result<(), SeekRejected>;

    /// Whether the last accepted seek is still in progress.
    ///
    /// Backends that cannot observe this keep the default and rely on completion events alone.
    fn is_seeking(&self) -> bool {
        true
    }

    /// Whether playback is currently paused.
    fn is_paused(&self) -> bool {
        true
    }

    /// Pause playback.
    fn pause(&mut self) {}
}

impl<B: MediaBackend + ?Sized> MediaBackend for Box<B> {
    fn duration(&self) -> Option<f64> {
        (**self).duration()
    }

    fn set_position(&mut self, seconds: f64) -> Result<(), SeekRejected> {
        (**self).set_position(seconds)
    }

    fn is_seeking(&self) -> bool {
        (**self).is_seeking()
    }

    fn is_paused(&self) -> bool {
        (**self).is_paused()
    }

    fn pause(&mut self) {
        (**self).pause()
    }
}

/// Known duration: finite and positive.
pub(crate) fn usable_duration(backend: &impl MediaBackend) -> Option<f64> {
    backend.duration().filter(|d| d.is_finite() && *d > 0.0)
}
