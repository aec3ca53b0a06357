use std::time::{Duration, Instant};

use crate::seek::backend::MediaBackend;

/// Keeps scrub-only media paused outside brief authorized play windows.
///
/// Some platforms only decode a first frame, or only allow seeking at all, after a short
/// `play()` inside a user gesture. Those windows are opened with
/// [`PlaybackGuard::allow_brief_play`]; any playback outside them is paused.
#[derive(Clone, Copy, Debug, Default)]
pub struct PlaybackGuard {
    allow_until: Option<Instant>,
}

impl PlaybackGuard {
    /// Permit playback until `now + window`, extending any open window.
    pub fn allow_brief_play(&mut self, now: Instant, window: Duration) {
        let until = now + window;
        self.allow_until = Some(match self.allow_until {
            Some(prev) if prev > until => prev,
            _ => until,
        });
    }

    /// Whether playback is currently permitted.
    pub fn play_allowed(&self, now: Instant) -> bool {
        self.allow_until.is_some_and(|until| now < until)
    }

    /// Pause `media` if it is playing outside an authorized window.
    ///
    /// Returns `true` when a pause was issued.
    pub fn enforce_paused(&self, now: Instant, media: &mut impl MediaBackend) -> bool {
        if self.play_allowed(now) || media.is_paused() {
            return false;
        }
        media.pause();
        true
    }
}

#[cfg(test)]
#[path = "../../tests/unit/seek/guard.rs"]
mod tests;
