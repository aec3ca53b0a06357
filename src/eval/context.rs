use crate::foundation::core::TrackDurations;

/// Everything one evaluation reads.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FrameContext {
    /// Vertical scroll offset in pixels.
    pub scroll_offset: f64,
    /// Viewport height in pixels.
    pub viewport_height: f64,
    /// Set once the gesture-unlock flow has completed.
    pub activated: bool,
    /// Set once both media backends have been seen to seek.
    pub seek_verified: bool,
    /// Current clip durations.
    pub durations: TrackDurations,
}

impl FrameContext {
    /// Context for an activated, seek-capable presentation.
    pub fn active(scroll_offset: f64, viewport_height: f64, durations: TrackDurations) -> Self {
        Self {
            scroll_offset,
            viewport_height,
            activated: true,
            seek_verified: true,
            durations,
        }
    }

    /// Whether the timeline may progress past its start state.
    pub fn is_unlocked(&self) -> bool {
        self.activated && self.seek_verified
    }
}
