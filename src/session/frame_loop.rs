/// Coalesces frame requests into at most one pending animation frame.
///
/// Any number of scroll or pointer events between two frames collapse into one evaluation.
/// While the pointer is dragging, every frame evaluates regardless of events.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameLoop {
    pending: bool,
    interacting: bool,
}

impl FrameLoop {
    /// Mark a frame as needed.
    ///
    /// Returns `true` when the caller must schedule an animation-frame callback, i.e. when
    /// none was pending already.
    pub fn request_tick(&mut self) -> bool {
        if self.pending {
            return false;
        }
        self.pending = true;
        true
    }

    /// Enter drag mode. Returns `true` when a per-frame loop must be started.
    pub fn start_interacting(&mut self) -> bool {
        if self.interacting {
            return false;
        }
        self.interacting = true;
        true
    }

    /// Leave drag mode.
    pub fn stop_interacting(&mut self) {
        self.interacting = false;
    }

    /// Whether drag mode is on.
    pub fn is_interacting(&self) -> bool {
        self.interacting
    }

    /// Whether a frame is pending.
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Called from the animation-frame callback; returns whether to evaluate.
    pub fn begin_frame(&mut self) -> bool {
        let due = self.pending || self.interacting;
        self.pending = false;
        due
    }

    /// Whether another animation frame should be scheduled after this one.
    pub fn wants_next_frame(&self) -> bool {
        self.pending || self.interacting
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/frame_loop.rs"]
mod tests;
