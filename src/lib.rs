//! scrollscrub maps a vertical scroll offset onto a scroll-driven video presentation.
//!
//! Two clips are scrubbed (never played) and cross-dissolved with text and image slides in a
//! fixed order. The crate owns the deterministic part of that:
//!
//! 1. **Segment**: clip durations + [`DeviceClass`] + [`ScrubConfig`] -> [`Timeline`]
//! 2. **Evaluate**: [`Timeline`] + [`FrameContext`] -> [`FrameOutput`] (a [`VisualState`] plus
//!    per-clip seek targets)
//! 3. **Seek**: per-clip [`SeekScheduler`] with one seek in flight, a single last-write-wins
//!    pending slot and a deadband
//!
//! [`ScrollSession`] wires these to the events of an embedding (scroll, resize, metadata,
//! seek completion, pointer drag) and writes each frame through a [`Presenter`].
//!
//! Everything is single-threaded and allocation-light; evaluation is a pure function of its
//! inputs.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub(crate) mod animation;
pub(crate) mod config;
pub(crate) mod eval;
mod foundation;
pub(crate) mod present;
pub(crate) mod seek;
pub(crate) mod session;
pub(crate) mod timeline;

pub use crate::animation::curve::ScrubCurve;
pub use crate::animation::ease::Ease;
pub use crate::config::settings::{ScrubConfig, SlideTuning};
pub use crate::eval::context::FrameContext;
pub use crate::eval::evaluator::Evaluator;
pub use crate::eval::visual::{
    FrameOutput, LinkState, SeekTargets, SlideState, SlideTransform, SlideshowState, VisualState,
    WipeState,
};
pub use crate::foundation::core::{
    Affine, DeviceClass, PROVISIONAL_DURATION_S, Track, TrackDurations, Vec2,
};
pub use crate::foundation::error::{ScrubError, ScrubResult};
pub use crate::foundation::math::{clamp01, lerp, progress_in};
pub use crate::present::style::{Layer, Presenter, StyleBatch, StyleProperty, StyleWrite};
pub use crate::seek::backend::{MediaBackend, SeekRejected};
pub use crate::seek::guard::PlaybackGuard;
pub use crate::seek::scheduler::{
    DEFAULT_DEADBAND_S, MediaTrack, SeekPhase, SeekScheduler, SeekStats,
};
pub use crate::session::frame_loop::FrameLoop;
pub use crate::session::scroll_session::ScrollSession;
pub use crate::timeline::segments::{Located, Segment, SegmentRole, Timeline, compute_segments};
