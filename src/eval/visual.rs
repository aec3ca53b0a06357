use crate::foundation::core::{Affine, Vec2};
use crate::timeline::segments::SegmentRole;

/// Pose of one slide, relative to its centered rest position.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SlideTransform {
    /// Translation in pixels.
    pub translate: Vec2,
    /// Rotation in degrees.
    pub rotation_deg: f64,
    /// Uniform scale.
    pub scale: f64,
}

impl Default for SlideTransform {
    fn default() -> Self {
        Self {
            translate: Vec2::ZERO,
            rotation_deg: 0.0,
            scale: 1.0,
        }
    }
}

impl SlideTransform {
    /// Equivalent affine: scale, then rotate, then translate.
    pub fn to_affine(&self) -> Affine {
        Affine::translate(self.translate)
            * Affine::rotate(self.rotation_deg.to_radians())
            * Affine::scale(self.scale)
    }
}

/// Visibility and pose of one slide.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SlideState {
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
    /// Pose; identity when hidden.
    pub transform: SlideTransform,
}

/// Black overlay that wipes up over the first clip.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct WipeState {
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
    /// Vertical offset in percent of its own height; `100` is fully below, `0` covers.
    pub offset_pct: f64,
}

impl WipeState {
    pub(crate) const HIDDEN: Self = Self {
        opacity: 0.0,
        offset_pct: 100.0,
    };
    pub(crate) const COVERING: Self = Self {
        opacity: 1.0,
        offset_pct: 0.0,
    };
}

/// Image slideshow embedded in one slide.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SlideshowState {
    /// Container opacity.
    pub opacity: f64,
    /// One opacity per image.
    pub images: Vec<f64>,
    /// Horizontal offset of the trail sweep, in `vw`.
    pub trail_offset_vw: f64,
}

/// Closing call-to-action link.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LinkState {
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
    /// Whether the link accepts pointer input.
    pub interactive: bool,
}

/// Fully derived presentation state for one frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct VisualState {
    /// First clip layer.
    pub first_opacity: f64,
    /// Second clip layer.
    pub second_opacity: f64,
    /// Message shown under the wipe and behind the slides.
    pub message_one_opacity: f64,
    /// Closing message.
    pub message_two_opacity: f64,
    /// Wipe overlay.
    pub wipe: WipeState,
    /// One entry per slide.
    pub slides: Vec<SlideState>,
    /// Embedded slideshow.
    pub slideshow: SlideshowState,
    /// Scroll hint near the top.
    pub hint_opacity: f64,
    /// Intro overlay near the top.
    pub intro_opacity: f64,
    /// Call-to-action link.
    pub link: LinkState,
}

impl VisualState {
    /// The segment-1 start state: first clip visible, everything else hidden.
    pub fn start(slide_count: usize, slideshow_images: usize) -> Self {
        Self {
            first_opacity: 1.0,
            second_opacity: 0.0,
            message_one_opacity: 0.0,
            message_two_opacity: 0.0,
            wipe: WipeState::HIDDEN,
            slides: vec![SlideState::default(); slide_count],
            slideshow: SlideshowState {
                opacity: 0.0,
                images: vec![0.0; slideshow_images],
                trail_offset_vw: 0.0,
            },
            hint_opacity: 1.0,
            intro_opacity: 1.0,
            link: LinkState::default(),
        }
    }

    /// Every opacity carried by this state, for range checks.
    pub fn opacities(&self) -> Vec<f64> {
        let mut out = vec![
            self.first_opacity,
            self.second_opacity,
            self.message_one_opacity,
            self.message_two_opacity,
            self.wipe.opacity,
            self.slideshow.opacity,
            self.hint_opacity,
            self.intro_opacity,
            self.link.opacity,
        ];
        out.extend(self.slides.iter().map(|s| s.opacity));
        out.extend(self.slideshow.images.iter().copied());
        out
    }
}

/// Seek targets in seconds; `None` leaves the track untouched this frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SeekTargets {
    /// Target for the first clip.
    pub first: Option<f64>,
    /// Target for the second clip.
    pub second: Option<f64>,
}

/// Result of one evaluation.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FrameOutput {
    /// Scroll offset clamped into `[0, timeline total]`.
    pub offset: f64,
    /// Containing segment; `None` while the timeline is locked.
    pub segment: Option<SegmentRole>,
    /// Local progress through that segment.
    pub progress: f64,
    /// Derived presentation state.
    pub visual: VisualState,
    /// Requested media positions.
    pub seeks: SeekTargets,
}
