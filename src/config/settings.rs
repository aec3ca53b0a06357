use std::path::Path;

use crate::animation::curve::ScrubCurve;
use crate::foundation::core::DeviceClass;
use crate::foundation::error::{ScrubError, ScrubResult};

/// Numeric configuration of the scroll timeline.
///
/// Every field has a default, so a JSON document only needs to name what it overrides.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScrubConfig {
    /// Pixels scrolled per second of clip time on mobile.
    pub pps_mobile: f64,
    /// Pixels scrolled per second of clip time on desktop.
    pub pps_desktop: f64,

    /// Scroll-to-playback remap for the first clip.
    pub first_curve: ScrubCurve,

    /// Fraction of its own playback at which the second clip reaches full opacity.
    pub second_full_opacity_at: f64,
    /// Fraction of the second clip pre-rolled during the cross-fade that reveals it.
    pub second_preroll: f64,

    /// Wipe overlay rising over the first clip.
    pub wipe_px: f64,
    /// One entry per slide, in order. The last slide is the terminal one.
    pub slide_px: Vec<f64>,
    /// Slides to second clip.
    pub fade_to_second_px: f64,
    /// Second clip to closing message.
    pub fade_to_message_px: f64,
    /// Terminal hold.
    pub hold_px: f64,

    /// Trailing pad as a fraction of the viewport height.
    pub trailing_pad_viewports: f64,

    /// Slide envelope and overlay tuning.
    pub slides: SlideTuning,

    /// Hint overlay fades out over this many pixels from the top.
    pub hint_fade_out_px: f64,
    /// Intro overlay fades out over this many pixels from the top.
    pub intro_fade_out_px: f64,
    /// The call-to-action link accepts pointer input only above this opacity.
    pub link_interactive_above: f64,

    /// Minimum seek delta in seconds.
    pub seek_deadband_s: f64,
}

/// Per-slide envelope fractions and the cross-fade split.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SlideTuning {
    /// Leading fraction of a slide spent entering.
    pub enter: f64,
    /// Leading fraction of the terminal slide spent entering.
    pub terminal_enter: f64,
    /// Trailing fraction of a slide spent exiting. The terminal slide never exits.
    pub exit: f64,
    /// Slide index hosting the embedded slideshow, if any.
    pub slideshow_slide: Option<usize>,
    /// Leading entry fraction of the slideshow slide.
    pub slideshow_enter: f64,
    /// Number of slideshow images.
    pub slideshow_images: usize,
    /// Slideshow container opacity while its slide is showing.
    pub slideshow_opacity: f64,
    /// Fraction of the slides-to-second cross-fade spent fading the last slide.
    pub crossfade_split: f64,
    /// Slide progress whose pose the last slide holds while fading.
    pub crossfade_pose: f64,
}

impl Default for SlideTuning {
    fn default() -> Self {
        Self {
            enter: 0.18,
            terminal_enter: 0.22,
            exit: 0.18,
            slideshow_slide: Some(1),
            slideshow_enter: 0.24,
            slideshow_images: 3,
            slideshow_opacity: 0.55,
            crossfade_split: 0.55,
            crossfade_pose: 0.92,
        }
    }
}

impl Default for ScrubConfig {
    fn default() -> Self {
        Self {
            pps_mobile: 700.0,
            pps_desktop: 950.0,
            first_curve: ScrubCurve::default(),
            second_full_opacity_at: 0.75,
            second_preroll: 0.08,
            wipe_px: 420.0,
            slide_px: vec![360.0, 520.0, 360.0, 820.0, 720.0],
            fade_to_second_px: 420.0,
            fade_to_message_px: 320.0,
            hold_px: 700.0,
            trailing_pad_viewports: 0.75,
            slides: SlideTuning::default(),
            hint_fade_out_px: 180.0,
            intro_fade_out_px: 260.0,
            link_interactive_above: 0.6,
            seek_deadband_s: 0.04,
        }
    }
}

impl ScrubConfig {
    /// Scroll pixels per second of clip time for `device`.
    pub fn pixels_per_second(&self, device: DeviceClass) -> f64 {
        match device {
            DeviceClass::Mobile => self.pps_mobile,
            DeviceClass::Desktop => self.pps_desktop,
        }
    }

    /// Parse and validate a JSON document.
    pub fn from_json_str(s: &str) -> ScrubResult<Self> {
        let cfg: Self = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Read, parse and validate a JSON file.
    pub fn from_json_path(path: &Path) -> ScrubResult<Self> {
        let s = std::fs::read_to_string(path).map_err(|e| {
            ScrubError::Other(anyhow::Error::new(e).context(format!(
                "read config '{}'",
                path.display()
            )))
        })?;
        Self::from_json_str(&s)
    }

    /// Check every invariant the segmenter and evaluator rely on.
    pub fn validate(&self) -> ScrubResult<()> {
        positive("pps_mobile", self.pps_mobile)?;
        positive("pps_desktop", self.pps_desktop)?;
        self.first_curve.validate()?;

        unit_open("second_full_opacity_at", self.second_full_opacity_at)?;
        unit_closed("second_preroll", self.second_preroll)?;

        positive("wipe_px", self.wipe_px)?;
        if self.slide_px.is_empty() {
            return Err(ScrubError::config("slide_px must name at least one slide"));
        }
        for (i, &px) in self.slide_px.iter().enumerate() {
            positive(&format!("slide_px[{i}]"), px)?;
        }
        positive("fade_to_second_px", self.fade_to_second_px)?;
        positive("fade_to_message_px", self.fade_to_message_px)?;
        positive("hold_px", self.hold_px)?;
        non_negative("trailing_pad_viewports", self.trailing_pad_viewports)?;

        let s = &self.slides;
        unit_open("slides.enter", s.enter)?;
        unit_open("slides.terminal_enter", s.terminal_enter)?;
        unit_closed("slides.exit", s.exit)?;
        unit_open("slides.slideshow_enter", s.slideshow_enter)?;
        unit_closed("slides.slideshow_opacity", s.slideshow_opacity)?;
        unit_open("slides.crossfade_split", s.crossfade_split)?;
        unit_closed("slides.crossfade_pose", s.crossfade_pose)?;
        if let Some(idx) = s.slideshow_slide
            && idx >= self.slide_px.len()
        {
            return Err(ScrubError::config(format!(
                "slides.slideshow_slide {idx} is out of range for {} slides",
                self.slide_px.len()
            )));
        }

        positive("hint_fade_out_px", self.hint_fade_out_px)?;
        positive("intro_fade_out_px", self.intro_fade_out_px)?;
        unit_closed("link_interactive_above", self.link_interactive_above)?;
        non_negative("seek_deadband_s", self.seek_deadband_s)?;
        Ok(())
    }
}

fn positive(name: &str, v: f64) -> ScrubResult<()> {
    if v.is_finite() && v > 0.0 {
        return Ok(());
    }
    Err(ScrubError::validation(format!("{name} must be finite and > 0 (got {v})")))
}

fn non_negative(name: &str, v: f64) -> ScrubResult<()> {
    if v.is_finite() && v >= 0.0 {
        return Ok(());
    }
    Err(ScrubError::validation(format!("{name} must be finite and >= 0 (got {v})")))
}

fn unit_open(name: &str, v: f64) -> ScrubResult<()> {
    if v.is_finite() && v > 0.0 && v < 1.0 {
        return Ok(());
    }
    Err(ScrubError::validation(format!("{name} must be in (0, 1) (got {v})")))
}

fn unit_closed(name: &str, v: f64) -> ScrubResult<()> {
    if v.is_finite() && (0.0..=1.0).contains(&v) {
        return Ok(());
    }
    Err(ScrubError::validation(format!("{name} must be in [0, 1] (got {v})")))
}

#[cfg(test)]
#[path = "../../tests/unit/config/settings.rs"]
mod tests;
