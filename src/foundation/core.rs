pub use kurbo::{Affine, Vec2};

/// Provisional clip duration used until media metadata arrives.
pub const PROVISIONAL_DURATION_S: f64 = 6.0;

/// One of the two scrubbable clips, in narrative order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Track {
    /// Clip scrubbed at the very start of the timeline.
    First,
    /// Clip revealed after the slides.
    Second,
}

/// Coarse device class selecting the scrub speed.
///
/// Decided once at startup by the embedding application.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceClass {
    /// Narrow viewports and handheld user agents.
    #[default]
    Mobile,
    /// Everything else.
    Desktop,
}

impl DeviceClass {
    /// Viewports at most this wide count as mobile.
    pub const MOBILE_MAX_WIDTH_PX: f64 = 520.0;

    /// Classify from the viewport width alone.
    pub fn from_viewport_width(width_px: f64) -> Self {
        if width_px.is_finite() && width_px > Self::MOBILE_MAX_WIDTH_PX {
            Self::Desktop
        } else {
            Self::Mobile
        }
    }

    /// Classify from the viewport width and the user agent string.
    pub fn detect(width_px: f64, user_agent: &str) -> Self {
        const HANDHELD: [&str; 4] = ["android", "iphone", "ipad", "ipod"];
        let ua = user_agent.to_ascii_lowercase();
        if HANDHELD.iter().any(|needle| ua.contains(needle)) {
            return Self::Mobile;
        }
        Self::from_viewport_width(width_px)
    }
}

/// Durations of both clips in seconds.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TrackDurations {
    /// Duration of [`Track::First`].
    pub first: f64,
    /// Duration of [`Track::Second`].
    pub second: f64,
}

impl Default for TrackDurations {
    fn default() -> Self {
        Self {
            first: PROVISIONAL_DURATION_S,
            second: PROVISIONAL_DURATION_S,
        }
    }
}

impl TrackDurations {
    /// Build from explicit values, falling back to the provisional default for unusable ones.
    pub fn new(first: f64, second: f64) -> Self {
        let mut out = Self::default();
        out.update(Track::First, first);
        out.update(Track::Second, second);
        out
    }

    /// Duration of one track.
    pub fn get(&self, track: Track) -> f64 {
        match track {
            Track::First => self.first,
            Track::Second => self.second,
        }
    }

    /// Accept a metadata duration when it is finite and positive.
    ///
    /// Returns `true` when the stored value changed.
    pub fn update(&mut self, track: Track, secs: f64) -> bool {
        if !secs.is_finite() || secs <= 0.0 {
            return false;
        }
        let slot = match track {
            Track::First => &mut self.first,
            Track::Second => &mut self.second,
        };
        if *slot == secs {
            return false;
        }
        *slot = secs;
        true
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
