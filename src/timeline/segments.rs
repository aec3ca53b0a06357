use crate::config::settings::ScrubConfig;
use crate::foundation::core::{DeviceClass, TrackDurations};
use crate::foundation::math::{non_negative, progress_in};

/// Narrative beat a segment stands for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case", tag = "role", content = "index")]
pub enum SegmentRole {
    /// First clip is scrubbed.
    ScrubFirst,
    /// Overlay wipes up over the first clip's last frame.
    Wipe,
    /// One slide, by index.
    Slide(usize),
    /// Last slide fades, then the second clip fades in.
    CrossFadeToSecond,
    /// Second clip is scrubbed.
    ScrubSecond,
    /// Second clip dissolves into the closing message.
    CrossFadeToMessage,
    /// Terminal state.
    Hold,
}

/// Half-open interval `[start, start + length)` in scroll-offset space.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Segment {
    /// Beat this segment drives.
    pub role: SegmentRole,
    /// Inclusive start offset in pixels.
    pub start: f64,
    /// Length in pixels, at least `1`.
    pub length: f64,
}

impl Segment {
    /// Exclusive end offset.
    pub fn end(&self) -> f64 {
        self.start + self.length
    }
}

/// Ordered, contiguous segments plus the scrollable extent.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Timeline {
    /// Segments in narrative order.
    pub segments: Vec<Segment>,
    /// Sum of all segment lengths.
    pub content_length: f64,
    /// Extra scroll room after the content so the hold is reachable.
    pub pad: f64,
    /// `content_length + pad`.
    pub total: f64,
}

/// Where a scroll offset falls.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Located {
    /// Index into [`Timeline::segments`].
    pub index: usize,
    /// Role of the containing segment.
    pub role: SegmentRole,
    /// Local progress in `[0, 1]`.
    pub progress: f64,
}

/// Derive the timeline from the current durations, device class and viewport height.
///
/// Pure: identical inputs give identical output.
pub fn compute_segments(
    durations: TrackDurations,
    device: DeviceClass,
    config: &ScrubConfig,
    viewport_height: f64,
) -> Timeline {
    let pps = config.pixels_per_second(device);
    let scrub_len = |secs: f64| (non_negative(secs) * pps).max(1.0);

    let mut lengths: Vec<(SegmentRole, f64)> = Vec::with_capacity(config.slide_px.len() + 6);
    lengths.push((SegmentRole::ScrubFirst, scrub_len(durations.first)));
    lengths.push((SegmentRole::Wipe, config.wipe_px));
    for (i, &px) in config.slide_px.iter().enumerate() {
        lengths.push((SegmentRole::Slide(i), px));
    }
    lengths.push((SegmentRole::CrossFadeToSecond, config.fade_to_second_px));
    lengths.push((SegmentRole::ScrubSecond, scrub_len(durations.second)));
    lengths.push((SegmentRole::CrossFadeToMessage, config.fade_to_message_px));
    lengths.push((SegmentRole::Hold, config.hold_px));

    let mut segments = Vec::with_capacity(lengths.len());
    let mut cursor = 0.0;
    for (role, len) in lengths {
        let length = non_negative(len).max(1.0);
        segments.push(Segment {
            role,
            start: cursor,
            length,
        });
        cursor += length;
    }

    let pad = non_negative(viewport_height) * non_negative(config.trailing_pad_viewports);
    Timeline {
        segments,
        content_length: cursor,
        pad,
        total: cursor + pad,
    }
}

impl Timeline {
    /// Cumulative boundaries: every segment start followed by the content end.
    pub fn boundaries(&self) -> Vec<f64> {
        let mut out: Vec<f64> = self.segments.iter().map(|s| s.start).collect();
        out.push(self.content_length);
        out
    }

    /// Height the embedding should give its scroll spacer, in whole pixels.
    pub fn scroll_extent_px(&self) -> u64 {
        self.total.ceil().max(0.0) as u64
    }

    /// First segment with the given role.
    pub fn segment(&self, role: SegmentRole) -> Option<&Segment> {
        self.segments.iter().find(|s| s.role == role)
    }

    /// Number of slide segments.
    pub fn slide_count(&self) -> usize {
        self.segments
            .iter()
            .filter(|s| matches!(s.role, SegmentRole::Slide(_)))
            .count()
    }

    /// Locate the segment containing `offset`.
    ///
    /// Negative and NaN offsets clamp to `0`; offsets past the content land in the last segment.
    ///
    /// # Panics
    ///
    /// Panics on a timeline with no segments, which [`compute_segments`] never produces.
    pub fn locate(&self, offset: f64) -> Located {
        let y = non_negative_offset(offset);
        let idx = self
            .segments
            .partition_point(|s| s.start <= y)
            .saturating_sub(1)
            .min(self.segments.len().saturating_sub(1));
        let seg = &self.segments[idx];
        Located {
            index: idx,
            role: seg.role,
            progress: progress_in(y, seg.start, seg.length),
        }
    }
}

/// Scroll offsets are clamped to `>= 0`; `+inf` is kept so it lands past the content.
pub(crate) fn non_negative_offset(offset: f64) -> f64 {
    if offset.is_nan() { 0.0 } else { offset.max(0.0) }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/segments.rs"]
mod tests;
