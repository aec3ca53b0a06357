use std::fmt;

use crate::eval::visual::{SlideTransform, VisualState};

/// Writes a [`VisualState`] into a presentation layer.
pub trait Presenter {
    /// Apply one frame's state.
    fn present(&mut self, visual: &VisualState);
}

impl<F: FnMut(&VisualState)> Presenter for F {
    fn present(&mut self, visual: &VisualState) {
        self(visual)
    }
}

/// Named visual layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Layer {
    /// First clip.
    FirstTrack,
    /// Second clip.
    SecondTrack,
    /// Message under the wipe.
    MessageOne,
    /// Closing message.
    MessageTwo,
    /// Wipe overlay.
    Wipe,
    /// Slide by index.
    Slide(usize),
    /// Slideshow container.
    Slideshow,
    /// Slideshow image by index.
    SlideshowImage(usize),
    /// Trail sweeping across the slideshow slide.
    Trail,
    /// Scroll hint.
    Hint,
    /// Intro overlay.
    Intro,
    /// Call-to-action link.
    Link,
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FirstTrack => f.write_str("video1"),
            Self::SecondTrack => f.write_str("video2"),
            Self::MessageOne => f.write_str("message1"),
            Self::MessageTwo => f.write_str("message2"),
            Self::Wipe => f.write_str("wipe"),
            Self::Slide(i) => write!(f, "slide{i}"),
            Self::Slideshow => f.write_str("slideshow"),
            Self::SlideshowImage(i) => write!(f, "slideshow-img{i}"),
            Self::Trail => f.write_str("trail"),
            Self::Hint => f.write_str("hint"),
            Self::Intro => f.write_str("intro"),
            Self::Link => f.write_str("link"),
        }
    }
}

/// Style property touched by the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum StyleProperty {
    /// `opacity`
    Opacity,
    /// `transform`
    Transform,
    /// `pointer-events`
    PointerEvents,
}

impl StyleProperty {
    /// CSS property name.
    pub fn css_name(self) -> &'static str {
        match self {
            Self::Opacity => "opacity",
            Self::Transform => "transform",
            Self::PointerEvents => "pointer-events",
        }
    }
}

/// One property assignment.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct StyleWrite {
    /// Target layer.
    pub layer: Layer,
    /// Property to set.
    pub property: StyleProperty,
    /// CSS value.
    pub value: String,
}

impl fmt::Display for StyleWrite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} {{ {}: {} }}", self.layer, self.property.css_name(), self.value)
    }
}

/// Style writes for the most recently presented frame.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct StyleBatch {
    writes: Vec<StyleWrite>,
}

const SLIDE_ANCHOR: &str = "translate(-50%, -50%)";

impl StyleBatch {
    /// Render `visual` into a fresh batch.
    pub fn from_visual(visual: &VisualState) -> Self {
        let mut out = Self::default();
        out.present(visual);
        out
    }

    /// All writes in application order.
    pub fn writes(&self) -> &[StyleWrite] {
        &self.writes
    }

    /// Value written for `layer`/`property`, if any.
    pub fn get(&self, layer: Layer, property: StyleProperty) -> Option<&str> {
        self.writes
            .iter()
            .find(|w| w.layer == layer && w.property == property)
            .map(|w| w.value.as_str())
    }

    fn push(&mut self, layer: Layer, property: StyleProperty, value: String) {
        self.writes.push(StyleWrite {
            layer,
            property,
            value,
        });
    }

    fn opacity(&mut self, layer: Layer, v: f64) {
        let v = crate::foundation::math::clamp01(v);
        self.push(layer, StyleProperty::Opacity, format!("{v}"));
    }
}

fn slide_transform_css(t: &SlideTransform) -> String {
    if *t == SlideTransform::default() {
        return SLIDE_ANCHOR.to_owned();
    }
    format!(
        "{SLIDE_ANCHOR} translate({:.2}px, {:.2}px) rotate({:.2}deg) scale({:.4})",
        t.translate.x, t.translate.y, t.rotation_deg, t.scale
    )
}

impl Presenter for StyleBatch {
    fn present(&mut self, v: &VisualState) {
        self.writes.clear();
        self.opacity(Layer::FirstTrack, v.first_opacity);
        self.opacity(Layer::SecondTrack, v.second_opacity);
        self.opacity(Layer::MessageOne, v.message_one_opacity);
        self.opacity(Layer::MessageTwo, v.message_two_opacity);

        self.opacity(Layer::Wipe, v.wipe.opacity);
        self.push(
            Layer::Wipe,
            StyleProperty::Transform,
            format!("translateY({:.3}%)", v.wipe.offset_pct),
        );

        for (i, slide) in v.slides.iter().enumerate() {
            self.opacity(Layer::Slide(i), slide.opacity);
            self.push(
                Layer::Slide(i),
                StyleProperty::Transform,
                slide_transform_css(&slide.transform),
            );
        }

        self.opacity(Layer::Slideshow, v.slideshow.opacity);
        for (i, &img) in v.slideshow.images.iter().enumerate() {
            self.opacity(Layer::SlideshowImage(i), img);
        }
        self.push(
            Layer::Trail,
            StyleProperty::Transform,
            format!("translateX({:.2}vw)", v.slideshow.trail_offset_vw),
        );

        self.opacity(Layer::Hint, v.hint_opacity);
        self.opacity(Layer::Intro, v.intro_opacity);
        self.opacity(Layer::Link, v.link.opacity);
        let events = if v.link.interactive { "auto" } else { "none" };
        self.push(Layer::Link, StyleProperty::PointerEvents, events.to_owned());
    }
}

#[cfg(test)]
#[path = "../../tests/unit/present/style.rs"]
mod tests;
