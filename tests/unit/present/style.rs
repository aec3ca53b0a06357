use super::*;
use crate::eval::visual::SlideState;
use crate::foundation::core::Vec2;

#[test]
fn start_state_renders_expected_writes() {
    let batch = StyleBatch::from_visual(&VisualState::start(2, 1));
    assert_eq!(batch.get(Layer::FirstTrack, StyleProperty::Opacity), Some("1"));
    assert_eq!(batch.get(Layer::SecondTrack, StyleProperty::Opacity), Some("0"));
    assert_eq!(
        batch.get(Layer::Wipe, StyleProperty::Transform),
        Some("translateY(100.000%)")
    );
    assert_eq!(
        batch.get(Layer::Slide(1), StyleProperty::Transform),
        Some("translate(-50%, -50%)")
    );
    assert_eq!(
        batch.get(Layer::Link, StyleProperty::PointerEvents),
        Some("none")
    );
    assert!(batch.get(Layer::Slide(2), StyleProperty::Opacity).is_none());
}

#[test]
fn slide_pose_is_formatted() {
    let mut v = VisualState::start(1, 0);
    v.slides[0] = SlideState {
        opacity: 0.5,
        transform: SlideTransform {
            translate: Vec2::new(-12.346, 6.0),
            rotation_deg: 2.5,
            scale: 0.95,
        },
    };
    let batch = StyleBatch::from_visual(&v);
    assert_eq!(
        batch.get(Layer::Slide(0), StyleProperty::Transform),
        Some("translate(-50%, -50%) translate(-12.35px, 6.00px) rotate(2.50deg) scale(0.9500)")
    );
    assert_eq!(batch.get(Layer::Slide(0), StyleProperty::Opacity), Some("0.5"));
}

#[test]
fn presenting_replaces_previous_frame() {
    let mut batch = StyleBatch::default();
    batch.present(&VisualState::start(5, 3));
    let n = batch.writes().len();
    batch.present(&VisualState::start(5, 3));
    assert_eq!(batch.writes().len(), n);
}

#[test]
fn interactive_link_enables_pointer_events() {
    let mut v = VisualState::start(0, 0);
    v.link.opacity = 0.9;
    v.link.interactive = true;
    let batch = StyleBatch::from_visual(&v);
    assert_eq!(
        batch.get(Layer::Link, StyleProperty::PointerEvents),
        Some("auto")
    );
}

#[test]
fn closures_are_presenters() {
    let mut seen = 0;
    let mut p = |_: &VisualState| seen += 1;
    p.present(&VisualState::start(0, 0));
    p.present(&VisualState::start(0, 0));
    assert_eq!(seen, 2);
}

#[test]
fn write_display_reads_like_css() {
    let w = StyleWrite {
        layer: Layer::SlideshowImage(2),
        property: StyleProperty::Opacity,
        value: "0.25".to_owned(),
    };
    assert_eq!(w.to_string(), "#slideshow-img2 { opacity: 0.25 }");
}
