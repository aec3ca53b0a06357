use super::*;

fn tuning() -> SlideTuning {
    SlideTuning::default()
}

#[test]
fn regular_slide_enters_and_exits() {
    let t = tuning();
    let start = slide_state(0, 5, 0.0, 1.0, &t);
    assert_eq!(start.opacity, 0.0);
    assert_eq!(start.transform.translate, Vec2::new(-60.0, 70.0));
    assert_eq!(start.transform.scale, 0.96);

    let mid = slide_state(0, 5, 0.5, 1.0, &t);
    assert_eq!(mid.opacity, 1.0);
    assert!(mid.transform.translate.hypot() < 1e-9);
    assert!(mid.transform.rotation_deg.abs() < 1e-9);
    assert!((mid.transform.scale - 1.0).abs() < 1e-9);

    let end = slide_state(0, 5, 1.0, 1.0, &t);
    assert!(end.opacity < 1e-9);
    assert!((end.transform.translate.x - 40.0).abs() < 1e-9);
    assert!((end.transform.scale - 1.04).abs() < 1e-9);
}

#[test]
fn terminal_slide_never_exits() {
    let t = tuning();
    let env = envelope(4, 5, 1.0, &t);
    assert_eq!(env.exit, 0.0);
    assert_eq!(slide_state(4, 5, 1.0, 1.0, &t).opacity, 1.0);
    // Longer entry than a regular slide.
    assert!(envelope(4, 5, 0.036, &t).enter < envelope(3, 5, 0.036, &t).enter);
    assert!((envelope(4, 5, 0.22, &t).enter - 1.0).abs() < 1e-9);
}

#[test]
fn entry_overshoot_does_not_leak_into_opacity() {
    let t = tuning();
    for i in 0..=100 {
        let p = f64::from(i) / 100.0;
        let s = slide_state(2, 5, p, 1.0, &t);
        assert!((0.0..=1.0).contains(&s.opacity), "p={p}");
    }
    let peak = (0..=100)
        .map(|i| envelope(2, 5, f64::from(i) / 100.0, &t).enter)
        .fold(f64::MIN, f64::max);
    assert!(peak > 1.0);
}

#[test]
fn slideshow_slide_moves_horizontally_only() {
    let t = tuning();
    let s = slide_state(1, 5, 0.0, 1.0, &t);
    assert_eq!(s.transform.translate, Vec2::new(320.0, 0.0));
    let s = slide_state(1, 5, 0.1, 1.0, &t);
    assert_eq!(s.transform.translate.y, 0.0);
    assert_eq!(s.transform.rotation_deg, 0.0);
    assert_eq!(s.transform.scale, 1.0);
    assert!(s.transform.translate.x < 320.0 && s.transform.translate.x > 0.0);
    // Plain ease-out: no overshoot.
    for i in 0..=100 {
        assert!(envelope(1, 5, f64::from(i) / 100.0, &t).enter <= 1.0 + 1e-12);
    }
}

#[test]
fn global_opacity_scales_visibility() {
    let t = tuning();
    let s = slide_state(4, 5, 0.92, 0.25, &t);
    assert!((s.opacity - 0.25).abs() < 1e-9);
    assert_eq!(slide_state(4, 5, 0.92, 0.0, &t).opacity, 0.0);
}

#[test]
fn slides_beyond_presets_reuse_first() {
    let t = tuning();
    let a = slide_state(7, 9, 0.0, 1.0, &t);
    assert_eq!(a.transform.translate, PRESETS[0].enter_from);
}

#[test]
fn slideshow_crossfades_neighbours() {
    let t = tuning();
    let s = slideshow_state(0.0, 3, &t);
    assert_eq!(s.images, vec![1.0, 0.0, 0.0]);
    assert_eq!(s.opacity, 0.55);
    assert!((s.trail_offset_vw - 55.0).abs() < 1e-9);

    let s = slideshow_state(0.25, 3, &t);
    assert!((s.images[0] - 0.5).abs() < 1e-9);
    assert!((s.images[1] - 0.5).abs() < 1e-9);
    assert_eq!(s.images[2], 0.0);

    let s = slideshow_state(1.0, 3, &t);
    assert_eq!(s.images, vec![0.0, 0.0, 1.0]);
    assert!((s.trail_offset_vw + 220.0).abs() < 1e-9);
}

#[test]
fn slideshow_handles_degenerate_image_counts() {
    let t = tuning();
    assert!(slideshow_state(0.5, 0, &t).images.is_empty());
    assert_eq!(slideshow_state(0.5, 1, &t).images, vec![1.0]);
}
