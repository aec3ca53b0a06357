use super::*;

#[test]
fn device_class_width_threshold() {
    assert_eq!(DeviceClass::from_viewport_width(390.0), DeviceClass::Mobile);
    assert_eq!(DeviceClass::from_viewport_width(520.0), DeviceClass::Mobile);
    assert_eq!(DeviceClass::from_viewport_width(521.0), DeviceClass::Desktop);
    assert_eq!(DeviceClass::from_viewport_width(f64::NAN), DeviceClass::Mobile);
}

#[test]
fn device_class_user_agent_wins() {
    let ua = "Mozilla/5.0 (iPad; CPU OS 17_0 like Mac OS X)";
    assert_eq!(DeviceClass::detect(1024.0, ua), DeviceClass::Mobile);
    let ua = "Mozilla/5.0 (X11; Linux x86_64)";
    assert_eq!(DeviceClass::detect(1280.0, ua), DeviceClass::Desktop);
}

#[test]
fn durations_ignore_unusable_metadata() {
    let mut d = TrackDurations::default();
    assert!(!d.update(Track::First, f64::NAN));
    assert!(!d.update(Track::First, 0.0));
    assert!(!d.update(Track::Second, -2.0));
    assert_eq!(d, TrackDurations::default());

    assert!(d.update(Track::Second, 8.5));
    assert!(!d.update(Track::Second, 8.5));
    assert_eq!(d.get(Track::Second), 8.5);
    assert_eq!(d.get(Track::First), PROVISIONAL_DURATION_S);
}

#[test]
fn durations_new_falls_back() {
    let d = TrackDurations::new(f64::INFINITY, 4.0);
    assert_eq!(d.first, PROVISIONAL_DURATION_S);
    assert_eq!(d.second, 4.0);
}
