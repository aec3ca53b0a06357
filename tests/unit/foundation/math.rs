use super::*;

#[test]
fn clamp01_handles_out_of_range_and_nan() {
    assert_eq!(clamp01(-0.5), 0.0);
    assert_eq!(clamp01(1.5), 1.0);
    assert_eq!(clamp01(0.25), 0.25);
    assert_eq!(clamp01(f64::NAN), 0.0);
    assert_eq!(clamp01(f64::INFINITY), 1.0);
}

#[test]
fn progress_floors_length_at_one() {
    assert_eq!(progress_in(10.0, 10.0, 0.0), 0.0);
    assert_eq!(progress_in(10.5, 10.0, 0.0), 0.5);
    assert_eq!(progress_in(50.0, 0.0, 100.0), 0.5);
    assert_eq!(progress_in(500.0, 0.0, 100.0), 1.0);
}

#[test]
fn non_negative_rejects_garbage() {
    assert_eq!(non_negative(-3.0), 0.0);
    assert_eq!(non_negative(f64::NAN), 0.0);
    assert_eq!(non_negative(f64::NEG_INFINITY), 0.0);
    assert_eq!(non_negative(4.0), 4.0);
}

#[test]
fn lerp_endpoints() {
    assert_eq!(lerp(2.0, 6.0, 0.0), 2.0);
    assert_eq!(lerp(2.0, 6.0, 1.0), 6.0);
    assert_eq!(lerp(2.0, 6.0, 0.5), 4.0);
}
