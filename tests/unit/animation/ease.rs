use super::*;

const ALL: [Ease; 3] = [Ease::OutCubic, Ease::InOutCubic, Ease::OutBack];

#[test]
fn endpoints_are_stable() {
    for ease in ALL {
        assert!(ease.apply(0.0).abs() < 1e-12, "{ease:?}");
        assert!((ease.apply(1.0) - 1.0).abs() < 1e-12, "{ease:?}");
    }
}

#[test]
fn input_is_clamped() {
    for ease in ALL {
        assert_eq!(ease.apply(-3.0), ease.apply(0.0));
        assert_eq!(ease.apply(7.0), ease.apply(1.0));
        assert_eq!(ease.apply(f64::NAN), ease.apply(0.0));
    }
}

#[test]
fn monotonic_spot_check() {
    for ease in [Ease::OutCubic, Ease::InOutCubic] {
        let a = ease.apply(0.25);
        let b = ease.apply(0.5);
        let c = ease.apply(0.75);
        assert!(a < b);
        assert!(b < c);
    }
}

#[test]
fn out_back_overshoots() {
    let peak = (0..=100)
        .map(|i| Ease::OutBack.apply(f64::from(i) / 100.0))
        .fold(f64::MIN, f64::max);
    assert!(peak > 1.05 && peak < 1.15, "peak = {peak}");
}

#[test]
fn in_out_cubic_is_symmetric() {
    assert!((Ease::InOutCubic.apply(0.5) - 0.5).abs() < 1e-12);
    let lo = Ease::InOutCubic.apply(0.2);
    let hi = Ease::InOutCubic.apply(0.8);
    assert!((lo + hi - 1.0).abs() < 1e-12);
}
