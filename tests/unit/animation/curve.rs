use super::*;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn default_curve_is_valid_and_pins_endpoints() {
    let c = ScrubCurve::default();
    c.validate().unwrap();
    assert_eq!(c.map(0.0), 0.0);
    assert!(approx(c.map(1.0), 1.0));
}

#[test]
fn breakpoints_are_hit_exactly() {
    let c = ScrubCurve::default();
    assert!(approx(c.map(0.2), 0.32));
    assert!(approx(c.map(0.85), 0.78));
}

#[test]
fn midpoint_lands_in_middle_piece() {
    let c = ScrubCurve::default();
    let expected = 0.32 + (0.3 / 0.65) * (0.78 - 0.32);
    assert!(approx(c.map(0.5), expected));
    assert!((c.map(0.5) - 0.5323).abs() < 1e-3);
}

#[test]
fn monotonic_for_assorted_valid_configs() {
    let configs = [
        ScrubCurve::default(),
        ScrubCurve {
            s1: 1.0 / 3.0,
            t1: 1.0 / 3.0,
            s2: 2.0 / 3.0,
            t2: 2.0 / 3.0,
        },
        ScrubCurve {
            s1: 0.01,
            t1: 0.0,
            s2: 0.02,
            t2: 0.0,
        },
        ScrubCurve {
            s1: 0.5,
            t1: 1.0,
            s2: 0.99,
            t2: 1.0,
        },
        ScrubCurve {
            s1: 0.3,
            t1: 0.5,
            s2: 0.6,
            t2: 0.5,
        },
    ];
    for c in configs {
        c.validate().unwrap();
        assert_eq!(c.map(0.0), 0.0);
        assert!(approx(c.map(1.0), 1.0), "{c:?}");
        let mut prev = c.map(0.0);
        for i in 1..=1000 {
            let v = c.map(f64::from(i) / 1000.0);
            assert!(v + 1e-12 >= prev, "{c:?} at {i}");
            assert!((0.0..=1.0).contains(&v));
            prev = v;
        }
    }
}

#[test]
fn out_of_range_input_is_clamped() {
    let c = ScrubCurve::default();
    assert_eq!(c.map(-1.0), 0.0);
    assert!(approx(c.map(4.0), 1.0));
    assert_eq!(c.map(f64::NAN), 0.0);
}

#[test]
fn validate_rejects_broken_breakpoints() {
    let bad = [
        ScrubCurve {
            s1: 0.0,
            ..ScrubCurve::default()
        },
        ScrubCurve {
            s1: 0.9,
            s2: 0.5,
            ..ScrubCurve::default()
        },
        ScrubCurve {
            s2: 1.0,
            ..ScrubCurve::default()
        },
        ScrubCurve {
            t1: 0.9,
            t2: 0.1,
            ..ScrubCurve::default()
        },
        ScrubCurve {
            t2: f64::NAN,
            ..ScrubCurve::default()
        },
    ];
    for c in bad {
        assert!(c.validate().is_err(), "{c:?}");
    }
}

#[test]
fn map_is_total_even_for_invalid_breakpoints() {
    let c = ScrubCurve {
        s1: 2.0,
        t1: -1.0,
        s2: -5.0,
        t2: 3.0,
    };
    for i in 0..=20 {
        let v = c.map(f64::from(i) / 20.0);
        assert!((0.0..=1.0).contains(&v), "{v}");
    }
}
