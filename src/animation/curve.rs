use crate::foundation::error::{ScrubError, ScrubResult};
use crate::foundation::math::clamp01;

/// Three-piece linear remap from scroll progress to playback progress.
///
/// The breakpoints `(s1, t1)` and `(s2, t2)` split `[0, 1]` into `[0, s1] -> [0, t1]`,
/// `[s1, s2] -> [t1, t2]` and `[s2, 1] -> [t2, 1]`. Placing `t1 > s1` gives a fast start, and
/// `1 - t2 > 1 - s2` a fast end.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScrubCurve {
    /// First scroll breakpoint.
    pub s1: f64,
    /// Playback progress reached at `s1`.
    pub t1: f64,
    /// Second scroll breakpoint.
    pub s2: f64,
    /// Playback progress reached at `s2`.
    pub t2: f64,
}

impl Default for ScrubCurve {
    fn default() -> Self {
        Self {
            s1: 0.2,
            t1: 0.32,
            s2: 0.85,
            t2: 0.78,
        }
    }
}

impl ScrubCurve {
    /// Check `0 < s1 < s2 < 1` and `0 <= t1 <= t2 <= 1`.
    pub fn validate(&self) -> ScrubResult<()> {
        let all = [self.s1, self.t1, self.s2, self.t2];
        if all.iter().any(|v| !v.is_finite()) {
            return Err(ScrubError::validation("scrub curve breakpoints must be finite"));
        }
        if !(0.0 < self.s1 && self.s1 < self.s2 && self.s2 < 1.0) {
            return Err(ScrubError::validation(format!(
                "scrub curve needs 0 < s1 < s2 < 1 (got s1={}, s2={})",
                self.s1, self.s2
            )));
        }
        if !(0.0 <= self.t1 && self.t1 <= self.t2 && self.t2 <= 1.0) {
            return Err(ScrubError::validation(format!(
                "scrub curve needs 0 <= t1 <= t2 <= 1 (got t1={}, t2={})",
                self.t1, self.t2
            )));
        }
        Ok(())
    }

    /// Map scroll progress `u` to playback progress; both in `[0, 1]`.
    ///
    /// Total over every input: breakpoints are sanitized the same way regardless of whether
    /// [`ScrubCurve::validate`] passed.
    pub fn map(&self, u: f64) -> f64 {
        let x = clamp01(u);
        let a = finite_or(self.s1, 0.001).clamp(0.001, 0.999);
        let b = finite_or(self.s2, 0.999).min(0.999).max(a + 0.001);
        let ta = clamp01(self.t1);
        let tb = clamp01(self.t2).max(ta);

        if x <= a {
            return (x / a) * ta;
        }
        if x <= b {
            return clamp01(ta + ((x - a) / (b - a)) * (tb - ta));
        }
        // `b` can reach 1.0 only when s1 sits at its upper clamp.
        let tail = 1.0 - b;
        if tail <= 0.0 {
            return 1.0;
        }
        clamp01(tb + ((x - b) / tail) * (1.0 - tb))
    }
}

fn finite_or(v: f64, fallback: f64) -> f64 {
    if v.is_finite() { v } else { fallback }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/curve.rs"]
mod tests;
