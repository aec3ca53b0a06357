/// Clamp into `[0, 1]`. NaN maps to `0`.
pub fn clamp01(x: f64) -> f64 {
    if x.is_nan() { 0.0 } else { x.clamp(0.0, 1.0) }
}

/// Linear interpolation from `a` to `b` by `t` (unclamped).
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Normalized progress of `x` through `[start, start + len)`, with `len` floored at 1.
pub fn progress_in(x: f64, start: f64, len: f64) -> f64 {
    clamp01((x - start) / len.max(1.0))
}

/// Non-negative finite value or `0`.
pub(crate) fn non_negative(x: f64) -> f64 {
    if x.is_finite() { x.max(0.0) } else { 0.0 }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
