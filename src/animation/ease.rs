/// Easing functions used to shape normalized progress.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ease {
    /// Cubic ease-out.
    OutCubic,
    /// Cubic ease-in/out.
    InOutCubic,
    /// Cubic ease-out with overshoot past `1` before settling ("back").
    OutBack,
}

impl Ease {
    const BACK_C1: f64 = 1.70158;
    const BACK_C3: f64 = Self::BACK_C1 + 1.0;

    /// Apply this easing function to progress `t`, clamped into `[0, 1]` first.
    ///
    /// Output stays in `[0, 1]` for every variant except [`Ease::OutBack`], which peaks near
    /// `1.1`.
    pub fn apply(self, t: f64) -> f64 {
        let t = crate::foundation::math::clamp01(t);
        match self {
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
            Self::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(3) / 2.0)
                }
            }
            Self::OutBack => {
                if t <= 0.0 {
                    return 0.0;
                }
                let x = t - 1.0;
                1.0 + Self::BACK_C3 * x.powi(3) + Self::BACK_C1 * x.powi(2)
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
