//! Interpolation helpers for stat-driven formulas.

use super::weapon::STAT_CEILING;

/// Linear interpolation from `a` to `b` by `t` in `[0, 1]`.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t.clamp(0.0, 1.0)
}

/// Normalizes a 0-100 stat rating to `[0, 1]`.
#[inline]
pub fn stat_fraction(stat: f32) -> f32 {
    (stat / STAT_CEILING).clamp(0.0, 1.0)
}

/// Monotonic power curve through three anchors at stat 0, 50 and 100.
///
/// `value(x) = at_0 + (at_100 - at_0) × (x/100)^exponent`, with the exponent
/// solved so the curve passes exactly through `at_50`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnchorCurve {
    pub at_0: f32,
    pub at_50: f32,
    pub at_100: f32,
}

impl AnchorCurve {
    pub const fn new(at_0: f32, at_50: f32, at_100: f32) -> Self {
        Self {
            at_0,
            at_50,
            at_100,
        }
    }

    /// Exponent that makes the curve hit the midpoint anchor.
    ///
    /// Anchors that are flat or not strictly monotonic fall back to a linear
    /// curve (exponent 1).
    pub fn exponent(&self) -> f32 {
        let span = self.at_100 - self.at_0;
        if span == 0.0 {
            return 1.0;
        }
        let ratio = (self.at_50 - self.at_0) / span;
        if ratio <= 0.0 || ratio >= 1.0 {
            return 1.0;
        }
        ratio.ln() / 0.5f32.ln()
    }

    /// Evaluates the curve at a 0-100 stat rating.
    pub fn evaluate(&self, stat: f32) -> f32 {
        let x = stat_fraction(stat);
        self.at_0 + (self.at_100 - self.at_0) * x.powf(self.exponent())
    }
}
