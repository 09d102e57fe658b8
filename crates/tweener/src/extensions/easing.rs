// extensions/easing.rs
//
// Pure curve functions for tween interpolation.
// No dependencies on Tween state — just math.

use std::f32::consts::{FRAC_PI_2, TAU};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::api::error::TweenError;

/// Easing curve applied to normalized progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Curve {
    /// Constant velocity (no easing).
    #[default]
    Linear,
    /// Slow start (quarter sine).
    EaseIn,
    /// Slow end (quarter sine).
    EaseOut,
    /// Slow start and end.
    EaseInOut,
    /// Bounces while approaching the target.
    BounceIn,
    /// Bounces while leaving the start.
    BounceOut,
}

impl Curve {
    /// Every curve, in numeric id order.
    pub const ALL: [Curve; 6] = [
        Curve::Linear,
        Curve::EaseIn,
        Curve::EaseOut,
        Curve::EaseInOut,
        Curve::BounceIn,
        Curve::BounceOut,
    ];

    /// Map normalized progress `x` in [0, 1] to shaped progress.
    /// Input outside [0, 1] is clamped first.
    #[inline]
    pub fn apply(self, x: f32) -> f32 {
        let x = x.clamp(0.0, 1.0);
        match self {
            Curve::Linear => x,
            Curve::EaseIn => 1.0 - (FRAC_PI_2 * (1.0 - x)).sin(),
            Curve::EaseOut => (FRAC_PI_2 * x).sin(),
            Curve::EaseInOut => x - (x * TAU).sin() / TAU,
            Curve::BounceIn => bounce(x),
            Curve::BounceOut => 1.0 - bounce(1.0 - x),
        }
    }

    /// Stable snake_case name, matching the serde representation.
    pub fn name(self) -> &'static str {
        match self {
            Curve::Linear => "linear",
            Curve::EaseIn => "ease_in",
            Curve::EaseOut => "ease_out",
            Curve::EaseInOut => "ease_in_out",
            Curve::BounceIn => "bounce_in",
            Curve::BounceOut => "bounce_out",
        }
    }
}

impl fmt::Display for Curve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u32> for Curve {
    type Error = TweenError;

    fn try_from(id: u32) -> Result<Self, Self::Error> {
        Curve::ALL
            .get(id as usize)
            .copied()
            .ok_or(TweenError::InvalidCurve(id))
    }
}

impl FromStr for Curve {
    type Err = TweenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Curve::ALL
            .iter()
            .copied()
            .find(|curve| curve.name() == s)
            .ok_or_else(|| TweenError::UnknownCurve(s.to_owned()))
    }
}

/// Four-segment quadratic bounce kernel.
///
/// Rises from 0 at `v = 0` to 1 at `v = 1`, touching 0.75, 0.9375 and
/// 0.984375 at the segment seams.
#[inline]
pub fn bounce(v: f32) -> f32 {
    const N1: f32 = 7.5625;
    const D1: f32 = 2.75;

    if v < 1.0 / D1 {
        N1 * v * v
    } else if v < 2.0 / D1 {
        let w = v - 1.5 / D1;
        N1 * w * w + 0.75
    } else if v < 2.5 / D1 {
        let w = v - 2.25 / D1;
        N1 * w * w + 0.9375
    } else {
        let w = v - 2.625 / D1;
        N1 * w * w + 0.984375
    }
}

// ── Interpolation helpers ────────────────────────────────────────────────

/// Linearly interpolate between two values.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Interpolate with a curve.
#[inline]
pub fn ease(a: f32, b: f32, x: f32, curve: Curve) -> f32 {
    lerp(a, b, curve.apply(x))
}
