use serde::{Deserialize, Serialize};

use crate::api::error::TweenError;
use crate::extensions::easing::Curve;

/// Immutable description of a tween, fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TweenConfig {
    /// Easing curve (default: linear).
    pub curve: Curve,
    /// Start value (default: 0).
    pub from: f32,
    /// End value (default: 1).
    pub to: f32,
    /// Unscaled seconds to wait before progress starts (default: 0).
    pub delay: f32,
    /// Seconds for progress to go from 0 to 1. Zero completes on the first
    /// animation tick (default: 1).
    pub duration: f32,
}

impl Default for TweenConfig {
    fn default() -> Self {
        Self {
            curve: Curve::Linear,
            from: 0.0,
            to: 1.0,
            delay: 0.0,
            duration: 1.0,
        }
    }
}

impl TweenConfig {
    /// A unit (0 → 1) tween with no delay.
    pub fn new(curve: Curve, duration: f32) -> Self {
        Self {
            curve,
            duration,
            ..Self::default()
        }
    }

    /// Parse a config from a JSON object. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, TweenError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject negative or non-finite timings.
    pub fn validate(&self) -> Result<(), TweenError> {
        if !self.duration.is_finite() || self.duration < 0.0 {
            return Err(TweenError::InvalidDuration(self.duration));
        }
        if !self.delay.is_finite() || self.delay < 0.0 {
            return Err(TweenError::InvalidDelay(self.delay));
        }
        Ok(())
    }

    /// Progress gained per second of unscaled time. `None` for zero duration,
    /// which completes in a single step instead.
    pub fn progress_rate(&self) -> Option<f32> {
        (self.duration > 0.0).then(|| 1.0 / self.duration)
    }
}
