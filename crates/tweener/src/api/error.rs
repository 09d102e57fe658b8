use thiserror::Error;

/// Errors reported synchronously while configuring a tween.
///
/// A tween that was constructed successfully never fails afterwards; curve
/// math is total on [0, 1].
#[derive(Debug, Error)]
pub enum TweenError {
    #[error("duration must be a finite value >= 0, got {0}")]
    InvalidDuration(f32),
    #[error("delay must be a finite value >= 0, got {0}")]
    InvalidDelay(f32),
    #[error("unknown curve id {0}")]
    InvalidCurve(u32),
    #[error("unknown curve name `{0}`")]
    UnknownCurve(String),
    #[error("tween config parse error: {0}")]
    Config(#[from] serde_json::Error),
}
