//! Error types for the animation configuration engine.

use serde::{Deserialize, Serialize};

/// Rejections raised while parsing or validating an [`AnimationConfig`](crate::data::AnimationConfig).
#[derive(thiserror::Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum ConfigError {
    /// Duration must be a finite number of seconds greater than zero
    #[error("Duration must be > 0 seconds, got {duration}")]
    NonPositiveDuration { duration: f64 },

    /// Delay must be a finite, non-negative number of seconds
    #[error("Delay must be >= 0 seconds, got {delay}")]
    NegativeDelay { delay: f64 },

    /// Opacity bounds must lie in [0, 1]
    #[error("Opacity bounds must lie in [0, 1], got {start} -> {end}")]
    OpacityOutOfRange { start: f64, end: f64 },

    /// Scale factor must be a finite number greater than zero
    #[error("Scale factor must be > 0, got {scale}")]
    NonPositiveScale { scale: f64 },

    /// A numeric field held NaN or infinity
    #[error("Field '{field}' must be a finite number")]
    NonFinite { field: String },

    /// Easing text is neither a named curve nor a valid cubic-bezier()
    #[error("Invalid easing: '{value}'")]
    InvalidEasing { value: String },

    /// Backend name is not one of the known code generators
    #[error("Unknown export backend: '{name}'")]
    UnknownBackend { name: String },

    /// JSON could not be decoded into a config
    #[error("Config parse error: {reason}")]
    Parse { reason: String },
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse {
            reason: err.to_string(),
        }
    }
}

/// Failure of a single engine operation (one bind, one generate).
#[derive(thiserror::Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum EngineError {
    /// The config names an animation family outside the closed set
    #[error("Unsupported animation type: '{kind}'")]
    UnsupportedType { kind: String },

    /// The config violates a model constraint
    #[error(transparent)]
    InvalidConfig(#[from] ConfigError),
}

impl EngineError {
    /// Get error category for logging
    #[inline]
    pub fn category(&self) -> &'static str {
        match self {
            Self::UnsupportedType { .. } => "unsupported",
            Self::InvalidConfig(_) => "validation",
        }
    }
}
