use thiserror::Error;

/// Configuration errors surface at construction time and are never clamped away.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("mass must be positive and finite, got {0}")]
    NonPositiveMass(f32),

    #[error("bounciness must lie in [0, 1], got {0}")]
    BouncinessOutOfRange(f32),

    #[error("friction must lie in [0, 1], got {0}")]
    FrictionOutOfRange(f32),

    #[error("deactivation threshold must be non-negative and finite, got {0}")]
    NegativeDeactivation(f32),

    #[error("{what} must be positive and finite, got {value}")]
    NonPositiveDimension { what: &'static str, value: f32 },

    #[error("ticks per second must be positive and finite, got {0}")]
    InvalidTickRate(f32),

    #[error("viewport must be at least 1x1, got {width}x{height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("{what} must be finite")]
    NonFinite { what: &'static str },

    #[error("invalid scene config: {0}")]
    Parse(#[from] serde_json::Error),
}
