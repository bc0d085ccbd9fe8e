//! Configuration error types

use thiserror::Error;

/// Errors raised when a fast-scroll configuration is rejected
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A width or height was negative, NaN or infinite
    #[error("Invalid {field}: {value} (expected a finite, non-negative length)")]
    InvalidDimension { field: &'static str, value: f32 },

    /// The visibility length threshold was negative, NaN or infinite
    #[error("Invalid visibility length threshold: {0}")]
    InvalidThreshold(f32),

    /// A configuration document could not be parsed
    #[error("Failed to parse fast-scroll configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;
