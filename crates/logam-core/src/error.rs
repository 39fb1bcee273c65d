//! Error types for the logam logging facade.
//!
//! Logging calls themselves never fail from the caller's point of view; these
//! errors only surface while loading or writing configuration.

use thiserror::Error;

/// Top-level error type for logam operations.
#[derive(Error, Debug)]
pub enum LogamError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// General I/O errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the config file from disk
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    /// Failed to parse TOML configuration
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Failed to render the configuration back to TOML
    #[error("Failed to serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),

    /// Level name not in the severity table (strict parsing only)
    #[error("Unknown log level: {0:?}")]
    UnknownLevel(String),
}

/// Convenience type alias for logam results.
pub type Result<T> = std::result::Result<T, LogamError>;
