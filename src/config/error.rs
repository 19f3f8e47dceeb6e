//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Service URL must start with http:// or https://")]
    InvalidServiceUrl,

    #[error("Upload path must start with '/'")]
    InvalidUploadPath,

    #[error("Submission timeout must be between 1 and 300 seconds")]
    InvalidTimeout,

    #[error("Export font size must be positive")]
    InvalidFontSize,

    #[error("Export filename must not contain path separators")]
    InvalidFilename,
}
