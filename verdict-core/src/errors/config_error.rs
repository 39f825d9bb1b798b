//! Configuration errors.

use super::error_code::{self, VerdictErrorCode};

/// Errors raised while loading or validating configuration.
///
/// These are caller bugs and fail fast; they are never downgraded to
/// warnings or skipped rows.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {message}")]
    ReadFailed { path: String, message: String },

    #[error("Failed to parse config {path}: {message}")]
    ParseError { path: String, message: String },

    #[error("Invalid value for {field}: {message}")]
    ValidationFailed { field: String, message: String },

    #[error("Missing required field: {field}")]
    MissingField { field: String },
}

impl VerdictErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        error_code::CONFIG_ERROR
    }
}
