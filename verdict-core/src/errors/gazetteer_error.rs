//! Gazetteer errors.

use std::path::PathBuf;

use super::error_code::{self, VerdictErrorCode};

/// Errors raised while building a gazetteer index.
///
/// Only file-level failures surface here. A row that fails the column or
/// character filters is skipped and counted, never raised.
#[derive(Debug, thiserror::Error)]
pub enum GazetteerError {
    #[error("Failed to read gazetteer table {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid country code {code:?}: expected two ASCII letters")]
    InvalidCountryCode { code: String },
}

impl VerdictErrorCode for GazetteerError {
    fn error_code(&self) -> &'static str {
        error_code::GAZETTEER_ERROR
    }
}
