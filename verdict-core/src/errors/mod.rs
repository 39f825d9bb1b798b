//! Error handling for Verdict.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.
//!
//! Malformed gazetteer rows are deliberately *not* represented here:
//! skipping bad reference rows is expected behavior at build time, not an
//! error. Errors are reserved for I/O failures and caller bugs.

pub mod config_error;
pub mod error_code;
pub mod estimator_error;
pub mod fusion_error;
pub mod gazetteer_error;

pub use config_error::ConfigError;
pub use error_code::VerdictErrorCode;
pub use estimator_error::EstimatorError;
pub use fusion_error::FusionError;
pub use gazetteer_error::GazetteerError;
