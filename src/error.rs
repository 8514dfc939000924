//! Error types for pwgate.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.
//! The validator core itself never fails; these errors belong to the host layer
//! (config loading, CLI commands) and to pattern diagnostics.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for pwgate operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PwgateError {
    /// User provided invalid arguments or an unusable config file.
    #[error("{0}")]
    UserError(String),

    /// The candidate did not satisfy enough rules.
    #[error("Validation failed: {0}")]
    ValidationError(String),

    /// A rule pattern could not be compiled by the regex engine.
    #[error("invalid rule pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },
}

impl PwgateError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            PwgateError::UserError(_) => exit_codes::USER_ERROR,
            PwgateError::ValidationError(_) => exit_codes::VALIDATION_FAILURE,
            PwgateError::InvalidPattern { .. } => exit_codes::USER_ERROR,
        }
    }
}

/// Result type alias for pwgate operations.
pub type Result<T> = std::result::Result<T, PwgateError>;
