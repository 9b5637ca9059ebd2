//! Shared primitives for all Rust crates in Larder.

#![forbid(unsafe_code)]

use thiserror::Error;

/// Result type used across Larder crates.
pub type AppResult<T> = Result<T, AppError>;

/// Common application error categories.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    /// Invalid input or violated invariant.
    #[error("validation error: {0}")]
    Validation(String),

    /// Requested resource does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// Write operation conflicts with existing state.
    #[error("conflict: {0}")]
    Conflict(String),

    /// Text that was expected to hold a decimal number could not be parsed.
    ///
    /// Raised by formatting helpers invoked on input that skipped validation.
    #[error("number format error: {0}")]
    NumberFormat(String),

    /// Internal unexpected error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Returns the error text without its category prefix.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Validation(message)
            | Self::NotFound(message)
            | Self::Conflict(message)
            | Self::NumberFormat(message)
            | Self::Internal(message) => message.as_str(),
        }
    }
}
