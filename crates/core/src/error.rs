//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every failure here is raised at construction time and propagates straight to
/// the caller; nothing is retried or substituted with a fallback value.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. a negative price).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An identifier was invalid (e.g. blank).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// A date string did not match the `YYYY-MM-DD` pattern.
    #[error("invalid date '{input}' (expected YYYY-MM-DD): {reason}")]
    DateFormat { input: String, reason: String },
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn date_format(input: impl Into<String>, reason: impl core::fmt::Display) -> Self {
        Self::DateFormat {
            input: input.into(),
            reason: reason.to_string(),
        }
    }
}
