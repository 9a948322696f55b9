//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// All variants signal programmer or input errors raised synchronously at the
/// boundary of a domain type. Nothing in the domain layer catches or retries them.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A raw value failed validation (e.g. malformed email).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A required construction argument was absent.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A mutation was attempted through a read-only view.
    #[error("unsupported operation: {0}")]
    UnsupportedOperation(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn unsupported(msg: impl Into<String>) -> Self {
        Self::UnsupportedOperation(msg.into())
    }
}
