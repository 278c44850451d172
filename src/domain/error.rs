//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent invalid input to a builder.
/// The staged and faceted builders accept any value, so only element
/// construction can fail.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("invalid argument `{argument}`: {reason}")]
    InvalidArgument {
        argument: &'static str,
        reason: String,
    },
}

impl DomainError {
    /// Create an `InvalidArgument` error for the named parameter.
    pub fn invalid_argument(argument: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            argument,
            reason: reason.into(),
        }
    }
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
