//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent malformed mobile input.
/// The tree operations themselves never fail.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("parse error at {position}: {message}")]
    Parse { position: usize, message: String },
}

impl DomainError {
    pub fn parse(position: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            position,
            message: message.into(),
        }
    }
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
