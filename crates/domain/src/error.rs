//! Domain error types

use thiserror::Error;

/// Domain-level errors that can occur during validation or parsing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The provided URL is invalid or malformed.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// A page identifier does not name one of the known pages.
    #[error("unknown page: {0}")]
    UnknownPage(String),
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
