//! Application error types

use portfolio_domain::DomainError;
use thiserror::Error;

use crate::ports::OpenerError;

/// Application-level errors.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// A domain validation error occurred.
    #[error("domain error: {0}")]
    Domain(#[from] DomainError),

    /// The OS refused or failed to open a link.
    #[error("could not open {url}: {source}")]
    LinkOpen {
        /// The link as it was requested.
        url: String,
        /// The opener failure.
        #[source]
        source: OpenerError,
    },
}

/// Result type alias for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
