//! URL opener port

use portfolio_domain::LinkTarget;
use thiserror::Error;

/// Errors from handing a URL to the host.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OpenerError {
    /// No URL handler exists on this platform.
    #[error("opening links is not supported on this platform")]
    Unsupported,

    /// The handler was found but failed.
    #[error("URL handler failed: {0}")]
    Failed(String),
}

/// Port for opening a link in the user's default browser or mail client.
pub trait UrlOpener {
    /// Opens the target.
    ///
    /// # Errors
    ///
    /// Returns an error if the host cannot open the URL.
    fn open(&self, target: &LinkTarget) -> Result<(), OpenerError>;
}

impl<T: UrlOpener + ?Sized> UrlOpener for &T {
    fn open(&self, target: &LinkTarget) -> Result<(), OpenerError> {
        (**self).open(target)
    }
}
