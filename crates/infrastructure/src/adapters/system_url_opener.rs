//! System URL opener adapter

use std::io::ErrorKind;

use portfolio_application::ports::{OpenerError, UrlOpener};
use portfolio_domain::LinkTarget;

/// Opens links with the OS default handler (browser or mail client).
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemUrlOpener;

impl SystemUrlOpener {
    /// Creates a new system URL opener.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl UrlOpener for SystemUrlOpener {
    fn open(&self, target: &LinkTarget) -> Result<(), OpenerError> {
        open::that(target.as_str()).map_err(|e| map_io_error(&e))
    }
}

fn map_io_error(error: &std::io::Error) -> OpenerError {
    match error.kind() {
        ErrorKind::NotFound | ErrorKind::Unsupported => OpenerError::Unsupported,
        _ => OpenerError::Failed(error.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn missing_launcher_is_unsupported() {
        let error = std::io::Error::new(ErrorKind::NotFound, "xdg-open not found");
        assert_eq!(map_io_error(&error), OpenerError::Unsupported);
    }

    #[test]
    fn other_failures_keep_their_message() {
        let error = std::io::Error::other("exit status 4");
        assert_eq!(
            map_io_error(&error),
            OpenerError::Failed("exit status 4".to_string())
        );
    }
}
