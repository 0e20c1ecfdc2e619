//! Open link use case.

use portfolio_domain::LinkTarget;

use crate::error::{ApplicationError, ApplicationResult};
use crate::ports::{Notice, Notifier, UrlOpener};

/// Title of the dialog shown when a link fails.
pub const LINK_ERROR_TITLE: &str = "Error";

/// Use case for opening a contact link with the host's default handler.
///
/// Any failure is reported once through the notifier and returned; the
/// caller's state is left untouched and nothing is retried.
pub struct OpenLink<O: UrlOpener, N: Notifier> {
    opener: O,
    notifier: N,
}

impl<O: UrlOpener, N: Notifier> OpenLink<O, N> {
    /// Creates a new `OpenLink` use case.
    #[must_use]
    pub const fn new(opener: O, notifier: N) -> Self {
        Self { opener, notifier }
    }

    /// Opens `raw`, which may be a URL or a bare e-mail address.
    ///
    /// # Errors
    /// - Returns error if `raw` is neither an absolute URL nor an e-mail address
    /// - Returns error if the host handler fails
    pub fn execute(&self, raw: &str) -> ApplicationResult<LinkTarget> {
        let result = self.open(raw);
        if let Err(e) = &result {
            tracing::warn!(url = raw, error = %e, "link could not be opened");
            self.notifier.notify(&Notice::error(
                LINK_ERROR_TITLE,
                format!("Link could not be opened: {raw}"),
            ));
        }
        result
    }

    fn open(&self, raw: &str) -> ApplicationResult<LinkTarget> {
        let target = LinkTarget::parse(raw)?;
        self.opener
            .open(&target)
            .map_err(|source| ApplicationError::LinkOpen {
                url: raw.to_string(),
                source,
            })?;
        tracing::info!(url = %target, "opened link");
        Ok(target)
    }
}
