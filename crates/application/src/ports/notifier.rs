//! Notification port for user-facing messages

use std::rc::Rc;

/// Severity of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    /// Informational message.
    Info,
    /// Something the user asked for did not happen.
    Error,
}

/// A titled message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Severity.
    pub level: NoticeLevel,
    /// Dialog title.
    pub title: String,
    /// Dialog body.
    pub message: String,
}

impl Notice {
    /// Creates an informational notice.
    #[must_use]
    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            title: title.into(),
            message: message.into(),
        }
    }

    /// Creates an error notice.
    #[must_use]
    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            title: title.into(),
            message: message.into(),
        }
    }
}

/// Port for showing a modal acknowledgement to the user.
///
/// Nothing is returned; the caller continues once the notice is dismissed.
pub trait Notifier {
    /// Shows the notice.
    fn notify(&self, notice: &Notice);
}

impl<T: Notifier + ?Sized> Notifier for &T {
    fn notify(&self, notice: &Notice) {
        (**self).notify(notice);
    }
}

impl<T: Notifier + ?Sized> Notifier for Rc<T> {
    fn notify(&self, notice: &Notice) {
        (**self).notify(notice);
    }
}
