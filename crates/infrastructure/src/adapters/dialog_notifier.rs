//! Native message dialog adapter

use portfolio_application::ports::{Notice, NoticeLevel, Notifier};
use rfd::{MessageButtons, MessageDialog, MessageLevel};

/// Shows notices as blocking native message boxes.
#[derive(Debug, Clone, Copy, Default)]
pub struct DialogNotifier;

impl DialogNotifier {
    /// Creates a new dialog notifier.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Notifier for DialogNotifier {
    fn notify(&self, notice: &Notice) {
        let _ = MessageDialog::new()
            .set_level(message_level(notice.level))
            .set_title(notice.title.as_str())
            .set_description(notice.message.as_str())
            .set_buttons(MessageButtons::Ok)
            .show();
    }
}

const fn message_level(level: NoticeLevel) -> MessageLevel {
    match level {
        NoticeLevel::Info => MessageLevel::Info,
        NoticeLevel::Error => MessageLevel::Error,
    }
}
