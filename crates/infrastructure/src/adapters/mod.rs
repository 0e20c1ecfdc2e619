//! Adapters implementing the application ports.

mod dialog_notifier;
mod system_url_opener;

pub use dialog_notifier::DialogNotifier;
pub use system_url_opener::SystemUrlOpener;
