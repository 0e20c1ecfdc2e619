//! Port definitions (interfaces)
//!
//! Ports define the boundaries between the application core and the host
//! system. Each port is a trait implemented by an adapter in the
//! infrastructure layer.

mod notifier;
mod url_opener;

pub use notifier::{Notice, NoticeLevel, Notifier};
pub use url_opener::{OpenerError, UrlOpener};
