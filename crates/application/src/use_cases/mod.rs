//! Use cases
//!
//! Each use case wraps one user action that reaches outside the window.

mod export_pdf;
mod open_link;

pub use export_pdf::{EXPORT_MESSAGE, EXPORT_TITLE, ExportPdf};
pub use open_link::{LINK_ERROR_TITLE, OpenLink};
