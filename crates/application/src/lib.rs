//! Portfolio Application - Registry, shell and use cases
//!
//! This crate defines the application layer with:
//! - The page registry and the navigation shell
//! - Port traits (interfaces for the host system)
//! - Use cases for the external actions
//! - Application-level error handling

pub mod error;
pub mod ports;
pub mod registry;
pub mod shell;
pub mod use_cases;

pub use error::{ApplicationError, ApplicationResult};
pub use ports::{Notice, NoticeLevel, Notifier, OpenerError, UrlOpener};
pub use registry::{PageBuilder, build_page};
pub use shell::{NavItem, Shell};
pub use use_cases::{ExportPdf, OpenLink};
