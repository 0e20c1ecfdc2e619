//! Portfolio Domain - Core types
//!
//! This crate defines the domain model for the Portfolio application:
//! page identifiers, the navigation list, the renderable content tree
//! and the static résumé records.
//! All types here are pure Rust with no I/O dependencies.

pub mod content;
pub mod error;
pub mod link;
pub mod navigation;
pub mod page;
pub mod profile;
pub mod settings;

pub use content::{Block, ContentNode, Percentage, Section, SectionStyle, TextRole};
pub use error::{DomainError, DomainResult};
pub use link::LinkTarget;
pub use navigation::{EXPORT_LABEL, NAVIGATION, NavEntry, SIDEBAR_TITLE};
pub use page::PageId;
pub use settings::UserSettings;
