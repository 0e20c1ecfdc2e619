//! Sidebar navigation entries

use crate::page::PageId;

/// A fixed sidebar entry linking a label to a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavEntry {
    /// Button label as shown in the sidebar.
    pub label: &'static str,
    /// Page mounted when the entry is selected.
    pub id: PageId,
}

impl NavEntry {
    const fn new(label: &'static str, id: PageId) -> Self {
        Self { label, id }
    }
}

/// Sidebar entries in display order. One entry per [`PageId`].
pub const NAVIGATION: [NavEntry; 6] = [
    NavEntry::new("🏠 Start Page", PageId::Home),
    NavEntry::new("👤 Personal Data", PageId::Personal),
    NavEntry::new("📄 CV", PageId::Cv),
    NavEntry::new("⚡ Skills", PageId::Skills),
    NavEntry::new("💼 Projects", PageId::Projects),
    NavEntry::new("📧 Contact", PageId::Contact),
];

/// Sidebar header text.
pub const SIDEBAR_TITLE: &str = "PORTFOLIO";

/// Label of the export action below the navigation entries.
pub const EXPORT_LABEL: &str = "📥 PDF Export";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_page_has_exactly_one_entry() {
        for page in PageId::all() {
            let count = NAVIGATION.iter().filter(|e| e.id == *page).count();
            assert_eq!(count, 1, "{page} should appear once");
        }
    }

    #[test]
    fn entries_follow_page_order() {
        for (entry, page) in NAVIGATION.iter().zip(PageId::all()) {
            assert_eq!(entry.id, *page);
        }
    }
}
