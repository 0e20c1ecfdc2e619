//! Navigation shell
//!
//! The shell owns the active page and the single mounted content tree.
//! Selecting a page replaces the content; the previous tree is dropped.

use portfolio_domain::{ContentNode, NAVIGATION, PageId};

use crate::registry::build_page;

/// A navigation entry together with its active flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    /// Button label.
    pub label: &'static str,
    /// Page the entry mounts.
    pub page: PageId,
    /// Whether this entry is the active page.
    pub active: bool,
}

/// Persistent navigation list plus one content slot.
#[derive(Debug, Clone)]
pub struct Shell {
    active: PageId,
    content: ContentNode,
}

impl Shell {
    /// Creates a shell showing the home page.
    #[must_use]
    pub fn new() -> Self {
        Self {
            active: PageId::Home,
            content: build_page(PageId::Home),
        }
    }

    /// Returns the active page.
    #[must_use]
    pub const fn active_page(&self) -> PageId {
        self.active
    }

    /// Returns the mounted content tree.
    #[must_use]
    pub const fn content(&self) -> &ContentNode {
        &self.content
    }

    /// Returns the navigation list with exactly one entry marked active.
    #[must_use]
    pub fn navigation(&self) -> Vec<NavItem> {
        NAVIGATION
            .iter()
            .map(|entry| NavItem {
                label: entry.label,
                page: entry.id,
                active: entry.id == self.active,
            })
            .collect()
    }

    /// Makes `id` the active page and mounts its freshly built content.
    pub fn select_page(&mut self, id: PageId) -> &ContentNode {
        tracing::info!(from = %self.active, to = %id, "selecting page");
        self.active = id;
        self.content = build_page(id);
        &self.content
    }
}

impl Default for Shell {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn active_count(shell: &Shell) -> usize {
        shell.navigation().iter().filter(|n| n.active).count()
    }

    #[test]
    fn starts_on_home() {
        let shell = Shell::new();
        assert_eq!(shell.active_page(), PageId::Home);
        assert_eq!(shell.content(), &build_page(PageId::Home));
        assert_eq!(active_count(&shell), 1);
    }

    #[test]
    fn select_page_marks_exactly_one_entry() {
        let mut shell = Shell::new();
        for page in PageId::all() {
            shell.select_page(*page);
            assert_eq!(shell.active_page(), *page);
            assert_eq!(active_count(&shell), 1);
            let active = shell.navigation().into_iter().find(|n| n.active);
            assert_eq!(active.map(|n| n.page), Some(*page));
        }
    }

    #[test]
    fn reselecting_is_idempotent() {
        let mut shell = Shell::new();
        let first = shell.select_page(PageId::Cv).clone();
        let second = shell.select_page(PageId::Cv).clone();
        assert_eq!(first, second);
        assert_eq!(shell.active_page(), PageId::Cv);
    }

    #[test]
    fn navigation_lists_every_page() {
        let shell = Shell::new();
        let pages: Vec<PageId> = shell.navigation().iter().map(|n| n.page).collect();
        assert_eq!(pages, PageId::all().to_vec());
    }
}
