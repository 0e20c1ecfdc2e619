//! End-to-end navigation through the shell.

use portfolio_application::{Shell, build_page};
use portfolio_domain::{Block, PageId};
use pretty_assertions::assert_eq;

#[test]
fn contact_then_skills_leaves_only_skills_mounted() {
    let mut shell = Shell::new();
    assert_eq!(shell.active_page(), PageId::Home);

    let contact = shell.select_page(PageId::Contact).clone();
    assert!(contact.blocks().any(|b| matches!(b, Block::Link { .. })));

    shell.select_page(PageId::Skills);

    assert_eq!(shell.active_page(), PageId::Skills);
    assert_eq!(shell.content(), &build_page(PageId::Skills));
    assert_ne!(shell.content(), &contact);
    assert!(
        !shell
            .content()
            .blocks()
            .any(|b| matches!(b, Block::Link { .. }))
    );
    assert!(!shell.content().contains_text("Contact & Links"));

    let active: Vec<PageId> = shell
        .navigation()
        .into_iter()
        .filter(|n| n.active)
        .map(|n| n.page)
        .collect();
    assert_eq!(active, vec![PageId::Skills]);
}

#[test]
fn every_page_is_reachable_from_navigation() {
    let mut shell = Shell::new();
    for item in shell.navigation() {
        let content = shell.select_page(item.page).clone();
        assert!(!content.is_empty());
        assert_eq!(shell.active_page(), item.page);
    }
}
