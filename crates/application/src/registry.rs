//! Page registry
//!
//! Maps every [`PageId`] to a builder that assembles its content tree from the
//! static profile records. Builders are pure and cannot fail.

use portfolio_domain::profile::{
    CONTACT_INTRO, CONTACT_LINKS, INTRODUCTION, PERSONAL_DATA, PROJECTS, SKILLS, TAGLINE,
    TIMELINE, WELCOME,
};
use portfolio_domain::{Block, ContentNode, PageId, Section, TextRole};

/// A function producing one page's content.
pub type PageBuilder = fn() -> ContentNode;

/// Returns the builder registered for `id`.
#[must_use]
pub const fn builder(id: PageId) -> PageBuilder {
    match id {
        PageId::Home => home_page,
        PageId::Personal => personal_page,
        PageId::Cv => cv_page,
        PageId::Skills => skills_page,
        PageId::Projects => projects_page,
        PageId::Contact => contact_page,
    }
}

/// Builds the content tree for `id`.
#[must_use]
pub fn build_page(id: PageId) -> ContentNode {
    tracing::debug!(page = %id, "building page");
    builder(id)()
}

fn home_page() -> ContentNode {
    ContentNode::default().with_section(Section::card(vec![
        Block::text(WELCOME, TextRole::Hero),
        Block::text(TAGLINE, TextRole::Subtitle),
        Block::text(INTRODUCTION, TextRole::Body),
    ]))
}

fn personal_page() -> ContentNode {
    let rows = PERSONAL_DATA
        .iter()
        .map(|f| Block::field(f.label, f.value))
        .collect();
    ContentNode::titled("Personal Data").with_section(Section::card(rows))
}

fn cv_page() -> ContentNode {
    TIMELINE
        .iter()
        .fold(ContentNode::titled("CV & Career History"), |node, entry| {
            node.with_section(Section::card(vec![
                Block::text(entry.period, TextRole::Period),
                Block::text(entry.title, TextRole::ItemTitle),
                Block::text(entry.company, TextRole::Company),
                Block::text(entry.description, TextRole::Caption),
            ]))
        })
}

fn skills_page() -> ContentNode {
    let bars = SKILLS
        .iter()
        .map(|s| Block::skill(s.name, s.level))
        .collect();
    ContentNode::titled("Skills & Knowledge").with_section(Section::plain(bars))
}

fn projects_page() -> ContentNode {
    PROJECTS
        .iter()
        .fold(ContentNode::titled("Projects & Portfolio"), |node, project| {
            node.with_section(Section::card(vec![
                Block::text(project.title, TextRole::ItemTitle),
                Block::text(project.description, TextRole::Caption),
                Block::text(
                    format!("Technologien: {}", project.technologies),
                    TextRole::Accent,
                ),
            ]))
        })
}

fn contact_page() -> ContentNode {
    let mut blocks = vec![Block::text(CONTACT_INTRO, TextRole::Body)];
    blocks.extend(
        CONTACT_LINKS
            .iter()
            .map(|link| Block::link(link.label, link.target)),
    );
    ContentNode::titled("Contact & Links").with_section(Section::card(blocks))
}

#[cfg(test)]
mod tests {
    use super::*;
    use portfolio_domain::{Percentage, SectionStyle};
    use pretty_assertions::assert_eq;

    #[test]
    fn every_page_builds_non_empty_content() {
        for page in PageId::all() {
            let node = build_page(*page);
            assert!(!node.is_empty(), "{page} built an empty tree");
            assert!(node.block_count() > 0, "{page} has no blocks");
        }
    }

    #[test]
    fn builds_are_deterministic() {
        for page in PageId::all() {
            assert_eq!(build_page(*page), build_page(*page));
        }
    }

    #[test]
    fn home_has_no_title() {
        let node = build_page(PageId::Home);
        assert_eq!(node.title, None);
        assert!(node.contains_text(WELCOME));
    }

    #[test]
    fn cv_has_one_card_per_timeline_entry() {
        let node = build_page(PageId::Cv);
        assert_eq!(node.sections.len(), TIMELINE.len());
        assert!(node.sections.iter().all(|s| s.style == SectionStyle::Card));
    }

    #[test]
    fn skills_page_keeps_levels_in_range() {
        let node = build_page(PageId::Skills);
        let levels: Vec<Percentage> = node
            .blocks()
            .filter_map(|b| match b {
                Block::Skill { level, .. } => Some(*level),
                _ => None,
            })
            .collect();
        assert_eq!(levels.len(), SKILLS.len());
        assert!(levels.iter().all(|l| l.value() <= 100));
        assert!(levels.contains(&Percentage::new(0)));
    }

    #[test]
    fn projects_list_technologies() {
        let node = build_page(PageId::Projects);
        assert!(node.contains_text("Technologien: Java, JavaFX, UI/UX Design"));
    }

    #[test]
    fn contact_page_has_all_links() {
        let node = build_page(PageId::Contact);
        let links = node
            .blocks()
            .filter(|b| matches!(b, Block::Link { .. }))
            .count();
        assert_eq!(links, CONTACT_LINKS.len());
    }
}
