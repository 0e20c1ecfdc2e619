//! UI Bridge Module
//!
//! Defines the commands the Slint callbacks produce and the updates the
//! window applies, plus toolkit-free view data converted from the domain
//! content tree.

use portfolio_application::NavItem;
use portfolio_domain::{Block, ContentNode, PageId, Section, SectionStyle, TextRole};

/// Commands sent from UI callbacks to the portfolio state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiCommand {
    /// User clicked a navigation button.
    SelectPage(PageId),

    /// User clicked a contact link button.
    OpenLink {
        /// URL or e-mail address carried by the button.
        target: String,
    },

    /// User clicked the PDF export button.
    ExportPdf,
}

/// Updates applied to the window after a command.
#[derive(Debug, Clone, PartialEq)]
pub enum UiUpdate {
    /// Restyle the navigation buttons.
    Navigation(Vec<NavItemData>),

    /// Replace the mounted page.
    Content(PageData),
}

/// A navigation button as the sidebar draws it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItemData {
    /// Button caption.
    pub label: String,
    /// Whether this button's page is mounted.
    pub active: bool,
}

impl From<NavItem> for NavItemData {
    fn from(item: NavItem) -> Self {
        Self {
            label: item.label.to_string(),
            active: item.active,
        }
    }
}

/// Kind of a rendered block. Mirrors `BlockKind` in `types.slint`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKindData {
    /// Large welcome heading.
    Hero,
    /// Tagline under a heading.
    Subtitle,
    /// Plain paragraph.
    Body,
    /// Date range of a CV entry.
    Period,
    /// Job or project name.
    ItemTitle,
    /// Employer line.
    Company,
    /// Muted small print.
    Caption,
    /// Highlighted note.
    Accent,
    /// Label/value row.
    Field,
    /// Skill with a progress bar.
    Skill,
    /// Clickable contact button.
    Link,
}

impl From<TextRole> for BlockKindData {
    fn from(role: TextRole) -> Self {
        match role {
            TextRole::Hero => Self::Hero,
            TextRole::Subtitle => Self::Subtitle,
            TextRole::Body => Self::Body,
            TextRole::Period => Self::Period,
            TextRole::ItemTitle => Self::ItemTitle,
            TextRole::Company => Self::Company,
            TextRole::Caption => Self::Caption,
            TextRole::Accent => Self::Accent,
        }
    }
}

/// A flattened block.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockData {
    /// How the block is drawn.
    pub kind: BlockKindData,
    /// Main text, label or skill name.
    pub text: String,
    /// Field value, skill percentage label or link target.
    pub detail: String,
    /// Skill bar fill fraction; zero for other kinds.
    pub progress: f32,
}

impl From<&Block> for BlockData {
    fn from(block: &Block) -> Self {
        match block {
            Block::Text { text, role } => Self {
                kind: (*role).into(),
                text: text.clone(),
                detail: String::new(),
                progress: 0.0,
            },
            Block::Field { label, value } => Self {
                kind: BlockKindData::Field,
                text: label.clone(),
                detail: value.clone(),
                progress: 0.0,
            },
            Block::Skill { name, level } => Self {
                kind: BlockKindData::Skill,
                text: name.clone(),
                detail: level.label(),
                progress: level.fraction(),
            },
            Block::Link { label, target } => Self {
                kind: BlockKindData::Link,
                text: label.clone(),
                detail: target.clone(),
                progress: 0.0,
            },
        }
    }
}

/// A group of blocks, optionally drawn as a card.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionData {
    /// Whether the section is framed as a card.
    pub card: bool,
    /// Blocks in display order.
    pub blocks: Vec<BlockData>,
}

impl From<&Section> for SectionData {
    fn from(section: &Section) -> Self {
        Self {
            card: section.style == SectionStyle::Card,
            blocks: section.blocks.iter().map(BlockData::from).collect(),
        }
    }
}

/// A page ready to be mounted.
#[derive(Debug, Clone, PartialEq)]
pub struct PageData {
    /// Page this view was built for.
    pub page: PageId,
    /// Heading above the sections, if any.
    pub title: Option<String>,
    /// Sections in display order.
    pub sections: Vec<SectionData>,
}

impl PageData {
    /// Converts the content tree mounted for `page`.
    #[must_use]
    pub fn new(page: PageId, content: &ContentNode) -> Self {
        Self {
            page,
            title: content.title.clone(),
            sections: content.sections.iter().map(SectionData::from).collect(),
        }
    }
}
