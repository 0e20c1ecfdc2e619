//! Renderable content tree
//!
//! A page builder produces a [`ContentNode`]: an optional heading followed by
//! sections of blocks. The tree carries no toolkit types, so the UI layer is
//! free to map it onto whatever widgets it uses.

use serde::{Deserialize, Serialize};

/// An integer percentage held within `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "i32", into = "u8")]
pub struct Percentage(u8);

impl Percentage {
    /// Zero percent.
    pub const MIN: Self = Self(0);
    /// One hundred percent.
    pub const MAX: Self = Self(100);

    /// Creates a percentage, clamping out-of-range values.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub const fn new(value: i32) -> Self {
        if value < 0 {
            Self::MIN
        } else if value > 100 {
            Self::MAX
        } else {
            Self(value as u8)
        }
    }

    /// Returns the clamped integer value.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Returns the bar fill fraction in `0.0..=1.0`.
    #[must_use]
    pub fn fraction(self) -> f32 {
        f32::from(self.0) / 100.0
    }

    /// Returns the label drawn next to the bar, e.g. `45%`.
    #[must_use]
    pub fn label(self) -> String {
        format!("{}%", self.0)
    }
}

impl From<i32> for Percentage {
    fn from(value: i32) -> Self {
        Self::new(value)
    }
}

impl From<Percentage> for u8 {
    fn from(value: Percentage) -> Self {
        value.0
    }
}

/// Visual role of a text block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextRole {
    /// Large accent headline.
    Hero,
    /// Secondary headline under the hero.
    Subtitle,
    /// Regular paragraph text.
    Body,
    /// Small bold accent label, e.g. a date range.
    Period,
    /// Bold item heading inside a card.
    ItemTitle,
    /// Bold muted line, e.g. an employer.
    Company,
    /// Small muted wrapping text.
    Caption,
    /// Small bold accent text.
    Accent,
}

/// A single renderable element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Block {
    /// Styled text.
    Text {
        /// Text content.
        text: String,
        /// How the text is styled.
        role: TextRole,
    },
    /// A label/value row in a data grid.
    Field {
        /// Left column label, e.g. `Name:`.
        label: String,
        /// Right column value.
        value: String,
    },
    /// A named progress bar.
    Skill {
        /// Skill name.
        name: String,
        /// Fill level.
        level: Percentage,
    },
    /// A button that opens an external target.
    Link {
        /// Button label.
        label: String,
        /// URL or e-mail address handed to the link opener.
        target: String,
    },
}

impl Block {
    /// Creates a text block.
    #[must_use]
    pub fn text(text: impl Into<String>, role: TextRole) -> Self {
        Self::Text {
            text: text.into(),
            role,
        }
    }

    /// Creates a label/value row.
    #[must_use]
    pub fn field(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Field {
            label: label.into(),
            value: value.into(),
        }
    }

    /// Creates a skill bar.
    #[must_use]
    pub fn skill(name: impl Into<String>, level: Percentage) -> Self {
        Self::Skill {
            name: name.into(),
            level,
        }
    }

    /// Creates a link button.
    #[must_use]
    pub fn link(label: impl Into<String>, target: impl Into<String>) -> Self {
        Self::Link {
            label: label.into(),
            target: target.into(),
        }
    }
}

/// How a section is framed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SectionStyle {
    /// Raised rounded panel with a glow.
    #[default]
    Card,
    /// Blocks laid out directly on the page background.
    Plain,
}

/// An ordered group of blocks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Framing of the section.
    pub style: SectionStyle,
    /// Blocks in display order.
    pub blocks: Vec<Block>,
}

impl Section {
    /// Creates a card section.
    #[must_use]
    pub const fn card(blocks: Vec<Block>) -> Self {
        Self {
            style: SectionStyle::Card,
            blocks,
        }
    }

    /// Creates a plain section.
    #[must_use]
    pub const fn plain(blocks: Vec<Block>) -> Self {
        Self {
            style: SectionStyle::Plain,
            blocks,
        }
    }
}

/// The content tree of one page.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContentNode {
    /// Page heading, if any.
    pub title: Option<String>,
    /// Sections in display order.
    pub sections: Vec<Section>,
}

impl ContentNode {
    /// Creates an empty node with the given heading.
    #[must_use]
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            sections: Vec::new(),
        }
    }

    /// Appends a section.
    #[must_use]
    pub fn with_section(mut self, section: Section) -> Self {
        self.sections.push(section);
        self
    }

    /// Iterates over every block of every section.
    pub fn blocks(&self) -> impl Iterator<Item = &Block> {
        self.sections.iter().flat_map(|s| s.blocks.iter())
    }

    /// Returns the number of blocks in the tree.
    #[must_use]
    pub fn block_count(&self) -> usize {
        self.sections.iter().map(|s| s.blocks.len()).sum()
    }

    /// Returns true if the tree renders nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.block_count() == 0
    }

    /// Returns true if any text, label or value in the tree equals `needle`.
    #[must_use]
    pub fn contains_text(&self, needle: &str) -> bool {
        self.title.as_deref() == Some(needle)
            || self.blocks().any(|block| match block {
                Block::Text { text, .. } => text == needle,
                Block::Field { label, value } => label == needle || value == needle,
                Block::Skill { name, .. } => name == needle,
                Block::Link { label, target } => label == needle || target == needle,
            })
    }
}
