//! Page identifiers

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{DomainError, DomainResult};

/// The six static views of the portfolio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PageId {
    /// Landing page with the welcome card.
    #[default]
    Home,
    /// Personal data grid.
    Personal,
    /// CV timeline.
    Cv,
    /// Skill bars.
    Skills,
    /// Project cards.
    Projects,
    /// Contact links.
    Contact,
}

impl PageId {
    /// Returns all pages in navigation order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Home,
            Self::Personal,
            Self::Cv,
            Self::Skills,
            Self::Projects,
            Self::Contact,
        ]
    }

    /// Returns the page slug.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Personal => "personal",
            Self::Cv => "cv",
            Self::Skills => "skills",
            Self::Projects => "projects",
            Self::Contact => "contact",
        }
    }

    /// Looks a page up by its navigation position.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::all().get(index).copied()
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PageId {
    type Err = DomainError;

    fn from_str(s: &str) -> DomainResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "home" => Ok(Self::Home),
            "personal" => Ok(Self::Personal),
            "cv" => Ok(Self::Cv),
            "skills" => Ok(Self::Skills),
            "projects" => Ok(Self::Projects),
            "contact" => Ok(Self::Contact),
            other => Err(DomainError::UnknownPage(other.to_string())),
        }
    }
}
