//! User Settings Domain Model
//!
//! Window and logging preferences for the portfolio application.

use serde::{Deserialize, Serialize};

/// User settings for the application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSettings {
    /// Initial window width in pixels.
    #[serde(default = "default_window_width")]
    pub window_width: u32,

    /// Initial window height in pixels.
    #[serde(default = "default_window_height")]
    pub window_height: u32,

    /// Sidebar width in pixels.
    #[serde(default = "default_sidebar_width")]
    pub sidebar_width: u32,

    /// `tracing` filter directive used when `PORTFOLIO_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,

    /// Whether page swaps fade in.
    #[serde(default = "default_fade_in")]
    pub fade_in: bool,
}

const fn default_window_width() -> u32 {
    1200
}

const fn default_window_height() -> u32 {
    800
}

const fn default_sidebar_width() -> u32 {
    250
}

fn default_log_filter() -> String {
    "info".to_string()
}

const fn default_fade_in() -> bool {
    true
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            window_width: default_window_width(),
            window_height: default_window_height(),
            sidebar_width: default_sidebar_width(),
            log_filter: default_log_filter(),
            fade_in: default_fade_in(),
        }
    }
}
