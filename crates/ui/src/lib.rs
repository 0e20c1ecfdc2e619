//! Portfolio UI - User interface layer
//!
//! This crate provides the Slint-based user interface for the portfolio.

// Allow lints that trigger on Slint-generated code which we cannot control
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::needless_pass_by_value)]

mod app_window;
pub mod bridge;
pub mod state;

pub use app_window::AppWindow;
pub use bridge::{BlockData, BlockKindData, NavItemData, PageData, SectionData, UiCommand, UiUpdate};
pub use state::PortfolioState;

// Include the generated Slint code
slint::include_modules!();
