//! UI state management.

mod portfolio_state;

pub use portfolio_state::PortfolioState;
