//! Portfolio - Main Entry Point
//!
//! Loads settings, initializes logging and runs the portfolio window
//! until it is closed.

mod logging;

use portfolio_infrastructure::SettingsRepository;
use portfolio_ui::AppWindow;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let repo = SettingsRepository::new();
    let loaded = repo.load();
    let settings = loaded.as_ref().cloned().unwrap_or_default();

    logging::init(&settings);
    if let Err(e) = &loaded {
        tracing::warn!(error = %e, "failed to load settings, using defaults");
    }

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        settings = ?repo.path(),
        "starting portfolio"
    );

    let app = AppWindow::new(&settings)?;

    // Blocks until the window closes
    app.run()?;

    tracing::info!("window closed");
    Ok(())
}
