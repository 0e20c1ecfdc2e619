//! Tracing subscriber setup.

use portfolio_domain::UserSettings;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable overriding the configured log filter.
pub const LOG_ENV: &str = "PORTFOLIO_LOG";

/// Picks the filter directive: the environment wins over the settings file.
pub fn filter_directive(env: Option<String>, settings: &UserSettings) -> String {
    env.filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| settings.log_filter.clone())
}

/// Installs the global subscriber.
pub fn init(settings: &UserSettings) {
    let directive = filter_directive(std::env::var(LOG_ENV).ok(), settings);
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn env_overrides_settings() {
        let settings = UserSettings::default();
        assert_eq!(
            filter_directive(Some("portfolio_ui=debug".to_string()), &settings),
            "portfolio_ui=debug"
        );
    }

    #[test]
    fn blank_env_falls_back_to_settings() {
        let settings = UserSettings {
            log_filter: "warn".to_string(),
            ..UserSettings::default()
        };
        assert_eq!(filter_directive(Some("  ".to_string()), &settings), "warn");
        assert_eq!(filter_directive(None, &settings), "warn");
    }
}
