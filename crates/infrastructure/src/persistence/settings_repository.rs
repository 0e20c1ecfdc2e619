//! User settings persistence.
//!
//! Reads user settings from the platform-specific config directory:
//! - Linux: ~/.config/portfolio/settings.json
//! - macOS: ~/Library/Application Support/portfolio/settings.json
//! - Windows: %APPDATA%/portfolio/settings.json

use std::fs;
use std::path::{Path, PathBuf};

use portfolio_domain::UserSettings;

use crate::serialization::{SerializationError, from_json_bytes};

/// Error type for settings operations.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// IO error during file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] SerializationError),
}

/// Repository for user settings persistence.
#[derive(Debug, Clone)]
pub struct SettingsRepository {
    path: Option<PathBuf>,
}

impl SettingsRepository {
    /// Creates a repository backed by the platform config directory.
    #[must_use]
    pub fn new() -> Self {
        Self {
            path: Self::default_path(),
        }
    }

    /// Creates a repository backed by an explicit file.
    #[must_use]
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("portfolio").join("settings.json"))
    }

    /// Returns the path where settings are stored, if available.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Loads user settings from disk.
    ///
    /// Returns default settings if there is no config directory or the file
    /// doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(&self) -> Result<UserSettings, SettingsError> {
        let Some(path) = self.path() else {
            return Ok(UserSettings::default());
        };

        if !path.exists() {
            tracing::debug!(path = %path.display(), "no settings file, using defaults");
            return Ok(UserSettings::default());
        }

        let content = fs::read(path)?;
        let settings = from_json_bytes(&content)?;
        tracing::debug!(path = %path.display(), "loaded settings");
        Ok(settings)
    }
}

impl Default for SettingsRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn default_path_is_under_portfolio() {
        if let Some(p) = SettingsRepository::new().path() {
            assert!(p.ends_with("portfolio/settings.json"));
        }
    }

    #[test]
    fn load_returns_default_when_no_file() {
        let dir = TempDir::new().unwrap();
        let repo = SettingsRepository::at(dir.path().join("settings.json"));
        assert_eq!(repo.load().unwrap(), UserSettings::default());
    }

    #[test]
    fn load_reads_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, br#"{ "window_width": 1440, "log_filter": "debug" }"#).unwrap();

        let settings = SettingsRepository::at(&path).load().unwrap();

        assert_eq!(
            settings,
            UserSettings {
                window_width: 1440,
                log_filter: "debug".to_string(),
                ..UserSettings::default()
            }
        );
    }

    #[test]
    fn corrupt_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, b"{ broken").unwrap();
        let repo = SettingsRepository::at(&path);

        assert!(matches!(
            repo.load(),
            Err(SettingsError::Serialization(_))
        ));
    }
}
