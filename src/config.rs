//! Configuration persistence.
//!
//! Mirrors the theme preference into a TOML file under the config directory
//! so the right palette is up before any progress is loaded. The progress
//! file stays the source of truth for the persisted `theme` key; both are
//! written on every toggle.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::models::ThemeChoice;

/// Application configuration that persists between sessions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// The currently selected theme.
    #[serde(default)]
    pub theme: ThemeChoice,
}

impl Config {
    /// Get the default config file path.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("fliplingo")
            .join("config.toml")
    }

    /// Load config from disk, returning default if file doesn't exist.
    pub fn load() -> Result<Self> {
        let path = Self::default_path();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        let config: Config =
            toml::from_str(&content).with_context(|| "Failed to parse config file")?;

        Ok(config)
    }

    /// Save config to disk.
    pub fn save(&self) -> Result<()> {
        let path = Self::default_path();

        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
        }

        let content = toml::to_string_pretty(self).with_context(|| "Failed to serialize config")?;

        fs::write(&path, content)
            .with_context(|| format!("Failed to write config file: {:?}", path))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_round_trips_through_toml() {
        let config = Config {
            theme: ThemeChoice::Dark,
        };
        let toml_str = toml::to_string_pretty(&config).unwrap();
        assert!(toml_str.contains("theme = \"dark\""));

        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.theme, ThemeChoice::Dark);
    }

    #[test]
    fn missing_theme_defaults_to_light() {
        let parsed: Config = toml::from_str("").unwrap();
        assert_eq!(parsed.theme, ThemeChoice::Light);
    }
}
