//! Configuration management for Vitrine
//!
//! The active theme identifier is the only durable selection state.
//! It is read once at startup and written after every completed theme
//! change; every failure path degrades to in-memory operation.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::theme::ThemeId;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Stored theme identifier
    ///
    /// Kept as the raw string so an unrecognized value survives the
    /// read and can fall back at validation instead of failing here.
    pub theme: String,
}

impl Default for Config {
    fn default() -> Self {
        Self { theme: ThemeId::default().storage_id().to_string() }
    }
}

impl Config {
    /// Load configuration from a specific path
    ///
    /// A missing file is a normal first run and yields the default.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;
        serde_json::from_str(&contents).with_context(|| "Failed to parse config.json")
    }

    /// Save configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory {:?}", parent))?;
        }

        let contents =
            serde_json::to_string_pretty(self).with_context(|| "Failed to serialize config")?;

        std::fs::write(path, contents)
            .with_context(|| format!("Failed to write config to {:?}", path))?;

        Ok(())
    }

    /// Get the platform path of the config file
    pub fn config_path() -> Result<PathBuf> {
        let proj_dirs =
            ProjectDirs::from("", "", "vitrine").context("Failed to determine config directory")?;
        Ok(proj_dirs.config_dir().join("config.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_stores_theme1() {
        let config = Config::default();
        assert_eq!(config.theme, "theme1");
    }

    #[test]
    fn config_round_trips_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let config = Config { theme: "theme3".to_string() };
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.theme, "theme3");
    }

    #[test]
    fn missing_file_loads_as_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("absent.json")).unwrap();
        assert_eq!(config.theme, "theme1");
    }

    #[test]
    fn config_deserializes_from_json() {
        let config: Config = serde_json::from_str(r#"{"theme":"theme2"}"#).unwrap();
        assert_eq!(config.theme, "theme2");
    }
}
