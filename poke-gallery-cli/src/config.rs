//! CLI configuration management

use anyhow::{Context as _, Result};
use directories::ProjectDirs;
use poke_gallery_core::DEFAULT_PAGE_SIZE;
use poke_gallery_sdk::DEFAULT_BASE_URL;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct CliConfig {
    /// Global settings
    #[serde(default)]
    pub settings: Settings,
}

impl CliConfig {
    /// Load configuration from the default location
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from a file, falling back to defaults when absent
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {:?}", path))?;
            let config: CliConfig = toml::from_str(&content)
                .with_context(|| format!("Failed to parse config from {:?}", path))?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to the default location
    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::config_path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory {:?}", parent))?;
        }
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, content)
            .with_context(|| format!("Failed to write config to {:?}", path))?;
        Ok(())
    }

    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("com", "poke-gallery", "poke-gallery")
            .context("Could not determine config directory")?;
        Ok(dirs.config_dir().join("config.toml"))
    }
}

/// Global settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Settings {
    /// Catalog API root
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Entries per "load more"
    #[serde(default = "default_page_size")]
    pub page_size: u32,

    /// Request timeout in seconds; unset means wait indefinitely
    #[serde(default)]
    pub timeout_secs: Option<u64>,

    /// Cap on simultaneous detail requests per page
    #[serde(default)]
    pub max_concurrency: Option<usize>,

    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            page_size: default_page_size(),
            timeout_secs: None,
            max_concurrency: None,
            color: true,
        }
    }
}

fn default_api_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.api_url, "https://pokeapi.co/api/v2");
        assert_eq!(settings.page_size, 20);
        assert!(settings.timeout_secs.is_none());
        assert!(settings.max_concurrency.is_none());
        assert!(settings.color);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config: CliConfig = toml::from_str("[settings]\npage_size = 12\n").unwrap();
        assert_eq!(config.settings.page_size, 12);
        assert_eq!(config.settings.api_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = CliConfig::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = CliConfig::default();
        config.settings.timeout_secs = Some(15);
        config.settings.max_concurrency = Some(4);
        config.save_to(&path).unwrap();

        assert_eq!(CliConfig::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "settings = 3").unwrap();
        assert!(CliConfig::load_from(&path).is_err());
    }
}
