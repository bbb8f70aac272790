// src/infrastructure/config.rs
use crate::constants::{CONFIG_DIR_NAME, CONFIG_FILE_NAME};
use crate::domain::HeaderRules;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// TOML configuration for notion2anki
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Default)]
pub struct Config {
    /// Header keywords for column detection
    #[serde(default)]
    pub columns: HeaderRules,
}

impl Config {
    /// Load configuration from TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .context("Failed to parse TOML config")?;

        Ok(config)
    }

    /// Save configuration to TOML file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let toml_string = toml::to_string_pretty(self)
            .context("Failed to serialize config to TOML")?;

        std::fs::write(path.as_ref(), toml_string)
            .context("Failed to write config file")?;

        Ok(())
    }

    /// Create default configuration file at path
    pub fn create_default(path: impl AsRef<Path>) -> Result<Self> {
        let config = Self::default();
        config.save(path)?;
        Ok(config)
    }

    /// Explicit path if given, else the user config file if present, else defaults
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            debug!(?path, "Loading config from explicit path");
            return Self::load(path);
        }

        match default_config_path() {
            Some(path) if path.exists() => {
                debug!(?path, "Loading config from user config directory");
                Self::load(&path)
            }
            _ => {
                debug!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }
}

/// `<platform config dir>/notion2anki/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn given_no_file_when_creating_default_then_creates_with_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("notion2anki.toml");

        let config = Config::create_default(&config_path).unwrap();

        assert_eq!(config.columns.front, "front");
        assert_eq!(config.columns.id, "notion-id");
        assert!(config_path.exists());
    }

    #[test]
    fn given_config_when_saving_then_writes_toml_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("test.toml");

        Config::default().save(&config_path).unwrap();

        let content = fs::read_to_string(&config_path).unwrap();
        assert!(content.contains("[columns]"));
        assert!(content.contains("back = \"back\""));
    }

    #[test]
    fn given_toml_file_when_loading_then_reads_values() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("load_test.toml");
        let toml_content = r#"
[columns]
id = "card id"
front = "Question"
back = "Answer"
tags = "labels"
"#;
        fs::write(&config_path, toml_content).unwrap();

        let config = Config::load(&config_path).unwrap();

        assert_eq!(config.columns.id, "card id");
        assert_eq!(config.columns.front, "Question");
        assert_eq!(config.columns.back, "Answer");
        assert_eq!(config.columns.tags, "labels");
    }

    #[test]
    fn given_partial_toml_when_loading_then_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("partial.toml");
        fs::write(&config_path, "[columns]\nfront = \"Frage\"\n").unwrap();

        let config = Config::load(&config_path).unwrap();

        assert_eq!(config.columns.front, "Frage");
        assert_eq!(config.columns.back, "back");
        assert_eq!(config.columns.tags, "tags");
    }

    #[test]
    fn given_empty_toml_when_loading_then_equals_default() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("empty.toml");
        fs::write(&config_path, "").unwrap();

        let config = Config::load(&config_path).unwrap();

        assert_eq!(config, Config::default());
    }

    #[test]
    fn given_invalid_toml_when_loading_then_returns_error() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("invalid.toml");
        fs::write(&config_path, "[columns\nfront = ").unwrap();

        assert!(Config::load(&config_path).is_err());
    }

    #[test]
    fn given_missing_explicit_path_when_resolving_then_returns_error() {
        let result = Config::resolve(Some(Path::new("/nonexistent/path/config.toml")));

        assert!(result.is_err());
    }

    #[test]
    fn given_explicit_path_when_resolving_then_loads_that_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("explicit.toml");
        fs::write(&config_path, "[columns]\nback = \"Answer\"\n").unwrap();

        let config = Config::resolve(Some(config_path.as_path())).unwrap();

        assert_eq!(config.columns.back, "Answer");
    }
}
