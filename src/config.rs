//! Configuration Management
//!
//! Handles persistent configuration storage for gcelink.

use crate::gcp::Version;
use crate::output::OutputFormat;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// User configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    /// API version used when rendering links without an explicit `--api`
    #[serde(default)]
    pub default_api: Version,
    /// Output format used without an explicit `--output`
    #[serde(default)]
    pub output: OutputFormat,
}

impl Config {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("gcelink").join("config.json"))
    }

    /// Load configuration from disk
    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Load configuration from a specific file, falling back to defaults
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
                tracing::warn!("Ignoring invalid config {:?}: {}", path, e);
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    /// Save configuration to disk
    pub fn save(&self) -> Result<()> {
        let Some(path) = Self::config_path() else {
            return Ok(());
        };
        self.save_to(&path)
    }

    /// Save configuration to a specific file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Create parent directory
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;

        Ok(())
    }

    /// Get effective API version (CLI > config > v1)
    pub fn effective_api(&self, cli: Option<Version>) -> Version {
        cli.unwrap_or(self.default_api)
    }

    /// Get effective output format (CLI > config > text)
    pub fn effective_output(&self, cli: Option<OutputFormat>) -> OutputFormat {
        cli.unwrap_or(self.output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.json"));
        assert_eq!(config, Config::default());
        assert_eq!(config.default_api, Version::Ga);
        assert_eq!(config.output, OutputFormat::Text);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let config = Config {
            default_api: Version::Beta,
            output: OutputFormat::Yaml,
        };
        config.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path), config);
    }

    #[test]
    fn test_partial_and_invalid_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        std::fs::write(&path, r#"{"default_api": "alpha"}"#).unwrap();
        let config = Config::load_from(&path);
        assert_eq!(config.default_api, Version::Alpha);
        assert_eq!(config.output, OutputFormat::Text);

        std::fs::write(&path, "not json").unwrap();
        assert_eq!(Config::load_from(&path), Config::default());
    }

    #[test]
    fn test_cli_overrides_config() {
        let config = Config {
            default_api: Version::Beta,
            output: OutputFormat::Json,
        };
        assert_eq!(config.effective_api(None), Version::Beta);
        assert_eq!(config.effective_api(Some(Version::Alpha)), Version::Alpha);
        assert_eq!(config.effective_output(Some(OutputFormat::Yaml)), OutputFormat::Yaml);
        assert_eq!(config.effective_output(None), OutputFormat::Json);
    }
}
