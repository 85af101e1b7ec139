//! Application Configuration
//!
//! TOML configuration loaded from the per-user config directory. A missing
//! or empty file falls back to defaults; a malformed file is an error that
//! callers may log and replace with defaults. Configuration must never
//! prevent the greeting window from opening.

use crate::constants::DEFAULT_API_BASE_URL;
use crate::error::{Error, Result};
use directories::ProjectDirs;
use serde::Deserialize;
use std::path::PathBuf;
use tracing::{info, warn};

/// API endpoint configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the API server
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// Top-level application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AppConfig {
    /// API endpoint settings
    #[serde(default)]
    pub api: ApiConfig,
}

fn config_path() -> Result<PathBuf> {
    let dirs = ProjectDirs::from("", "", "greet-gui").ok_or_else(|| Error::Invalid {
        message: "Could not determine config directory".to_string(),
    })?;
    let dir = dirs.config_dir();
    if !dir.exists() {
        std::fs::create_dir_all(dir)?;
    }
    Ok(dir.join("greet-gui.toml"))
}

impl AppConfig {
    /// Parse configuration from a TOML string (empty input yields defaults)
    pub fn from_toml(value: &str) -> Result<Self> {
        if value.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(toml::from_str(value)?)
    }

    /// Load configuration from the config file
    pub fn try_load() -> Result<Self> {
        let path = config_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        info!(path = ?path, "Loading config file");
        let value = std::fs::read_to_string(&path)?;
        Self::from_toml(&value)
    }

    /// Load configuration, falling back to defaults on any error
    pub fn load_or_default() -> Self {
        match Self::try_load() {
            Ok(config) => config,
            Err(e) => {
                warn!(error = %e, "Failed to load config, using defaults");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_yields_defaults() {
        let config = AppConfig::from_toml("").expect("parse");
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.api.base_url, DEFAULT_API_BASE_URL);
    }

    #[test]
    fn missing_api_section_yields_default_base_url() {
        let config = AppConfig::from_toml("# nothing configured\n").expect("parse");
        assert_eq!(config.api.base_url, DEFAULT_API_BASE_URL);
    }

    #[test]
    fn base_url_override_is_honored() {
        let config = AppConfig::from_toml("[api]\nbase_url = \"http://10.0.0.5:8080\"\n")
            .expect("parse");
        assert_eq!(config.api.base_url, "http://10.0.0.5:8080");
    }

    #[test]
    fn malformed_input_is_an_error() {
        let result = AppConfig::from_toml("[api\nbase_url = ");
        assert!(matches!(result, Err(Error::TomlDe { .. })));
    }
}
