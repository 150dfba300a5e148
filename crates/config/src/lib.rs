//! Configuration loading and credential persistence for docquery.
//!
//! Loads configuration from `~/.docquery/config.toml` with environment
//! variable overrides, and persists the bearer token at `~/.docquery/token`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub mod token;

pub use token::FileCredentialStore;

/// The root configuration structure.
///
/// Maps directly to `~/.docquery/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Base URL of the backend, no trailing slash.
    #[serde(default = "default_api_base")]
    pub api_base: String,

    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_api_base() -> String {
    "http://localhost:8000".into()
}
fn default_timeout_secs() -> u64 {
    30
}

impl AppConfig {
    /// Load configuration from the default path (~/.docquery/config.toml).
    ///
    /// Environment variable overrides (highest priority):
    /// - `DOCQUERY_API_BASE`
    /// - `DOCQUERY_TIMEOUT_SECS`
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_dir().join("config.toml");
        let mut config = Self::load_from(&config_path)?;

        if let Ok(base) = std::env::var("DOCQUERY_API_BASE") {
            config.api_base = base;
        }

        if let Ok(secs) = std::env::var("DOCQUERY_TIMEOUT_SECS") {
            config.timeout_secs = secs.parse().map_err(|_| {
                ConfigError::ValidationError("DOCQUERY_TIMEOUT_SECS must be an integer".into())
            })?;
        }

        config.api_base = config.api_base.trim_end_matches('/').to_string();
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a specific file path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::info!("No config file found at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        Ok(config)
    }

    /// Get the configuration directory path.
    pub fn config_dir() -> PathBuf {
        dirs_home().join(".docquery")
    }

    /// Path of the persisted bearer token.
    pub fn token_path() -> PathBuf {
        Self::config_dir().join("token")
    }

    /// Validate the configuration.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.api_base.is_empty() {
            return Err(ConfigError::ValidationError(
                "api_base must not be empty".into(),
            ));
        }

        if !self.api_base.starts_with("http://") && !self.api_base.starts_with("https://") {
            return Err(ConfigError::ValidationError(
                "api_base must start with http:// or https://".into(),
            ));
        }

        if self.timeout_secs == 0 {
            return Err(ConfigError::ValidationError(
                "timeout_secs must be > 0".into(),
            ));
        }

        Ok(())
    }

    /// Generate a default config TOML string.
    pub fn default_toml() -> String {
        toml::to_string_pretty(&Self::default()).unwrap_or_default()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Get the user's home directory.
fn dirs_home() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        std::env::var("USERPROFILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("C:\\Users\\Default"))
    }
    #[cfg(not(target_os = "windows"))]
    {
        std::env::var("HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("/tmp"))
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError { path: PathBuf, reason: String },

    #[error("Failed to parse config file at {path}: {reason}")]
    ParseError { path: PathBuf, reason: String },

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_config_is_valid() {
        let config = AppConfig::default();
        assert_eq!(config.api_base, "http://localhost:8000");
        assert_eq!(config.timeout_secs, 30);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load_from(&dir.path().join("nope.toml")).unwrap();
        assert_eq!(config.api_base, "http://localhost:8000");
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(f, "api_base = \"https://docs.example.com\"").unwrap();

        let config = AppConfig::load_from(&path).unwrap();
        assert_eq!(config.api_base, "https://docs.example.com");
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn garbage_file_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "api_base = [not toml").unwrap();

        assert!(matches!(
            AppConfig::load_from(&path),
            Err(ConfigError::ParseError { .. })
        ));
    }

    #[test]
    fn validation_rejects_bad_base_url() {
        let config = AppConfig {
            api_base: "localhost:8000".into(),
            ..AppConfig::default()
        };
        assert!(config.validate().is_err());

        let empty = AppConfig {
            api_base: String::new(),
            ..AppConfig::default()
        };
        assert!(empty.validate().is_err());
    }

    #[test]
    fn default_toml_roundtrips() {
        let rendered = AppConfig::default_toml();
        let parsed: AppConfig = toml::from_str(&rendered).unwrap();
        assert_eq!(parsed.api_base, AppConfig::default().api_base);
    }
}
