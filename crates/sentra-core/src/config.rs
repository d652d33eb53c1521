//! Configuration management for Sentra.
//!
//! Provides TOML-based configuration with XDG-compliant paths and
//! environment variable overrides.

use crate::error::{ConfigError, ConfigResult};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Main application configuration.
///
/// This is loaded from `~/.config/sentra/config.toml` (or platform
/// equivalent). If the file doesn't exist, default values are used.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Remote inspection service settings
    pub service: ServiceConfig,
    /// Inspection request defaults
    pub inspection: InspectionSettings,
}

impl AppConfig {
    /// Load configuration from disk, falling back to defaults if not found.
    ///
    /// # Errors
    /// Returns error if:
    /// - Config directory cannot be determined
    /// - File exists but cannot be read
    /// - File contents are not valid TOML
    pub fn load() -> ConfigResult<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            tracing::debug!("Loading config from {}", config_path.display());
            let contents = fs::read_to_string(&config_path)?;
            let config = toml::from_str(&contents)?;
            Ok(config)
        } else {
            tracing::debug!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Load configuration with environment variable overrides.
    ///
    /// Supports the following environment variables:
    /// - `SENTRA_ENDPOINT`: Override the service endpoint URL
    /// - `SENTRA_TIMEOUT_SECS`: Override the request timeout
    /// - `SENTRA_INCLUDE_QUOTE`: Override quote inclusion (true/false)
    pub fn load_with_env() -> ConfigResult<Self> {
        let mut config = Self::load()?;

        // Override from environment
        if let Ok(endpoint) = std::env::var("SENTRA_ENDPOINT") {
            tracing::debug!("Override service.endpoint from env: {}", endpoint);
            config.service.endpoint = endpoint;
        }

        if let Ok(val) = std::env::var("SENTRA_TIMEOUT_SECS") {
            if let Ok(secs) = val.parse() {
                config.service.timeout_secs = secs;
                tracing::debug!("Override service.timeout_secs from env: {}", secs);
            }
        }

        if let Ok(val) = std::env::var("SENTRA_INCLUDE_QUOTE") {
            if let Ok(include) = val.parse() {
                config.inspection.include_quote = include;
                tracing::debug!("Override inspection.include_quote from env: {}", include);
            }
        }

        Ok(config)
    }

    /// Save configuration to disk.
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> ConfigResult<()> {
        let config_path = Self::config_path()?;
        let config_dir = config_path
            .parent()
            .ok_or_else(|| ConfigError::InvalidValue {
                field: "config_path".to_string(),
                reason: "no parent directory".to_string(),
            })?;

        fs::create_dir_all(config_dir)?;
        tracing::debug!("Saving config to {}", config_path.display());

        let contents = toml::to_string_pretty(self)?;
        fs::write(config_path, contents)?;
        Ok(())
    }

    /// Get the path to the configuration file.
    ///
    /// Uses XDG base directories: `~/.config/sentra/config.toml`
    pub fn config_path() -> ConfigResult<PathBuf> {
        let dirs = ProjectDirs::from("com", "sentra", "sentra").ok_or(ConfigError::NoConfigDir)?;
        Ok(dirs.config_dir().join("config.toml"))
    }
}

/// Remote inspection service settings.
///
/// The auth token itself is never stored in the config file; the config names
/// the environment variable it should be read from.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Base URL of the content-inspection endpoint
    pub endpoint: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Name of the environment variable holding the bearer token
    pub auth_token_env: String,
}

impl ServiceConfig {
    /// Read the bearer token from the configured environment variable.
    #[must_use]
    pub fn auth_token(&self) -> Option<String> {
        std::env::var(&self.auth_token_env).ok()
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://dlp.googleapis.com/v2".to_string(),
            timeout_secs: 60,
            auth_token_env: "SENTRA_AUTH_TOKEN".to_string(),
        }
    }
}

/// Defaults applied to inspection requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InspectionSettings {
    /// Info type names to search for
    pub info_types: Vec<String>,
    /// Whether matched substrings are included in findings
    pub include_quote: bool,
    /// Drop findings below this likelihood (service-side filter)
    pub min_likelihood: Option<String>,
    /// Cap on findings returned per request (service-side limit)
    pub max_findings: Option<u32>,
}

impl Default for InspectionSettings {
    fn default() -> Self {
        Self {
            info_types: vec![
                "PHONE_NUMBER".to_string(),
                "EMAIL_ADDRESS".to_string(),
                "CREDIT_CARD_NUMBER".to_string(),
            ],
            include_quote: true,
            min_likelihood: None,
            max_findings: None,
        }
    }
}
