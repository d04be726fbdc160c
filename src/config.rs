//! Service configuration loaded from TOML.
//!
//! ```toml
//! [server]
//! host = "127.0.0.1"
//! port = 8787
//!
//! [scrape]
//! base_url = "https://patents.google.com/patent"
//! kind_suffix = "B2"
//! timeout_seconds = 20
//! ```
//!
//! Every field is optional; missing ones take their defaults.

use crate::error::{Result, ServiceError};
use patent_scrape::ScrapeConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "PATENT_CLAIMS_CONFIG";

/// Top-level service configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// HTTP listener settings.
    pub server: ServerConfig,
    /// Patent page retrieval settings.
    pub scrape: ScrapeConfig,
}

/// HTTP listener settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Interface to bind.
    pub host: String,
    /// Port to bind. `0` picks a free port.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 8787,
        }
    }
}

impl ServiceConfig {
    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| ServiceError::Config(e.to_string()))
    }

    /// Save configuration to a TOML file, creating parent directories as needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written or the config cannot be serialized.
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| ServiceError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Returns the default config file path: `<config dir>/patent-claims/config.toml`.
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(std::env::temp_dir)
            .join("patent-claims")
            .join("config.toml")
    }

    /// Resolve and load the configuration for the server binary.
    ///
    /// Uses the file named by [`CONFIG_ENV_VAR`] when set, otherwise the
    /// default path when it exists, otherwise built-in defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the chosen file cannot be loaded or is invalid.
    pub fn load() -> Result<Self> {
        let explicit = std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from);
        Self::load_from(explicit.as_deref(), &Self::default_config_path())
    }

    /// Load from `explicit` if given, else from `fallback` if it exists,
    /// else defaults. The result is validated.
    ///
    /// # Errors
    ///
    /// Returns an error if the chosen file cannot be loaded or is invalid.
    pub fn load_from(explicit: Option<&Path>, fallback: &Path) -> Result<Self> {
        let config = match explicit {
            Some(path) => Self::from_file(path)?,
            None if fallback.exists() => Self::from_file(fallback)?,
            None => Self::default(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Validates this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Config`] if the host is empty or the scrape
    /// settings are invalid.
    pub fn validate(&self) -> Result<()> {
        if self.server.host.trim().is_empty() {
            return Err(ServiceError::Config("server.host must not be empty".into()));
        }
        self.scrape
            .validate()
            .map_err(|e| ServiceError::Config(e.to_string()))
    }
}
