//! Configuration for the logging facade.
//!
//! Configuration is loaded from the platform config directory
//! (`config.toml`), falling back to defaults when the file doesn't exist.

mod types;

pub use types::*;

use crate::encoder::{Encoding, FieldLayout};
use crate::error::ConfigError;
use crate::level::Level;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Logger configuration. All values are plain strings so they can come
/// straight from a config file or the environment; resolution happens in
/// the accessor methods.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Minimum level name (case-insensitive). Unknown names mean debug.
    pub log_level: String,

    /// "console" for human-readable output, anything else for JSON
    pub log_format: String,

    /// Deployment environment: development, production, staging, workstation
    pub environment: String,

    /// Logger name written to the NAME field
    pub name: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: Level::Debug.as_str().to_string(),
            log_format: "json".to_string(),
            environment: ENV_PRODUCTION.to_string(),
            name: String::new(),
        }
    }
}

impl Config {
    /// Create a configuration from the three core settings.
    pub fn new(
        log_level: impl Into<String>,
        log_format: impl Into<String>,
        environment: impl Into<String>,
    ) -> Self {
        Self {
            log_level: log_level.into(),
            log_format: log_format.into(),
            environment: environment.into(),
            name: String::new(),
        }
    }

    /// Load configuration from the default location.
    ///
    /// Returns default configuration if the file doesn't exist.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        tracing::debug!(path = %path.display(), "Loaded logging config");
        Ok(config)
    }

    /// Get the default config file path.
    ///
    /// Uses platform-appropriate directories:
    /// - macOS: ~/Library/Application Support/com.logam.logam/config.toml
    /// - Linux: ~/.config/logam/config.toml
    /// - Windows: C:\Users\<User>\AppData\Roaming\logam\config\config.toml
    ///
    /// Falls back to ~/.logam/config.toml if directory detection fails.
    pub fn default_path() -> PathBuf {
        directories::ProjectDirs::from("com", "logam", "logam")
            .map(|dirs| dirs.config_dir().to_path_buf().join("config.toml"))
            .unwrap_or_else(|| {
                let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
                PathBuf::from(home).join(".logam").join("config.toml")
            })
    }

    /// Resolved minimum level.
    pub fn level(&self) -> Level {
        Level::resolve(&self.log_level)
    }

    /// Resolved record encoding.
    pub fn encoding(&self) -> Encoding {
        Encoding::from_format(&self.log_format)
    }

    /// Parsed deployment environment.
    pub fn environment(&self) -> Environment {
        Environment::parse(&self.environment)
    }

    /// Field-layout preset implied by the environment.
    pub fn field_layout(&self) -> FieldLayout {
        self.environment().field_layout()
    }

    /// Serialize the config to a pretty TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Write the config as TOML, creating parent directories as needed.
    pub fn write_to(&self, path: &Path) -> crate::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.to_toml()?)?;
        Ok(())
    }
}
