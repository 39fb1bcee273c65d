//! Command handlers and the settings shared by all of them.

pub mod config;
pub mod demo;
pub mod emit;

use clap::Args;
use logam_core::{Config, ConfigError};
use std::path::PathBuf;

/// Logger settings accepted on every command. Flags and environment
/// variables override the config file.
#[derive(Args, Debug, Default)]
pub struct Settings {
    /// Config file (defaults to the platform config directory)
    #[arg(long, global = true, env = "LOGAM_CONFIG")]
    pub config: Option<PathBuf>,

    /// Minimum level: debug, info, warn, error, dpanic, panic, fatal
    #[arg(long, global = true, env = "LOG_LEVEL")]
    pub log_level: Option<String>,

    /// "console" for human-readable output, anything else for JSON
    #[arg(long, global = true, env = "LOG_FORMAT")]
    pub log_format: Option<String>,

    /// development, production, staging or workstation
    #[arg(long, global = true, env = "ENVIRONMENT")]
    pub environment: Option<String>,

    /// Logger name written to NAME
    #[arg(long, global = true, env = "LOG_NAME")]
    pub name: Option<String>,
}

impl Settings {
    /// The config file in effect.
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(Config::default_path)
    }

    /// Load the config file. A missing default file means defaults; a
    /// missing explicit file is an error.
    pub fn load(&self) -> Result<Config, ConfigError> {
        match &self.config {
            Some(path) => Config::load_from(path),
            None => Config::load(),
        }
    }

    /// Apply flag and environment overrides on top of `config`.
    pub fn apply(&self, mut config: Config) -> Config {
        if let Some(level) = &self.log_level {
            config.log_level = level.clone();
        }
        if let Some(format) = &self.log_format {
            config.log_format = format.clone();
        }
        if let Some(environment) = &self.environment {
            config.environment = environment.clone();
        }
        if let Some(name) = &self.name {
            config.name = name.clone();
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_apply_overrides_only_given_values() {
        let settings = Settings {
            log_level: Some("error".to_string()),
            environment: Some("workstation".to_string()),
            ..Default::default()
        };
        let config = settings.apply(Config::new("debug", "console", "production"));
        assert_eq!(config.log_level, "error");
        assert_eq!(config.log_format, "console");
        assert_eq!(config.environment, "workstation");
    }

    #[test]
    fn test_load_explicit_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "log_level = \"info\"").unwrap();
        let settings = Settings {
            config: Some(file.path().to_path_buf()),
            ..Default::default()
        };
        assert_eq!(settings.load().unwrap().log_level, "info");
        assert_eq!(settings.config_path(), file.path());
    }

    #[test]
    fn test_load_missing_explicit_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings {
            config: Some(dir.path().join("missing.toml")),
            ..Default::default()
        };
        assert!(settings.load().is_err());
    }
}
