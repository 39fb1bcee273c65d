//! The `logam config` command for configuration management.

use clap::{Args, Subcommand};
use logam_core::Config;

use super::Settings;

/// Arguments for the `config` command.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Subcommands for configuration management.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Display the effective configuration (file plus overrides)
    Show,

    /// Show config file path
    Path,

    /// Initialize a new config file with defaults
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },
}

/// Execute the config command.
pub fn execute(args: ConfigArgs, settings: &Settings, effective: &Config) -> anyhow::Result<()> {
    match args.command {
        ConfigCommand::Show => {
            let toml = effective.to_toml()?;
            println!("{}", toml);
            println!(
                "# resolved: level={} encoding={:?} layout={:?}",
                effective.level(),
                effective.encoding(),
                effective.field_layout()
            );
        }

        ConfigCommand::Path => {
            println!("{}", settings.config_path().display());
        }

        ConfigCommand::Init { force } => {
            let path = settings.config_path();

            if path.exists() && !force {
                anyhow::bail!(
                    "Config file already exists at: {}\nUse --force to overwrite.",
                    path.display()
                );
            }

            Config::default().write_to(&path)?;

            tracing::info!(path = %path.display(), "Config file created");
            println!("Configuration initialized at: {}", path.display());
        }
    }

    Ok(())
}
