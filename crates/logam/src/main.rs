//! logam CLI - emit structured log records from the command line.
//!
//! The binary builds a [`LogFacade`] the same way a service would (config file,
//! then environment variables, then flags) and writes records to stderr. It is
//! handy for checking what a given configuration produces and for shell
//! scripts that want to log in the same format as the services around them.
//!
//! # Usage
//!
//! ```bash
//! # One JSON record at warn level
//! logam --log-level warn emit warn low disk --field mount=/data --field pct=93
//!
//! # Human-readable output in a development layout
//! LOG_FORMAT=console ENVIRONMENT=development logam demo
//!
//! # View configuration
//! logam config show
//! ```

use clap::{Parser, Subcommand};
use logam_core::{Config, LogFacade};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;

/// logam - structured logging from the command line.
#[derive(Parser, Debug)]
#[command(name = "logam")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(flatten)]
    settings: cli::Settings,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Emit one record at the given level
    Emit(cli::emit::EmitArgs),

    /// Emit one record through every logging call (except fatal)
    Demo,

    /// View and manage configuration
    Config(cli::config::ConfigArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logging isn't initialized yet, so use eprintln for config warnings.
    let config = match cli.settings.load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "Warning: Failed to load config: {e}\n  \
                 Using default configuration. Check your config file with `logam config path`."
            );
            Config::default()
        }
    };
    let config = cli.settings.apply(config);

    // RUST_LOG, when set, narrows which tracing events reach the facade; the
    // facade's own threshold still applies on top.
    let log = LogFacade::new(config);
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().ok())
        .with(log.layer())
        .init();

    tracing::debug!("logam v{}", logam_core::VERSION);

    match cli.command {
        Commands::Emit(args) => cli::emit::execute(&log, args),
        Commands::Demo => cli::demo::execute(&log),
        Commands::Config(args) => cli::config::execute(args, &cli.settings, log.config()),
    }
}
