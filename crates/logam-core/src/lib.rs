//! logam core - a structured logging facade.
//!
//! A [`LogFacade`] is built once from a [`Config`] (level name, format name,
//! environment name) and then exposes the [`Logger`] calls: leveled,
//! formatted (`*f`) and keyed (`*w`) variants plus `print`/`printf`/`tracef`
//! aliases. Records are filtered, encoded and written by a shared [`Core`].
//!
//! # Architecture
//!
//! ```text
//! Config → LogFacade::new → Core (encoder + threshold + sink) → stderr
//!                        ↘ FacadeLayer (tracing events) ↗
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use logam_core::{Config, LogFacade, Logger};
//! use serde_json::json;
//!
//! let log = LogFacade::new(Config::new("info", "json", "production"));
//! log.info(&[&"service started"]);
//! log.warnf(format_args!("disk at {}%", 93));
//! log.errorw("upload failed", &["bucket".into(), "media".into(), "attempt".into(), json!(3)]);
//! ```

// Module declarations
pub mod backend;
pub mod config;
pub mod encoder;
pub mod entry;
pub mod error;
pub mod facade;
pub mod fields;
pub mod layer;
pub mod level;
pub mod logger;
pub mod sink;

// Re-exports for convenient access
pub use backend::Core;
pub use config::{Config, Environment};
pub use encoder::{ConsoleEncoder, Encoder, EncoderConfig, Encoding, FieldLayout, JsonEncoder};
pub use entry::{Entry, Field};
pub use error::{ConfigError, LogamError, Result};
pub use facade::{FatalHook, LogFacade};
pub use layer::FacadeLayer;
pub use level::{AtomicLevel, Level};
pub use logger::{Logger, Payload};
pub use sink::Sink;

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build a logger writing to standard error.
///
/// Callers that only need the logging calls can hold the result as
/// `impl Logger` and stay independent of the concrete backend.
pub fn new_logger(config: Config) -> impl Logger {
    LogFacade::new(config)
}
