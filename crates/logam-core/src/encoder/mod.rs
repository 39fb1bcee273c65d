//! Record encoders.
//!
//! An [`Encoder`] renders one [`Entry`] plus its fields into bytes. Two are
//! provided: [`JsonEncoder`] (one flat JSON object per line) and
//! [`ConsoleEncoder`] (tab-separated text for humans). Both take their key
//! names and time format from an [`EncoderConfig`].

mod console;
mod json;

pub use console::ConsoleEncoder;
pub use json::JsonEncoder;

use chrono::{DateTime, Local, SecondsFormat};
use std::io;

use crate::entry::{Entry, Field};

/// Renders records into a byte buffer.
pub trait Encoder: Send + Sync {
    /// Append one encoded record, including its trailing newline, to `buf`.
    fn encode(&self, entry: &Entry, fields: &[Field], buf: &mut Vec<u8>) -> io::Result<()>;
}

/// Record encoding selected by the configured format name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    /// Human-readable, tab-separated text
    Console,
    /// One JSON object per line
    Json,
}

impl Encoding {
    /// Exactly "console" selects [`Encoding::Console`]; every other value,
    /// including the empty string, selects [`Encoding::Json`].
    pub fn from_format(format: &str) -> Self {
        if format == crate::config::FORMAT_CONSOLE {
            Self::Console
        } else {
            Self::Json
        }
    }

    /// Build the encoder for this encoding.
    pub fn build(self, config: EncoderConfig) -> Box<dyn Encoder> {
        match self {
            Self::Console => Box::new(ConsoleEncoder::new(config)),
            Self::Json => Box::new(JsonEncoder::new(config)),
        }
    }
}

/// Field-layout preset, chosen from the deployment environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldLayout {
    Development,
    Production,
}

/// How the TIME field is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeFormat {
    /// `2024-05-01T12:00:00+02:00`
    Rfc3339,
    /// `2024-05-01T12:00:00.123+0200`
    Iso8601Millis,
    /// Floating-point seconds since the Unix epoch
    EpochSeconds,
}

impl TimeFormat {
    /// Render a timestamp. Epoch seconds come back as a JSON number.
    pub fn render(self, time: &DateTime<Local>) -> serde_json::Value {
        match self {
            Self::Rfc3339 => time.to_rfc3339_opts(SecondsFormat::Secs, true).into(),
            Self::Iso8601Millis => time.format("%Y-%m-%dT%H:%M:%S%.3f%z").to_string().into(),
            Self::EpochSeconds => {
                let secs = time.timestamp() as f64
                    + f64::from(time.timestamp_subsec_nanos()) / 1_000_000_000.0;
                serde_json::Number::from_f64(secs)
                    .map(serde_json::Value::Number)
                    .unwrap_or(serde_json::Value::Null)
            }
        }
    }
}

/// Key names and rendering options shared by both encoders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncoderConfig {
    pub layout: FieldLayout,
    pub level_key: String,
    pub time_key: String,
    pub name_key: String,
    pub caller_key: String,
    pub message_key: String,
    pub stacktrace_key: String,
    pub time_format: TimeFormat,
    /// Colorize the level in console output
    pub color_level: bool,
}

impl EncoderConfig {
    /// Preset for developer-facing environments: short keys, millisecond
    /// ISO8601 timestamps and colored levels.
    pub fn development() -> Self {
        Self {
            layout: FieldLayout::Development,
            level_key: "L".to_string(),
            time_key: "T".to_string(),
            name_key: "N".to_string(),
            caller_key: "C".to_string(),
            message_key: "M".to_string(),
            stacktrace_key: "S".to_string(),
            time_format: TimeFormat::Iso8601Millis,
            color_level: true,
        }
    }

    /// Preset for deployed environments: descriptive keys and epoch
    /// timestamps, no color.
    pub fn production() -> Self {
        Self {
            layout: FieldLayout::Production,
            level_key: "level".to_string(),
            time_key: "ts".to_string(),
            name_key: "logger".to_string(),
            caller_key: "caller".to_string(),
            message_key: "msg".to_string(),
            stacktrace_key: "stacktrace".to_string(),
            time_format: TimeFormat::EpochSeconds,
            color_level: false,
        }
    }

    pub fn for_layout(layout: FieldLayout) -> Self {
        match layout {
            FieldLayout::Development => Self::development(),
            FieldLayout::Production => Self::production(),
        }
    }

    /// Apply the facade's fixed key names and RFC3339 timestamps. The preset
    /// only keeps its colour setting.
    pub fn with_facade_keys(mut self) -> Self {
        self.level_key = "LEVEL".to_string();
        self.message_key = "MESSAGE".to_string();
        self.caller_key = "CALLER".to_string();
        self.time_key = "TIME".to_string();
        self.name_key = "NAME".to_string();
        self.stacktrace_key = "stacktrace".to_string();
        self.time_format = TimeFormat::Rfc3339;
        self
    }
}
