//! The `logam emit` command.

use clap::{Args, ValueEnum};
use logam_core::Logger;
use serde_json::Value;
use std::fmt::Display;

/// Which logging call to make.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum EmitLevel {
    Debug,
    Info,
    Warn,
    Error,
    /// Logs, then exits with status 1
    Fatal,
    /// Unleveled alias, logged at info
    Print,
    /// Trace alias, logged at info
    Trace,
}

/// Arguments for the `emit` command.
#[derive(Args, Debug)]
pub struct EmitArgs {
    /// Level (or alias) to log at
    #[arg(value_enum)]
    pub level: EmitLevel,

    /// Message words, joined with spaces
    #[arg(required = true)]
    pub message: Vec<String>,

    /// Structured field as key=value; values that parse as JSON keep their type
    #[arg(long = "field", short = 'f', value_parser = parse_field)]
    pub fields: Vec<(String, Value)>,
}

/// Parse `key=value`. The value is taken as JSON when it parses, otherwise
/// as a plain string.
pub fn parse_field(raw: &str) -> Result<(String, Value), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected key=value, got {raw:?}"))?;
    if key.is_empty() {
        return Err(format!("empty key in {raw:?}"));
    }
    let value = serde_json::from_str(value).unwrap_or_else(|_| Value::from(value));
    Ok((key.to_string(), value))
}

/// Execute the emit command.
pub fn execute(log: &impl Logger, args: EmitArgs) -> anyhow::Result<()> {
    if args.fields.is_empty() {
        let words: Vec<&dyn Display> = args.message.iter().map(|w| w as &dyn Display).collect();
        match args.level {
            EmitLevel::Debug => log.debug(&words),
            EmitLevel::Info => log.info(&words),
            EmitLevel::Warn => log.warn(&words),
            EmitLevel::Error => log.error(&words),
            EmitLevel::Print => log.print(&words),
            EmitLevel::Trace => log.tracef(format_args!("{}", args.message.join(" "))),
            EmitLevel::Fatal => log.fatal(&words),
        }
        return Ok(());
    }

    let message = args.message.join(" ");
    let kvs: Vec<Value> = args
        .fields
        .into_iter()
        .flat_map(|(key, value)| [Value::from(key), value])
        .collect();
    match args.level {
        EmitLevel::Debug => log.debugw(&message, &kvs),
        EmitLevel::Info | EmitLevel::Print | EmitLevel::Trace => log.infow(&message, &kvs),
        EmitLevel::Warn => log.warnw(&message, &kvs),
        EmitLevel::Error => log.errorw(&message, &kvs),
        EmitLevel::Fatal => anyhow::bail!("fatal records don't take --field; drop the fields"),
    }
    Ok(())
}
