//! Human-readable console encoding.

use console::Style;
use std::io::{self, Write};

use super::{Encoder, EncoderConfig};
use crate::entry::{Entry, Field};
use crate::level::Level;

/// Writes `TIME<TAB>LEVEL<TAB>[NAME<TAB>]CALLER<TAB>MESSAGE[<TAB>{fields}]`,
/// followed by the stack trace on its own lines when present.
#[derive(Debug, Clone)]
pub struct ConsoleEncoder {
    config: EncoderConfig,
}

impl ConsoleEncoder {
    pub fn new(config: EncoderConfig) -> Self {
        Self { config }
    }

    fn level_style(level: Level) -> Style {
        let style = Style::new().force_styling(true);
        match level {
            Level::Debug => style.magenta(),
            Level::Info => style.blue(),
            Level::Warn => style.yellow(),
            Level::Error | Level::DPanic | Level::Panic | Level::Fatal => style.red(),
        }
    }
}

impl Encoder for ConsoleEncoder {
    fn encode(&self, entry: &Entry, fields: &[Field], buf: &mut Vec<u8>) -> io::Result<()> {
        match self.config.time_format.render(&entry.time) {
            serde_json::Value::String(text) => buf.extend_from_slice(text.as_bytes()),
            other => write!(buf, "{other}")?,
        }
        buf.push(b'\t');

        let level = entry.level.capital();
        if self.config.color_level {
            write!(buf, "{}", Self::level_style(entry.level).apply_to(level))?;
        } else {
            buf.extend_from_slice(level.as_bytes());
        }

        if !entry.name.is_empty() {
            write!(buf, "\t{}", entry.name)?;
        }
        if let Some(caller) = &entry.caller {
            write!(buf, "\t{caller}")?;
        }
        write!(buf, "\t{}", entry.message)?;

        if !fields.is_empty() {
            let map: serde_json::Map<String, serde_json::Value> = fields
                .iter()
                .map(|field| (field.key.clone(), field.value.clone()))
                .collect();
            buf.push(b'\t');
            serde_json::to_writer(&mut *buf, &map).map_err(io::Error::other)?;
        }

        if let Some(stack) = &entry.stack {
            buf.push(b'\n');
            buf.extend_from_slice(stack.trim_end().as_bytes());
        }
        buf.push(b'\n');
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(config: EncoderConfig, entry: &Entry, fields: &[Field]) -> String {
        let mut buf = Vec::new();
        ConsoleEncoder::new(config)
            .encode(entry, fields, &mut buf)
            .unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_plain_line_layout() {
        let entry = Entry::new(Level::Info, "", "server started").with_caller("main.rs:4");
        let output = encode(
            EncoderConfig::production().with_facade_keys(),
            &entry,
            &[Field::new("port", 8080)],
        );

        let line = output.strip_suffix('\n').unwrap();
        let columns: Vec<&str> = line.split('\t').collect();
        assert_eq!(columns.len(), 5);
        assert!(chrono::DateTime::parse_from_rfc3339(columns[0]).is_ok());
        assert_eq!(columns[1], "INFO");
        assert_eq!(columns[2], "main.rs:4");
        assert_eq!(columns[3], "server started");
        assert_eq!(columns[4], r#"{"port":8080}"#);
    }

    #[test]
    fn test_name_column_only_when_named() {
        let entry = Entry::new(Level::Debug, "http.client", "retry").with_caller("c.rs:9");
        let output = encode(EncoderConfig::production().with_facade_keys(), &entry, &[]);
        let columns: Vec<&str> = output.trim_end().split('\t').collect();
        assert_eq!(columns[2], "http.client");
        assert_eq!(columns[3], "c.rs:9");
    }

    #[test]
    fn test_development_preset_colors_level() {
        let entry = Entry::new(Level::Warn, "", "careful");
        let output = encode(EncoderConfig::development().with_facade_keys(), &entry, &[]);
        assert!(output.contains("\u{1b}["));
        assert!(output.contains("WARN"));
    }

    #[test]
    fn test_production_preset_has_no_escape_codes() {
        let entry = Entry::new(Level::Error, "", "failed");
        let output = encode(EncoderConfig::production().with_facade_keys(), &entry, &[]);
        assert!(!output.contains('\u{1b}'));
    }

    #[test]
    fn test_stack_trace_follows_line() {
        let entry = Entry::new(Level::Error, "", "failed").with_stack("frame 0\nframe 1\n");
        let output = encode(EncoderConfig::production().with_facade_keys(), &entry, &[]);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].ends_with("\tfailed"));
        assert_eq!(lines[1], "frame 0");
        assert_eq!(lines[2], "frame 1");
    }
}
