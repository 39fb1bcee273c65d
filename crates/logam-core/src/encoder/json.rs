//! Flat JSON encoding, one object per line.

use serde::Serialize;
use std::io;

use super::{Encoder, EncoderConfig};
use crate::entry::{Entry, Field};

/// Writes each record as a single-line JSON object. Keys appear in a fixed
/// order: level, time, name, caller, message, caller-supplied fields and
/// finally the stack trace.
#[derive(Debug, Clone)]
pub struct JsonEncoder {
    config: EncoderConfig,
}

impl JsonEncoder {
    pub fn new(config: EncoderConfig) -> Self {
        Self { config }
    }
}

/// Incremental writer for one JSON object. Keeps insertion order, which a
/// `serde_json::Map` without `preserve_order` would not.
struct ObjectWriter<'a> {
    buf: &'a mut Vec<u8>,
    first: bool,
}

impl<'a> ObjectWriter<'a> {
    fn open(buf: &'a mut Vec<u8>) -> Self {
        buf.push(b'{');
        Self { buf, first: true }
    }

    fn entry<V: Serialize + ?Sized>(&mut self, key: &str, value: &V) -> io::Result<()> {
        if !self.first {
            self.buf.push(b',');
        }
        self.first = false;
        serde_json::to_writer(&mut *self.buf, key).map_err(io::Error::other)?;
        self.buf.push(b':');
        serde_json::to_writer(&mut *self.buf, value).map_err(io::Error::other)?;
        Ok(())
    }

    fn close(self) {
        self.buf.extend_from_slice(b"}\n");
    }
}

impl Encoder for JsonEncoder {
    fn encode(&self, entry: &Entry, fields: &[Field], buf: &mut Vec<u8>) -> io::Result<()> {
        let cfg = &self.config;
        let mut obj = ObjectWriter::open(buf);

        obj.entry(&cfg.level_key, entry.level.capital())?;
        obj.entry(&cfg.time_key, &cfg.time_format.render(&entry.time))?;
        obj.entry(&cfg.name_key, &entry.name)?;
        if let Some(caller) = &entry.caller {
            obj.entry(&cfg.caller_key, caller)?;
        }
        obj.entry(&cfg.message_key, &entry.message)?;
        for field in fields {
            obj.entry(&field.key, &field.value)?;
        }
        if let Some(stack) = &entry.stack {
            obj.entry(&cfg.stacktrace_key, stack)?;
        }

        obj.close();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::Level;
    use serde_json::{json, Value};

    fn encode(entry: &Entry, fields: &[Field]) -> String {
        let encoder = JsonEncoder::new(EncoderConfig::production().with_facade_keys());
        let mut buf = Vec::new();
        encoder.encode(entry, fields, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_single_line_with_fixed_keys() {
        let entry = Entry::new(Level::Warn, "", "low disk").with_caller("src/main.rs:10");
        let output = encode(&entry, &[]);

        assert!(output.ends_with('\n'));
        assert_eq!(output.matches('\n').count(), 1);

        let record: Value = serde_json::from_str(&output).unwrap();
        let keys: Vec<&str> = record
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        let mut sorted = keys.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, vec!["CALLER", "LEVEL", "MESSAGE", "NAME", "TIME"]);
        assert_eq!(record["LEVEL"], "WARN");
        assert_eq!(record["MESSAGE"], "low disk");
        assert_eq!(record["CALLER"], "src/main.rs:10");
        assert_eq!(record["NAME"], "");
    }

    #[test]
    fn test_key_order() {
        let entry = Entry::new(Level::Error, "svc", "boom")
            .with_caller("lib.rs:1")
            .with_stack("frame 0");
        let output = encode(&entry, &[Field::new("attempt", 3)]);

        let positions: Vec<usize> = [
            "\"LEVEL\"",
            "\"TIME\"",
            "\"NAME\"",
            "\"CALLER\"",
            "\"MESSAGE\"",
            "\"attempt\"",
            "\"stacktrace\"",
        ]
        .iter()
        .map(|key| output.find(key).unwrap())
        .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_typed_fields_and_escaping() {
        let entry = Entry::new(Level::Info, "", "quote \" and\nnewline");
        let fields = [
            Field::new("count", 7),
            Field::new("ok", true),
            Field::new("tags", json!(["a", "b"])),
        ];
        let output = encode(&entry, &fields);
        assert_eq!(output.matches('\n').count(), 1);

        let record: Value = serde_json::from_str(&output).unwrap();
        assert_eq!(record["MESSAGE"], "quote \" and\nnewline");
        assert_eq!(record["count"], 7);
        assert_eq!(record["ok"], true);
        assert_eq!(record["tags"], json!(["a", "b"]));
    }

    #[test]
    fn test_production_preset_keys_without_override() {
        let encoder = JsonEncoder::new(EncoderConfig::production());
        let mut buf = Vec::new();
        encoder
            .encode(&Entry::new(Level::Info, "", "hi"), &[], &mut buf)
            .unwrap();
        let record: Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(record["msg"], "hi");
        assert!(record["ts"].is_f64());
    }
}
