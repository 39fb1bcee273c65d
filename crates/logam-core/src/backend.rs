//! The backend core: an encoder, a sink and a severity threshold.

use std::fmt;
use std::io;

use crate::encoder::Encoder;
use crate::entry::{Entry, Field};
use crate::level::{AtomicLevel, Level};
use crate::sink::Sink;

/// Filters, encodes and writes records. Shared (behind an `Arc`) by a facade,
/// its named children and its tracing layer.
pub struct Core {
    encoder: Box<dyn Encoder>,
    sink: Sink,
    level: AtomicLevel,
}

impl Core {
    pub fn new(encoder: Box<dyn Encoder>, sink: Sink, level: AtomicLevel) -> Self {
        Self {
            encoder,
            sink,
            level,
        }
    }

    /// Whether a record at `level` would be written.
    pub fn enabled(&self, level: Level) -> bool {
        self.level.enabled(level)
    }

    /// The configured threshold.
    pub fn level(&self) -> Level {
        self.level.level()
    }

    /// Encode and write one record. Records below the threshold are dropped
    /// before encoding. Encoding or write failures go to stderr; they are
    /// never returned to the logging call.
    pub fn write(&self, entry: &Entry, fields: &[Field]) {
        if !self.enabled(entry.level) {
            return;
        }

        let mut buf = Vec::with_capacity(256);
        if let Err(e) = self.encoder.encode(entry, fields, &mut buf) {
            eprintln!("logam: failed to encode record: {e}");
            return;
        }
        if let Err(e) = self.sink.write(&buf) {
            eprintln!("logam: failed to write record: {e}");
        }
    }

    /// Flush the sink.
    pub fn sync(&self) -> io::Result<()> {
        self.sink.sync()
    }
}

impl fmt::Debug for Core {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Core")
            .field("level", &self.level())
            .field("sink", &self.sink)
            .finish_non_exhaustive()
    }
}
