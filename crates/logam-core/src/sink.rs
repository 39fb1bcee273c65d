//! Output destination for encoded records.

use std::fmt;
use std::io::{self, Write};
use std::sync::{Mutex, PoisonError};
use tracing_subscriber::fmt::writer::{BoxMakeWriter, MakeWriter};

/// A synchronized output stream.
///
/// Any `MakeWriter` can back a sink. Each record is written with a single
/// `write_all` while holding the sink's lock, so concurrent records never
/// interleave; their relative order is whatever order the lock is taken in.
pub struct Sink {
    make_writer: BoxMakeWriter,
    lock: Mutex<()>,
}

impl Sink {
    /// Wrap a `MakeWriter`, e.g. `std::io::stdout` or a shared buffer.
    pub fn new<M>(make_writer: M) -> Self
    where
        M: for<'a> MakeWriter<'a> + Send + Sync + 'static,
    {
        Self {
            make_writer: BoxMakeWriter::new(make_writer),
            lock: Mutex::new(()),
        }
    }

    /// Standard error, the default destination.
    pub fn stderr() -> Self {
        Self::new(io::stderr)
    }

    /// Write one encoded record.
    pub fn write(&self, record: &[u8]) -> io::Result<()> {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        let mut writer = self.make_writer.make_writer();
        writer.write_all(record)
    }

    /// Flush anything buffered by the underlying writer.
    pub fn sync(&self) -> io::Result<()> {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        self.make_writer.make_writer().flush()
    }
}

impl fmt::Debug for Sink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sink").finish_non_exhaustive()
    }
}
