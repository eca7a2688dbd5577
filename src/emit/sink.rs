//! Record destinations.
//!
//! Every sink receives a complete, newline-terminated record and must write
//! it in one piece so concurrent records never interleave.

use std::fmt;
use std::io::{self, Write};

use parking_lot::Mutex;
use serde_json::Value;

/// A destination for encoded records.
pub trait Sink: Send + Sync {
    /// Write one complete record.
    fn write_record(&self, record: &[u8]) -> io::Result<()>;
}

/// Standard output, the default destination.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

impl Sink for StdoutSink {
    fn write_record(&self, record: &[u8]) -> io::Result<()> {
        let mut out = io::stdout().lock();
        out.write_all(record)?;
        out.flush()
    }
}

/// Drops everything. Used when logging is disabled.
#[derive(Debug, Default, Clone, Copy)]
pub struct DiscardSink;

impl Sink for DiscardSink {
    fn write_record(&self, _record: &[u8]) -> io::Result<()> {
        Ok(())
    }
}

/// Any writer, serialized behind a mutex.
pub struct WriterSink<W> {
    inner: Mutex<W>,
}

impl<W: Write + Send> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            inner: Mutex::new(writer),
        }
    }

    pub fn into_inner(self) -> W {
        self.inner.into_inner()
    }
}

impl<W: Write + Send> Sink for WriterSink<W> {
    fn write_record(&self, record: &[u8]) -> io::Result<()> {
        let mut writer = self.inner.lock();
        writer.write_all(record)?;
        writer.flush()
    }
}

impl<W> fmt::Debug for WriterSink<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WriterSink").finish_non_exhaustive()
    }
}

/// In-memory capture of every record written.
#[derive(Debug, Default)]
pub struct MemorySink {
    buf: Mutex<Vec<u8>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far.
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buf.lock()).into_owned()
    }

    /// Written records, one string per line, without terminators.
    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }

    /// Written records decoded as JSON. Lines that fail to decode are skipped.
    pub fn records(&self) -> Vec<Value> {
        self.lines()
            .iter()
            .filter_map(|line| serde_json::from_str(line).ok())
            .collect()
    }

    pub fn clear(&self) {
        self.buf.lock().clear();
    }
}

impl Sink for MemorySink {
    fn write_record(&self, record: &[u8]) -> io::Result<()> {
        self.buf.lock().extend_from_slice(record);
        Ok(())
    }
}
