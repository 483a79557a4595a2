//! Output sinks for finished records.
//!
//! A sink receives records in the order a batch flushes them and must
//! append them in that order.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{OutputError, OutputResult};
use crate::models::ResourceRecord;

/// Destination for converted records.
pub trait RecordSink {
    /// Append `records`, preserving their order.
    fn write_records(&mut self, records: &[ResourceRecord]) -> OutputResult<()>;
}

/// Keeps records in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    records: Vec<ResourceRecord>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[ResourceRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<ResourceRecord> {
        self.records
    }
}

impl RecordSink for MemorySink {
    fn write_records(&mut self, records: &[ResourceRecord]) -> OutputResult<()> {
        self.records.extend_from_slice(records);
        Ok(())
    }
}

/// Writes every record received so far to a file as one JSON array.
#[derive(Debug)]
pub struct JsonFileSink {
    path: PathBuf,
    records: Vec<ResourceRecord>,
}

impl JsonFileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            records: Vec::new(),
        }
    }

    /// Where the records are written.
    pub fn output_path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl RecordSink for JsonFileSink {
    /// Rewrite the file with every record so far. Records are only kept
    /// once the file holds them.
    fn write_records(&mut self, records: &[ResourceRecord]) -> OutputResult<()> {
        let all: Vec<&ResourceRecord> = self.records.iter().chain(records).collect();
        let json = serde_json::to_string_pretty(&all)?;
        fs::write(&self.path, json).map_err(|e| OutputError::Io {
            path: self.path.clone(),
            source: e,
        })?;

        self.records.extend_from_slice(records);
        Ok(())
    }
}

/// Collects records and writes them to a writer as one pretty JSON array.
///
/// Nothing reaches the writer until [`JsonWriterSink::finish`].
pub struct JsonWriterSink<W: Write> {
    writer: W,
    records: Vec<ResourceRecord>,
}

impl<W: Write> JsonWriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            records: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Write every collected record and hand back the writer.
    pub fn finish(mut self) -> OutputResult<W> {
        serde_json::to_writer_pretty(&mut self.writer, &self.records)?;
        writeln!(self.writer)
            .and_then(|_| self.writer.flush())
            .map_err(|e| OutputError::Io {
                path: PathBuf::from("<stream>"),
                source: e,
            })?;
        Ok(self.writer)
    }
}

impl<W: Write> RecordSink for JsonWriterSink<W> {
    fn write_records(&mut self, records: &[ResourceRecord]) -> OutputResult<()> {
        self.records.extend_from_slice(records);
        Ok(())
    }
}
