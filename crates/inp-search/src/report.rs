//! Difficult-graph records and the reporters that consume them.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use inp_core::errors::{ErrorInfo, InpError};
use inp_core::provenance::{RegistryProvenance, SchemaVersion};
use serde::{Deserialize, Serialize};

fn report_error(code: &str, err: impl ToString) -> InpError {
    InpError::Report(ErrorInfo::new(code, err.to_string()))
}

/// Structured record emitted when the search stops at a difficult graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DifficultGraphRecord {
    /// Schema version of this record.
    pub schema_version: SchemaVersion,
    /// Vertex count.
    pub order: usize,
    /// graph6 string of the canonical form.
    pub graph: String,
    /// SHA-256 of the canonical graph6 string.
    pub canonical_hash: String,
    /// `⌈lower bound⌉`.
    pub lower_bound: i64,
    /// `⌊upper bound⌋`.
    pub upper_bound: i64,
    /// Graphs classified, the difficult one included.
    pub graphs_examined: u64,
    /// Registries that produced the verdict.
    pub provenance: RegistryProvenance,
}

/// Consumer of difficult-graph records.
///
/// Failures are logged by the driver and never change the search result.
pub trait Reporter {
    /// Handles one record.
    fn report(&mut self, record: &DifficultGraphRecord) -> Result<(), InpError>;
}

/// Discards every record.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullReporter;

impl Reporter for NullReporter {
    fn report(&mut self, _record: &DifficultGraphRecord) -> Result<(), InpError> {
        Ok(())
    }
}

/// Writes each record as one line of JSON.
#[derive(Debug)]
pub struct JsonLinesReporter<W: Write> {
    writer: W,
}

impl<W: Write> JsonLinesReporter<W> {
    /// Writes to `writer`.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl JsonLinesReporter<BufWriter<File>> {
    /// Creates or truncates the file at `path`.
    pub fn create(path: &Path) -> Result<Self, InpError> {
        let file = File::create(path).map_err(|err| {
            report_error("report-create", err).with_context("path", path.display())
        })?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> Reporter for JsonLinesReporter<W> {
    fn report(&mut self, record: &DifficultGraphRecord) -> Result<(), InpError> {
        serde_json::to_writer(&mut self.writer, record)
            .map_err(|err| report_error("report-encode", err))?;
        self.writer
            .write_all(b"\n")
            .and_then(|_| self.writer.flush())
            .map_err(|err| report_error("report-write", err))
    }
}

/// Collects records in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryReporter {
    /// Records received so far.
    pub records: Vec<DifficultGraphRecord>,
}

impl Reporter for MemoryReporter {
    fn report(&mut self, record: &DifficultGraphRecord) -> Result<(), InpError> {
        self.records.push(record.clone());
        Ok(())
    }
}
