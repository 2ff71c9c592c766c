//! Row output
//!
//! Writes rows to any `io::Write` as JSON lines or pretty-printed JSON.

use crate::engine::RowSink;
use crate::error::Result;
use crate::types::Row;
use std::io::Write;

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// One JSON object per line
    #[default]
    Json,
    /// Human-readable output
    Pretty,
}

/// Sink that serializes each row as it arrives
pub struct JsonWriterSink<W> {
    writer: W,
    format: OutputFormat,
    rows: u64,
}

impl<W: Write + Send> JsonWriterSink<W> {
    pub fn new(writer: W, format: OutputFormat) -> Self {
        Self {
            writer,
            format,
            rows: 0,
        }
    }

    /// Rows written so far
    pub fn rows(&self) -> u64 {
        self.rows
    }

    /// Flush and return the writer
    pub fn finish(mut self) -> Result<W> {
        self.writer.flush()?;
        Ok(self.writer)
    }
}

impl<W: Write + Send> RowSink for JsonWriterSink<W> {
    fn emit(&mut self, row: Row) -> Result<()> {
        let text = match self.format {
            OutputFormat::Json => serde_json::to_string(&row)?,
            OutputFormat::Pretty => serde_json::to_string_pretty(&row)?,
        };
        writeln!(self.writer, "{text}")?;
        self.rows += 1;
        Ok(())
    }

    fn remaining(&self) -> Option<u64> {
        None
    }
}
