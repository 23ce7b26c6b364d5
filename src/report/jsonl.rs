//! JSONL (JSON Lines) report: one JSON object per finding

use super::{write_fetch_error, ReportSink};
use crate::error::{Result, ScanError};
use crate::models::Finding;
use std::io::Write;

/// Streams findings as JSON objects to `out` and fetch failures to `diag`
pub struct JsonlSink<W: Write, E: Write> {
    out: W,
    diag: E,
}

impl<W: Write, E: Write> JsonlSink<W, E> {
    pub fn new(out: W, diag: E) -> Self {
        Self { out, diag }
    }

    /// Consumes the sink, returning the result and diagnostic writers
    pub fn into_inner(self) -> (W, E) {
        (self.out, self.diag)
    }
}

impl<W: Write, E: Write> ReportSink for JsonlSink<W, E> {
    fn finding(&mut self, finding: &Finding) -> Result<()> {
        let line = serde_json::to_string(finding)?;
        writeln!(self.out, "{line}")?;
        Ok(())
    }

    fn fetch_failed(&mut self, url: &str, _error: &ScanError) -> Result<()> {
        write_fetch_error(&mut self.diag, url)
    }

    fn finish(&mut self) -> Result<()> {
        self.out.flush()?;
        self.diag.flush()?;
        Ok(())
    }
}
