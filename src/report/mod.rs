//! Report sinks that receive findings as they are produced

pub mod jsonl;
pub mod text;

use crate::error::{Result, ScanError};
use crate::models::Finding;
use std::io::Write;
use std::str::FromStr;

pub use jsonl::JsonlSink;
pub use text::TextSink;

/// Destination for scan output. Findings arrive one at a time and are not
/// retained by the scanner.
pub trait ReportSink {
    /// Records one finding
    fn finding(&mut self, finding: &Finding) -> Result<()>;

    /// Records that `url` could not be fetched
    fn fetch_failed(&mut self, url: &str, error: &ScanError) -> Result<()>;

    /// Flushes anything still buffered
    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Output formats selectable from the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Jsonl,
}

impl FromStr for OutputFormat {
    type Err = ScanError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "jsonl" | "json" => Ok(Self::Jsonl),
            other => Err(ScanError::ConfigError(format!(
                "Unknown output format '{other}'. Use: text, jsonl"
            ))),
        }
    }
}

/// Diagnostic line for a failed fetch, shared by every format
pub(crate) fn write_fetch_error<W: Write>(diag: &mut W, url: &str) -> Result<()> {
    writeln!(diag, "error [{url}]")?;
    Ok(())
}
