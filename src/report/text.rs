//! Plain text report: one bracketed line per finding

use super::{write_fetch_error, ReportSink};
use crate::error::{Result, ScanError};
use crate::models::Finding;
use colored::{ColoredString, Colorize};
use std::io::Write;

/// Writes `[url] [severity] [name] [matched]` lines to `out` and fetch
/// failures to `diag`
pub struct TextSink<W: Write, E: Write> {
    out: W,
    diag: E,
    color: bool,
}

impl<W: Write, E: Write> TextSink<W, E> {
    pub fn new(out: W, diag: E, color: bool) -> Self {
        Self { out, diag, color }
    }

    /// Consumes the sink, returning the result and diagnostic writers
    pub fn into_inner(self) -> (W, E) {
        (self.out, self.diag)
    }
}

impl<W: Write, E: Write> ReportSink for TextSink<W, E> {
    fn finding(&mut self, finding: &Finding) -> Result<()> {
        if self.color {
            writeln!(
                self.out,
                "[{}] [{}] [{}] [{}]",
                finding.url,
                colorize_severity(&finding.severity),
                finding.name.bold(),
                finding.matched
            )?;
        } else {
            writeln!(self.out, "{finding}")?;
        }
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

/// Severity labels are free-form; the usual ones get a color
fn colorize_severity(severity: &str) -> ColoredString {
    match severity.to_lowercase().as_str() {
        "critical" => severity.red().bold(),
        "high" => severity.bright_red(),
        "medium" => severity.yellow(),
        "low" => severity.blue(),
        "info" => severity.white(),
        _ => severity.normal(),
    }
}
