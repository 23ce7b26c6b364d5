//! Fetch-and-match pipeline
//!
//! [`Runner`] drives the scan: each URL is fetched, its body matched against
//! the catalog, and every finding handed to a [`ReportSink`] before the next
//! URL is read.

pub mod catalog;
pub mod matcher;

use crate::error::Result;
use crate::http::HttpClient;
use crate::models::ScanSummary;
use crate::report::ReportSink;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, info};

pub use catalog::{CompiledPattern, PatternCatalog};

/// Processes URLs one at a time against a borrowed, read-only catalog
pub struct Runner<'a> {
    client: HttpClient,
    catalog: &'a PatternCatalog,
    follow_redirects: bool,
}

impl<'a> Runner<'a> {
    pub fn new(client: HttpClient, catalog: &'a PatternCatalog, follow_redirects: bool) -> Self {
        Self {
            client,
            catalog,
            follow_redirects,
        }
    }

    /// Fetches `url` and reports its findings.
    ///
    /// Returns `Ok(None)` when the fetch failed; the failure has already been
    /// passed to the sink. Only sink errors are returned as `Err`.
    pub async fn scan_url<S>(&self, url: &str, sink: &mut S) -> Result<Option<usize>>
    where
        S: ReportSink + ?Sized,
    {
        let body = match self.client.fetch(url, self.follow_redirects).await {
            Ok(body) => body,
            Err(e) => {
                sink.fetch_failed(url, &e)?;
                return Ok(None);
            }
        };

        debug!("Fetched {} bytes from {}", body.len(), url);
        self.report_body(url, &body, sink).map(Some)
    }

    /// Matches an already fetched body and reports every finding
    pub fn report_body<S>(&self, url: &str, body: &str, sink: &mut S) -> Result<usize>
    where
        S: ReportSink + ?Sized,
    {
        let mut count = 0;
        for finding in matcher::scan(self.catalog, url, body) {
            sink.finding(&finding)?;
            count += 1;
        }
        Ok(count)
    }

    /// Reads newline-delimited URLs from `input` and scans each in turn.
    ///
    /// Surrounding whitespace is trimmed; blank lines and `#` comments are
    /// skipped. Lines that are not valid UTF-8 are decoded lossily and end up
    /// as ordinary fetch failures. A failed fetch is reported and the run
    /// moves on.
    pub async fn run<R, S>(&self, mut input: R, sink: &mut S) -> Result<ScanSummary>
    where
        R: AsyncBufRead + Unpin,
        S: ReportSink + ?Sized,
    {
        let mut summary = ScanSummary::default();
        let mut buf = Vec::new();

        loop {
            buf.clear();
            if input.read_until(b'\n', &mut buf).await? == 0 {
                break;
            }
            let line = String::from_utf8_lossy(&buf);
            let url = line.trim();
            if url.is_empty() || url.starts_with('#') {
                continue;
            }

            summary.urls += 1;
            match self.scan_url(url, sink).await? {
                Some(found) => summary.findings += found,
                None => summary.failed += 1,
            }
        }

        sink.finish()?;
        info!(
            "Scanned {} URLs: {} findings, {} failed",
            summary.urls, summary.findings, summary.failed
        );
        Ok(summary)
    }
}
