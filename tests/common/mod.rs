//! Common test utilities

#![allow(dead_code)]

use regscan::error::{Result, ScanError};
use regscan::models::{Finding, Pattern, ScanConfig};
use regscan::report::ReportSink;
use regscan::scanner::PatternCatalog;

/// Creates a ScanConfig with short timeouts for tests against wiremock
pub fn test_config() -> ScanConfig {
    ScanConfig {
        connect_timeout_secs: 5,
        timeout_secs: 5,
        ..ScanConfig::default()
    }
}

/// Builds a compiled catalog from `(name, regexes, severity)` triples
pub fn catalog(patterns: &[(&str, &[&str], &str)]) -> PatternCatalog {
    let patterns = patterns
        .iter()
        .map(|(name, regexes, severity)| {
            Pattern::new(*name, regexes.iter().map(|r| r.to_string()).collect(), *severity)
        })
        .collect();
    PatternCatalog::compile(patterns).expect("test catalog compiles")
}

/// Sink that keeps everything it is given
#[derive(Default)]
pub struct CollectingSink {
    pub findings: Vec<Finding>,
    pub failed: Vec<String>,
    pub finished: bool,
}

impl ReportSink for CollectingSink {
    fn finding(&mut self, finding: &Finding) -> Result<()> {
        self.findings.push(finding.clone());
        Ok(())
    }

    fn fetch_failed(&mut self, url: &str, error: &ScanError) -> Result<()> {
        assert!(error.is_recoverable(), "non-fetch error reported: {error}");
        self.failed.push(url.to_string());
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.finished = true;
        Ok(())
    }
}

/// URL nothing listens on
pub const DEAD_URL: &str = "http://127.0.0.1:1/";
