//! Core data models for regscan

use serde::{Deserialize, Serialize};
use std::fmt;

/// Browser-like User-Agent sent with every request
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/113.0.0.0 Safari/537.36";

/// A named, severity-tagged group of regexes as it appears in the catalog file
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pattern {
    pub name: String,
    pub regex: Vec<String>,
    /// Free-form label such as "low" or "high"; never interpreted
    pub severity: String,
}

impl Pattern {
    pub fn new(
        name: impl Into<String>,
        regex: Vec<String>,
        severity: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            regex,
            severity: severity.into(),
        }
    }
}

/// One regex match against one URL's response body
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Finding {
    /// URL the body was fetched from
    pub url: String,
    pub severity: String,
    /// Name of the pattern whose regex matched
    pub name: String,
    /// Matched text, verbatim
    pub matched: String,
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] [{}] [{}] [{}]",
            self.url, self.severity, self.name, self.matched
        )
    }
}

/// Configuration for a scan session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Path to the YAML pattern catalog
    pub patterns_path: String,
    /// Whether to follow HTTP redirects
    pub follow_redirects: bool,
    /// User-Agent header value
    pub user_agent: String,
    /// Connection establishment timeout in seconds
    pub connect_timeout_secs: u64,
    /// Overall request timeout in seconds
    pub timeout_secs: u64,
    /// Hop limit when redirects are followed
    pub max_redirects: usize,
    /// Idle pooled connections kept per host
    pub pool_max_idle_per_host: usize,
    /// Seconds an idle pooled connection is kept before it is closed
    pub pool_idle_timeout_secs: u64,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            patterns_path: "patterns.yaml".to_string(),
            follow_redirects: false,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            connect_timeout_secs: 60,
            timeout_secs: 30,
            max_redirects: 10,
            pool_max_idle_per_host: 500,
            pool_idle_timeout_secs: 90,
        }
    }
}

/// Totals for a completed run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScanSummary {
    /// URLs read from the input, failed ones included
    pub urls: usize,
    /// URLs whose fetch failed
    pub failed: usize,
    /// Findings emitted
    pub findings: usize,
}
