//! regscan - bulk URL scanner
//!
//! Fetches a list of URLs and matches every response body against a
//! catalog of named, severity-tagged regular expressions, reporting each
//! match as a finding.

pub mod config;
pub mod error;
pub mod http;
pub mod models;
pub mod report;
pub mod scanner;
