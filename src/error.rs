//! Error types for regscan

use thiserror::Error;

/// Main error type for regscan operations
#[derive(Debug, Error)]
pub enum ScanError {
    /// Any failure that kept us from getting a usable body for one URL.
    /// DNS, connect, TLS, timeout and body-read failures all land here.
    #[error("Fetch failed for {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP client could not be built: {0}")]
    Client(reqwest::Error),

    #[error("Pattern '{pattern}' has an invalid regex '{regex}': {source}")]
    InvalidRegex {
        pattern: String,
        regex: String,
        #[source]
        source: regex::Error,
    },

    #[error("Invalid pattern: {0}")]
    InvalidPattern(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl ScanError {
    /// True for errors scoped to a single URL; everything else aborts the run
    pub fn is_recoverable(&self) -> bool {
        matches!(self, ScanError::Fetch { .. })
    }
}

/// Result type alias for regscan operations
pub type Result<T> = std::result::Result<T, ScanError>;
