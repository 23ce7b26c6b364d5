//! Configuration management for regscan

use crate::error::{Result, ScanError};
use crate::models::ScanConfig;
use serde::Deserialize;
use std::path::Path;

/// File-based configuration structure matching regscan.toml
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    scan: Option<ScanSection>,
    http: Option<HttpSection>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ScanSection {
    patterns: Option<String>,
    follow_redirects: Option<bool>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct HttpSection {
    user_agent: Option<String>,
    connect_timeout_secs: Option<u64>,
    timeout_secs: Option<u64>,
    max_redirects: Option<usize>,
    pool_max_idle_per_host: Option<usize>,
    pool_idle_timeout_secs: Option<u64>,
}

/// Loads configuration from a TOML file and merges with defaults
pub fn load_config(path: &Path) -> Result<ScanConfig> {
    let content = std::fs::read_to_string(path).map_err(ScanError::IoError)?;
    parse_config(&content)
}

/// Parses TOML configuration text and merges with defaults
pub fn parse_config(content: &str) -> Result<ScanConfig> {
    let file_config: FileConfig = toml::from_str(content)?;

    let mut config = ScanConfig::default();

    if let Some(scan) = file_config.scan {
        if let Some(patterns) = scan.patterns {
            config.patterns_path = patterns;
        }
        if let Some(follow) = scan.follow_redirects {
            config.follow_redirects = follow;
        }
    }

    if let Some(http) = file_config.http {
        if let Some(ua) = http.user_agent {
            config.user_agent = ua;
        }
        if let Some(t) = http.connect_timeout_secs {
            config.connect_timeout_secs = t;
        }
        if let Some(t) = http.timeout_secs {
            config.timeout_secs = t;
        }
        if let Some(hops) = http.max_redirects {
            config.max_redirects = hops;
        }
        if let Some(idle) = http.pool_max_idle_per_host {
            config.pool_max_idle_per_host = idle;
        }
        if let Some(t) = http.pool_idle_timeout_secs {
            config.pool_idle_timeout_secs = t;
        }
    }

    validate(&config)?;
    Ok(config)
}

/// Merges CLI arguments into an existing ScanConfig
pub fn merge_cli_args(
    config: &mut ScanConfig,
    patterns: Option<String>,
    follow_redirects: bool,
    timeout: Option<u64>,
) -> Result<()> {
    if let Some(p) = patterns {
        config.patterns_path = p;
    }
    // The CLI flag can only switch redirects on; the file may already have
    if follow_redirects {
        config.follow_redirects = true;
    }
    if let Some(t) = timeout {
        config.timeout_secs = t;
    }
    validate(config)
}

fn validate(config: &ScanConfig) -> Result<()> {
    if config.timeout_secs == 0 {
        return Err(ScanError::ConfigError(
            "timeout_secs must be greater than zero".to_string(),
        ));
    }
    if config.connect_timeout_secs == 0 {
        return Err(ScanError::ConfigError(
            "connect_timeout_secs must be greater than zero".to_string(),
        ));
    }
    if config.user_agent.trim().is_empty() {
        return Err(ScanError::ConfigError("user_agent is empty".to_string()));
    }
    Ok(())
}
