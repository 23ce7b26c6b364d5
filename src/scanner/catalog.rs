//! YAML pattern catalog loading and compilation
//!
//! The catalog is loaded once at startup. Any structural defect or regex
//! that fails to compile rejects the whole catalog, so a scan never starts
//! with a partial pattern set.

use crate::error::{Result, ScanError};
use crate::models::Pattern;
use regex::Regex;
use std::path::Path;
use tracing::{debug, info, warn};

/// A pattern with every regex compiled
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    pub name: String,
    pub severity: String,
    regexes: Vec<Regex>,
}

impl CompiledPattern {
    /// Compiled regexes in the order they were declared
    pub fn regexes(&self) -> &[Regex] {
        &self.regexes
    }
}

/// Ordered, immutable set of compiled patterns shared by every scan
#[derive(Debug, Clone, Default)]
pub struct PatternCatalog {
    patterns: Vec<CompiledPattern>,
}

impl PatternCatalog {
    /// Validates and compiles patterns, preserving their order
    pub fn compile(patterns: Vec<Pattern>) -> Result<Self> {
        let mut compiled = Vec::with_capacity(patterns.len());

        for pattern in patterns {
            validate_pattern(&pattern).map_err(ScanError::InvalidPattern)?;

            let mut regexes = Vec::with_capacity(pattern.regex.len());
            for source in &pattern.regex {
                let re = Regex::new(source).map_err(|e| ScanError::InvalidRegex {
                    pattern: pattern.name.clone(),
                    regex: source.clone(),
                    source: e,
                })?;
                regexes.push(re);
            }

            debug!(
                "Compiled pattern '{}' ({} regexes, severity {})",
                pattern.name,
                regexes.len(),
                pattern.severity
            );
            compiled.push(CompiledPattern {
                name: pattern.name,
                severity: pattern.severity,
                regexes,
            });
        }

        if compiled.is_empty() {
            warn!("Pattern catalog is empty; no findings will be reported");
        }

        Ok(Self { patterns: compiled })
    }

    /// Parses a YAML sequence of patterns and compiles it
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        // An empty document deserializes to null, not to an empty sequence
        if content.trim().is_empty() {
            return Self::compile(Vec::new());
        }
        let patterns: Vec<Pattern> = serde_yaml::from_str(content)?;
        Self::compile(patterns)
    }

    /// Loads and compiles the catalog file at `path`
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ScanError::ConfigError(format!(
                "cannot read pattern catalog {}: {e}",
                path.display()
            ))
        })?;
        let catalog = Self::from_yaml_str(&content)?;
        info!(
            "Loaded {} patterns ({} regexes) from {}",
            catalog.len(),
            catalog.regex_count(),
            path.display()
        );
        Ok(catalog)
    }

    pub fn patterns(&self) -> &[CompiledPattern] {
        &self.patterns
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Total number of regexes across all patterns
    pub fn regex_count(&self) -> usize {
        self.patterns.iter().map(|p| p.regexes.len()).sum()
    }
}

/// Validates a pattern for correctness
pub fn validate_pattern(pattern: &Pattern) -> std::result::Result<(), String> {
    if pattern.name.trim().is_empty() {
        return Err("Pattern name is empty".to_string());
    }
    if pattern.regex.is_empty() {
        return Err(format!("Pattern '{}' has no regex", pattern.name));
    }
    Ok(())
}
