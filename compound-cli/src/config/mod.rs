//! Configuration module

use crate::commands::find::{OutputFormat, SearchMode};
use crate::error::CliError;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    /// Search configuration
    #[serde(default)]
    pub search: SearchConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Search-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct SearchConfig {
    /// Execution mode
    pub mode: SearchMode,

    /// Number of worker threads (0 = auto)
    pub threads: usize,

    /// Dictionary size, in words, from which adaptive mode goes parallel
    pub parallel_threshold: usize,

    /// Skip suffixes already known not to split
    pub memoize_failures: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            mode: SearchMode::Adaptive,
            threads: 0,
            parallel_threshold: 50_000,
            memoize_failures: true,
        }
    }
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Default output format
    pub format: OutputFormat,

    /// Print the parts of the compound
    pub show_parts: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            show_parts: false,
        }
    }
}

impl CliConfig {
    /// Load a TOML configuration file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        Self::from_toml(&content)
            .with_context(|| format!("Failed to load config: {}", path.display()))
    }

    /// Parse TOML configuration text
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| CliError::ConfigError(e.message().to_string()).into())
    }

    /// Render as TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }

    /// Thread count with `0` meaning automatic
    pub fn threads(&self) -> Option<usize> {
        (self.search.threads > 0).then_some(self.search.threads)
    }
}
