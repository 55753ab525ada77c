//! Configuration file support
//!
//! An optional TOML file supplies defaults for every scan option. Values
//! given on the command line take precedence over the file, and the file
//! takes precedence over the built-in defaults.
//!
//! ```toml
//! [scan]
//! min_length = 8
//! punctuation = false
//! offsets = true
//! trailing = "flush"
//! ```

use crate::error::{CliError, CliResult};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use ustrings_core::config::defaults;
use ustrings_core::TrailingRunPolicy;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    /// Scan configuration
    #[serde(default)]
    pub scan: ScanConfig,
}

/// Scan-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct ScanConfig {
    /// Minimum run length in characters
    pub min_length: usize,

    /// Include letters in printable strings
    pub letters: bool,

    /// Include numbers in printable strings
    pub numbers: bool,

    /// Include space characters in printable strings
    pub space: bool,

    /// Include punctuation in printable strings
    pub punctuation: bool,

    /// Prefix each string with its byte offset
    pub offsets: bool,

    /// Handling of a string still open at end of file
    pub trailing: TrailingMode,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            min_length: defaults::MIN_RUN_LENGTH,
            letters: true,
            numbers: true,
            space: true,
            punctuation: true,
            offsets: false,
            trailing: TrailingMode::Discard,
        }
    }
}

/// Serialized form of [`TrailingRunPolicy`]
#[derive(Debug, Clone, Copy, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TrailingMode {
    #[default]
    Discard,
    Flush,
}

impl From<TrailingMode> for TrailingRunPolicy {
    fn from(mode: TrailingMode) -> Self {
        match mode {
            TrailingMode::Discard => TrailingRunPolicy::Discard,
            TrailingMode::Flush => TrailingRunPolicy::Flush,
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::parse(&content)
            .with_context(|| format!("Failed to load config file: {}", path.display()))
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self, CliError> {
        toml::from_str(content).map_err(|e| CliError::Config(e.to_string()))
    }
}
