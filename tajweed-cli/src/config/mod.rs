//! Configuration module
//!
//! A TOML file with `[analysis]`, `[output]` and `[performance]` sections.
//! Every field has a default, so a partial file is valid.

use crate::error::CliError;
use crate::input::FileReader;
use crate::output::OutputFormat;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tajweed_core::{rule_by_name, PausePreset};
use tajweed_engine::BismillahPolicy;

/// CLI configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct CliConfig {
    /// Analysis configuration
    #[serde(default)]
    pub analysis: AnalysisConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Performance configuration
    #[serde(default)]
    pub performance: PerformanceConfig,
}

/// Analysis-related configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Rule to run
    pub rule: String,

    /// Pause-mark preset treated as stops
    pub pause_preset: PausePreset,

    /// Explicit pause marks; overrides `pause_preset` when set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_marks: Option<String>,

    /// Aya index for Bismillah segments
    pub bismillah_policy: BismillahPolicy,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            rule: "qalqalah".to_string(),
            pause_preset: PausePreset::Default,
            custom_marks: None,
            bismillah_policy: BismillahPolicy::SameAya,
        }
    }
}

/// Output-related configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub default_format: OutputFormat,

    /// Instances shown from each end of the list in the console report
    pub sample_size: usize,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: OutputFormat::Text,
            sample_size: 10,
            pretty_json: true,
        }
    }
}

/// Performance-related configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct PerformanceConfig {
    /// Segment count at which analysis switches to parallel
    pub parallel_threshold: usize,

    /// Number of worker threads (0 = auto)
    pub worker_threads: usize,
}

impl Default for PerformanceConfig {
    fn default() -> Self {
        Self {
            parallel_threshold: 600,
            worker_threads: 0,
        }
    }
}

impl CliConfig {
    /// Parse a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: CliConfig = toml::from_str(content).context("Failed to parse configuration")?;
        Ok(config)
    }

    /// Read and parse a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = FileReader::read_text(path)?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Invalid configuration file: {}", path.display()))
    }

    /// Check values that parse but cannot be used
    pub fn validate(&self) -> Result<(), CliError> {
        rule_by_name(&self.analysis.rule).map_err(|e| CliError::ConfigError(e.to_string()))?;

        if let Some(marks) = &self.analysis.custom_marks {
            parse_marks(marks)?;
        }

        Ok(())
    }

    /// Worker threads to request, `None` letting the pool decide
    pub fn worker_threads(&self) -> Option<usize> {
        match self.performance.worker_threads {
            0 => None,
            n => Some(n),
        }
    }
}

/// Parse a custom pause-mark list
///
/// Accepts the marks themselves, optionally separated by whitespace or
/// commas, or `U+XXXX` code points. Unknown marks are accepted; the
/// resulting [`tajweed_core::PauseMarkSet`] logs them.
pub fn parse_marks(input: &str) -> Result<Vec<char>, CliError> {
    let mut marks = Vec::new();

    for token in input.split(|c: char| c == ',' || c.is_whitespace()) {
        if token.is_empty() {
            continue;
        }
        if let Some(hex) = token
            .strip_prefix("U+")
            .or_else(|| token.strip_prefix("u+"))
        {
            let mark = u32::from_str_radix(hex, 16)
                .ok()
                .and_then(char::from_u32)
                .ok_or_else(|| CliError::InvalidMarks(format!("bad code point: {token}")))?;
            marks.push(mark);
        } else {
            marks.extend(token.chars());
        }
    }

    if marks.is_empty() {
        return Err(CliError::InvalidMarks(
            "empty list (use the 'none' preset for end-of-segment stops only)".to_string(),
        ));
    }

    Ok(marks)
}
