//! Output formatting module

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;
use tajweed_engine::{RuleInstance, RunOutput, SkippedSegment};

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Called once before any instance
    fn start(&mut self, summary: &RunSummary) -> Result<()>;

    /// Format and output a single rule instance
    fn format_instance(&mut self, instance: &RuleInstance) -> Result<()>;

    /// Mark `count` instances left out of a sample
    fn format_omitted(&mut self, count: usize) -> Result<()>;

    /// Finalize output (e.g., write the JSON array, print totals)
    fn finish(&mut self, summary: &RunSummary) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Sample of instances with a summary
    Text,
    /// JSON array of every instance
    Json,
    /// Markdown table of every instance
    Markdown,
}

impl OutputFormat {
    /// Build the formatter for this format over `writer`
    pub fn formatter<W>(self, writer: W, pretty_json: bool) -> Box<dyn OutputFormatter>
    where
        W: Write + Send + Sync + 'static,
    {
        match self {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer, pretty_json)),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
        }
    }
}

/// Run-level figures shown around the instance list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Rule name
    pub rule: String,
    /// Corpus files read
    pub files: usize,
    /// Segments handed to the engine
    pub segments: usize,
    /// Total instances found
    pub instances: usize,
    /// Instance count per type label
    pub by_type: Vec<(String, usize)>,
    /// Segments left out of the analysis
    pub skipped: Vec<SkippedSegment>,
    /// Corpus loading diagnostics
    pub diagnostics: usize,
}

impl RunSummary {
    pub fn new(rule: &str, files: usize, diagnostics: usize, output: &RunOutput) -> Self {
        Self {
            rule: rule.to_string(),
            files,
            segments: output.stats.segments_total,
            instances: output.instances.len(),
            by_type: output.counts_by_type(),
            skipped: output.skipped.clone(),
            diagnostics,
        }
    }
}

/// Feed `instances` to `formatter`
///
/// With a sample size `n` and more than `2n` instances, only the first and
/// last `n` are written, with the gap marked in between.
pub fn write_instances(
    formatter: &mut dyn OutputFormatter,
    instances: &[RuleInstance],
    sample: Option<usize>,
    summary: &RunSummary,
) -> Result<()> {
    formatter.start(summary)?;

    match sample {
        Some(n) if instances.len() > 2 * n => {
            for instance in &instances[..n] {
                formatter.format_instance(instance)?;
            }
            formatter.format_omitted(instances.len() - 2 * n)?;
            for instance in &instances[instances.len() - n..] {
                formatter.format_instance(instance)?;
            }
        }
        _ => {
            for instance in instances {
                formatter.format_instance(instance)?;
            }
        }
    }

    formatter.finish(summary)
}

/// The matched letter with its diacritics, as reported by the rule
pub(crate) fn letter_of(instance: &RuleInstance) -> &str {
    let finding = instance.finding();
    finding
        .field("full_letter_complex")
        .or_else(|| finding.field("qalqalah_letter"))
        .unwrap_or("N/A")
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::RunSummary;
    use tajweed_core::RuleFinding;
    use tajweed_engine::{ResultAssembler, RuleInstance, Segment};

    pub fn instances(count: usize) -> Vec<RuleInstance> {
        (0..count)
            .map(|i| {
                let segment = Segment::text(1, i as u32 + 1, "qad aflaha");
                let chars: Vec<char> = segment.text.chars().collect();
                ResultAssembler::new(&segment, &chars).instance(
                    0,
                    RuleFinding::new("Sughra (Minor)", "Explicit Sukoon mid-speech.")
                        .with_field("qalqalah_letter", "q")
                        .with_field("full_letter_complex", "qa"),
                )
            })
            .collect()
    }

    pub fn summary(count: usize) -> RunSummary {
        RunSummary {
            rule: "qalqalah".to_string(),
            files: 1,
            segments: count,
            instances: count,
            by_type: vec![("Sughra (Minor)".to_string(), count)],
            skipped: Vec::new(),
            diagnostics: 0,
        }
    }
}
