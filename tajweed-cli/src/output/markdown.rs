//! Markdown output formatter

use super::{letter_of, OutputFormatter, RunSummary};
use anyhow::Result;
use std::io::Write;
use tajweed_engine::RuleInstance;

/// Markdown formatter - outputs instances as a table
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    row_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            row_count: 0,
        }
    }
}

fn cell(text: &str) -> String {
    text.replace('|', "\\|")
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn start(&mut self, summary: &RunSummary) -> Result<()> {
        writeln!(self.writer, "# {} instances", summary.rule)?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "| # | Sura | Aya | Source | Word | Letter | Type | Condition |"
        )?;
        writeln!(
            self.writer,
            "|---|------|-----|--------|------|--------|------|-----------|"
        )?;
        Ok(())
    }

    fn format_instance(&mut self, instance: &RuleInstance) -> Result<()> {
        self.row_count += 1;
        writeln!(
            self.writer,
            "| {} | {} | {} | {} | {} | {} | {} | {} |",
            self.row_count,
            instance.sura(),
            instance.aya(),
            instance.source_type(),
            cell(instance.word_context()),
            cell(letter_of(instance)),
            cell(instance.kind()),
            cell(&instance.finding().condition_details)
        )?;
        Ok(())
    }

    fn format_omitted(&mut self, count: usize) -> Result<()> {
        writeln!(self.writer, "| ... | | | | | | | *{count} more* |")?;
        Ok(())
    }

    fn finish(&mut self, summary: &RunSummary) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Total instances: {}*", summary.instances)?;
        for (kind, count) in &summary.by_type {
            writeln!(self.writer, "- {kind}: {count}")?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
