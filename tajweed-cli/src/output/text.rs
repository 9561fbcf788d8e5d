//! Plain text output formatter

use super::{letter_of, OutputFormatter, RunSummary};
use anyhow::Result;
use std::io::Write;
use tajweed_engine::RuleInstance;

/// Text formatter - one line per instance between a header and totals
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn start(&mut self, summary: &RunSummary) -> Result<()> {
        if summary.instances == 0 {
            writeln!(self.writer, "No {} instances found.", summary.rule)?;
        } else {
            writeln!(
                self.writer,
                "Found {} {} instances in {} segments.",
                summary.instances, summary.rule, summary.segments
            )?;
            writeln!(self.writer)?;
        }
        Ok(())
    }

    fn format_instance(&mut self, instance: &RuleInstance) -> Result<()> {
        writeln!(
            self.writer,
            "S{}:A{} ({}) W:'{}', L:'{}', T:{}, C:{}",
            instance.sura(),
            instance.aya(),
            instance.source_type(),
            instance.word_context(),
            letter_of(instance),
            instance.kind(),
            instance.finding().condition_details
        )?;
        Ok(())
    }

    fn format_omitted(&mut self, _count: usize) -> Result<()> {
        writeln!(self.writer, "...")?;
        Ok(())
    }

    fn finish(&mut self, summary: &RunSummary) -> Result<()> {
        if !summary.by_type.is_empty() {
            writeln!(self.writer)?;
            writeln!(self.writer, "By type:")?;
            for (kind, count) in &summary.by_type {
                writeln!(self.writer, "  {kind}: {count}")?;
            }
        }
        if !summary.skipped.is_empty() {
            writeln!(self.writer)?;
            writeln!(self.writer, "Skipped {} segments:", summary.skipped.len())?;
            for skip in &summary.skipped {
                writeln!(
                    self.writer,
                    "  S{}:A{} ({}): {}",
                    skip.sura, skip.aya, skip.source_type, skip.reason
                )?;
            }
        }
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::test_support::{instances, summary};
    use crate::output::write_instances;

    #[test]
    fn test_instance_line() {
        let mut buf = Vec::new();
        {
            let mut formatter = TextFormatter::new(&mut buf);
            write_instances(&mut formatter, &instances(1), None, &summary(1)).unwrap();
        }
        let out = String::from_utf8(buf).unwrap();
        assert!(out.starts_with("Found 1 qalqalah instances in 1 segments."));
        assert!(out.contains(
            "S1:A1 (text) W:'qad', L:'qa', T:Sughra (Minor), C:Explicit Sukoon mid-speech."
        ));
        assert!(out.contains("  Sughra (Minor): 1"));
    }

    #[test]
    fn test_sample_gap_marker() {
        let mut buf = Vec::new();
        {
            let mut formatter = TextFormatter::new(&mut buf);
            write_instances(&mut formatter, &instances(5), Some(1), &summary(5)).unwrap();
        }
        let out = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = out.lines().filter(|l| l.starts_with("S1:")).collect();
        assert_eq!(lines, vec![
            "S1:A1 (text) W:'qad', L:'qa', T:Sughra (Minor), C:Explicit Sukoon mid-speech.",
            "S1:A5 (text) W:'qad', L:'qa', T:Sughra (Minor), C:Explicit Sukoon mid-speech.",
        ]);
        assert!(out.contains("\n...\n"));
    }

    #[test]
    fn test_empty_run() {
        let mut buf = Vec::new();
        {
            let mut formatter = TextFormatter::new(&mut buf);
            let mut empty = summary(0);
            empty.by_type.clear();
            write_instances(&mut formatter, &[], Some(10), &empty).unwrap();
        }
        assert_eq!(String::from_utf8(buf).unwrap(), "No qalqalah instances found.\n");
    }
}
