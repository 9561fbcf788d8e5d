//! JSON output formatter

use super::{OutputFormatter, RunSummary};
use anyhow::Result;
use std::io::Write;
use tajweed_engine::RuleInstance;

/// JSON formatter - outputs instances as one flat JSON array
///
/// Arabic text is written as raw UTF-8.
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    instances: Vec<RuleInstance>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            instances: Vec::new(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn start(&mut self, summary: &RunSummary) -> Result<()> {
        self.instances.reserve(summary.instances);
        Ok(())
    }

    fn format_instance(&mut self, instance: &RuleInstance) -> Result<()> {
        self.instances.push(instance.clone());
        Ok(())
    }

    // A JSON document holds exactly what it was given
    fn format_omitted(&mut self, _count: usize) -> Result<()> {
        Ok(())
    }

    fn finish(&mut self, _summary: &RunSummary) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.instances)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.instances)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
