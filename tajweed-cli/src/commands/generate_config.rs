//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Write to FILE instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        let template = Self::generate_template();

        match &self.output {
            Some(path) => {
                std::fs::write(path, template)
                    .with_context(|| format!("Failed to write to {}", path.display()))?;
                eprintln!("✓ Configuration written to {}", path.display());
                eprintln!("  Check it with: tajweed validate-config {}", path.display());
            }
            None => print!("{template}"),
        }

        Ok(())
    }

    /// Default configuration with comments
    pub fn generate_template() -> String {
        r#"# tajweed configuration
# Command-line flags override every value below.

[analysis]
# Rule to apply (see `tajweed list rules`)
rule = "qalqalah"

# Waqf marks treated as stops: "default", "mandatory", "none" or "all"
#   default   - Sala, Qala, Meem, Jeem, three dots and Tah
#   mandatory - Meem and Qala only
#   none      - only the end of an aya is a stop
#   all       - every named mark, including La and Saktah
pause_preset = "default"

# Explicit stop marks, as characters or U+XXXX code points.
# When set, this replaces pause_preset.
# custom_marks = "U+06D8, U+06D7"

# Aya index given to a Bismillah stored with an aya: "same-aya" or "zero"
bismillah_policy = "same-aya"

[output]
# "text", "json" or "markdown"
default_format = "text"

# Instances shown from each end of the list in the text report
sample_size = 10

# Indent JSON output
pretty_json = true

[performance]
# Number of aya segments at which analysis switches to parallel
parallel_threshold = 600

# Worker threads for parallel analysis (0 = one per CPU)
worker_threads = 0
"#
        .to_string()
    }
}
