//! Validate-config command implementation

use crate::config::CliConfig;
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use tajweed_core::PauseMarkSet;

/// Arguments for the validate-config command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the configuration file to validate
    #[arg(value_name = "FILE")]
    pub config: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate-config command
    pub fn execute(&self) -> Result<()> {
        println!("Validating configuration: {}", self.config.display());

        let checked = CliConfig::from_file(&self.config)
            .and_then(|config| config.validate().map(|()| config).map_err(Into::into));

        match checked {
            Ok(config) => {
                println!("✓ Configuration is valid!");
                println!("  Rule: {}", config.analysis.rule);
                match &config.analysis.custom_marks {
                    Some(marks) => println!("  Stop marks: {marks}"),
                    None => println!(
                        "  Stop marks: {} ({} marks)",
                        config.analysis.pause_preset,
                        PauseMarkSet::preset(config.analysis.pause_preset).len()
                    ),
                }
                println!("  Bismillah: {}", config.analysis.bismillah_policy.as_str());
                Ok(())
            }
            Err(e) => {
                println!("✗ Configuration is invalid!");
                println!("  Error: {e:#}");
                Err(anyhow::anyhow!("Validation failed: {e}"))
            }
        }
    }
}
