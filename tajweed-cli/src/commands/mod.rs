//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;
use tajweed_core::chars::{self, NAMED_MARKS};
use tajweed_core::{PauseMarkSet, PausePreset, AVAILABLE_RULES};

pub mod find;
pub mod generate_config;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Find rule instances in corpus files
    Find(find::FindArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },

    /// Print a commented default configuration file
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// Check a configuration file
    ValidateConfig(validate::ValidateArgs),
}

/// List subcommands
#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ListCommands {
    /// List available rules
    Rules,

    /// List Waqf marks and the presets that treat them as stops
    PauseMarks,

    /// List available output formats
    Formats,
}

impl Commands {
    /// Execute the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Find(args) => args.execute(),
            Commands::List { subcommand } => {
                print!("{}", subcommand.render());
                Ok(())
            }
            Commands::GenerateConfig(args) => args.execute(),
            Commands::ValidateConfig(args) => args.execute(),
        }
    }
}

impl ListCommands {
    /// Listing text for this subcommand
    pub fn render(&self) -> String {
        let mut out = String::new();
        match self {
            ListCommands::Rules => {
                out.push_str("Available rules:\n");
                for (name, description) in AVAILABLE_RULES {
                    out.push_str(&format!("  {name:<12} {description}\n"));
                }
            }
            ListCommands::PauseMarks => {
                out.push_str("Waqf marks:\n");
                let presets: Vec<(PausePreset, PauseMarkSet)> = PausePreset::ALL
                    .into_iter()
                    .map(|preset| (preset, PauseMarkSet::preset(preset)))
                    .collect();
                for mark in NAMED_MARKS {
                    let name = chars::pause_mark_name(mark).unwrap_or_default();
                    let used_by: Vec<&str> = presets
                        .iter()
                        .filter(|(_, set)| set.contains(mark))
                        .map(|(preset, _)| preset.as_str())
                        .collect();
                    out.push_str(&format!(
                        "  U+{:04X} {mark}  {name:<24} [{}]\n",
                        mark as u32,
                        used_by.join(", ")
                    ));
                }
                out.push_str("\nPresets:\n");
                for preset in PausePreset::ALL {
                    out.push_str(&format!("  {:<10} {}\n", preset.as_str(), preset.description()));
                }
            }
            ListCommands::Formats => {
                out.push_str("Available output formats:\n");
                out.push_str("  text      Sample of instances with a summary (default)\n");
                out.push_str("  json      JSON array of every instance\n");
                out.push_str("  markdown  Markdown table of every instance\n");
            }
        }
        out
    }
}
