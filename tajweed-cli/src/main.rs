//! Command-line entry point for tajweed

use clap::Parser;
use tajweed_cli::commands::Commands;

/// Find Tajweed rule instances in diacritized Quranic text
#[derive(Debug, Parser)]
#[command(name = "tajweed", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}
