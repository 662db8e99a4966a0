//! Command-line entry point for the compound word finder

use anyhow::Result;
use clap::Parser;
use compound_cli::commands::Commands;

/// Find the longest word made of other words in a word list
#[derive(Debug, Parser)]
#[command(name = "compound", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}
