//! CLI command implementations

use clap::{Subcommand, ValueEnum};

pub mod find;
pub mod generate_config;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Find the longest compound word in a word list
    Find(find::FindArgs),

    /// Check that a word list contains only lowercase ASCII words
    Validate(validate::ValidateArgs),

    /// Generate a configuration file template
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List available output formats
    Formats,

    /// List available execution modes
    Modes,
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> anyhow::Result<()> {
        match self {
            Commands::Find(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
            Commands::List { subcommand } => {
                println!("{}", subcommand.render());
                Ok(())
            }
        }
    }
}

impl ListCommands {
    /// Text printed for the listing
    pub fn render(&self) -> String {
        match self {
            ListCommands::Formats => find::OutputFormat::value_variants()
                .iter()
                .map(|f| format!("{:<6} {}", f.as_str(), f.description()))
                .collect::<Vec<_>>()
                .join("\n"),
            ListCommands::Modes => find::SearchMode::value_variants()
                .iter()
                .filter_map(|m| m.to_possible_value())
                .map(|v| {
                    format!(
                        "{:<10} {}",
                        v.get_name(),
                        v.get_help().map(ToString::to_string).unwrap_or_default()
                    )
                })
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }
}
