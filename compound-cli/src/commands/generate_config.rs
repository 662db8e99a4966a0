//! Generate config command implementation

use crate::config::CliConfig;
use anyhow::{Context, Result};
use clap::Args;
use std::fs;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        println!("Generating configuration template...");
        println!("  Output file: {}", self.output.display());

        let template = Self::generate_template()?;
        fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Use it with:");
        println!(
            "   compound find -i words.txt --config {}",
            self.output.display()
        );

        Ok(())
    }

    /// Default configuration with an explanatory header
    pub fn generate_template() -> Result<String> {
        let body = CliConfig::default().to_toml()?;
        Ok(format!(
            r#"# Compound word finder configuration
#
# [search]
#   mode               = "sequential" | "parallel" | "adaptive"
#   threads            = worker threads for parallel mode (0 = one per core)
#   parallel_threshold = dictionary size in words from which adaptive mode
#                        searches in parallel
#   memoize_failures   = skip word suffixes already known not to split
#
# [output]
#   format     = "text" | "json"
#   show_parts = print the parts the compound splits into
#
# Command-line flags override these values.

{body}"#
        ))
    }
}
