//! Validate command implementation

use crate::input::{resolve_patterns, WordList};
use crate::progress::ProgressReporter;
use anyhow::Result;
use clap::Args;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Word list files or patterns to check (supports glob, `-` for stdin)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        let sources = resolve_patterns(&self.input)?;
        let words = WordList::load(&sources, &mut ProgressReporter::new(true))?;

        println!("Validating word list: {} words", words.len());

        let invalid = words.invalid_lines();
        if invalid.is_empty() {
            println!("✓ Word list is valid!");
            return Ok(());
        }

        println!("✗ Word list is invalid!");
        for (line, reason) in &invalid {
            println!("  {}: {:?}: {}", line.location(), line.text, reason);
        }
        Err(anyhow::anyhow!(
            "Validation failed: {} invalid words",
            invalid.len()
        ))
    }
}
