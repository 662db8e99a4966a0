//! Find command implementation

use crate::config::CliConfig;
use crate::input::{resolve_patterns, WordList};
use crate::output::{JsonFormatter, OutputFormatter, TextFormatter};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::Args;
use compound_engine::{CompoundFinder, EngineConfig, ExecutionMode, SearchOptions};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::time::Instant;

/// Arguments for the find command
#[derive(Debug, Args)]
pub struct FindArgs {
    /// Word list files or patterns (supports glob, `-` for stdin)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Execution mode
    #[arg(short, long, value_enum)]
    pub mode: Option<SearchMode>,

    /// Number of worker threads for parallel mode
    #[arg(short, long, value_name = "N")]
    pub threads: Option<usize>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Skip invalid words instead of failing
    #[arg(long)]
    pub lenient: bool,

    /// Print the parts the compound splits into
    #[arg(long)]
    pub show_parts: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// The word on one line
    Text,
    /// JSON object with parts and metadata
    Json,
}

/// Supported execution modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    /// Single-threaded search
    Sequential,
    /// Search candidates on a worker pool
    Parallel,
    /// Go parallel for large dictionaries only
    Adaptive,
}

impl From<SearchMode> for ExecutionMode {
    fn from(mode: SearchMode) -> Self {
        match mode {
            SearchMode::Sequential => ExecutionMode::Sequential,
            SearchMode::Parallel => ExecutionMode::Parallel,
            SearchMode::Adaptive => ExecutionMode::Adaptive,
        }
    }
}

impl OutputFormat {
    /// Name as accepted on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
        }
    }

    /// One-line description
    pub fn description(&self) -> &'static str {
        match self {
            OutputFormat::Text => "The compound word on one line (parts with --show-parts)",
            OutputFormat::Json => "JSON object with word, parts and search metadata",
        }
    }
}

/// Settings after merging the config file with command-line flags
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSettings {
    /// Engine configuration
    pub engine: EngineConfig,
    /// Output format
    pub format: OutputFormat,
    /// Print parts
    pub show_parts: bool,
}

impl FindArgs {
    /// Execute the find command
    pub fn execute(&self) -> Result<()> {
        // Initialize logging based on verbosity
        self.init_logging()?;

        log::info!("Starting compound word search");
        log::debug!("Arguments: {:?}", self);

        let config = match &self.config {
            Some(path) => CliConfig::from_file(path)?,
            None => CliConfig::default(),
        };
        let settings = self.resolve(&config);

        let sources = resolve_patterns(&self.input)?;
        let mut progress = ProgressReporter::new(self.quiet);
        let mut words = WordList::load(&sources, &mut progress)?;

        if self.lenient {
            let skipped = words.retain_valid();
            if skipped > 0 {
                log::warn!("skipped {skipped} invalid words");
            }
        }
        if words.is_empty() {
            log::warn!("word list is empty");
        }

        let start = Instant::now();
        let index = words.build_index()?;
        let index_time = start.elapsed();

        let finder = CompoundFinder::with_config(settings.engine)?;
        let mut result = finder.find_in_index(&index)?;
        result.metadata.index_time = index_time;

        let mut formatter = self.formatter(settings.format, settings.show_parts)?;
        formatter.format_outcome(&result.outcome, &result.metadata)?;
        formatter.finish()?;

        Ok(())
    }

    /// Merge config file values with flags; flags win
    pub fn resolve(&self, config: &CliConfig) -> ResolvedSettings {
        let mode = self.mode.unwrap_or(config.search.mode);
        let engine = EngineConfig {
            execution_mode: mode.into(),
            threads: self.threads.or_else(|| config.threads()),
            parallel_threshold: config.search.parallel_threshold,
            search: SearchOptions {
                memoize_failures: config.search.memoize_failures,
            },
        };

        ResolvedSettings {
            engine,
            format: self.format.unwrap_or(config.output.format),
            show_parts: self.show_parts || config.output.show_parts,
        }
    }

    fn formatter(&self, format: OutputFormat, show_parts: bool) -> Result<Box<dyn OutputFormatter>> {
        Ok(match &self.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?;
                let writer = BufWriter::new(file);
                match format {
                    OutputFormat::Text => Box::new(TextFormatter::new(writer, show_parts)),
                    OutputFormat::Json => Box::new(JsonFormatter::new(writer)),
                }
            }
            None => match format {
                OutputFormat::Text => Box::new(TextFormatter::stdout(show_parts)),
                OutputFormat::Json => Box::new(JsonFormatter::new(io::stdout())),
            },
        })
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) -> Result<()> {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            // A logger may already be installed when run from tests.
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> FindArgs {
        FindArgs {
            input: vec!["words.txt".to_string()],
            output: None,
            format: None,
            mode: None,
            threads: None,
            config: None,
            lenient: false,
            show_parts: false,
            quiet: true,
            verbose: 0,
        }
    }

    #[test]
    fn test_resolve_defaults() {
        let settings = args().resolve(&CliConfig::default());
        assert_eq!(settings.engine, EngineConfig::default());
        assert_eq!(settings.format, OutputFormat::Text);
        assert!(!settings.show_parts);
    }

    #[test]
    fn test_flags_override_config() {
        let config = CliConfig::from_toml(
            "[search]\nmode = \"parallel\"\nthreads = 8\n[output]\nformat = \"json\"\n",
        )
        .unwrap();

        let mut args = args();
        args.mode = Some(SearchMode::Sequential);
        args.threads = Some(2);
        args.show_parts = true;

        let settings = args.resolve(&config);
        assert_eq!(settings.engine.execution_mode, ExecutionMode::Sequential);
        assert_eq!(settings.engine.threads, Some(2));
        assert_eq!(settings.format, OutputFormat::Json);
        assert!(settings.show_parts);
    }

    #[test]
    fn test_config_values_used_without_flags() {
        let config =
            CliConfig::from_toml("[search]\nmemoize_failures = false\nthreads = 3\n").unwrap();
        let settings = args().resolve(&config);
        assert_eq!(settings.engine.threads, Some(3));
        assert!(!settings.engine.search.memoize_failures);
    }

    #[test]
    fn test_search_mode_conversion() {
        assert_eq!(ExecutionMode::from(SearchMode::Sequential), ExecutionMode::Sequential);
        assert_eq!(ExecutionMode::from(SearchMode::Parallel), ExecutionMode::Parallel);
        assert_eq!(ExecutionMode::from(SearchMode::Adaptive), ExecutionMode::Adaptive);
    }

    #[test]
    fn test_output_format_names() {
        assert_eq!(OutputFormat::Text.as_str(), "text");
        assert_eq!(OutputFormat::Json.as_str(), "json");
        assert!(!OutputFormat::Json.description().is_empty());
    }
}
