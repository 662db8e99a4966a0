//! File pattern resolution using glob

use crate::error::CliError;
use anyhow::Result;
use glob::glob;
use std::fmt;
use std::path::PathBuf;

/// Pattern that stands for standard input
pub const STDIN_PATTERN: &str = "-";

/// Where a word list comes from
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum InputSource {
    /// Standard input
    Stdin,
    /// A file on disk
    File(PathBuf),
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputSource::Stdin => write!(f, "<stdin>"),
            InputSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Resolve file patterns to input sources.
///
/// Files from all patterns are sorted and deduplicated; `-` adds stdin once,
/// ahead of any files.
pub fn resolve_patterns(patterns: &[String]) -> Result<Vec<InputSource>> {
    let mut files = Vec::new();
    let mut stdin = false;

    for pattern in patterns {
        if pattern == STDIN_PATTERN {
            stdin = true;
            continue;
        }

        let paths = glob(pattern).map_err(|_| CliError::InvalidPattern(pattern.clone()))?;
        let mut matched = false;

        for path_result in paths {
            let path = path_result
                .map_err(|e| CliError::FileNotFound(e.path().display().to_string()))?;

            if path.is_file() {
                matched = true;
                files.push(path);
            }
        }

        if !matched {
            return Err(CliError::FileNotFound(pattern.clone()).into());
        }
    }

    // Remove duplicates and sort
    files.sort();
    files.dedup();

    let mut sources = Vec::with_capacity(files.len() + usize::from(stdin));
    if stdin {
        sources.push(InputSource::Stdin);
    }
    sources.extend(files.into_iter().map(InputSource::File));

    if sources.is_empty() {
        anyhow::bail!("No files found matching the provided patterns");
    }

    Ok(sources)
}
