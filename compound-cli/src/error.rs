//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// File not found or inaccessible
    FileNotFound(String),
    /// Invalid file pattern
    InvalidPattern(String),
    /// Configuration error
    ConfigError(String),
    /// A word list line cannot be indexed
    InvalidWord {
        /// Where the word came from (`path:line`)
        location: String,
        /// What is wrong with it
        reason: String,
    },
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::FileNotFound(path) => write!(f, "File not found: {path}"),
            CliError::InvalidPattern(pattern) => write!(f, "Invalid file pattern: {pattern}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::InvalidWord { location, reason } => {
                write!(f, "Invalid word at {location}: {reason}")
            }
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_not_found_error_display() {
        let error = CliError::FileNotFound("words.txt".to_string());
        assert_eq!(error.to_string(), "File not found: words.txt");
    }

    #[test]
    fn test_invalid_pattern_error_display() {
        let error = CliError::InvalidPattern("[invalid".to_string());
        assert_eq!(error.to_string(), "Invalid file pattern: [invalid");
    }

    #[test]
    fn test_config_error_display() {
        let error = CliError::ConfigError("unknown field `mode`".to_string());
        assert_eq!(error.to_string(), "Configuration error: unknown field `mode`");
    }

    #[test]
    fn test_invalid_word_display() {
        let error = CliError::InvalidWord {
            location: "words.txt:3".to_string(),
            reason: "word is empty".to_string(),
        };
        assert_eq!(error.to_string(), "Invalid word at words.txt:3: word is empty");
    }

    #[test]
    fn test_downcast_through_anyhow() {
        let result: CliResult<()> = Err(CliError::FileNotFound("x".to_string()).into());
        let err = result.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::FileNotFound(_))
        ));
    }
}
