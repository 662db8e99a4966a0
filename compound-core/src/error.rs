//! Core error types (deterministic only)

use thiserror::Error;

/// Why a single dictionary word was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidWordReason {
    /// The word has no characters
    Empty,
    /// The word contains a character outside `'a'..='z'`
    InvalidChar {
        /// The offending character
        ch: char,
        /// Character position inside the word
        position: usize,
    },
}

impl std::fmt::Display for InvalidWordReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidWordReason::Empty => write!(f, "word is empty"),
            InvalidWordReason::InvalidChar { ch, position } => {
                write!(
                    f,
                    "character {ch:?} at position {position} is not an ASCII lowercase letter"
                )
            }
        }
    }
}

/// Core errors (no I/O, no external failures)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A supplied word cannot be indexed
    #[error("invalid input at word {index} ({word:?}): {reason}")]
    InvalidInput {
        /// Position of the word in the input sequence
        index: usize,
        /// The rejected word
        word: String,
        /// What is wrong with it
        reason: InvalidWordReason,
    },
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_word_display() {
        let error = CoreError::InvalidInput {
            index: 3,
            word: String::new(),
            reason: InvalidWordReason::Empty,
        };
        assert_eq!(error.to_string(), "invalid input at word 3 (\"\"): word is empty");
    }

    #[test]
    fn test_invalid_char_display() {
        let error = CoreError::InvalidInput {
            index: 0,
            word: "Cat".to_string(),
            reason: InvalidWordReason::InvalidChar { ch: 'C', position: 0 },
        };
        let msg = error.to_string();
        assert!(msg.contains("word 0"));
        assert!(msg.contains("'C'"));
        assert!(msg.contains("not an ASCII lowercase letter"));
    }
}
