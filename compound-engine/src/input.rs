//! Dictionary sources
//!
//! Word lists arrive as text with one word per line, as an already split
//! word vector, or from a file, byte buffer or reader. Line handling is
//! thin: surrounding whitespace (including `\r`) is trimmed and
//! blank lines are skipped. Everything else goes to the core index, which
//! decides what a valid word is.

use crate::error::{EngineError, Result};
use std::fs;
use std::io::Read;
use std::path::PathBuf;

/// Unified dictionary input
pub enum Input {
    /// Newline-delimited word list
    Text(String),
    /// Words already split, used as-is
    Words(Vec<String>),
    /// File path to read from
    File(PathBuf),
    /// Bytes to decode as UTF-8 text
    Bytes(Vec<u8>),
    /// Reader stream (for stdin, network, etc.)
    Reader(Box<dyn Read + Send>),
}

impl std::fmt::Debug for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Input::Text(text) => f
                .debug_tuple("Text")
                .field(&format!("<{} bytes>", text.len()))
                .finish(),
            Input::Words(words) => f
                .debug_tuple("Words")
                .field(&format!("<{} words>", words.len()))
                .finish(),
            Input::File(path) => f.debug_tuple("File").field(path).finish(),
            Input::Bytes(bytes) => f
                .debug_tuple("Bytes")
                .field(&format!("<{} bytes>", bytes.len()))
                .finish(),
            Input::Reader(_) => f.debug_tuple("Reader").field(&"<Reader>").finish(),
        }
    }
}

impl Input {
    /// Create input from newline-delimited text
    pub fn from_text<S: Into<String>>(text: S) -> Self {
        Input::Text(text.into())
    }

    /// Create input from individual words
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Input::Words(words.into_iter().map(Into::into).collect())
    }

    /// Create input from a file path
    pub fn from_file<P: Into<PathBuf>>(path: P) -> Self {
        Input::File(path.into())
    }

    /// Create input from bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Input::Bytes(bytes)
    }

    /// Create input from a reader
    pub fn from_reader<R: Read + Send + 'static>(reader: R) -> Self {
        Input::Reader(Box::new(reader))
    }

    /// Resolve the input to its word sequence, in source order
    pub fn into_words(self) -> Result<Vec<String>> {
        let text = match self {
            Input::Words(words) => return Ok(words),
            Input::Text(text) => text,
            Input::File(path) => fs::read_to_string(&path)
                .map_err(|e| EngineError::IoError(format!("Failed to read file {path:?}: {e}")))?,
            Input::Bytes(bytes) => String::from_utf8(bytes)?,
            Input::Reader(mut reader) => {
                let mut buffer = Vec::new();
                reader.read_to_end(&mut buffer)?;
                String::from_utf8(buffer)?
            }
        };
        Ok(split_words(&text))
    }
}

/// Words of newline-delimited text with their 1-based line numbers.
///
/// Surrounding whitespace (including `\r`) is trimmed and blank lines are
/// skipped.
pub fn numbered_words(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, word)| !word.is_empty())
}

/// Split newline-delimited text into words
pub fn split_words(text: &str) -> Vec<String> {
    numbered_words(text)
        .map(|(_, word)| word.to_string())
        .collect()
}

impl From<String> for Input {
    fn from(text: String) -> Self {
        Input::Text(text)
    }
}

impl From<&str> for Input {
    fn from(text: &str) -> Self {
        Input::Text(text.to_string())
    }
}

impl From<Vec<String>> for Input {
    fn from(words: Vec<String>) -> Self {
        Input::Words(words)
    }
}

impl From<PathBuf> for Input {
    fn from(path: PathBuf) -> Self {
        Input::File(path)
    }
}
