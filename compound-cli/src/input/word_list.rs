//! Word lists loaded from one or more sources, with line provenance
//!
//! Each non-blank line is one word. Lines keep their source and line number
//! so that a rejected word can be reported as `path:line`.

use super::{FileReader, InputSource};
use crate::error::CliError;
use crate::progress::ProgressReporter;
use anyhow::Result;
use compound_core::{validate_word, CoreError, DictionaryIndex};
use compound_engine::input::numbered_words;

/// One word together with where it was read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLine {
    /// Display name of the source
    pub source: String,
    /// 1-based line number
    pub line: usize,
    /// The trimmed line text
    pub text: String,
}

impl SourceLine {
    /// `source:line`
    pub fn location(&self) -> String {
        format!("{}:{}", self.source, self.line)
    }
}

/// Words from every source, in load order
#[derive(Debug, Clone, Default)]
pub struct WordList {
    lines: Vec<SourceLine>,
}

impl WordList {
    /// Read every source in order
    pub fn load(sources: &[InputSource], progress: &mut ProgressReporter) -> Result<Self> {
        progress.init_files(sources.len() as u64);

        let mut list = Self::default();
        for source in sources {
            let text = match source {
                InputSource::Stdin => FileReader::read_stdin()?,
                InputSource::File(path) => FileReader::read_text(path)?,
            };
            let name = source.to_string();
            let before = list.lines.len();
            list.push_text(&name, &text);
            log::debug!("loaded {} words from {}", list.lines.len() - before, name);
            progress.file_completed(&name);
        }

        progress.finish();
        Ok(list)
    }

    /// Parse newline-delimited text from a named source
    pub fn push_text(&mut self, source: &str, text: &str) {
        self.lines
            .extend(numbered_words(text).map(|(line, word)| SourceLine {
                source: source.to_string(),
                line,
                text: word.to_string(),
            }));
    }

    /// All loaded lines
    pub fn lines(&self) -> &[SourceLine] {
        &self.lines
    }

    /// Number of words
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether no words were loaded
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Lines that cannot be indexed, with the reason
    pub fn invalid_lines(&self) -> Vec<(&SourceLine, String)> {
        self.lines
            .iter()
            .filter_map(|line| {
                validate_word(&line.text)
                    .err()
                    .map(|reason| (line, reason.to_string()))
            })
            .collect()
    }

    /// Drop invalid lines, logging a warning for each
    pub fn retain_valid(&mut self) -> usize {
        let before = self.lines.len();
        self.lines.retain(|line| match validate_word(&line.text) {
            Ok(()) => true,
            Err(reason) => {
                log::warn!("skipping {}: {}", line.location(), reason);
                false
            }
        });
        before - self.lines.len()
    }

    /// Build the search index, reporting the first bad word by location
    pub fn build_index(&self) -> Result<DictionaryIndex> {
        DictionaryIndex::build(self.lines.iter().map(|line| line.text.as_str())).map_err(
            |err| match err {
                CoreError::InvalidInput { index, reason, .. } => CliError::InvalidWord {
                    location: self
                        .lines
                        .get(index)
                        .map_or_else(|| format!("word {index}"), SourceLine::location),
                    reason: reason.to_string(),
                }
                .into(),
            },
        )
    }
}
