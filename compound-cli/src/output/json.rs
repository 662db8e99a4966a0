//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use compound_engine::{SearchMetadata, SearchOutcome};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// JSON formatter - outputs the result as a single object
pub struct JsonFormatter<W: Write> {
    writer: W,
    result: Option<ResultData>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ResultData {
    /// Whether a compound was found
    pub found: bool,
    /// The compound word
    pub word: Option<String>,
    /// Parts of the compound, in order
    pub parts: Vec<String>,
    /// Length of the compound word
    pub length: usize,
    /// Search statistics
    pub metadata: MetadataData,
}

/// Search statistics for JSON output
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct MetadataData {
    /// Execution mode used
    pub mode: String,
    /// Words in the dictionary
    pub words_indexed: usize,
    /// Candidates up to and including the winner
    pub candidates_checked: usize,
    /// Index construction time in milliseconds
    pub index_time_ms: f64,
    /// Search time in milliseconds
    pub search_time_ms: f64,
}

impl ResultData {
    /// Collect output data from a search result
    pub fn new(outcome: &SearchOutcome, metadata: &SearchMetadata) -> Self {
        let compound = outcome.compound();
        Self {
            found: compound.is_some(),
            word: compound.map(|c| c.word.clone()),
            parts: compound.map(|c| c.parts.clone()).unwrap_or_default(),
            length: compound.map_or(0, |c| c.len()),
            metadata: MetadataData {
                mode: format!("{:?}", metadata.mode_used).to_lowercase(),
                words_indexed: metadata.words_indexed,
                candidates_checked: metadata.candidates_checked,
                index_time_ms: metadata.index_time.as_secs_f64() * 1000.0,
                search_time_ms: metadata.search_time.as_secs_f64() * 1000.0,
            },
        }
    }
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            result: None,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_outcome(&mut self, outcome: &SearchOutcome, metadata: &SearchMetadata) -> Result<()> {
        self.result = Some(ResultData::new(outcome, metadata));
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if let Some(result) = &self.result {
            serde_json::to_writer_pretty(&mut self.writer, result)?;
            writeln!(self.writer)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::test_support::{found, metadata};

    fn render(outcome: &SearchOutcome) -> ResultData {
        let mut buffer = Vec::new();
        let mut formatter = JsonFormatter::new(&mut buffer);
        formatter.format_outcome(outcome, &metadata()).unwrap();
        formatter.finish().unwrap();
        serde_json::from_slice(&buffer).unwrap()
    }

    #[test]
    fn test_found() {
        let data = render(&found());
        assert!(data.found);
        assert_eq!(data.word.as_deref(), Some("catdog"));
        assert_eq!(data.parts, vec!["cat", "dog"]);
        assert_eq!(data.length, 6);
        assert_eq!(data.metadata.mode, "sequential");
        assert_eq!(data.metadata.words_indexed, 3);
    }

    #[test]
    fn test_not_found() {
        let data = render(&SearchOutcome::NotFound);
        assert!(!data.found);
        assert_eq!(data.word, None);
        assert!(data.parts.is_empty());
        assert_eq!(data.length, 0);
    }

    #[test]
    fn test_nothing_written_without_result() {
        let mut buffer = Vec::new();
        JsonFormatter::new(&mut buffer).finish().unwrap();
        assert!(buffer.is_empty());
    }
}
