//! Output formatting module

use anyhow::Result;
use compound_engine::{SearchMetadata, SearchOutcome};

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output the search result
    fn format_outcome(&mut self, outcome: &SearchOutcome, metadata: &SearchMetadata)
        -> Result<()>;

    /// Finalize output
    fn finish(&mut self) -> Result<()>;
}

/// Message used when no word decomposes
pub const NOT_FOUND_MESSAGE: &str = "No compound word found";

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;

#[cfg(test)]
pub(crate) mod test_support {
    use compound_engine::{Compound, ExecutionMode, SearchMetadata, SearchOutcome};
    use std::time::Duration;

    pub fn metadata() -> SearchMetadata {
        SearchMetadata {
            mode_used: ExecutionMode::Sequential,
            words_indexed: 3,
            candidates_checked: 1,
            index_time: Duration::from_millis(2),
            search_time: Duration::from_millis(1),
        }
    }

    pub fn found() -> SearchOutcome {
        SearchOutcome::Found(Compound {
            word: "catdog".to_string(),
            index: 2,
            parts: vec!["cat".to_string(), "dog".to_string()],
        })
    }
}
