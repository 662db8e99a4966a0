//! Execution strategies for the longest-compound search

use crate::error::Result;
use compound_core::{DictionaryIndex, SearchOptions, SearchOutcome};

#[cfg(feature = "parallel")]
pub mod parallel;
pub mod sequential;

// Re-export executors
#[cfg(feature = "parallel")]
pub use parallel::ParallelExecutor;
pub use sequential::SequentialExecutor;

/// Execution mode selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionMode {
    /// Single-threaded walk of the ranking
    Sequential,
    /// Order-preserving search across a worker pool
    Parallel,
    /// Pick one of the above from the dictionary size
    Adaptive,
}

/// What an executor produced for one dictionary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRun {
    /// The longest compound, or none
    pub outcome: SearchOutcome,
    /// Candidates up to and including the winner (all of them when none
    /// was found)
    pub candidates_checked: usize,
}

/// Trait for execution strategies
pub trait Executor: Send + Sync {
    /// Walk the global ranking longest-first and stop at the first compound
    fn search(&self, index: &DictionaryIndex, options: SearchOptions) -> Result<SearchRun>;

    /// Get the execution mode
    fn mode(&self) -> ExecutionMode;
}

/// Automatically select execution mode based on dictionary size
pub fn auto_select(word_count: usize, threshold: usize) -> ExecutionMode {
    if word_count < 1024 {
        // Very small dictionaries: always sequential
        ExecutionMode::Sequential
    } else if word_count < threshold {
        ExecutionMode::Sequential
    } else {
        #[cfg(feature = "parallel")]
        return ExecutionMode::Parallel;

        #[cfg(not(feature = "parallel"))]
        ExecutionMode::Sequential
    }
}
