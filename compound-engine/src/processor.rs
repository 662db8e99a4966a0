//! Main compound finder and builder

use crate::{
    config::EngineConfig,
    error::Result,
    executor::{auto_select, ExecutionMode, Executor, SequentialExecutor},
    input::Input,
};
use compound_core::{DictionaryIndex, SearchOutcome};
use std::time::{Duration, Instant};

/// Finds the longest compound word in a dictionary
#[derive(Debug, Clone)]
pub struct CompoundFinder {
    config: EngineConfig,
}

/// Search result with metadata
#[derive(Debug, Clone)]
pub struct Output {
    /// The longest compound, or none
    pub outcome: SearchOutcome,
    /// Processing metadata
    pub metadata: SearchMetadata,
}

/// Processing metadata
#[derive(Debug, Clone)]
pub struct SearchMetadata {
    /// Execution mode that was actually used
    pub mode_used: ExecutionMode,
    /// Words in the dictionary
    pub words_indexed: usize,
    /// Candidates up to and including the winner
    pub candidates_checked: usize,
    /// Time spent building the index
    pub index_time: Duration,
    /// Time spent searching
    pub search_time: Duration,
}

impl CompoundFinder {
    /// Create a new finder with default configuration
    pub fn new() -> Self {
        Self {
            config: EngineConfig::default(),
        }
    }

    /// Create a finder with custom configuration
    pub fn with_config(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Create a builder
    pub fn builder() -> CompoundFinderBuilder {
        CompoundFinderBuilder::new()
    }

    /// Get the current configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Load the input, index it and search it
    pub fn find(&self, input: Input) -> Result<Output> {
        let words = input.into_words()?;

        let start = Instant::now();
        let index = DictionaryIndex::build(words)?;
        let index_time = start.elapsed();

        let mut output = self.find_in_index(&index)?;
        output.metadata.index_time = index_time;
        Ok(output)
    }

    /// Search words that are already in memory
    pub fn find_words<I, S>(&self, words: I) -> Result<Output>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.find(Input::from_words(words))
    }

    /// Search an index built by the caller
    pub fn find_in_index(&self, index: &DictionaryIndex) -> Result<Output> {
        let mode = self.resolve_mode(index.len());
        log::info!("searching {} words ({:?})", index.len(), mode);

        let executor = self.executor(mode)?;
        let start = Instant::now();
        let run = executor.search(index, self.config.search)?;
        let search_time = start.elapsed();

        match run.outcome.compound() {
            Some(compound) => log::info!(
                "longest compound: {} ({} parts, {} candidates checked)",
                compound.word,
                compound.parts.len(),
                run.candidates_checked
            ),
            None => log::info!("no compound word among {} candidates", run.candidates_checked),
        }

        Ok(Output {
            outcome: run.outcome,
            metadata: SearchMetadata {
                mode_used: executor.mode(),
                words_indexed: index.len(),
                candidates_checked: run.candidates_checked,
                index_time: Duration::ZERO,
                search_time,
            },
        })
    }

    /// Resolve `Adaptive` to a concrete mode
    fn resolve_mode(&self, word_count: usize) -> ExecutionMode {
        match self.config.execution_mode {
            ExecutionMode::Adaptive => {
                if self.config.threads == Some(1) {
                    ExecutionMode::Sequential
                } else {
                    auto_select(word_count, self.config.parallel_threshold)
                }
            }
            #[cfg(not(feature = "parallel"))]
            ExecutionMode::Parallel => {
                log::warn!("parallel feature disabled, searching sequentially");
                ExecutionMode::Sequential
            }
            mode => mode,
        }
    }

    fn executor(&self, mode: ExecutionMode) -> Result<Box<dyn Executor>> {
        match mode {
            #[cfg(feature = "parallel")]
            ExecutionMode::Parallel => Ok(Box::new(crate::executor::ParallelExecutor::new(
                self.config.threads,
            )?)),
            _ => Ok(Box::new(SequentialExecutor)),
        }
    }
}

impl Default for CompoundFinder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for CompoundFinder
#[derive(Debug, Default)]
pub struct CompoundFinderBuilder {
    config: EngineConfig,
}

impl CompoundFinderBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self {
            config: EngineConfig::default(),
        }
    }

    /// Start from an existing configuration
    pub fn config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the execution mode
    pub fn execution_mode(mut self, mode: ExecutionMode) -> Self {
        self.config.execution_mode = mode;
        self
    }

    /// Set the thread count
    pub fn threads(mut self, count: Option<usize>) -> Self {
        self.config.threads = count;
        self
    }

    /// Set the adaptive parallel threshold, in words
    pub fn parallel_threshold(mut self, words: usize) -> Self {
        self.config.parallel_threshold = words;
        self
    }

    /// Enable or disable the failed-suffix memo
    pub fn memoize_failures(mut self, enabled: bool) -> Self {
        self.config.search.memoize_failures = enabled;
        self
    }

    /// Build the finder
    pub fn build(self) -> Result<CompoundFinder> {
        CompoundFinder::with_config(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_text() {
        let finder = CompoundFinder::new();
        let output = finder.find(Input::from_text("cat\ndog\ncatdog\n")).unwrap();

        let compound = output.outcome.compound().unwrap();
        assert_eq!(compound.word, "catdog");
        assert_eq!(compound.parts, vec!["cat", "dog"]);
        assert_eq!(output.metadata.words_indexed, 3);
        assert_eq!(output.metadata.mode_used, ExecutionMode::Sequential);
    }

    #[test]
    fn test_invalid_input_is_an_error() {
        let err = CompoundFinder::new()
            .find_words(["cat", "Dog"])
            .unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_not_found_is_not_an_error() {
        let output = CompoundFinder::new().find_words(["hello", "world"]).unwrap();
        assert_eq!(output.outcome, SearchOutcome::NotFound);
    }

    #[test]
    fn test_builder() {
        let finder = CompoundFinder::builder()
            .execution_mode(ExecutionMode::Sequential)
            .threads(Some(2))
            .parallel_threshold(10)
            .memoize_failures(false)
            .build()
            .unwrap();

        assert_eq!(finder.config().execution_mode, ExecutionMode::Sequential);
        assert_eq!(finder.config().threads, Some(2));
        assert_eq!(finder.config().parallel_threshold, 10);
        assert!(!finder.config().search.memoize_failures);
    }

    #[test]
    fn test_builder_rejects_zero_threads() {
        assert!(CompoundFinder::builder().threads(Some(0)).build().is_err());
    }

    #[test]
    fn test_adaptive_single_thread_stays_sequential() {
        let finder = CompoundFinder::builder()
            .threads(Some(1))
            .parallel_threshold(0)
            .build()
            .unwrap();
        assert_eq!(finder.resolve_mode(1_000_000), ExecutionMode::Sequential);
    }

    #[test]
    fn test_executor_matches_resolved_mode() {
        let finder = CompoundFinder::builder()
            .execution_mode(ExecutionMode::Sequential)
            .build()
            .unwrap();
        let executor = finder.executor(finder.resolve_mode(10)).unwrap();
        assert_eq!(executor.mode(), ExecutionMode::Sequential);

        #[cfg(feature = "parallel")]
        {
            let executor = finder.executor(ExecutionMode::Parallel).unwrap();
            assert_eq!(executor.mode(), ExecutionMode::Parallel);
        }
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_explicit_parallel() {
        let finder = CompoundFinder::builder()
            .execution_mode(ExecutionMode::Parallel)
            .threads(Some(2))
            .build()
            .unwrap();
        let output = finder.find_words(["a", "b", "ab", "abab"]).unwrap();

        assert_eq!(output.metadata.mode_used, ExecutionMode::Parallel);
        assert_eq!(output.outcome.compound().unwrap().word, "abab");
    }
}
