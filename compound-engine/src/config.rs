//! Configuration types for the engine

use crate::ExecutionMode;
use compound_core::SearchOptions;

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Execution mode selector
    pub execution_mode: ExecutionMode,
    /// Number of threads for parallel execution (None = auto)
    pub threads: Option<usize>,
    /// Minimum dictionary size (in words) for adaptive mode to go parallel
    pub parallel_threshold: usize,
    /// Options passed to every segmentation search
    pub search: SearchOptions,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            execution_mode: ExecutionMode::Adaptive,
            threads: None,
            parallel_threshold: 50_000,
            search: SearchOptions::default(),
        }
    }
}

impl EngineConfig {
    /// Single-threaded configuration
    pub fn sequential() -> Self {
        Self {
            execution_mode: ExecutionMode::Sequential,
            threads: Some(1),
            parallel_threshold: usize::MAX, // Never use parallel
            ..Self::default()
        }
    }

    /// Always parallel, using every available core
    pub fn parallel() -> Self {
        Self {
            execution_mode: ExecutionMode::Parallel,
            threads: None,
            parallel_threshold: 0,
            ..Self::default()
        }
    }

    /// Check the configuration for values no executor can honour
    pub fn validate(&self) -> crate::Result<()> {
        if self.threads == Some(0) {
            return Err(crate::EngineError::ConfigError(
                "thread count must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
