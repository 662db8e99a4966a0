//! Parallel execution strategy

use crate::{
    error::{EngineError, Result},
    executor::{ExecutionMode, Executor, SearchRun},
};
use compound_core::{Compound, DictionaryIndex, SearchOptions, SearchOutcome, Segmenter};
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};

/// Parallel multi-threaded executor
///
/// Candidates are tested concurrently, but the result is the earliest match
/// in ranking order, so it always equals what [`super::SequentialExecutor`]
/// reports.
#[derive(Debug)]
pub struct ParallelExecutor {
    pool: ThreadPool,
}

impl ParallelExecutor {
    /// Create a new parallel executor with its own pool
    pub fn new(threads: Option<usize>) -> Result<Self> {
        let threads = threads.unwrap_or_else(num_cpus::get).max(1);
        let pool = ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|i| format!("compound-worker-{i}"))
            .build()
            .map_err(|e| EngineError::ThreadPool(e.to_string()))?;

        log::debug!("parallel executor using {threads} threads");
        Ok(Self { pool })
    }

    /// Number of worker threads
    pub fn threads(&self) -> usize {
        self.pool.current_num_threads()
    }
}

impl Executor for ParallelExecutor {
    fn search(&self, index: &DictionaryIndex, options: SearchOptions) -> Result<SearchRun> {
        let segmenter = Segmenter::with_options(index, options);
        let ranking = index.global_ranking();

        // find_map_first keeps ranking order: a shorter candidate finishing
        // early never beats a longer one still being searched.
        let winner = self.pool.install(|| {
            ranking
                .par_iter()
                .enumerate()
                .find_map_first(|(position, rank)| {
                    let word = index.word(rank.index)?;
                    let decomposition = segmenter.decompose(word)?;
                    Compound::from_decomposition(index, rank.index, &decomposition)
                        .map(|compound| (position, compound))
                })
        });

        Ok(match winner {
            Some((position, compound)) => SearchRun {
                outcome: SearchOutcome::Found(compound),
                candidates_checked: position + 1,
            },
            None => SearchRun {
                outcome: SearchOutcome::NotFound,
                candidates_checked: ranking.len(),
            },
        })
    }

    fn mode(&self) -> ExecutionMode {
        ExecutionMode::Parallel
    }
}
