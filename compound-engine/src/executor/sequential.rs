//! Sequential execution strategy

use crate::{
    error::Result,
    executor::{ExecutionMode, Executor, SearchRun},
};
use compound_core::{Compound, DictionaryIndex, SearchOptions, SearchOutcome, Segmenter};

/// Sequential single-threaded executor
#[derive(Debug, Clone, Copy, Default)]
pub struct SequentialExecutor;

impl Executor for SequentialExecutor {
    fn search(&self, index: &DictionaryIndex, options: SearchOptions) -> Result<SearchRun> {
        let segmenter = Segmenter::with_options(index, options);
        let mut candidates_checked = 0;

        for (word_index, word) in index.ranked_words() {
            candidates_checked += 1;
            if let Some(decomposition) = segmenter.decompose(word) {
                if let Some(compound) =
                    Compound::from_decomposition(index, word_index, &decomposition)
                {
                    return Ok(SearchRun {
                        outcome: SearchOutcome::Found(compound),
                        candidates_checked,
                    });
                }
            }
        }

        Ok(SearchRun {
            outcome: SearchOutcome::NotFound,
            candidates_checked,
        })
    }

    fn mode(&self) -> ExecutionMode {
        ExecutionMode::Sequential
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_candidates_until_winner() {
        // Ranking: abcd, abc, ab, a, b, c, d. "abcd" splits first.
        let index = DictionaryIndex::build(["a", "b", "c", "d", "ab", "abc", "abcd"]).unwrap();
        let run = SequentialExecutor
            .search(&index, SearchOptions::default())
            .unwrap();

        assert_eq!(run.outcome.compound().unwrap().word, "abcd");
        assert_eq!(run.candidates_checked, 1);
    }

    #[test]
    fn test_not_found_checks_everything() {
        let index = DictionaryIndex::build(["hello", "world", "hi"]).unwrap();
        let run = SequentialExecutor
            .search(&index, SearchOptions::default())
            .unwrap();

        assert_eq!(run.outcome, SearchOutcome::NotFound);
        assert_eq!(run.candidates_checked, 3);
    }

    #[test]
    fn test_skips_non_compounds_before_winner() {
        let index = DictionaryIndex::build(["caterpillar", "cat", "dog", "catdog"]).unwrap();
        let run = SequentialExecutor
            .search(&index, SearchOptions::default())
            .unwrap();

        assert_eq!(run.outcome.compound().unwrap().word, "catdog");
        assert_eq!(run.candidates_checked, 2);
    }
}
