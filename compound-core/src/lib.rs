//! Longest compound word search
//!
//! A compound word is a dictionary word equal to the concatenation of two or
//! more other dictionary words. This crate holds the two pieces with real
//! algorithmic content:
//!
//! - [`DictionaryIndex`]: the word list ranked by descending length, both
//!   globally and per initial letter
//! - [`Segmenter`]: a longest-first backtracking search that decides whether
//!   a word splits into dictionary words
//!
//! Walking the global ranking and stopping at the first word that
//! decomposes yields the longest compound. [`find_longest_compound`] does
//! exactly that; the `compound-engine` crate adds parallel execution and
//! input loading on top.
//!
//! # Example
//!
//! ```rust
//! use compound_core::{find_longest_compound, DictionaryIndex, Segmenter};
//!
//! let index = DictionaryIndex::build(["cat", "dog", "catdog"]).unwrap();
//!
//! let segmenter = Segmenter::new(&index);
//! assert!(segmenter.can_decompose("catdog"));
//! assert!(!segmenter.can_decompose("cat"));
//!
//! let compound = find_longest_compound(&index).unwrap();
//! assert_eq!(compound.word, "catdog");
//! assert_eq!(compound.parts, vec!["cat", "dog"]);
//! ```

pub mod error;
pub mod index;
pub mod search;

pub use error::{CoreError, InvalidWordReason, Result};
pub use index::{validate_word, DictionaryIndex, LengthRank, ALPHABET_SIZE};
pub use search::{Decomposition, SearchOptions, Segmenter};

/// A word found to be a compound, with the parts it was split into
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Compound {
    /// The compound word
    pub word: String,
    /// Position of the word in the dictionary
    pub index: usize,
    /// Matched parts, in order
    pub parts: Vec<String>,
}

impl Compound {
    /// Build from a decomposition of the word at `index`
    pub fn from_decomposition(
        dictionary: &DictionaryIndex,
        index: usize,
        decomposition: &Decomposition,
    ) -> Option<Self> {
        let word = dictionary.word(index)?.to_string();
        let parts = decomposition
            .words(dictionary)
            .into_iter()
            .map(String::from)
            .collect();
        Some(Self { word, index, parts })
    }

    /// Length of the compound word
    pub fn len(&self) -> usize {
        self.word.len()
    }

    /// Whether the word is empty (never the case for a found compound)
    pub fn is_empty(&self) -> bool {
        self.word.is_empty()
    }
}

/// Result of a full dictionary search
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The longest compound word
    Found(Compound),
    /// No word in the dictionary is a compound
    NotFound,
}

impl SearchOutcome {
    /// The compound, if one was found
    pub fn compound(&self) -> Option<&Compound> {
        match self {
            SearchOutcome::Found(compound) => Some(compound),
            SearchOutcome::NotFound => None,
        }
    }

    /// Whether a compound was found
    pub fn is_found(&self) -> bool {
        matches!(self, SearchOutcome::Found(_))
    }
}

/// Find the longest compound word with default search options.
///
/// Returns `None` when no word decomposes.
pub fn find_longest_compound(index: &DictionaryIndex) -> Option<Compound> {
    let segmenter = Segmenter::new(index);
    index.ranked_words().find_map(|(i, word)| {
        segmenter
            .decompose(word)
            .and_then(|d| Compound::from_decomposition(index, i, &d))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scenarios() {
        let cases: [(&[&str], Option<&str>); 4] = [
            (&["cat", "dog", "catdog"], Some("catdog")),
            (&["a", "b", "ab", "abab"], Some("abab")),
            (&["hello", "world"], None),
            (&["rat", "cater", "rate", "caterpillar"], None),
        ];

        for (words, expected) in cases {
            let index = DictionaryIndex::build(words.iter().copied()).unwrap();
            let found = find_longest_compound(&index);
            assert_eq!(found.as_ref().map(|c| c.word.as_str()), expected, "{words:?}");
        }
    }

    #[test]
    fn test_outcome_accessors() {
        let index = DictionaryIndex::build(["ab", "a", "b"]).unwrap();
        let outcome = match find_longest_compound(&index) {
            Some(c) => SearchOutcome::Found(c),
            None => SearchOutcome::NotFound,
        };
        assert!(outcome.is_found());
        let compound = outcome.compound().unwrap();
        assert_eq!(compound.word, "ab");
        assert_eq!(compound.index, 0);
        assert_eq!(compound.len(), 2);
        assert!(!SearchOutcome::NotFound.is_found());
        assert!(SearchOutcome::NotFound.compound().is_none());
    }
}
