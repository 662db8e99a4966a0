//! Segmentation search over a [`DictionaryIndex`].
//!
//! A word is a compound when it splits into two or more dictionary words.
//! The search walks the letter bucket of the remaining text longest-first,
//! descending on every prefix match and backtracking when the rest cannot be
//! split. The first split found wins. Depth is tracked on an explicit stack
//! of frames, one per matched part.

use smallvec::SmallVec;

use crate::index::{DictionaryIndex, LengthRank};

/// Dictionary indices of matched parts, in order
type PartStack = SmallVec<[usize; 8]>;

/// Options for [`Segmenter`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOptions {
    /// Remember suffix offsets that cannot be split and skip them later.
    ///
    /// Does not change which decomposition is found, only how much of the
    /// tree is walked to find it.
    pub memoize_failures: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            memoize_failures: true,
        }
    }
}

/// A successful split of a word into dictionary words
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decomposition {
    parts: PartStack,
}

impl Decomposition {
    /// Dictionary indices of the parts, in order
    pub fn indices(&self) -> &[usize] {
        &self.parts
    }

    /// Number of parts (always at least two)
    pub fn part_count(&self) -> usize {
        self.parts.len()
    }

    /// Text of each part, resolved against the index that produced it
    pub fn words<'a>(&self, index: &'a DictionaryIndex) -> Vec<&'a str> {
        self.parts
            .iter()
            .filter_map(|&i| index.word(i))
            .collect()
    }
}

/// One level of the search: a suffix of the word and the bucket entries
/// still to try against it
#[derive(Debug)]
struct Frame<'a> {
    offset: usize,
    candidates: &'a [LengthRank],
    cursor: usize,
}

impl Frame<'_> {
    /// Advance to the next candidate that is a prefix of `remaining`
    fn next_match(&mut self, index: &DictionaryIndex, remaining: &str) -> Option<LengthRank> {
        while let Some(&rank) = self.candidates.get(self.cursor) {
            self.cursor += 1;
            if remaining.starts_with(index.text(rank)) {
                return Some(rank);
            }
        }
        None
    }
}

/// Decides whether words decompose into other dictionary words
#[derive(Debug, Clone, Copy)]
pub struct Segmenter<'a> {
    index: &'a DictionaryIndex,
    options: SearchOptions,
}

impl<'a> Segmenter<'a> {
    /// Create a segmenter with default options
    pub fn new(index: &'a DictionaryIndex) -> Self {
        Self::with_options(index, SearchOptions::default())
    }

    /// Create a segmenter with explicit options
    pub fn with_options(index: &'a DictionaryIndex, options: SearchOptions) -> Self {
        Self { index, options }
    }

    /// The index searched by this segmenter
    pub fn index(&self) -> &'a DictionaryIndex {
        self.index
    }

    /// Whether `word` splits into two or more dictionary words
    pub fn can_decompose(&self, word: &str) -> bool {
        self.decompose(word).is_some()
    }

    /// Split `word` into two or more dictionary words, if possible.
    ///
    /// A word never counts as a compound of itself alone. Words with
    /// characters outside `'a'..='z'` simply fail to decompose.
    pub fn decompose(&self, word: &str) -> Option<Decomposition> {
        if word.is_empty() {
            return None;
        }

        // `failed[p]` is set once the suffix starting at byte `p` is known to
        // be unsplittable. Only offsets past zero are recorded: offset zero is
        // the one position where the part count changes the length filter.
        let mut failed = self
            .options
            .memoize_failures
            .then(|| vec![false; word.len() + 1]);

        // `parts[i]` is the match that led from `frames[i]` to `frames[i + 1]`.
        // The stack lives on the heap, so long words cannot exhaust the
        // thread stack.
        let mut parts = PartStack::new();
        let mut frames = vec![self.frame(word, 0)];

        while let Some(frame) = frames.last_mut() {
            let offset = frame.offset;
            let matched = frame.next_match(self.index, &word[offset..]);

            match matched {
                Some(rank) => {
                    parts.push(rank.index);
                    let next = offset + rank.len;
                    if next == word.len() {
                        if parts.len() >= 2 {
                            return Some(Decomposition { parts });
                        }
                        parts.pop();
                    } else if failed.as_ref().is_some_and(|failed| failed[next]) {
                        parts.pop();
                    } else {
                        frames.push(self.frame(word, next));
                    }
                }
                None => {
                    // Exhausted: backtrack past the part that led here.
                    frames.pop();
                    if offset > 0 {
                        parts.pop();
                        if let Some(failed) = failed.as_mut() {
                            failed[offset] = true;
                        }
                    }
                }
            }
        }

        None
    }

    /// Start a frame for the suffix at `offset`, which must be non-empty.
    ///
    /// The first part must be strictly shorter than the word; any later
    /// part may consume everything that is left.
    fn frame(&self, word: &str, offset: usize) -> Frame<'a> {
        let remaining = word.len() - offset;
        let max_len = if offset == 0 { remaining - 1 } else { remaining };
        Frame {
            offset,
            candidates: self
                .index
                .bucket_candidates(word.as_bytes()[offset], max_len),
            cursor: 0,
        }
    }
}
