//! Dictionary index: the word list ranked longest-first, globally and per
//! initial letter.
//!
//! Rankings hold [`LengthRank`] entries instead of word text. Both views are
//! sorted by descending length with ties kept in input order, so every search
//! over them is reproducible for a given word list.

use crate::error::{CoreError, InvalidWordReason, Result};

/// Number of letter buckets (`'a'..='z'`)
pub const ALPHABET_SIZE: usize = 26;

/// A word length paired with the word's position in the dictionary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LengthRank {
    /// Length of the word in bytes (equal to characters for valid words)
    pub len: usize,
    /// Index into the dictionary
    pub index: usize,
}

/// Check that a word can be indexed: non-empty and only `'a'..='z'`.
pub fn validate_word(word: &str) -> std::result::Result<(), InvalidWordReason> {
    if word.is_empty() {
        return Err(InvalidWordReason::Empty);
    }
    match word.chars().enumerate().find(|(_, ch)| !ch.is_ascii_lowercase()) {
        Some((position, ch)) => Err(InvalidWordReason::InvalidChar { ch, position }),
        None => Ok(()),
    }
}

/// Bucket slot for a lowercase ASCII letter
#[inline]
pub fn letter_slot(letter: u8) -> Option<usize> {
    letter
        .is_ascii_lowercase()
        .then(|| usize::from(letter - b'a'))
}

/// Immutable length/letter index over a dictionary
#[derive(Debug, Clone, Default)]
pub struct DictionaryIndex {
    words: Vec<String>,
    global: Vec<LengthRank>,
    buckets: [Vec<LengthRank>; ALPHABET_SIZE],
}

impl DictionaryIndex {
    /// Validate `words` and build the global ranking and letter buckets.
    ///
    /// Input order does not matter for bucket membership; it only breaks
    /// ties between words of equal length. Fails on the first word that is
    /// empty or contains anything other than `'a'..='z'`.
    pub fn build<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: Vec<String> = words.into_iter().map(Into::into).collect();

        for (index, word) in words.iter().enumerate() {
            validate_word(word).map_err(|reason| CoreError::InvalidInput {
                index,
                word: word.clone(),
                reason,
            })?;
        }

        let mut global = Vec::with_capacity(words.len());
        let mut buckets: [Vec<LengthRank>; ALPHABET_SIZE] = Default::default();

        for (index, word) in words.iter().enumerate() {
            let rank = LengthRank {
                len: word.len(),
                index,
            };
            global.push(rank);
            // Validated above: the first byte is always a lowercase letter.
            if let Some(slot) = letter_slot(word.as_bytes()[0]) {
                buckets[slot].push(rank);
            }
        }

        // Stable sorts keep input order among equal lengths.
        global.sort_by(|a, b| b.len.cmp(&a.len));
        for bucket in buckets.iter_mut() {
            bucket.sort_by(|a, b| b.len.cmp(&a.len));
        }

        log::debug!(
            "indexed {} words, longest {} bytes",
            words.len(),
            global.first().map_or(0, |r| r.len)
        );

        Ok(Self {
            words,
            global,
            buckets,
        })
    }

    /// Number of words in the dictionary
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the dictionary has no words
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Word at a dictionary index
    pub fn word(&self, index: usize) -> Option<&str> {
        self.words.get(index).map(String::as_str)
    }

    /// All words in input order
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Every word, longest first
    pub fn global_ranking(&self) -> &[LengthRank] {
        &self.global
    }

    /// Words starting with `letter`, longest first. Empty for non-letters.
    pub fn bucket(&self, letter: u8) -> &[LengthRank] {
        match letter_slot(letter) {
            Some(slot) => &self.buckets[slot],
            None => &[],
        }
    }

    /// Entries of the `letter` bucket no longer than `max_len`.
    ///
    /// Buckets are sorted by descending length, so the qualifying entries
    /// form a suffix whose start is found by binary search.
    pub fn bucket_candidates(&self, letter: u8, max_len: usize) -> &[LengthRank] {
        let bucket = self.bucket(letter);
        let start = bucket.partition_point(|rank| rank.len > max_len);
        &bucket[start..]
    }

    /// Iterate over `(index, word)` pairs, longest first
    pub fn ranked_words(&self) -> impl Iterator<Item = (usize, &str)> + '_ {
        self.global
            .iter()
            .map(move |rank| (rank.index, self.words[rank.index].as_str()))
    }

    /// Text of a ranking entry
    #[inline]
    pub(crate) fn text(&self, rank: LengthRank) -> &str {
        &self.words[rank.index]
    }
}
