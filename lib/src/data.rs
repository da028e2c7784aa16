use crate::pattern::Pattern;
use rayon::prelude::*;
use std::io::BufRead;
use std::io::Result;
use std::sync::Arc;

/// Contains all the words read from the word source.
#[derive(Debug, Clone)]
pub struct WordBank {
    all_words: Vec<Arc<str>>,
}

impl WordBank {
    /// Constructs a new `WordBank` by reading words from the given reader.
    ///
    /// Words are whitespace-separated. Each word is lower-cased and stripped
    /// of everything that is not an ASCII letter; words that end up empty are
    /// dropped and duplicates collapse. The result is stored sorted, so
    /// everything downstream enumerates words in a reproducible order.
    pub fn from_reader<R: BufRead>(word_reader: &mut R) -> Result<Self> {
        let mut all_words: Vec<Arc<str>> = Vec::new();
        for maybe_line in word_reader.lines() {
            let line = maybe_line?;
            all_words.extend(line.split_whitespace().filter_map(normalize_word));
        }
        all_words.sort_unstable();
        all_words.dedup();
        Ok(WordBank { all_words })
    }

    /// Constructs a new `WordBank` from the given words, with the same
    /// normalization as [`WordBank::from_reader`].
    pub fn from_iterator<S, I>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut all_words: Vec<Arc<str>> = words
            .into_iter()
            .filter_map(|word| normalize_word(word.as_ref()))
            .collect();
        all_words.sort_unstable();
        all_words.dedup();
        WordBank { all_words }
    }

    /// Retrieves the full list of words, sorted lexicographically.
    pub fn words(&self) -> &[Arc<str>] {
        &self.all_words
    }

    /// Returns the number of words in the bank.
    pub fn len(&self) -> usize {
        self.all_words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.all_words.is_empty()
    }
}

fn normalize_word(raw: &str) -> Option<Arc<str>> {
    let word: String = raw
        .chars()
        .filter(char::is_ascii_alphabetic)
        .map(|letter| letter.to_ascii_lowercase())
        .collect();
    if word.is_empty() {
        None
    } else {
        Some(Arc::from(word.as_str()))
    }
}

/// The words that are still possible answers, all of one length.
///
/// Members stay in lexicographic order; the partitioner relies on that to
/// make its first-seen tie-break reproducible. A pool only ever shrinks.
#[derive(Debug, Clone)]
pub struct CandidatePool {
    words: Vec<Arc<str>>,
}

impl CandidatePool {
    /// Creates a pool holding every bank word of exactly `length` letters.
    ///
    /// The result may be empty; callers decide whether that is an error.
    pub fn from_bank(bank: &WordBank, length: usize) -> CandidatePool {
        CandidatePool {
            words: bank
                .words()
                .iter()
                .filter(|word| word.len() == length)
                .map(Arc::clone)
                .collect(),
        }
    }

    /// Retrieves the remaining words, in lexicographic order.
    pub fn words(&self) -> &[Arc<str>] {
        &self.words
    }

    /// Returns the number of remaining words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Removes every word that contains `letter`.
    pub fn filter_by_absence(&mut self, letter: char) {
        self.words = self
            .words
            .par_iter()
            .filter(|word| !word.contains(letter))
            .cloned()
            .collect();
    }

    /// Keeps only words that agree with every revealed cell of `pattern` and
    /// that carry `letter` at exactly `positions` and nowhere else.
    ///
    /// The whole pattern is re-checked, not just the new positions, because a
    /// reveal rewrites cells across the word.
    pub fn filter_by_pattern(&mut self, positions: &[u8], letter: char, pattern: &Pattern) {
        self.words = self
            .words
            .par_iter()
            .filter(|word| {
                pattern.agrees_with(word) && has_letter_exactly_at(word, letter, positions)
            })
            .cloned()
            .collect();
    }

    /// Returns one pool member at random, or `None` if the pool is empty.
    pub fn sample_any(&self) -> Option<Arc<str>> {
        if self.words.is_empty() {
            return None;
        }
        let random: usize = rand::random();
        self.words.get(random % self.words.len()).map(Arc::clone)
    }
}

fn has_letter_exactly_at(word: &str, letter: char, positions: &[u8]) -> bool {
    word.char_indices()
        .filter(|(_, other)| *other == letter)
        .map(|(index, _)| index as u8)
        .eq(positions.iter().copied())
}
