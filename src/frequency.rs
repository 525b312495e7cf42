//! Word counts and probabilities over a tokenized corpus.

use std::collections::HashMap;

use log::debug;
use rayon::prelude::*;

use crate::error::{Result, SpellError};

/// `FrequencyTable` maps each distinct token to the number of times it was seen.
///
/// The sum of all counts always equals [`FrequencyTable::total`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: HashMap<String, u64>,
    total: u64,
}

impl FrequencyTable {
    /// `build` counts occurrences of each token.
    ///
    /// Tokens are taken literally: case folding and punctuation stripping belong to the
    /// tokenizer (see [`crate::corpus::tokenize`]).
    ///
    /// # Arguments
    ///
    /// * `tokens` - A sequence of words.
    ///
    /// # Example
    ///
    /// ```
    /// use spell_rank::FrequencyTable;
    ///
    /// let table = FrequencyTable::build(["the", "cat", "the"]);
    /// assert_eq!(table.count("the"), 2);
    /// assert_eq!(table.total(), 3);
    /// assert_eq!(table.len(), 2);
    /// ```
    pub fn build<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut table = Self::default();
        for token in tokens {
            table.add(token.as_ref());
        }
        debug!(
            "built frequency table: {} tokens, {} distinct words",
            table.total,
            table.counts.len()
        );
        table
    }

    /// `par_build` counts tokens on the rayon pool, merging partial tables.
    ///
    /// The result is identical to [`FrequencyTable::build`] over the same slice.
    pub fn par_build<S>(tokens: &[S]) -> Self
    where
        S: AsRef<str> + Sync,
    {
        let table = tokens
            .par_iter()
            .fold(Self::default, |mut table, token| {
                table.add(token.as_ref());
                table
            })
            .reduce(Self::default, |mut left, right| {
                left.merge(right);
                left
            });
        debug!(
            "built frequency table in parallel: {} tokens, {} distinct words",
            table.total,
            table.counts.len()
        );
        table
    }

    fn add(&mut self, word: &str) {
        match self.counts.get_mut(word) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(word.to_string(), 1);
            }
        }
        self.total += 1;
    }

    /// `merge` folds the counts of `other` into this table.
    pub fn merge(&mut self, other: Self) {
        for (word, count) in other.counts {
            *self.counts.entry(word).or_insert(0) += count;
        }
        self.total += other.total;
    }

    /// Occurrences of `word`, zero when unseen.
    #[must_use]
    pub fn count(&self, word: &str) -> u64 {
        self.counts.get(word).copied().unwrap_or(0)
    }

    /// Whether `word` was seen at least once.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.counts.contains_key(word)
    }

    /// Total number of tokens counted.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Number of distinct words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Whether no tokens were counted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterates `(word, count)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(word, count)| (word.as_str(), *count))
    }

    /// `most_common` returns the `k` most frequent words, ties broken by word.
    #[must_use]
    pub fn most_common(&self, k: usize) -> Vec<(&str, u64)> {
        let mut words: Vec<(&str, u64)> = self.iter().collect();
        words.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        words.truncate(k);
        words
    }

    /// `probabilities` divides every count by the total token count.
    ///
    /// # Errors
    ///
    /// Returns [`SpellError::EmptyCorpus`] when the table holds no tokens.
    ///
    /// # Example
    ///
    /// ```
    /// use spell_rank::FrequencyTable;
    ///
    /// fn main() -> Result<(), spell_rank::SpellError> {
    ///     let probabilities = FrequencyTable::build(["a", "b", "b", "b"]).probabilities()?;
    ///     assert_eq!(probabilities.probability("b"), Some(0.75));
    ///     assert_eq!(probabilities.probability("c"), None);
    ///     Ok(())
    /// }
    /// ```
    #[allow(clippy::cast_precision_loss)]
    pub fn probabilities(&self) -> Result<ProbabilityTable> {
        if self.total == 0 {
            return Err(SpellError::EmptyCorpus);
        }
        let total = self.total as f64;
        let probabilities = self
            .counts
            .iter()
            .map(|(word, count)| (word.clone(), *count as f64 / total))
            .collect();
        Ok(ProbabilityTable { probabilities })
    }
}

/// `ProbabilityTable` maps each vocabulary word to `count / total`.
///
/// Values lie in `[0, 1]` and sum to one. Only [`FrequencyTable::probabilities`] creates it.
#[derive(Debug, Clone, PartialEq)]
pub struct ProbabilityTable {
    probabilities: HashMap<String, f64>,
}

impl ProbabilityTable {
    /// Probability of `word`, or `None` when it is not in the vocabulary.
    #[must_use]
    pub fn probability(&self, word: &str) -> Option<f64> {
        self.probabilities.get(word).copied()
    }

    /// Whether `word` is in the vocabulary.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.probabilities.contains_key(word)
    }

    /// Vocabulary size.
    #[must_use]
    pub fn len(&self) -> usize {
        self.probabilities.len()
    }

    /// Always false for a table built from a non-empty corpus.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.probabilities.is_empty()
    }

    /// Iterates `(word, probability)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.probabilities.iter().map(|(word, p)| (word.as_str(), *p))
    }
}
