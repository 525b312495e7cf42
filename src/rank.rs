//! Filtering single-edit candidates against the vocabulary and ordering them.

use std::cmp::Ordering;

use log::debug;
use rayon::prelude::*;

use crate::config::CorrectorConfig;
use crate::edits::EditGenerator;
use crate::error::Result;
use crate::frequency::ProbabilityTable;

/// A vocabulary word offered as a correction, with its corpus probability.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedSuggestion {
    /// The suggested word.
    pub word: String,
    /// `count(word) / total` in the corpus.
    pub probability: f64,
}

impl RankedSuggestion {
    /// Probability descending, then word ascending.
    fn ranking(&self, other: &Self) -> Ordering {
        other
            .probability
            .total_cmp(&self.probability)
            .then_with(|| self.word.cmp(&other.word))
    }
}

/// `CandidateRanker` ranks the single-edit neighbours of a word that are in the vocabulary.
///
/// The model is only read, so one ranker can serve many requests at once.
#[derive(Debug, Clone, Copy)]
pub struct CandidateRanker<'a> {
    model: &'a ProbabilityTable,
    config: &'a CorrectorConfig,
}

impl<'a> CandidateRanker<'a> {
    /// `new` creates a ranker over `model` using `config`.
    #[must_use]
    pub fn new(model: &'a ProbabilityTable, config: &'a CorrectorConfig) -> Self {
        Self { model, config }
    }

    /// `rank` returns the known words one edit away from `word`, most probable first.
    ///
    /// Equal probabilities are ordered by word. `word` itself is only included when
    /// `include_exact_match` is set and it is in the vocabulary. An empty result means no
    /// correction was found.
    ///
    /// # Errors
    ///
    /// Returns [`crate::SpellError::InvalidWord`] if `word` has a character outside the
    /// alphabet.
    ///
    /// # Example
    ///
    /// ```
    /// use spell_rank::{CandidateRanker, CorrectorConfig, FrequencyTable};
    ///
    /// fn main() -> Result<(), spell_rank::SpellError> {
    ///     let model = FrequencyTable::build(["cat", "cats", "bat", "cot"]).probabilities()?;
    ///     let config = CorrectorConfig::default();
    ///     let ranked = CandidateRanker::new(&model, &config).rank("cat")?;
    ///     let words: Vec<_> = ranked.iter().map(|s| s.word.as_str()).collect();
    ///     assert_eq!(words, ["bat", "cats", "cot"]);
    ///     Ok(())
    /// }
    /// ```
    pub fn rank(&self, word: &str) -> Result<Vec<RankedSuggestion>> {
        let candidates = EditGenerator::new(&self.config.alphabet)
            .edits(word)?
            .union();
        let candidate_count = candidates.len();

        let mut ranked: Vec<RankedSuggestion> = candidates
            .into_iter()
            .filter(|candidate| self.config.include_exact_match || candidate != word)
            .filter_map(|candidate| {
                self.model
                    .probability(&candidate)
                    .map(|probability| RankedSuggestion {
                        word: candidate,
                        probability,
                    })
            })
            .collect();

        if self.config.include_exact_match && !ranked.iter().any(|s| s.word == word) {
            if let Some(probability) = self.model.probability(word) {
                ranked.push(RankedSuggestion {
                    word: word.to_string(),
                    probability,
                });
            }
        }

        ranked.sort_by(RankedSuggestion::ranking);
        debug!(
            "ranked {word:?}: {candidate_count} candidates, {} known",
            ranked.len()
        );
        Ok(ranked)
    }

    /// `best` returns the most probable suggestion, if any.
    ///
    /// # Errors
    ///
    /// Same as [`CandidateRanker::rank`].
    pub fn best(&self, word: &str) -> Result<Option<RankedSuggestion>> {
        Ok(self.rank(word)?.into_iter().next())
    }

    /// `top_k` returns at most `k` suggestions.
    ///
    /// # Errors
    ///
    /// Same as [`CandidateRanker::rank`].
    pub fn top_k(&self, word: &str, k: usize) -> Result<Vec<RankedSuggestion>> {
        let mut ranked = self.rank(word)?;
        ranked.truncate(k);
        Ok(ranked)
    }

    /// `rank_batch` ranks independent words in parallel; results follow input order.
    pub fn rank_batch<S>(&self, words: &[S]) -> Vec<Result<Vec<RankedSuggestion>>>
    where
        S: AsRef<str> + Sync,
    {
        words.par_iter().map(|word| self.rank(word.as_ref())).collect()
    }
}
