//! Single-edit spelling correction ranked by corpus frequency.
//! The approach follows [Peter Norvig's essay](http://norvig.com/spell-correct.html),
//! restricted to candidates one edit away.

#![warn(clippy::all, clippy::pedantic, missing_docs)]

pub mod alphabet;
pub mod config;
pub mod corpus;
pub mod edits;
pub mod error;
pub mod frequency;
pub mod rank;

use std::path::Path;

pub use alphabet::Alphabet;
pub use config::CorrectorConfig;
pub use edits::{EditGenerator, Edits};
pub use error::{Result, SpellError};
pub use frequency::{FrequencyTable, ProbabilityTable};
pub use rank::{CandidateRanker, RankedSuggestion};

/// `SpellingCorrector` is a type that represents a spelling corrector.
///
/// It is built once from a corpus and is read-only afterwards.
#[derive(Debug, Clone)]
pub struct SpellingCorrector {
    config: CorrectorConfig,
    frequencies: FrequencyTable,
    probabilities: ProbabilityTable,
}

impl SpellingCorrector {
    /// `new` creates a new `SpellingCorrector` with the default configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read or tokenized, or if it holds no words.
    ///
    /// # Arguments
    ///
    /// * `path` - A path to text data.
    pub fn new(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        Self::with_config(path, CorrectorConfig::default())
    }

    /// `with_config` creates a new `SpellingCorrector` with a user-specified configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read or tokenized, or if it holds no words.
    ///
    /// # Arguments
    ///
    /// * `path` - A path to text data.
    /// * `config` - Alphabet and exact-match policy.
    pub fn with_config(path: impl AsRef<Path>, config: CorrectorConfig) -> anyhow::Result<Self> {
        let tokens = corpus::read_tokens(path)?;
        Ok(Self::from_tokens(&tokens, config)?)
    }

    /// `from_text` creates a new `SpellingCorrector` from raw text.
    ///
    /// # Errors
    ///
    /// Returns error if tokenizing fails or the text holds no words.
    ///
    /// # Example
    ///
    /// ```
    /// use spell_rank::{CorrectorConfig, SpellingCorrector};
    ///
    /// fn main() -> Result<(), anyhow::Error> {
    ///     let text = "The spelling of spelling is not speling.";
    ///     let sc = SpellingCorrector::from_text(text, CorrectorConfig::default())?;
    ///     assert_eq!(sc.correction("spelin")?.as_deref(), Some("speling"));
    ///     Ok(())
    /// }
    /// ```
    pub fn from_text(text: &str, config: CorrectorConfig) -> anyhow::Result<Self> {
        let tokens = corpus::tokenize(text)?;
        Ok(Self::from_tokens(&tokens, config)?)
    }

    /// `from_tokens` creates a new `SpellingCorrector` from already tokenized words.
    ///
    /// Counting runs on the rayon pool.
    ///
    /// # Errors
    ///
    /// Returns [`SpellError::EmptyCorpus`] if `tokens` is empty.
    pub fn from_tokens<S>(tokens: &[S], config: CorrectorConfig) -> Result<Self>
    where
        S: AsRef<str> + Sync,
    {
        let frequencies = FrequencyTable::par_build(tokens);
        let probabilities = frequencies.probabilities()?;
        Ok(Self {
            config,
            frequencies,
            probabilities,
        })
    }

    /// The configuration in use.
    #[must_use]
    pub fn config(&self) -> &CorrectorConfig {
        &self.config
    }

    /// Word counts of the corpus.
    #[must_use]
    pub fn frequencies(&self) -> &FrequencyTable {
        &self.frequencies
    }

    /// Word probabilities of the corpus.
    #[must_use]
    pub fn probabilities(&self) -> &ProbabilityTable {
        &self.probabilities
    }

    fn ranker(&self) -> CandidateRanker<'_> {
        CandidateRanker::new(&self.probabilities, &self.config)
    }

    /// `edits` computes the four classes of single-edit variants of `word`.
    ///
    /// # Errors
    ///
    /// Returns [`SpellError::InvalidWord`] if `word` has a character outside the alphabet.
    pub fn edits(&self, word: &str) -> Result<Edits> {
        EditGenerator::new(&self.config.alphabet).edits(word)
    }

    /// `suggestions` ranks the known words one edit away from `word`.
    ///
    /// # Errors
    ///
    /// Returns [`SpellError::InvalidWord`] if `word` has a character outside the alphabet.
    pub fn suggestions(&self, word: &str) -> Result<Vec<RankedSuggestion>> {
        self.ranker().rank(word)
    }

    /// `correction` computes the most probable spelling correction for `word`.
    ///
    /// Returns `None` when no known word is one edit away.
    ///
    /// # Errors
    ///
    /// Returns [`SpellError::InvalidWord`] if `word` has a character outside the alphabet.
    pub fn correction(&self, word: &str) -> Result<Option<String>> {
        Ok(self.ranker().best(word)?.map(|suggestion| suggestion.word))
    }

    /// `suggestions_batch` ranks many words in parallel; results follow input order.
    pub fn suggestions_batch<S>(&self, words: &[S]) -> Vec<Result<Vec<RankedSuggestion>>>
    where
        S: AsRef<str> + Sync,
    {
        self.ranker().rank_batch(words)
    }
}
