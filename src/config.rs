//! Options shared by edit generation and ranking.

use crate::alphabet::Alphabet;

/// Configuration for the spelling corrector.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CorrectorConfig {
    /// Whether a word that is already in the vocabulary is returned among its own suggestions.
    pub include_exact_match: bool,
    /// Letters used by substitutions and insertions.
    pub alphabet: Alphabet,
}

impl CorrectorConfig {
    /// Sets `include_exact_match`.
    #[must_use]
    pub fn with_include_exact_match(mut self, include: bool) -> Self {
        self.include_exact_match = include;
        self
    }

    /// Sets the alphabet.
    #[must_use]
    pub fn with_alphabet(mut self, alphabet: Alphabet) -> Self {
        self.alphabet = alphabet;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = CorrectorConfig::default();
        assert!(!config.include_exact_match);
        assert_eq!(config.alphabet, Alphabet::english());
    }

    #[test]
    fn builders() {
        let config = CorrectorConfig::default()
            .with_include_exact_match(true)
            .with_alphabet(Alphabet::new("ab".chars()));
        assert!(config.include_exact_match);
        assert_eq!(config.alphabet.len(), 2);
    }
}
