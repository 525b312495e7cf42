//! Error types returned by the spelling corrector.

use thiserror::Error;

/// Errors produced while building the model or generating candidates.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SpellError {
    /// Probabilities were requested over a table with no tokens.
    #[error("cannot compute probabilities: corpus is empty")]
    EmptyCorpus,

    /// A word contains a character the configured alphabet does not have.
    #[error("invalid word {word:?}: character {character:?} is not in the alphabet")]
    InvalidWord {
        /// The rejected word.
        word: String,
        /// The first offending character.
        character: char,
    },
}

/// Result type alias for spelling operations.
pub type Result<T> = std::result::Result<T, SpellError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offender() {
        let err = SpellError::InvalidWord {
            word: String::from("caT"),
            character: 'T',
        };
        assert_eq!(
            err.to_string(),
            "invalid word \"caT\": character 'T' is not in the alphabet"
        );
        assert!(SpellError::EmptyCorpus.to_string().contains("empty"));
    }
}
