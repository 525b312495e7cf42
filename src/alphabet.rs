//! The set of letters edit operations draw from.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use crate::error::{Result, SpellError};

const ENGLISH: &str = "abcdefghijklmnopqrstuvwxyz";

/// `Alphabet` is an ordered, duplicate-free sequence of letters.
///
/// Substitutions and insertions iterate the letters in this order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    letters: Vec<char>,
}

impl Alphabet {
    /// `new` creates an alphabet from `letters`, keeping the first occurrence of each one.
    ///
    /// # Arguments
    ///
    /// * `letters` - Letters in the order edits should use them.
    ///
    /// # Example
    ///
    /// ```
    /// use spell_rank::Alphabet;
    ///
    /// let alphabet = Alphabet::new("abca".chars());
    /// assert_eq!(alphabet.len(), 3);
    /// assert_eq!(alphabet.to_string(), "abc");
    /// ```
    #[must_use]
    pub fn new(letters: impl IntoIterator<Item = char>) -> Self {
        let mut unique = Vec::new();
        for c in letters {
            if !unique.contains(&c) {
                unique.push(c);
            }
        }
        Self { letters: unique }
    }

    /// `english` returns the 26 lowercase Latin letters.
    #[must_use]
    pub fn english() -> Self {
        Self::new(ENGLISH.chars())
    }

    /// Number of letters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Whether the alphabet has no letters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Whether `c` is one of the letters.
    #[must_use]
    pub fn contains(&self, c: char) -> bool {
        self.letters.contains(&c)
    }

    /// Letters in order.
    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.letters.iter().copied()
    }

    /// `validate` checks that every character of `word` is in the alphabet.
    ///
    /// # Errors
    ///
    /// Returns [`SpellError::InvalidWord`] naming the first character that is not.
    pub fn validate(&self, word: &str) -> Result<()> {
        match word.chars().find(|c| !self.contains(*c)) {
            Some(character) => Err(SpellError::InvalidWord {
                word: word.to_string(),
                character,
            }),
            None => Ok(()),
        }
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::english()
    }
}

impl FromStr for Alphabet {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::new(s.chars()))
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.letters.iter().try_for_each(|c| write!(f, "{c}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_lowercase_latin() {
        let alphabet = Alphabet::default();
        assert_eq!(alphabet.len(), 26);
        assert_eq!(alphabet.iter().next(), Some('a'));
        assert_eq!(alphabet.iter().last(), Some('z'));
        assert!(!alphabet.contains('A'));
    }

    #[test]
    fn validate_reports_first_bad_character() {
        let alphabet = Alphabet::english();
        assert!(alphabet.validate("spelling").is_ok());
        assert!(alphabet.validate("").is_ok());
        assert_eq!(
            alphabet.validate("don't go"),
            Err(SpellError::InvalidWord {
                word: String::from("don't go"),
                character: '\'',
            })
        );
    }

    #[test]
    fn non_latin_letters() {
        let alphabet: Alphabet = "aäoö".parse().unwrap();
        assert_eq!(alphabet.len(), 4);
        assert!(alphabet.validate("öä").is_ok());
        assert!(alphabet.validate("u").is_err());
    }
}
