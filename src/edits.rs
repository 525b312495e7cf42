//! Single-edit variant generation.
//!
//! Every variant is one deletion, adjacent transposition, substitution or insertion away
//! from the input word. Work is done on `char`s, so alphabets beyond ASCII behave.

use std::collections::BTreeSet;

use log::trace;

use crate::alphabet::Alphabet;
use crate::error::Result;

/// `EditGenerator` produces the four classes of single-edit variants of a word.
#[derive(Debug, Clone, Copy)]
pub struct EditGenerator<'a> {
    alphabet: &'a Alphabet,
}

/// The variants of one word, partitioned by edit class.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Edits {
    /// One character removed, by increasing position.
    pub deletes: Vec<String>,
    /// Adjacent characters swapped, by increasing position.
    pub transposes: Vec<String>,
    /// One character substituted; sorted and distinct.
    pub replaces: Vec<String>,
    /// One letter inserted; by position, then by alphabet order.
    pub inserts: Vec<String>,
}

impl Edits {
    /// `union` deduplicates the variants of all four classes.
    #[must_use]
    pub fn union(&self) -> BTreeSet<String> {
        self.deletes
            .iter()
            .chain(&self.transposes)
            .chain(&self.replaces)
            .chain(&self.inserts)
            .cloned()
            .collect()
    }

    /// Number of variants across classes, duplicates included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.deletes.len() + self.transposes.len() + self.replaces.len() + self.inserts.len()
    }

    /// Whether no class produced a variant.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn splice(left: &[char], middle: Option<char>, right: &[char]) -> String {
    left.iter().copied().chain(middle).chain(right.iter().copied()).collect()
}

impl<'a> EditGenerator<'a> {
    /// `new` creates a generator drawing substitutions and insertions from `alphabet`.
    #[must_use]
    pub fn new(alphabet: &'a Alphabet) -> Self {
        Self { alphabet }
    }

    /// The alphabet in use.
    #[must_use]
    pub fn alphabet(&self) -> &'a Alphabet {
        self.alphabet
    }

    /// `delete` removes the character at each position in turn.
    ///
    /// Repeated letters give repeated variants; they are kept.
    ///
    /// # Example
    ///
    /// ```
    /// use spell_rank::{Alphabet, EditGenerator};
    ///
    /// let alphabet = Alphabet::english();
    /// let edits = EditGenerator::new(&alphabet);
    /// assert_eq!(edits.delete("cat"), ["at", "ct", "ca"]);
    /// assert_eq!(edits.delete("see"), ["ee", "se", "se"]);
    /// ```
    #[must_use]
    pub fn delete(&self, word: &str) -> Vec<String> {
        let chars: Vec<char> = word.chars().collect();
        (0..chars.len())
            .map(|i| splice(&chars[..i], None, &chars[i + 1..]))
            .collect()
    }

    /// `transpose` swaps each pair of adjacent characters in turn.
    ///
    /// # Example
    ///
    /// ```
    /// use spell_rank::{Alphabet, EditGenerator};
    ///
    /// let alphabet = Alphabet::english();
    /// let edits = EditGenerator::new(&alphabet);
    /// assert_eq!(edits.transpose("cat"), ["act", "cta"]);
    /// assert!(edits.transpose("a").is_empty());
    /// ```
    #[must_use]
    pub fn transpose(&self, word: &str) -> Vec<String> {
        let chars: Vec<char> = word.chars().collect();
        (0..chars.len().saturating_sub(1))
            .map(|i| {
                let mut swapped = chars.clone();
                swapped.swap(i, i + 1);
                swapped.into_iter().collect()
            })
            .collect()
    }

    /// `replace` substitutes every other alphabet letter at each position.
    ///
    /// The result is deduplicated and sorted ascending, and never contains `word` itself.
    ///
    /// # Errors
    ///
    /// Returns [`crate::SpellError::InvalidWord`] if `word` has a character outside the
    /// alphabet.
    ///
    /// # Example
    ///
    /// ```
    /// use spell_rank::{Alphabet, EditGenerator};
    ///
    /// fn main() -> Result<(), spell_rank::SpellError> {
    ///     let alphabet = Alphabet::new("ab".chars());
    ///     let edits = EditGenerator::new(&alphabet);
    ///     assert_eq!(edits.replace("ab")?, ["aa", "bb"]);
    ///     Ok(())
    /// }
    /// ```
    pub fn replace(&self, word: &str) -> Result<Vec<String>> {
        self.alphabet.validate(word)?;
        let chars: Vec<char> = word.chars().collect();
        let mut replaces = BTreeSet::new();
        for (i, &current) in chars.iter().enumerate() {
            for letter in self.alphabet.iter().filter(|&letter| letter != current) {
                replaces.insert(splice(&chars[..i], Some(letter), &chars[i + 1..]));
            }
        }
        Ok(replaces.into_iter().collect())
    }

    /// `insert` inserts every alphabet letter at every position, including both ends.
    ///
    /// Variants are ordered by position, then by alphabet order; duplicates are kept.
    ///
    /// # Errors
    ///
    /// Returns [`crate::SpellError::InvalidWord`] if `word` has a character outside the
    /// alphabet.
    pub fn insert(&self, word: &str) -> Result<Vec<String>> {
        self.alphabet.validate(word)?;
        let chars: Vec<char> = word.chars().collect();
        Ok((0..=chars.len())
            .flat_map(|i| {
                let (left, right) = chars.split_at(i);
                self.alphabet
                    .iter()
                    .map(move |letter| splice(left, Some(letter), right))
            })
            .collect())
    }

    /// `edits` computes all four classes for `word`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::SpellError::InvalidWord`] if `word` has a character outside the
    /// alphabet.
    pub fn edits(&self, word: &str) -> Result<Edits> {
        let edits = Edits {
            deletes: self.delete(word),
            transposes: self.transpose(word),
            replaces: self.replace(word)?,
            inserts: self.insert(word)?,
        };
        trace!(
            "edits of {word:?}: {} deletes, {} transposes, {} replaces, {} inserts",
            edits.deletes.len(),
            edits.transposes.len(),
            edits.replaces.len(),
            edits.inserts.len()
        );
        Ok(edits)
    }
}
