//! Reading a reference corpus into word tokens.

use std::path::Path;

use regex::Regex;

/// `tokenize` splits `text` into maximal runs of word characters, lowercased.
///
/// # Errors
///
/// Returns error if an invalid expression is given to `regex::Regex::new`.
///
/// # Example
///
/// ```
/// use spell_rank::corpus::tokenize;
///
/// fn main() -> Result<(), anyhow::Error> {
///     assert_eq!(tokenize("The cat's HAT.")?, ["the", "cat", "s", "hat"]);
///     Ok(())
/// }
/// ```
pub fn tokenize(text: &str) -> Result<Vec<String>, anyhow::Error> {
    Ok(Regex::new(r"\w+")?
        .find_iter(text)
        .map(|word| word.as_str().to_lowercase())
        .collect())
}

/// `read_tokens` reads the file at `path` and tokenizes it.
///
/// # Errors
///
/// Returns error if `std::fs::read_to_string` fails or tokenizing fails.
pub fn read_tokens(path: impl AsRef<Path>) -> Result<Vec<String>, anyhow::Error> {
    let text = std::fs::read_to_string(path)?;
    tokenize(&text)
}
