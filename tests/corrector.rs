use std::io::Write;

use spell_rank::{Alphabet, CorrectorConfig, SpellError, SpellingCorrector};

const CORPUS: &str = "\
The cat sat on the mat. The cats sat on the bat's hat.
A cot is not a cat, and a bat is not a cot.
";

fn words(suggestions: &[spell_rank::RankedSuggestion]) -> Vec<&str> {
    suggestions.iter().map(|s| s.word.as_str()).collect()
}

#[test]
fn corrects_from_file() -> Result<(), anyhow::Error> {
    let mut file = tempfile::NamedTempFile::new()?;
    file.write_all(CORPUS.as_bytes())?;

    let sc = SpellingCorrector::new(file.path())?;
    assert_eq!(sc.frequencies().count("the"), 4);
    assert_eq!(sc.frequencies().count("cat"), 2);
    assert_eq!(sc.correction("thw")?.as_deref(), Some("the"));
    assert_eq!(sc.correction("mta")?.as_deref(), Some("mat"));
    assert_eq!(sc.correction("qqqq")?, None);
    Ok(())
}

#[test]
fn cat_neighbours_with_uniform_counts() -> Result<(), SpellError> {
    let tokens = ["cat", "cats", "bat", "cot"];
    let sc = SpellingCorrector::from_tokens(&tokens, CorrectorConfig::default())?;
    let suggestions = sc.suggestions("cat")?;
    assert_eq!(words(&suggestions), ["bat", "cats", "cot"]);
    assert!(suggestions.iter().all(|s| (s.probability - 0.25).abs() < 1e-12));

    let first = sc.suggestions("cat")?;
    assert_eq!(first, sc.suggestions("cat")?);
    assert!(sc.suggestions("xyz")?.is_empty());
    Ok(())
}

#[test]
fn exact_match_policy() -> Result<(), anyhow::Error> {
    let config = CorrectorConfig::default().with_include_exact_match(true);
    let sc = SpellingCorrector::from_text(CORPUS, config)?;
    assert_eq!(sc.correction("the")?.as_deref(), Some("the"));

    let sc = SpellingCorrector::from_text(CORPUS, CorrectorConfig::default())?;
    assert_eq!(sc.correction("the")?, None);
    Ok(())
}

#[test]
fn empty_corpus_is_an_error() {
    let err = SpellingCorrector::from_text("...", CorrectorConfig::default()).unwrap_err();
    assert_eq!(err.downcast_ref::<SpellError>(), Some(&SpellError::EmptyCorpus));

    let tokens: [&str; 0] = [];
    assert!(matches!(
        SpellingCorrector::from_tokens(&tokens, CorrectorConfig::default()),
        Err(SpellError::EmptyCorpus)
    ));
}

#[test]
fn edits_and_batch_use_configured_alphabet() -> Result<(), SpellError> {
    let config = CorrectorConfig::default().with_alphabet(Alphabet::new("kisaä".chars()));
    let sc = SpellingCorrector::from_tokens(&["kissa", "kisa", "äiti"], config)?;

    let edits = sc.edits("kisa")?;
    assert_eq!(edits.inserts.len(), 5 * 5);
    assert_eq!(edits.deletes, ["isa", "ksa", "kia", "kis"]);

    let batch = sc.suggestions_batch(&["kisa", "kissä", "äiti"]);
    assert_eq!(words(batch[0].as_ref().unwrap()), ["kissa"]);
    assert_eq!(words(batch[1].as_ref().unwrap()), ["kissa"]);
    assert!(matches!(batch[2], Err(SpellError::InvalidWord { character: 't', .. })));
    Ok(())
}
