use std::collections::BTreeMap;
use std::io::Write;

use proptest::prelude::*;
use warden_core::config::{DuplicatePolicy, LexiconConfig, LexiconMatchMode};
use warden_core::errors::{LexiconError, WardenError};
use warden_lexicon::{builtin, Lexicons, LexiconStore, WordSet};

fn tokens(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

// ── Built-in table ────────────────────────────────────────────────────────

#[test]
fn builtin_last_write_wins_keeps_later_weights() {
    let store = LexiconStore::builtin(DuplicatePolicy::LastWriteWins, LexiconMatchMode::Token)
        .unwrap();
    assert_eq!(store.lookup("ugly"), Some(-0.3));
    assert_eq!(store.lookup("worthless"), Some(-0.3));
    assert_eq!(store.lookup("stupid"), Some(-0.3));
}

#[test]
fn builtin_phrases_are_lowercased() {
    let store = LexiconStore::builtin(DuplicatePolicy::LastWriteWins, LexiconMatchMode::Token)
        .unwrap();
    assert!(store.contains("walking l"));
    assert!(store.all_phrases().iter().all(|p| *p == p.to_lowercase()));
}

#[test]
fn builtin_weights_are_all_negative() {
    let store = LexiconStore::builtin(DuplicatePolicy::LastWriteWins, LexiconMatchMode::Token)
        .unwrap();
    for phrase in store.all_phrases() {
        assert!(store.lookup(phrase).unwrap() < 0.0, "{phrase}");
    }
}

#[test]
fn builtin_reject_fails_on_first_conflict() {
    let err = LexiconStore::builtin(DuplicatePolicy::Reject, LexiconMatchMode::Token).unwrap_err();
    match err {
        LexiconError::ConflictingDuplicate { phrase, .. } => assert_eq!(phrase, "ugly"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn positive_adjectives_are_disjoint_from_lexicon() {
    let store = LexiconStore::builtin(DuplicatePolicy::LastWriteWins, LexiconMatchMode::Token)
        .unwrap();
    let positives = WordSet::new(builtin::POSITIVE_ADJECTIVES.iter());
    assert!(positives.len() >= 80);
    for word in positives.sorted() {
        assert!(!store.contains(word), "{word} is in both tables");
    }
}

// ── Entry validation ──────────────────────────────────────────────────────

#[test]
fn rejects_non_negative_weight() {
    let err = LexiconStore::from_entries(
        [("fine", 0.0)],
        DuplicatePolicy::LastWriteWins,
        LexiconMatchMode::Token,
    )
    .unwrap_err();
    assert!(matches!(err, LexiconError::NonNegativeWeight { .. }));
}

#[test]
fn rejects_empty_phrase() {
    let err = LexiconStore::from_entries(
        [("   ", -0.3)],
        DuplicatePolicy::LastWriteWins,
        LexiconMatchMode::Token,
    )
    .unwrap_err();
    assert!(matches!(err, LexiconError::EmptyPhrase));
}

#[test]
fn rejects_nan_weight() {
    let err = LexiconStore::from_entries(
        [("bad", f64::NAN)],
        DuplicatePolicy::LastWriteWins,
        LexiconMatchMode::Token,
    )
    .unwrap_err();
    assert!(matches!(err, LexiconError::NonFiniteWeight { .. }));
}

#[test]
fn reject_policy_tolerates_identical_duplicates() {
    let store = LexiconStore::from_entries(
        [("Dumb", -0.3), ("dumb", -0.3)],
        DuplicatePolicy::Reject,
        LexiconMatchMode::Token,
    )
    .unwrap();
    assert_eq!(store.len(), 1);
}

// ── Scoring ───────────────────────────────────────────────────────────────

#[test]
fn score_sums_absolute_weights() {
    let store = LexiconStore::from_entries(
        [("stupid", -0.3), ("ugly", -0.8)],
        DuplicatePolicy::LastWriteWins,
        LexiconMatchMode::Token,
    )
    .unwrap();
    let score = store.score_tokens(&tokens(&["you", "are", "stupid", "ugly"]));
    assert!((score.score - 1.1).abs() < 1e-9);
    assert_eq!(score.matches.len(), 2);
}

#[test]
fn builtin_phrase_mode_matches_multi_word_entries() {
    let token = LexiconStore::builtin(DuplicatePolicy::LastWriteWins, LexiconMatchMode::Token)
        .unwrap();
    let phrase = LexiconStore::builtin(DuplicatePolicy::LastWriteWins, LexiconMatchMode::Phrase)
        .unwrap();
    let words = tokens(&["such", "a", "walking", "l"]);
    assert!(phrase.score_tokens(&words).score > token.score_tokens(&words).score);
}

// ── Lexicons bundle ───────────────────────────────────────────────────────

#[test]
fn default_config_loads_builtin_tables() {
    let lexicons = Lexicons::builtin().unwrap();
    assert_eq!(lexicons.context_words.len(), 4);
    assert!(lexicons.context_words.contains("loser"));
    assert!(lexicons.positive_adjectives.contains("kind"));
}

#[test]
fn context_word_outside_lexicon_is_rejected() {
    let config = LexiconConfig {
        context_words: vec!["stupid".into(), "banana".into()],
        ..Default::default()
    };
    let err = Lexicons::from_config(&config).unwrap_err();
    match err {
        WardenError::LexiconError(LexiconError::ContextWordNotInLexicon { word }) => {
            assert_eq!(word, "banana")
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn extra_entries_extend_the_table() {
    let mut extra = BTreeMap::new();
    extra.insert("Banana".to_string(), -0.6);
    let config = LexiconConfig {
        context_words: vec!["stupid".into(), "banana".into()],
        extra,
        ..Default::default()
    };
    let lexicons = Lexicons::from_config(&config).unwrap();
    assert_eq!(lexicons.severity.lookup("banana"), Some(-0.6));
}

#[test]
fn on_disk_table_replaces_builtin() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"[{{"phrase": "stupid", "weight": -0.3}}, {{"phrase": "dumb", "weight": -0.3}},
           {{"phrase": "annoying", "weight": -0.3}}, {{"phrase": "loser", "weight": -0.6}}]"#
    )
    .unwrap();
    let config = LexiconConfig {
        table: Some(file.path().display().to_string()),
        duplicate_policy: DuplicatePolicy::Reject,
        ..Default::default()
    };
    let lexicons = Lexicons::from_config(&config).unwrap();
    assert_eq!(lexicons.severity.len(), 4);
    assert_eq!(lexicons.severity.lookup("loser"), Some(-0.6));
    assert!(!lexicons.severity.contains("ugly"));
}

#[test]
fn missing_table_file_is_an_io_error() {
    let config = LexiconConfig {
        table: Some("/nonexistent/warden/table.json".into()),
        ..Default::default()
    };
    assert!(matches!(
        Lexicons::from_config(&config),
        Err(WardenError::IoError { .. })
    ));
}

// ── Properties ────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn lexicon_score_is_non_negative(words in prop::collection::vec("[a-z]{1,8}", 0..30)) {
        let store = LexiconStore::builtin(DuplicatePolicy::LastWriteWins, LexiconMatchMode::Phrase)
            .unwrap();
        let score = store.score_tokens(&words);
        prop_assert!(score.score >= 0.0);
        prop_assert!(score.score.is_finite());
    }

    #[test]
    fn phrase_mode_never_scores_below_token_mode(
        words in prop::collection::vec("[a-z]{1,8}", 0..30),
    ) {
        let token = LexiconStore::builtin(DuplicatePolicy::LastWriteWins, LexiconMatchMode::Token)
            .unwrap();
        let phrase = LexiconStore::builtin(DuplicatePolicy::LastWriteWins, LexiconMatchMode::Phrase)
            .unwrap();
        prop_assert!(phrase.score_tokens(&words).score >= token.score_tokens(&words).score);
    }
}
