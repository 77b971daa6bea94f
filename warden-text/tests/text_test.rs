use std::sync::Arc;

use proptest::prelude::*;
use warden_core::models::PartOfSpeech;
use warden_core::traits::{IAnnotator, INormalizer, ISentimentScorer};
use warden_lexicon::Lexicons;
use warden_text::{HeuristicAnnotator, LexiconSentimentScorer, TextNormalizer, TfidfVectorizer};

fn lexicons() -> Arc<Lexicons> {
    Arc::new(Lexicons::builtin().unwrap())
}

// ── Normalizer ────────────────────────────────────────────────────────────

#[test]
fn names_are_anonymized_before_cleaning() {
    let n = TextNormalizer::new();
    assert_eq!(n.normalize("Alex Smith is a loser"), vec!["name", "loser"]);
}

#[test]
fn cleaned_text_joins_stems() {
    let n = TextNormalizer::new().with_stopwords(["honestly"]);
    assert_eq!(n.clean("Honestly, those comments were hurtful"), "comment hurtful");
}

// ── Annotator ─────────────────────────────────────────────────────────────

#[test]
fn annotator_and_scorer_agree_on_lexicon_words() {
    let lex = lexicons();
    let annotator = HeuristicAnnotator::new(lex.clone());
    let scorer = LexiconSentimentScorer::new(lex);

    let annotation = annotator.annotate("Everyone thinks Jordan is pathetic");
    let adjectives: Vec<_> = annotation
        .tokens
        .iter()
        .filter(|t| t.pos == PartOfSpeech::Adj)
        .collect();
    assert_eq!(adjectives.len(), 1);
    assert!(scorer.score(&adjectives[0].text).negative > 0.0);
    assert_eq!(annotation.entities.len(), 1);
    assert_eq!(annotation.entities[0].text, "Jordan");
}

#[test]
fn tokens_keep_original_case() {
    let annotation = HeuristicAnnotator::new(lexicons()).annotate("So STUPID");
    assert_eq!(annotation.tokens[1].text, "STUPID");
    assert_eq!(annotation.tokens[1].pos, PartOfSpeech::Adj);
}

// ── TF-IDF ────────────────────────────────────────────────────────────────

#[test]
fn tfidf_over_normalized_documents() {
    let n = TextNormalizer::new();
    let docs: Vec<Vec<String>> = ["You are a loser", "Losers everywhere", "What a lovely day"]
        .iter()
        .map(|t| n.normalize(t))
        .collect();
    let matrix = TfidfVectorizer::default().fit_transform(&docs);
    assert_eq!(matrix.rows.len(), 3);
    assert!(matrix.vocabulary.contains(&"loser".to_string()));
    assert!(matrix.rows[0].contains_key("loser"));
    assert!(matrix.rows[1].contains_key("loser"));
}

// ── Properties ────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn sentiment_scores_stay_in_range(text in "[a-zA-Z ,.!]{0,80}") {
        let s = LexiconSentimentScorer::new(lexicons()).score(&text);
        prop_assert!(s.positive >= 0.0 && s.negative >= 0.0 && s.neutral >= 0.0);
        prop_assert!((-1.0..=1.0).contains(&s.compound));
        let sum = s.positive + s.negative + s.neutral;
        prop_assert!(sum == 0.0 || (sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn normalized_stems_are_lowercase_letters(text in "\\PC{0,80}") {
        for stem in TextNormalizer::new().normalize(&text) {
            prop_assert!(!stem.is_empty());
            prop_assert!(stem.chars().all(|c| c.is_ascii_lowercase()));
        }
    }

    #[test]
    fn annotation_is_deterministic(text in "[a-zA-Z ,.!?]{0,80}") {
        let annotator = HeuristicAnnotator::new(lexicons());
        prop_assert_eq!(annotator.annotate(&text), annotator.annotate(&text));
    }
}
