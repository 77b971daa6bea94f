use std::sync::Arc;

use warden_core::models::SentimentScores;
use warden_core::traits::ISentimentScorer;
use warden_lexicon::Lexicons;

/// Normalization constant of the compound score.
const COMPOUND_ALPHA: f64 = 15.0;

/// Word-proportion sentiment over the lexicon tables.
///
/// A word is negative when it is a severity phrase, positive when it is a
/// positive adjective, neutral otherwise. Text without words scores
/// `{0, 0, 0, 0}`.
#[derive(Debug, Clone)]
pub struct LexiconSentimentScorer {
    lexicons: Arc<Lexicons>,
}

impl LexiconSentimentScorer {
    pub fn new(lexicons: Arc<Lexicons>) -> Self {
        Self { lexicons }
    }
}

impl ISentimentScorer for LexiconSentimentScorer {
    fn score(&self, text: &str) -> SentimentScores {
        let (mut positive, mut negative, mut neutral) = (0usize, 0usize, 0usize);
        for word in text
            .split(|c: char| !c.is_alphanumeric() && c != '\'')
            .filter(|w| !w.is_empty())
        {
            let lower = word.to_lowercase();
            if self.lexicons.severity.contains(&lower) {
                negative += 1;
            } else if self.lexicons.positive_adjectives.contains(&lower) {
                positive += 1;
            } else {
                neutral += 1;
            }
        }

        let total = positive + negative + neutral;
        if total == 0 {
            return SentimentScores::default();
        }
        let n = total as f64;
        let s = positive as f64 - negative as f64;
        SentimentScores::new(
            positive as f64 / n,
            negative as f64 / n,
            neutral as f64 / n,
            s / (s * s + COMPOUND_ALPHA).sqrt(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scorer() -> LexiconSentimentScorer {
        LexiconSentimentScorer::new(Arc::new(Lexicons::builtin().unwrap()))
    }

    #[test]
    fn proportions_over_words() {
        let s = scorer().score("you are stupid and kind");
        assert!((s.negative - 0.2).abs() < 1e-9);
        assert!((s.positive - 0.2).abs() < 1e-9);
        assert!((s.neutral - 0.6).abs() < 1e-9);
        assert_eq!(s.compound, 0.0);
    }

    #[test]
    fn single_negative_token() {
        let s = scorer().score("Ugly");
        assert_eq!(s.negative, 1.0);
        assert!(s.compound < 0.0 && s.compound >= -1.0);
    }

    #[test]
    fn empty_text_is_all_zero() {
        assert_eq!(scorer().score(""), SentimentScores::default());
        assert_eq!(scorer().score("?!"), SentimentScores::default());
    }
}
