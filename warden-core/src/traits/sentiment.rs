use crate::models::SentimentScores;

/// Sentiment scorer, called once per record and once per token.
pub trait ISentimentScorer: Send + Sync {
    fn score(&self, text: &str) -> SentimentScores;
}

impl<F> ISentimentScorer for F
where
    F: Fn(&str) -> SentimentScores + Send + Sync,
{
    fn score(&self, text: &str) -> SentimentScores {
        self(text)
    }
}
