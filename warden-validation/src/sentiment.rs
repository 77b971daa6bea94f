//! Merging record-level and token-level sentiment.

use warden_core::models::{SentimentScores, SentimentSummary};

/// Component-wise sum of per-token scores.
pub fn sum_scores<I>(scores: I) -> SentimentScores
where
    I: IntoIterator<Item = SentimentScores>,
{
    scores
        .into_iter()
        .fold(SentimentScores::default(), |acc, s| {
            SentimentScores::new(
                acc.positive + s.positive,
                acc.negative + s.negative,
                acc.neutral + s.neutral,
                acc.compound + s.compound,
            )
        })
}

/// `positive` and `negative` take the larger of the two views, `neutral`
/// the smaller.
pub fn merge(record: &SentimentScores, token_sum: &SentimentScores) -> SentimentSummary {
    SentimentSummary::new(
        record.positive.max(token_sum.positive),
        record.negative.max(token_sum.negative),
        record.neutral.min(token_sum.neutral),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_takes_max_max_min() {
        let record = SentimentScores::new(0.1, 0.4, 0.5, 0.0);
        let tokens = SentimentScores::new(0.3, 0.2, 2.0, 0.0);
        assert_eq!(merge(&record, &tokens), SentimentSummary::new(0.3, 0.4, 0.5));
    }

    #[test]
    fn sum_of_nothing_is_zero() {
        assert_eq!(sum_scores(Vec::new()), SentimentScores::default());
    }
}
