//! FeatureValidator: aggregates annotated tokens, entities, and sentiment
//! into a [`ValidationRecord`].

use std::sync::Arc;

use warden_core::models::{Annotation, SentimentSummary, ValidationRecord};
use warden_core::traits::ISentimentScorer;
use warden_lexicon::{LexiconScore, Lexicons};

use crate::entity_context::flag_entities;
use crate::sentiment::{merge, sum_scores};

/// Scorecard plus the lexicon hits behind `lexicon_score`.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationOutcome {
    pub record: ValidationRecord,
    pub lexicon: LexiconScore,
}

/// Stateless validator over shared lexicons and a sentiment scorer.
///
/// Safe to share across threads; every call is independent.
#[derive(Clone)]
pub struct FeatureValidator {
    lexicons: Arc<Lexicons>,
    scorer: Arc<dyn ISentimentScorer>,
}

impl FeatureValidator {
    pub fn new(lexicons: Arc<Lexicons>, scorer: Arc<dyn ISentimentScorer>) -> Self {
        Self { lexicons, scorer }
    }

    pub fn lexicons(&self) -> &Lexicons {
        &self.lexicons
    }

    /// Validate one annotated record.
    pub fn validate(&self, annotation: &Annotation) -> ValidationRecord {
        self.validate_detailed(annotation).record
    }

    /// Validate one annotated record and keep the individual lexicon matches.
    ///
    /// The scorer is called once on the space-joined token texts and once per
    /// token. A record without tokens never reaches the scorer.
    pub fn validate_detailed(&self, annotation: &Annotation) -> ValidationOutcome {
        let tokens = &annotation.tokens;
        let entities = &annotation.entities;

        if tokens.is_empty() {
            let record = ValidationRecord {
                entity_count: entities.len(),
                ..ValidationRecord::empty()
            };
            return ValidationOutcome {
                record,
                lexicon: LexiconScore::default(),
            };
        }

        let lowered: Vec<String> = tokens.iter().map(|t| t.lower()).collect();
        let lexicon = self.lexicons.severity.score_tokens(&lowered);

        let mut negative_adjectives = 0;
        let mut positive_adjectives = 0;
        for (token, lower) in tokens.iter().zip(&lowered) {
            if !token.pos.is_adjective() {
                continue;
            }
            if self.lexicons.severity.contains(lower) {
                negative_adjectives += 1;
            }
            if self.lexicons.positive_adjectives.contains(lower) {
                positive_adjectives += 1;
            }
        }

        let record_scores = self.scorer.score(&annotation.joined_text());
        let token_scores = sum_scores(tokens.iter().map(|t| self.scorer.score(&t.text)));
        let summary: SentimentSummary = merge(&record_scores, &token_scores);

        let record = ValidationRecord {
            token_count: tokens.len(),
            entity_count: entities.len(),
            negative_adjective_count: negative_adjectives,
            positive_adjective_count: positive_adjectives,
            lexicon_score: lexicon.score,
            sentiment_summary: summary,
            total_negative: token_scores.negative + lexicon.score,
            flagged_entities: flag_entities(entities, tokens, &self.lexicons.context_words),
        };

        tracing::trace!(
            tokens = record.token_count,
            lexicon_score = record.lexicon_score,
            total_negative = record.total_negative,
            flagged = record.flagged_count(),
            "record validated"
        );

        ValidationOutcome { record, lexicon }
    }
}

impl std::fmt::Debug for FeatureValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FeatureValidator")
            .field("severity_phrases", &self.lexicons.severity.len())
            .field("context_words", &self.lexicons.context_words.len())
            .finish_non_exhaustive()
    }
}
