//! SeverityPipeline: annotate → validate → decide → report for a batch.
//!
//! Annotation, validation, and normalization run per record, on the rayon
//! pool when enabled. Ids, tallies, and TF-IDF are computed afterwards in a
//! single sequential pass, so the output does not depend on worker count.

use std::sync::Arc;

use rayon::prelude::*;
use serde::Serialize;
use warden_core::config::{PipelineConfig, WardenConfig};
use warden_core::errors::WardenResult;
use warden_core::models::{Annotation, ContentMeta, IncidentReport, ValidationRecord};
use warden_core::traits::{IAnnotator, INormalizer, ISentimentScorer};
use warden_lexicon::Lexicons;
use warden_severity::{SeverityEngine, SeverityTally};
use warden_text::{HeuristicAnnotator, LexiconSentimentScorer, TextNormalizer, TfidfVectorizer};
use warden_validation::FeatureValidator;

use crate::features::FeatureEntry;
use crate::generator::IncidentReportGenerator;
use crate::source::{SkippedRecord, SourceDataset, SourceRecord};
use crate::summary::DatasetSummary;

/// Output of one batch run.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchResult {
    pub reports: Vec<IncidentReport>,
    pub features: Vec<FeatureEntry>,
    pub tally: SeverityTally,
    pub summary: DatasetSummary,
    pub skipped: Vec<SkippedRecord>,
    pub lookup_misses: usize,
}

/// Per-record output of the parallel stage.
struct Analysed {
    annotation: Annotation,
    record: ValidationRecord,
    stems: Vec<String>,
}

pub struct SeverityPipeline {
    annotator: Arc<dyn IAnnotator>,
    normalizer: Arc<dyn INormalizer>,
    validator: FeatureValidator,
    generator: IncidentReportGenerator,
    config: PipelineConfig,
}

impl SeverityPipeline {
    pub fn new(
        annotator: Arc<dyn IAnnotator>,
        normalizer: Arc<dyn INormalizer>,
        validator: FeatureValidator,
        generator: IncidentReportGenerator,
        config: PipelineConfig,
    ) -> Self {
        Self {
            annotator,
            normalizer,
            validator,
            generator,
            config,
        }
    }

    /// Pipeline over the reference collaborators, with lexicons loaded
    /// according to `config`.
    pub fn from_config(config: &WardenConfig) -> WardenResult<Self> {
        let lexicons = Arc::new(Lexicons::from_config(&config.lexicon)?);
        let scorer: Arc<dyn ISentimentScorer> =
            Arc::new(LexiconSentimentScorer::new(lexicons.clone()));
        Ok(Self::new(
            Arc::new(HeuristicAnnotator::new(lexicons.clone())),
            Arc::new(TextNormalizer::new().with_stopwords(&config.pipeline.custom_stopwords)),
            FeatureValidator::new(lexicons, scorer),
            IncidentReportGenerator::new(
                SeverityEngine::new(config.severity.clone()),
                config.incidents.clone(),
            ),
            config.pipeline.clone(),
        ))
    }

    /// Swap the annotator, e.g. for an external NLP service adapter.
    pub fn with_annotator(mut self, annotator: Arc<dyn IAnnotator>) -> Self {
        self.annotator = annotator;
        self
    }

    pub fn with_normalizer(mut self, normalizer: Arc<dyn INormalizer>) -> Self {
        self.normalizer = normalizer;
        self
    }

    pub fn validator(&self) -> &FeatureValidator {
        &self.validator
    }

    /// Run a parsed dataset; its skipped entries are carried into the result.
    pub fn run_dataset(&self, dataset: &SourceDataset) -> BatchResult {
        let mut result = self.run(&dataset.records);
        result.skipped = dataset.skipped.clone();
        result
    }

    /// Run a batch of records. Record order is preserved in every output.
    pub fn run(&self, records: &[SourceRecord]) -> BatchResult {
        let span = warden_observability::batch_span!(records.len(), self.config.parallel);
        let _entered = span.enter();

        let analysed: Vec<Analysed> = if self.config.parallel {
            records.par_iter().map(|r| self.analyse(r)).collect()
        } else {
            records.iter().map(|r| self.analyse(r)).collect()
        };

        let scorecards: Vec<ValidationRecord> =
            analysed.iter().map(|a| a.record.clone()).collect();
        let metas: Vec<ContentMeta> = records.iter().map(|r| r.meta.clone()).collect();
        let generated = self.generator.generate(&scorecards, metas.as_slice());

        let mut tfidf_rows = if self.config.include_tfidf {
            let documents: Vec<Vec<String>> = analysed.iter().map(|a| a.stems.clone()).collect();
            TfidfVectorizer::new(self.config.tfidf_max_features)
                .fit_transform(&documents)
                .rows
                .into_iter()
                .map(Some)
                .collect()
        } else {
            vec![None; analysed.len()]
        };

        let features: Vec<FeatureEntry> = records
            .iter()
            .zip(analysed)
            .zip(&generated.decisions)
            .zip(tfidf_rows.iter_mut())
            .map(|(((source, a), decision), tfidf)| FeatureEntry {
                original_text: source.text.clone(),
                cleaned_text: a.stems.join(" "),
                tokens: a.annotation.tokens,
                entities: a.annotation.entities,
                validation: a.record,
                severity_level: decision.tier,
                decision_rule: decision.rule_name(),
                tfidf: tfidf.take(),
            })
            .collect();

        let summary = DatasetSummary::from_features(&features, generated.tally);
        tracing::info!(
            records = records.len(),
            zero = generated.tally.zero,
            low = generated.tally.low,
            high = generated.tally.high,
            lookup_misses = generated.lookup_misses,
            "batch classified"
        );

        BatchResult {
            reports: generated.reports,
            features,
            tally: generated.tally,
            summary,
            skipped: Vec::new(),
            lookup_misses: generated.lookup_misses,
        }
    }

    fn analyse(&self, source: &SourceRecord) -> Analysed {
        let annotation = self.annotator.annotate(&source.text);
        let record = {
            let _span =
                warden_observability::validation_span!(source.index, annotation.tokens.len())
                    .entered();
            self.validator.validate(&annotation)
        };
        Analysed {
            stems: self.normalizer.normalize(&source.text),
            annotation,
            record,
        }
    }
}

impl std::fmt::Debug for SeverityPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SeverityPipeline")
            .field("validator", &self.validator)
            .field("generator", &self.generator)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
