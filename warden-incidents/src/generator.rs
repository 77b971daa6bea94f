//! IncidentReportGenerator: one report per validated record, with
//! run-unique sequential ids and the `"Unspecified"` sentinel for any
//! metadata that cannot be resolved.

use warden_core::config::IncidentConfig;
use warden_core::constants::UNSPECIFIED;
use warden_core::models::{ContentMeta, ContentType, IncidentReport, ValidationRecord};
use warden_severity::{SeverityDecision, SeverityEngine, SeverityTally};

/// Metadata lookup by record position. `None` is a lookup miss.
pub trait RecordLookup {
    fn content_id(&self, index: usize) -> Option<String>;
    fn author_id(&self, index: usize) -> Option<String>;
    fn content_type(&self, index: usize) -> Option<ContentType>;
}

impl RecordLookup for [ContentMeta] {
    fn content_id(&self, index: usize) -> Option<String> {
        self.get(index).and_then(|m| m.content_id.clone())
    }

    fn author_id(&self, index: usize) -> Option<String> {
        self.get(index).and_then(|m| m.author_id.clone())
    }

    fn content_type(&self, index: usize) -> Option<ContentType> {
        self.get(index).and_then(|m| m.content_type)
    }
}

/// Strictly increasing incident ids: `prefix + (offset + n)`.
#[derive(Debug, Clone)]
pub struct IncidentIdSequence {
    prefix: String,
    next: u64,
}

impl IncidentIdSequence {
    pub fn new(prefix: impl Into<String>, offset: u64) -> Self {
        Self {
            prefix: prefix.into(),
            next: offset,
        }
    }

    pub fn from_config(config: &IncidentConfig) -> Self {
        Self::new(config.id_prefix.clone(), config.id_offset)
    }

    pub fn next_id(&mut self) -> String {
        let id = format!("{}{}", self.prefix, self.next);
        self.next = self.next.saturating_add(1);
        id
    }
}

/// Everything produced for one batch of scorecards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeneratedReports {
    pub reports: Vec<IncidentReport>,
    pub decisions: Vec<SeverityDecision>,
    pub tally: SeverityTally,
    /// Metadata fields that fell back to the sentinel.
    pub lookup_misses: usize,
}

#[derive(Debug, Clone, Default)]
pub struct IncidentReportGenerator {
    engine: SeverityEngine,
    config: IncidentConfig,
}

impl IncidentReportGenerator {
    pub fn new(engine: SeverityEngine, config: IncidentConfig) -> Self {
        Self { engine, config }
    }

    pub fn engine(&self) -> &SeverityEngine {
        &self.engine
    }

    /// Decide and report every record in order. Record `i` gets id
    /// `prefix + (offset + i)`; a lookup miss never aborts the batch.
    pub fn generate<L>(&self, records: &[ValidationRecord], lookup: &L) -> GeneratedReports
    where
        L: RecordLookup + ?Sized,
    {
        let mut ids = IncidentIdSequence::from_config(&self.config);
        let mut out = GeneratedReports {
            reports: Vec::with_capacity(records.len()),
            decisions: Vec::with_capacity(records.len()),
            ..GeneratedReports::default()
        };

        for (index, record) in records.iter().enumerate() {
            let decision = {
                let _span = warden_observability::decision_span!(index).entered();
                self.engine.evaluate(record)
            };
            out.tally.record(decision.tier);

            let content_id = lookup.content_id(index);
            let author_id = lookup.author_id(index);
            let content_type = lookup.content_type(index);

            let mut missing = Vec::new();
            if content_id.is_none() {
                missing.push("contentId");
            }
            if author_id.is_none() {
                missing.push("authorId");
            }
            if content_type.is_none() {
                missing.push("contentType");
            }
            if !missing.is_empty() {
                tracing::warn!(index, missing = ?missing, "metadata lookup miss, using sentinel");
                out.lookup_misses += missing.len();
            }

            out.reports.push(IncidentReport {
                content_id: content_id.unwrap_or_else(|| UNSPECIFIED.to_string()),
                incident_id: ids.next_id(),
                author_id: author_id.unwrap_or_else(|| UNSPECIFIED.to_string()),
                content_type: content_type.unwrap_or(ContentType::Unspecified),
                severity_level: decision.tier,
                status: self.config.initial_status,
            });
            out.decisions.push(decision);
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence_starts_at_offset() {
        let mut ids = IncidentIdSequence::new("i", 10_000);
        assert_eq!(ids.next_id(), "i10000");
        assert_eq!(ids.next_id(), "i10001");
    }

    #[test]
    fn lookup_past_the_end_is_a_miss() {
        let metas = vec![ContentMeta::new("p1", "a1", ContentType::Post)];
        assert_eq!(metas.as_slice().content_id(0).as_deref(), Some("p1"));
        assert_eq!(metas.as_slice().content_id(1), None);
    }
}
