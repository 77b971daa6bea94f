use crate::models::Annotation;

/// Linguistic annotator: part-of-speech tagged tokens and named entities.
pub trait IAnnotator: Send + Sync {
    /// Annotate raw text. Never fails; text with nothing to tag yields an
    /// empty annotation.
    fn annotate(&self, text: &str) -> Annotation;
}
