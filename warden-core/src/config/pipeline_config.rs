use serde::{Deserialize, Serialize};

use super::defaults;

/// Batch pipeline configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Annotate and validate records on the rayon pool.
    pub parallel: bool,
    /// Attach TF-IDF weights to the feature dataset.
    pub include_tfidf: bool,
    /// Vocabulary cap for TF-IDF.
    pub tfidf_max_features: usize,
    /// Stop words removed by the normalizer in addition to the built-in list.
    pub custom_stopwords: Vec<String>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            parallel: defaults::DEFAULT_PARALLEL,
            include_tfidf: defaults::DEFAULT_INCLUDE_TFIDF,
            tfidf_max_features: defaults::DEFAULT_TFIDF_MAX_FEATURES,
            custom_stopwords: Vec::new(),
        }
    }
}
