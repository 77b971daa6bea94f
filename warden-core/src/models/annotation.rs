use serde::{Deserialize, Serialize};

use super::{Entity, Token};

/// Output of the linguistic annotator for one record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    #[serde(default)]
    pub tokens: Vec<Token>,
    #[serde(default)]
    pub entities: Vec<Entity>,
}

impl Annotation {
    pub fn new(tokens: Vec<Token>, entities: Vec<Entity>) -> Self {
        Self { tokens, entities }
    }

    /// Token texts joined with single spaces, the text scored at record level.
    pub fn joined_text(&self) -> String {
        self.tokens
            .iter()
            .map(|t| t.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
