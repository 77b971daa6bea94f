use std::fmt;

use serde::{Deserialize, Serialize};

/// Named-entity label. Only `Person` drives severity; the others are kept
/// for the dataset summary.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EntityLabel {
    Person,
    Org,
    Gpe,
    Norp,
    Loc,
    Date,
    Other(String),
}

impl EntityLabel {
    pub fn as_str(&self) -> &str {
        match self {
            EntityLabel::Person => "PERSON",
            EntityLabel::Org => "ORG",
            EntityLabel::Gpe => "GPE",
            EntityLabel::Norp => "NORP",
            EntityLabel::Loc => "LOC",
            EntityLabel::Date => "DATE",
            EntityLabel::Other(label) => label,
        }
    }
}

impl From<&str> for EntityLabel {
    fn from(label: &str) -> Self {
        match label.trim() {
            "PERSON" => EntityLabel::Person,
            "ORG" => EntityLabel::Org,
            "GPE" => EntityLabel::Gpe,
            "NORP" => EntityLabel::Norp,
            "LOC" => EntityLabel::Loc,
            "DATE" => EntityLabel::Date,
            other => EntityLabel::Other(other.to_string()),
        }
    }
}

impl From<String> for EntityLabel {
    fn from(label: String) -> Self {
        EntityLabel::from(label.as_str())
    }
}

impl From<EntityLabel> for String {
    fn from(label: EntityLabel) -> Self {
        label.as_str().to_string()
    }
}

impl fmt::Display for EntityLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named entity recognized in a record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Entity {
    pub text: String,
    pub label: EntityLabel,
}

impl Entity {
    pub fn new(text: impl Into<String>, label: EntityLabel) -> Self {
        Self {
            text: text.into(),
            label,
        }
    }

    pub fn person(text: impl Into<String>) -> Self {
        Self::new(text, EntityLabel::Person)
    }

    pub fn is_person(&self) -> bool {
        self.label == EntityLabel::Person
    }
}
