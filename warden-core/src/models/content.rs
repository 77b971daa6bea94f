use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::UNSPECIFIED;

/// Kind of user-generated content a record came from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContentType {
    #[serde(rename = "post")]
    Post,
    #[serde(rename = "message")]
    Message,
    #[serde(rename = "comment")]
    Comment,
    #[default]
    #[serde(rename = "Unspecified")]
    Unspecified,
}

impl ContentType {
    /// Parse a source `contentType` value. Anything other than the three
    /// known kinds is `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "post" => Some(ContentType::Post),
            "message" => Some(ContentType::Message),
            "comment" => Some(ContentType::Comment),
            _ => None,
        }
    }

    /// Source field holding the content id for this kind.
    pub fn id_field(&self) -> Option<&'static str> {
        match self {
            ContentType::Post => Some("post_id"),
            ContentType::Message => Some("message_id"),
            ContentType::Comment => Some("comment_id"),
            ContentType::Unspecified => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Post => "post",
            ContentType::Message => "message",
            ContentType::Comment => "comment",
            ContentType::Unspecified => UNSPECIFIED,
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Source metadata that travels with a record through the pipeline.
///
/// `None` marks a lookup miss; the report generator substitutes the
/// `"Unspecified"` sentinel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentMeta {
    pub content_id: Option<String>,
    pub author_id: Option<String>,
    pub content_type: Option<ContentType>,
}

impl ContentMeta {
    pub fn new(
        content_id: impl Into<String>,
        author_id: impl Into<String>,
        content_type: ContentType,
    ) -> Self {
        Self {
            content_id: Some(content_id.into()),
            author_id: Some(author_id.into()),
            content_type: Some(content_type),
        }
    }
}
