//! Source dataset parsing.
//!
//! A dataset is a JSON array of objects. Text comes from `content`, falling
//! back to `text`. `contentType` selects which of `post_id`, `message_id`,
//! or `comment_id` holds the content id. Missing metadata stays `None`.

use std::path::Path;

use serde::Serialize;
use serde_json::{Map, Value};
use warden_core::errors::{InputError, WardenError, WardenResult};
use warden_core::models::{ContentMeta, ContentType};

/// One record ready for annotation.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceRecord {
    /// Position in the source dataset.
    pub index: usize,
    pub text: String,
    pub meta: ContentMeta,
}

impl SourceRecord {
    pub fn new(index: usize, text: impl Into<String>, meta: ContentMeta) -> Self {
        Self {
            index,
            text: text.into(),
            meta,
        }
    }
}

/// A source entry that could not be turned into a record.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkippedRecord {
    pub index: usize,
    pub reason: String,
}

impl SkippedRecord {
    fn from_error(index: usize, error: &InputError) -> Self {
        Self {
            index,
            reason: error.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SourceDataset {
    pub records: Vec<SourceRecord>,
    pub skipped: Vec<SkippedRecord>,
}

impl SourceDataset {
    /// Records from plain texts without metadata.
    pub fn from_texts<I, S>(texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            records: texts
                .into_iter()
                .enumerate()
                .map(|(i, t)| SourceRecord::new(i, t, ContentMeta::default()))
                .collect(),
            skipped: Vec::new(),
        }
    }
}

/// Parse an already decoded dataset. Only a non-array top level is an error;
/// bad entries are skipped and listed.
pub fn parse_dataset(value: &Value) -> Result<SourceDataset, InputError> {
    let Value::Array(entries) = value else {
        return Err(InputError::NotAList {
            found: json_kind(value).to_string(),
        });
    };

    let mut dataset = SourceDataset::default();
    for (index, entry) in entries.iter().enumerate() {
        match parse_record(index, entry) {
            Ok(record) => dataset.records.push(record),
            Err(error) => {
                tracing::warn!(index, %error, "skipping source record");
                dataset.skipped.push(SkippedRecord::from_error(index, &error));
            }
        }
    }
    Ok(dataset)
}

pub fn parse_dataset_str(source: &str) -> WardenResult<SourceDataset> {
    let value: Value = serde_json::from_str(source)?;
    Ok(parse_dataset(&value)?)
}

/// Read and parse a dataset file.
pub fn load_dataset(path: impl AsRef<Path>) -> WardenResult<SourceDataset> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path)
        .map_err(|e| WardenError::io(path.display().to_string(), &e))?;
    let dataset = parse_dataset_str(&raw)?;
    tracing::info!(
        path = %path.display(),
        records = dataset.records.len(),
        skipped = dataset.skipped.len(),
        "dataset loaded"
    );
    Ok(dataset)
}

fn parse_record(index: usize, entry: &Value) -> Result<SourceRecord, InputError> {
    let Value::Object(fields) = entry else {
        return Err(InputError::NotAnObject { index });
    };
    let text = ["content", "text"]
        .iter()
        .find_map(|key| fields.get(*key).and_then(Value::as_str))
        .ok_or(InputError::MissingText { index })?;

    Ok(SourceRecord::new(index, text, extract_meta(fields)))
}

fn extract_meta(fields: &Map<String, Value>) -> ContentMeta {
    let content_type = fields
        .get("contentType")
        .and_then(Value::as_str)
        .and_then(ContentType::parse);
    let content_id = content_type
        .and_then(|t| t.id_field())
        .and_then(|key| fields.get(key))
        .and_then(scalar_string);
    let author_id = fields.get("author_id").and_then(scalar_string);

    ContentMeta {
        content_id,
        author_id,
        content_type,
    }
}

fn scalar_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn content_id_follows_content_type() {
        let dataset = parse_dataset(&json!([
            {
                "content": "hi",
                "contentType": "comment",
                "comment_id": "c1",
                "post_id": "p1",
                "author_id": 42
            }
        ]))
        .unwrap();
        let meta = &dataset.records[0].meta;
        assert_eq!(meta.content_id.as_deref(), Some("c1"));
        assert_eq!(meta.author_id.as_deref(), Some("42"));
        assert_eq!(meta.content_type, Some(ContentType::Comment));
    }

    #[test]
    fn text_field_is_a_fallback() {
        let dataset = parse_dataset(&json!([{"text": "fallback"}])).unwrap();
        assert_eq!(dataset.records[0].text, "fallback");
        assert_eq!(dataset.records[0].meta, ContentMeta::default());
    }

    #[test]
    fn unknown_content_type_leaves_meta_unresolved() {
        let entry = json!([{"content": "x", "contentType": "story", "post_id": "p"}]);
        let dataset = parse_dataset(&entry).unwrap();
        assert_eq!(dataset.records[0].meta.content_type, None);
        assert_eq!(dataset.records[0].meta.content_id, None);
    }

    #[test]
    fn bad_entries_are_skipped_not_fatal() {
        let dataset = parse_dataset(&json!([{"content": "ok"}, {"author_id": "a"}, 7])).unwrap();
        assert_eq!(dataset.records.len(), 1);
        assert_eq!(
            dataset.skipped.iter().map(|s| s.index).collect::<Vec<_>>(),
            vec![1, 2]
        );
    }

    #[test]
    fn non_array_dataset_is_rejected() {
        let err = parse_dataset(&json!({"content": "x"})).unwrap_err();
        assert_eq!(
            err,
            InputError::NotAList {
                found: "object".into()
            }
        );
    }
}
