//! Feedback records and the stored list
//!
//! Stored as a bare JSON array of `{name, email, message, date}` objects.
//! Decoding is lenient per record: a damaged entry loads blank instead of
//! making the whole list unreadable.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A single submitted feedback entry
///
/// Text fields are stored already sanitized. Missing or `null` fields in
/// stored data load as empty strings so older or hand-edited entries still
/// render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FeedbackRecord {
    #[serde(deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(deserialize_with = "lenient_string")]
    pub email: String,
    #[serde(deserialize_with = "lenient_string")]
    pub message: String,
    /// Human-readable local time of submission, never reparsed
    #[serde(deserialize_with = "lenient_string")]
    pub date: String,
}

/// Strings pass through, numbers and booleans keep their text, anything
/// else (`null`, arrays, objects) becomes blank
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null | Value::Array(_) | Value::Object(_) => String::new(),
    })
}

impl FeedbackRecord {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
            date: date.into(),
        }
    }
}

/// Ordered, append-only list of feedback (oldest first)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
#[serde(transparent)]
pub struct FeedbackList {
    pub entries: Vec<FeedbackRecord>,
}

impl<'de> Deserialize<'de> for FeedbackList {
    /// The outer value must be an array; elements that are not records
    /// (e.g. `null`, `42`) keep their slot as a blank record
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let entries = Vec::<Value>::deserialize(deserializer)?
            .into_iter()
            .map(|item| serde_json::from_value(item).unwrap_or_default())
            .collect();
        Ok(Self { entries })
    }
}

impl FeedbackList {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn push(&mut self, record: FeedbackRecord) {
        self.entries.push(record);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Most recently submitted entry
    pub fn last(&self) -> Option<&FeedbackRecord> {
        self.entries.last()
    }

    /// Records in `[start, end)`, clamped to the list bounds
    pub fn slice(&self, start: usize, end: usize) -> &[FeedbackRecord] {
        let len = self.entries.len();
        let start = start.min(len);
        let end = end.clamp(start, len);
        &self.entries[start..end]
    }
}

impl From<Vec<FeedbackRecord>> for FeedbackList {
    fn from(entries: Vec<FeedbackRecord>) -> Self {
        Self { entries }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_as_bare_array() {
        let list = FeedbackList::from(vec![FeedbackRecord::new("A", "a@b.c", "hi", "1/2/2026")]);
        let json = serde_json::to_string(&list).unwrap();
        assert_eq!(
            json,
            r#"[{"name":"A","email":"a@b.c","message":"hi","date":"1/2/2026"}]"#
        );
    }

    #[test]
    fn test_missing_fields_load_blank() {
        let list: FeedbackList = serde_json::from_str(r#"[{"name":"Old"}, {}]"#).unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list.entries[0].name, "Old");
        assert_eq!(list.entries[0].email, "");
        assert_eq!(list.entries[1], FeedbackRecord::default());
    }

    #[test]
    fn test_null_and_number_fields_load_without_losing_neighbours() {
        let json = r#"[
            {"name":"A","email":"a@b.c","message":"kept","date":"d1"},
            {"name":null,"email":"x@y.z","message":7,"date":true},
            {"name":["nested"],"email":{},"message":"ok","date":"d3"}
        ]"#;
        let list: FeedbackList = serde_json::from_str(json).unwrap();
        assert_eq!(list.len(), 3);
        assert_eq!(list.entries[0], FeedbackRecord::new("A", "a@b.c", "kept", "d1"));
        assert_eq!(list.entries[1], FeedbackRecord::new("", "x@y.z", "7", "true"));
        assert_eq!(list.entries[2], FeedbackRecord::new("", "", "ok", "d3"));
    }

    #[test]
    fn test_non_record_elements_keep_their_slot() {
        let list: FeedbackList = serde_json::from_str(r#"[null, 42, "text", {"name":"B"}]"#).unwrap();
        assert_eq!(list.len(), 4);
        assert_eq!(list.entries[0], FeedbackRecord::default());
        assert_eq!(list.entries[3].name, "B");
    }

    #[test]
    fn test_non_array_is_still_an_error() {
        assert!(serde_json::from_str::<FeedbackList>(r#"{"name":"x"}"#).is_err());
        assert!(serde_json::from_str::<FeedbackList>("42").is_err());
    }

    #[test]
    fn test_slice_clamps() {
        let list = FeedbackList::from(vec![FeedbackRecord::default(); 3]);
        assert_eq!(list.slice(0, 5).len(), 3);
        assert_eq!(list.slice(2, 7).len(), 1);
        assert!(list.slice(10, 15).is_empty());
    }
}
