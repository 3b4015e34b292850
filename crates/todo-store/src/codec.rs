//! Persisted Document Codec
//!
//! Writes the collection as a JSON array of `TodoItem` records and reads it
//! back, accepting the record shapes older builds of the app left behind:
//! `completed` for `isCompleted`, `createAt` for `createdAt`, `task` for
//! `text`, ISO date strings as timestamps, and missing or non-numeric ids.

use std::collections::HashSet;

use chrono::DateTime;
use log::warn;
use serde::de::{self, Deserializer};
use serde::Deserialize;
use serde_json::Value;

use crate::error::{TodoError, TodoResult};
use crate::model::{allocate_id, counter_after, TodoId, TodoItem};

/// Record as found in storage, before ids are settled
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredTodo {
    #[serde(default, deserialize_with = "de_lenient_id")]
    id: Option<TodoId>,
    #[serde(alias = "task")]
    text: String,
    #[serde(default, alias = "completed")]
    is_completed: bool,
    #[serde(default, alias = "createAt", deserialize_with = "de_timestamp")]
    created_at: i64,
}

fn de_lenient_id<'de, D>(deserializer: D) -> Result<Option<TodoId>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_u64().and_then(|n| TodoId::try_from(n).ok()),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}

fn de_timestamp<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .ok_or_else(|| de::Error::custom("timestamp out of range")),
        Value::String(s) => parse_timestamp(&s)
            .ok_or_else(|| de::Error::custom(format!("unrecognised timestamp {:?}", s))),
        Value::Null => Ok(0),
        other => Err(de::Error::custom(format!(
            "expected timestamp, found {}",
            json_kind(&other)
        ))),
    }
}

/// Millisecond count or RFC 3339 date (what `JSON.stringify(new Date())` writes)
fn parse_timestamp(s: &str) -> Option<i64> {
    let s = s.trim();
    s.parse::<i64>()
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.timestamp_millis()))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Serialize the whole collection in canonical order
pub fn encode_collection(items: &[TodoItem]) -> TodoResult<String> {
    Ok(serde_json::to_string(items)?)
}

/// Parse a stored document
///
/// Unreadable records are skipped. Records without a usable id, or repeating
/// an id seen earlier in the document, get fresh ids above the largest kept one
/// (or the smallest free ids when nothing is left above it).
pub fn decode_collection(raw: &str) -> TodoResult<Vec<TodoItem>> {
    let document: Value = serde_json::from_str(raw)?;
    let records = match document {
        Value::Array(records) => records,
        other => {
            return Err(TodoError::Corrupt(format!(
                "expected an array, found {}",
                json_kind(&other)
            )))
        }
    };

    let mut stored = Vec::with_capacity(records.len());
    for (index, record) in records.into_iter().enumerate() {
        match serde_json::from_value::<StoredTodo>(record) {
            Ok(todo) => stored.push(todo),
            Err(err) => warn!("skipping unreadable todo record #{}: {}", index, err),
        }
    }

    Ok(settle_ids(stored))
}

fn settle_ids(stored: Vec<StoredTodo>) -> Vec<TodoItem> {
    let mut used = HashSet::new();
    let kept: Vec<Option<TodoId>> = stored
        .iter()
        .map(|todo| todo.id.filter(|id| used.insert(*id)))
        .collect();
    let mut next = counter_after(used.iter().copied().max());

    stored
        .into_iter()
        .zip(kept)
        .map(|(todo, id)| {
            let id = id.unwrap_or_else(|| {
                let fresh = allocate_id(&mut next, &used);
                used.insert(fresh);
                fresh
            });
            TodoItem {
                id,
                text: todo.text,
                is_completed: todo.is_completed,
                created_at: todo.created_at,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let mut walk = TodoItem::new(2, "Walk dog", 2_000);
        walk.is_completed = true;
        let items = vec![TodoItem::new(1, "Buy milk", 1_000), walk];

        let raw = encode_collection(&items).unwrap();
        assert_eq!(decode_collection(&raw).unwrap(), items);
    }

    #[test]
    fn test_empty_array() {
        assert!(decode_collection("[]").unwrap().is_empty());
    }

    #[test]
    fn test_legacy_form_records() {
        // Shape written by the single-component build: no id, `createAt`
        let raw = r#"[
            {"text":"Buy milk","isCompleted":false,"createAt":1700000000000},
            {"text":"Walk dog","isCompleted":true,"createAt":1700000005000}
        ]"#;
        let items = decode_collection(raw).unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].id, 1);
        assert_eq!(items[1].id, 2);
        assert_eq!(items[0].created_at, 1_700_000_000_000);
        assert!(items[1].is_completed);
    }

    #[test]
    fn test_legacy_context_records() {
        // Shape written by the context-provider build: string ids, `task`, `completed`, ISO dates
        let raw = r#"[
            {"id":"0.4711","task":"Read book","completed":true,"createdAt":"2024-03-01T12:00:00.000Z"}
        ]"#;
        let items = decode_collection(raw).unwrap();

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].text, "Read book");
        assert!(items[0].is_completed);
        assert_eq!(items[0].created_at, 1_709_294_400_000);
    }

    #[test]
    fn test_duplicate_and_missing_ids_get_fresh_ones() {
        let raw = r#"[
            {"id":5,"text":"a","createdAt":1},
            {"id":5,"text":"b","createdAt":2},
            {"text":"c","createdAt":3},
            {"id":"9","text":"d","createdAt":4}
        ]"#;
        let items = decode_collection(raw).unwrap();
        let ids: Vec<TodoId> = items.iter().map(|t| t.id).collect();

        assert_eq!(ids, vec![5, 10, 11, 9]);
    }

    #[test]
    fn test_fresh_ids_when_largest_id_is_max() {
        let raw = r#"[
            {"id":4294967295,"text":"a","createdAt":1},
            {"text":"b","createdAt":2},
            {"text":"c","createdAt":3}
        ]"#;
        let items = decode_collection(raw).unwrap();
        let ids: Vec<TodoId> = items.iter().map(|t| t.id).collect();

        assert_eq!(ids, vec![TodoId::MAX, 1, 2]);
    }

    #[test]
    fn test_unreadable_records_are_skipped() {
        let raw = r#"[{"text":"ok","createdAt":1}, {"isCompleted":true}, 42, {"text":"bad","createdAt":{}}]"#;
        let items = decode_collection(raw).unwrap();

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].text, "ok");
    }

    #[test]
    fn test_non_array_document_is_corrupt() {
        assert!(matches!(decode_collection(r#"{"todos":[]}"#), Err(TodoError::Corrupt(_))));
        assert!(matches!(decode_collection("not json"), Err(TodoError::Json(_))));
    }
}
