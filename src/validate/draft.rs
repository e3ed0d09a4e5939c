//! Loosely-typed incoming task records.
//!
//! Raw payloads carry mixed-typed fields: `due_date` may be an ISO date
//! string or a unix timestamp, `importance` and `estimated_hours` may
//! arrive as numbers or numeric strings. Each such field deserializes into
//! a permissive untagged enum with a `Value` catch-all, so a wrong shape
//! becomes a per-item validation error instead of failing the whole
//! payload at parse time.

use crate::model::TaskId;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An unvalidated task record as received from the outside.
///
/// All fields are optional at this layer; [`validate_batch`](super::validate_batch)
/// applies defaults and produces the typed record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskDraft {
    pub id: Option<TaskId>,
    pub title: Option<Value>,
    pub due_date: Option<DueDateField>,
    pub estimated_hours: Option<NumberField>,
    pub importance: Option<NumberField>,
    pub dependencies: Option<DependenciesField>,
}

/// Wire forms of `due_date`: unix-seconds number, date text, or junk.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DueDateField {
    Timestamp(f64),
    Text(String),
    Other(Value),
}

/// A numeric field that may arrive as a number or a numeric string.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumberField {
    Num(f64),
    Text(String),
    Other(Value),
}

/// `dependencies` must be a sequence of ids; any other shape is held for
/// the validator to reject with a per-item error.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DependenciesField {
    Ids(Vec<TaskId>),
    Other(Value),
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_all_fields_optional() {
        let draft: TaskDraft = serde_json::from_value(json!({})).unwrap();
        assert!(draft.id.is_none());
        assert!(draft.title.is_none());
        assert!(draft.dependencies.is_none());
    }

    #[test]
    fn test_due_date_wire_forms() {
        let text: TaskDraft = serde_json::from_value(json!({"due_date": "2026-09-01"})).unwrap();
        assert!(matches!(text.due_date, Some(DueDateField::Text(_))));

        let stamp: TaskDraft = serde_json::from_value(json!({"due_date": 1756684800})).unwrap();
        assert!(matches!(stamp.due_date, Some(DueDateField::Timestamp(_))));

        let junk: TaskDraft = serde_json::from_value(json!({"due_date": true})).unwrap();
        assert!(matches!(junk.due_date, Some(DueDateField::Other(_))));

        let null: TaskDraft = serde_json::from_value(json!({"due_date": null})).unwrap();
        assert!(null.due_date.is_none());
    }

    #[test]
    fn test_non_sequence_dependencies_survive_parsing() {
        let draft: TaskDraft =
            serde_json::from_value(json!({"dependencies": "not-a-list"})).unwrap();
        assert!(matches!(draft.dependencies, Some(DependenciesField::Other(_))));
    }

    #[test]
    fn test_mixed_id_types_in_dependencies() {
        let draft: TaskDraft = serde_json::from_value(json!({"dependencies": [1, "b"]})).unwrap();
        match draft.dependencies {
            Some(DependenciesField::Ids(ids)) => {
                assert_eq!(ids, vec![TaskId::Int(1), TaskId::from("b")]);
            }
            other => panic!("expected id list, got {other:?}"),
        }
    }
}
