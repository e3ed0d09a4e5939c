//! Batch validation rules.

use super::draft::{DependenciesField, DueDateField, NumberField, TaskDraft};
use crate::model::{TaskId, TaskInput};
use chrono::{DateTime, NaiveDate};
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

/// Why a single task record was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("missing or invalid 'title'")]
    Title,
    #[error("'importance' must be an integer")]
    ImportanceNotInteger,
    #[error("'importance' must be 1-10")]
    ImportanceOutOfRange,
    #[error("'estimated_hours' must be a number")]
    HoursNotNumeric,
    #[error("'estimated_hours' must be non-negative")]
    HoursNegative,
    #[error("'due_date' must be YYYY-MM-DD or null")]
    DueDateMalformed,
    #[error("'dependencies' must be a list of task ids")]
    DependenciesNotList,
}

/// Rejection of a whole batch: one entry per failing record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("batch validation failed: {} record(s) rejected", failures.len())]
pub struct BatchRejection {
    /// `(batch index, error)` for every record that failed.
    pub failures: Vec<(usize, ValidationError)>,
}

/// Validates a batch of drafts into typed records.
///
/// All-or-nothing: any invalid record rejects the entire batch, with every
/// failure reported by batch index. Records without an id are assigned
/// their batch index as `TaskId::Int`.
pub fn validate_batch(drafts: &[TaskDraft]) -> Result<Vec<TaskInput>, BatchRejection> {
    let mut tasks = Vec::with_capacity(drafts.len());
    let mut failures = Vec::new();

    for (index, draft) in drafts.iter().enumerate() {
        match validate_task(draft, index) {
            Ok(task) => tasks.push(task),
            Err(error) => failures.push((index, error)),
        }
    }

    if failures.is_empty() {
        Ok(tasks)
    } else {
        debug!(rejected = failures.len(), total = drafts.len(), "batch rejected");
        Err(BatchRejection { failures })
    }
}

fn validate_task(draft: &TaskDraft, index: usize) -> Result<TaskInput, ValidationError> {
    let title = match &draft.title {
        Some(Value::String(s)) if !s.trim().is_empty() => s.trim().to_string(),
        _ => return Err(ValidationError::Title),
    };

    let importance = match &draft.importance {
        None => 5,
        Some(field) => {
            let raw = integer_value(field).ok_or(ValidationError::ImportanceNotInteger)?;
            if !(1..=10).contains(&raw) {
                return Err(ValidationError::ImportanceOutOfRange);
            }
            raw as u8
        }
    };

    let estimated_hours = match &draft.estimated_hours {
        None => 1.0,
        Some(field) => {
            let hours = float_value(field).ok_or(ValidationError::HoursNotNumeric)?;
            if hours < 0.0 {
                return Err(ValidationError::HoursNegative);
            }
            hours
        }
    };

    let due_date = match &draft.due_date {
        None => None,
        Some(field) => Some(parse_due_date(field)?),
    };

    let dependencies = match &draft.dependencies {
        None => Vec::new(),
        Some(DependenciesField::Ids(ids)) => ids.clone(),
        Some(DependenciesField::Other(_)) => return Err(ValidationError::DependenciesNotList),
    };

    Ok(TaskInput {
        id: draft.id.clone().unwrap_or(TaskId::Int(index as i64)),
        title,
        due_date,
        estimated_hours,
        importance,
        dependencies,
    })
}

/// Integer reading of a numeric field: numbers truncate, strings must parse
/// as integers.
fn integer_value(field: &NumberField) -> Option<i64> {
    match field {
        NumberField::Num(n) if n.is_finite() => Some(n.trunc() as i64),
        NumberField::Num(_) => None,
        NumberField::Text(s) => s.trim().parse().ok(),
        NumberField::Other(_) => None,
    }
}

fn float_value(field: &NumberField) -> Option<f64> {
    match field {
        NumberField::Num(n) if n.is_finite() => Some(*n),
        NumberField::Num(_) => None,
        NumberField::Text(s) => s.trim().parse().ok().filter(|v: &f64| v.is_finite()),
        NumberField::Other(_) => None,
    }
}

/// Accepts `YYYY-MM-DD` text or a unix-seconds timestamp (UTC).
fn parse_due_date(field: &DueDateField) -> Result<NaiveDate, ValidationError> {
    match field {
        DueDateField::Text(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map_err(|_| ValidationError::DueDateMalformed),
        DueDateField::Timestamp(secs) => DateTime::from_timestamp(*secs as i64, 0)
            .map(|dt| dt.date_naive())
            .ok_or(ValidationError::DueDateMalformed),
        DueDateField::Other(_) => Err(ValidationError::DueDateMalformed),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn drafts(value: serde_json::Value) -> Vec<TaskDraft> {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_defaults_applied() {
        let tasks = validate_batch(&drafts(json!([{"title": "A"}]))).unwrap();

        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].id, TaskId::Int(0));
        assert_eq!(tasks[0].title, "A");
        assert!(tasks[0].due_date.is_none());
        assert!((tasks[0].estimated_hours - 1.0).abs() < 1e-12);
        assert_eq!(tasks[0].importance, 5);
        assert!(tasks[0].dependencies.is_empty());
    }

    #[test]
    fn test_missing_id_defaults_to_batch_index() {
        let tasks =
            validate_batch(&drafts(json!([{"title": "A"}, {"id": "x", "title": "B"}, {"title": "C"}])))
                .unwrap();

        assert_eq!(tasks[0].id, TaskId::Int(0));
        assert_eq!(tasks[1].id, TaskId::from("x"));
        assert_eq!(tasks[2].id, TaskId::Int(2));
    }

    #[test]
    fn test_missing_title_rejected() {
        let err = validate_batch(&drafts(json!([{"importance": 5}]))).unwrap_err();
        assert_eq!(err.failures, vec![(0, ValidationError::Title)]);
    }

    #[test]
    fn test_blank_or_non_string_title_rejected() {
        let err = validate_batch(&drafts(json!([{"title": "   "}, {"title": 7}]))).unwrap_err();
        assert_eq!(
            err.failures,
            vec![(0, ValidationError::Title), (1, ValidationError::Title)]
        );
    }

    #[test]
    fn test_importance_bounds() {
        let err =
            validate_batch(&drafts(json!([{"title": "A", "importance": 0}]))).unwrap_err();
        assert_eq!(err.failures, vec![(0, ValidationError::ImportanceOutOfRange)]);

        let err =
            validate_batch(&drafts(json!([{"title": "A", "importance": 11}]))).unwrap_err();
        assert_eq!(err.failures, vec![(0, ValidationError::ImportanceOutOfRange)]);
    }

    #[test]
    fn test_importance_coercions() {
        let tasks = validate_batch(&drafts(
            json!([{"title": "A", "importance": "7"}, {"title": "B", "importance": 3.9}]),
        ))
        .unwrap();
        assert_eq!(tasks[0].importance, 7);
        assert_eq!(tasks[1].importance, 3); // truncated, not rounded

        let err =
            validate_batch(&drafts(json!([{"title": "A", "importance": "high"}]))).unwrap_err();
        assert_eq!(err.failures, vec![(0, ValidationError::ImportanceNotInteger)]);
    }

    #[test]
    fn test_negative_hours_rejected() {
        let err =
            validate_batch(&drafts(json!([{"title": "A", "estimated_hours": -1}]))).unwrap_err();
        assert_eq!(err.failures, vec![(0, ValidationError::HoursNegative)]);
    }

    #[test]
    fn test_non_numeric_hours_rejected() {
        let err =
            validate_batch(&drafts(json!([{"title": "A", "estimated_hours": "soon"}])))
                .unwrap_err();
        assert_eq!(err.failures, vec![(0, ValidationError::HoursNotNumeric)]);
    }

    #[test]
    fn test_hours_from_numeric_string() {
        let tasks =
            validate_batch(&drafts(json!([{"title": "A", "estimated_hours": "2.5"}]))).unwrap();
        assert!((tasks[0].estimated_hours - 2.5).abs() < 1e-12);
    }

    #[test]
    fn test_due_date_text_and_timestamp() {
        let tasks = validate_batch(&drafts(
            json!([{"title": "A", "due_date": "2026-09-01"}, {"title": "B", "due_date": 0}]),
        ))
        .unwrap();

        assert_eq!(tasks[0].due_date, NaiveDate::from_ymd_opt(2026, 9, 1));
        assert_eq!(tasks[1].due_date, NaiveDate::from_ymd_opt(1970, 1, 1));
    }

    #[test]
    fn test_malformed_due_date_rejected() {
        let err =
            validate_batch(&drafts(json!([{"title": "A", "due_date": "not-a-date"}])))
                .unwrap_err();
        assert_eq!(err.failures, vec![(0, ValidationError::DueDateMalformed)]);

        let err =
            validate_batch(&drafts(json!([{"title": "A", "due_date": true}]))).unwrap_err();
        assert_eq!(err.failures, vec![(0, ValidationError::DueDateMalformed)]);
    }

    #[test]
    fn test_non_sequence_dependencies_rejected() {
        let err =
            validate_batch(&drafts(json!([{"title": "A", "dependencies": "b"}]))).unwrap_err();
        assert_eq!(err.failures, vec![(0, ValidationError::DependenciesNotList)]);

        let err = validate_batch(&drafts(json!([{"title": "A", "dependencies": {"b": 1}}])))
            .unwrap_err();
        assert_eq!(err.failures, vec![(0, ValidationError::DependenciesNotList)]);
    }

    #[test]
    fn test_one_bad_record_rejects_whole_batch() {
        let err = validate_batch(&drafts(json!([
            {"title": "good"},
            {"title": "", "importance": 3},
            {"title": "also good"},
        ])))
        .unwrap_err();

        assert_eq!(err.failures, vec![(1, ValidationError::Title)]);
    }

    #[test]
    fn test_all_failures_reported() {
        let err = validate_batch(&drafts(json!([
            {"importance": 5},
            {"title": "B", "estimated_hours": -2},
            {"title": "C", "importance": 99},
        ])))
        .unwrap_err();

        assert_eq!(
            err.failures,
            vec![
                (0, ValidationError::Title),
                (1, ValidationError::HoursNegative),
                (2, ValidationError::ImportanceOutOfRange),
            ]
        );
        assert_eq!(err.to_string(), "batch validation failed: 3 record(s) rejected");
    }

    #[test]
    fn test_empty_batch_is_valid() {
        assert_eq!(validate_batch(&[]).unwrap(), Vec::new());
    }
}
