//! Shared task data model.
//!
//! [`TaskInput`] is the validated, typed record every other module works
//! with. Producing it from loosely-typed input is the job of the
//! [`validate`](crate::validate) module; past that boundary nothing
//! re-checks field shapes.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a task within one batch.
///
/// Ids arrive as integers or strings; when a record carries none, its batch
/// index is used. Ids are expected to be unique within a batch but the core
/// does not enforce it — see [`DependencyGraph`](crate::graph::DependencyGraph)
/// for the duplicate-id policy.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TaskId {
    Int(i64),
    Text(String),
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskId::Int(v) => write!(f, "{v}"),
            TaskId::Text(s) => write!(f, "{s}"),
        }
    }
}

impl From<i64> for TaskId {
    fn from(v: i64) -> Self {
        TaskId::Int(v)
    }
}

impl From<&str> for TaskId {
    fn from(v: &str) -> Self {
        TaskId::Text(v.to_string())
    }
}

impl From<String> for TaskId {
    fn from(v: String) -> Self {
        TaskId::Text(v)
    }
}

/// A validated task record, immutable once built.
///
/// Invariants (guaranteed by the validation boundary):
/// `title` is non-empty, `estimated_hours >= 0`, `importance` is in 1..=10.
/// `dependencies` may reference ids absent from the batch; such edges are
/// ignored downstream rather than rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskInput {
    pub id: TaskId,
    pub title: String,
    pub due_date: Option<NaiveDate>,
    pub estimated_hours: f64,
    pub importance: u8,
    pub dependencies: Vec<TaskId>,
}

impl TaskInput {
    /// Creates a record with the field defaults: no due date, 1.0 estimated
    /// hours, importance 5, no dependencies.
    pub fn new(id: impl Into<TaskId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            due_date: None,
            estimated_hours: 1.0,
            importance: 5,
            dependencies: Vec::new(),
        }
    }

    pub fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    pub fn with_estimated_hours(mut self, hours: f64) -> Self {
        self.estimated_hours = hours;
        self
    }

    pub fn with_importance(mut self, importance: u8) -> Self {
        self.importance = importance;
        self
    }

    pub fn with_dependencies(mut self, dependencies: Vec<TaskId>) -> Self {
        self.dependencies = dependencies;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_task_id_untagged_serde() {
        let int: TaskId = serde_json::from_value(json!(7)).unwrap();
        assert_eq!(int, TaskId::Int(7));

        let text: TaskId = serde_json::from_value(json!("build")).unwrap();
        assert_eq!(text, TaskId::Text("build".to_string()));

        assert_eq!(serde_json::to_value(&int).unwrap(), json!(7));
        assert_eq!(serde_json::to_value(&text).unwrap(), json!("build"));
    }

    #[test]
    fn test_task_id_display() {
        assert_eq!(TaskId::Int(3).to_string(), "3");
        assert_eq!(TaskId::from("deploy").to_string(), "deploy");
    }

    #[test]
    fn test_new_applies_defaults() {
        let task = TaskInput::new(0, "Write docs");
        assert_eq!(task.id, TaskId::Int(0));
        assert_eq!(task.title, "Write docs");
        assert!(task.due_date.is_none());
        assert!((task.estimated_hours - 1.0).abs() < 1e-12);
        assert_eq!(task.importance, 5);
        assert!(task.dependencies.is_empty());
    }

    #[test]
    fn test_builder_chain() {
        let due = chrono::NaiveDate::from_ymd_opt(2026, 9, 1).unwrap();
        let task = TaskInput::new("a", "A")
            .with_due_date(due)
            .with_estimated_hours(2.5)
            .with_importance(8)
            .with_dependencies(vec![TaskId::from("b")]);

        assert_eq!(task.due_date, Some(due));
        assert!((task.estimated_hours - 2.5).abs() < 1e-12);
        assert_eq!(task.importance, 8);
        assert_eq!(task.dependencies, vec![TaskId::from("b")]);
    }
}
