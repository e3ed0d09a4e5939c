//! Ranking result types.

use crate::graph::Cycle;
use crate::model::{TaskId, TaskInput};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A task enriched with derived scheduling context, core-internal.
#[derive(Debug, Clone)]
pub(crate) struct PreparedTask {
    /// Position in the input batch. Indexes the batch-ordered raw feature
    /// vectors; the stable tie-break is implied by processing order.
    pub orig_index: usize,
    pub id: TaskId,
    pub title: String,
    pub due_date: Option<NaiveDate>,
    pub estimated_hours: f64,
    pub importance: u8,
    pub dependencies: Vec<TaskId>,
    /// Signed offset from the reference date, `None` without a due date.
    pub days_until_due: Option<i64>,
}

impl PreparedTask {
    pub fn from_input(task: &TaskInput, orig_index: usize, today: NaiveDate) -> Self {
        Self {
            orig_index,
            id: task.id.clone(),
            title: task.title.clone(),
            due_date: task.due_date,
            estimated_hours: task.estimated_hours,
            importance: task.importance,
            dependencies: task.dependencies.clone(),
            days_until_due: task
                .due_date
                .map(|due| due.signed_duration_since(today).num_days()),
        }
    }
}

/// Normalized per-dimension sub-scores, each in [0, 1], rounded to 4
/// decimals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SubScores {
    pub urgency_norm: f64,
    pub importance_norm: f64,
    pub effort_norm: f64,
    pub dependency_norm: f64,
}

/// Input echo carried on each result for display layers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskMeta {
    pub due_date: Option<NaiveDate>,
    pub estimated_hours: f64,
    pub importance: u8,
    pub dependencies: Vec<TaskId>,
}

/// One ranked task: composite score, sub-score breakdown, rationale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub id: TaskId,
    pub title: String,
    /// Weighted composite, rounded to 4 decimals. Not clamped to [0, 1];
    /// its range depends on the active weights.
    pub score: f64,
    pub raw: SubScores,
    pub explanation: String,
    pub metadata: TaskMeta,
}

/// Full outcome of ranking one batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankReport {
    /// Tasks in descending score order; equal scores keep input order.
    pub results: Vec<ScoreResult>,
    /// Dependency cycles as discovered, one report per back-edge. The same
    /// underlying cycle may appear more than once.
    pub cycles: Vec<Cycle>,
}

/// How many results the [`RankReport::summary`] view exposes.
pub const SUMMARY_LEN: usize = 3;

impl RankReport {
    /// Lightweight view: the top [`SUMMARY_LEN`] results without sub-score
    /// breakdowns, plus the cycle list.
    pub fn summary(&self) -> RankSummary {
        RankSummary {
            top: self
                .results
                .iter()
                .take(SUMMARY_LEN)
                .map(|r| SummaryEntry {
                    id: r.id.clone(),
                    title: r.title.clone(),
                    score: r.score,
                    explanation: r.explanation.clone(),
                    metadata: r.metadata.clone(),
                })
                .collect(),
            cycles: self.cycles.clone(),
        }
    }
}

/// One entry of the summary view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryEntry {
    pub id: TaskId,
    pub title: String,
    pub score: f64,
    pub explanation: String,
    pub metadata: TaskMeta,
}

/// Top-ranked slice of a report, for lightweight consumers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankSummary {
    pub top: Vec<SummaryEntry>,
    pub cycles: Vec<Cycle>,
}
