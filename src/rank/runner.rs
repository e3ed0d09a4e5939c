//! Ranking pipeline execution.

use super::config::RankConfig;
use super::explain;
use super::types::{PreparedTask, RankReport, ScoreResult, SubScores, TaskMeta};
use crate::features::{effort_raw, importance_norm, min_max, urgency_raw};
use crate::graph::DependencyGraph;
use crate::model::TaskInput;
use rayon::prelude::*;
use std::cmp::Ordering;
use tracing::debug;

/// Executes the ranking pipeline over one batch.
///
/// # Usage
///
/// ```
/// use taskrank::model::TaskInput;
/// use taskrank::rank::{RankConfig, RankRunner};
/// use chrono::NaiveDate;
///
/// let today = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
/// let tasks = vec![
///     TaskInput::new("report", "Write report").with_due_date(today),
///     TaskInput::new("backlog", "Groom backlog"),
/// ];
/// let report = RankRunner::run(&tasks, &RankConfig::default().with_today(today));
/// assert_eq!(report.results[0].title, "Write report");
/// ```
pub struct RankRunner;

impl RankRunner {
    /// Ranks a validated batch.
    ///
    /// Never fails: empty batches, degenerate feature distributions, and
    /// cyclic dependency graphs all produce a well-formed report. With a
    /// fixed reference date the output is bit-identical across runs.
    pub fn run(tasks: &[TaskInput], config: &RankConfig) -> RankReport {
        let today = config
            .today
            .unwrap_or_else(|| chrono::Local::now().date_naive());

        let prepared: Vec<PreparedTask> = tasks
            .iter()
            .enumerate()
            .map(|(index, task)| PreparedTask::from_input(task, index, today))
            .collect();

        let graph = DependencyGraph::build(tasks);

        // Graph analysis and per-task feature extraction are independent of
        // each other; both must finish before batch normalization.
        let ((cycles, pressure), (urgencies, efforts)) = if config.parallel {
            rayon::join(
                || (graph.detect_cycles(), graph.dependency_pressure()),
                || raw_features(&prepared, true),
            )
        } else {
            (
                (graph.detect_cycles(), graph.dependency_pressure()),
                raw_features(&prepared, false),
            )
        };

        let (min_u, max_u) = extremes(&urgencies);
        let (min_e, max_e) = extremes(&efforts);

        let weights = &config.weights;
        let mut results: Vec<ScoreResult> = Vec::with_capacity(prepared.len());
        for task in &prepared {
            let i = task.orig_index;
            let urgency_norm = min_max(urgencies[i], min_u, max_u);
            let effort_norm = min_max(efforts[i], min_e, max_e);
            let imp_norm = importance_norm(task.importance);
            let dependency_norm = pressure.get(&task.id).copied().unwrap_or(0.0);

            let score = weights.urgency * urgency_norm
                + weights.importance * imp_norm
                + weights.effort * effort_norm
                + weights.dependency * dependency_norm;

            results.push(ScoreResult {
                id: task.id.clone(),
                title: task.title.clone(),
                score: round4(score),
                raw: SubScores {
                    urgency_norm: round4(urgency_norm),
                    importance_norm: round4(imp_norm),
                    effort_norm: round4(effort_norm),
                    dependency_norm: round4(dependency_norm),
                },
                explanation: explain::explanation(task, dependency_norm, effort_norm),
                metadata: TaskMeta {
                    due_date: task.due_date,
                    estimated_hours: task.estimated_hours,
                    importance: task.importance,
                    dependencies: task.dependencies.clone(),
                },
            });
        }

        // Descending by rounded score; the sort is stable, so ties keep
        // input order.
        results.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));

        debug!(tasks = tasks.len(), cycles = cycles.len(), "ranked batch");

        RankReport { results, cycles }
    }
}

/// Raw urgency and effort values, batch order.
fn raw_features(prepared: &[PreparedTask], parallel: bool) -> (Vec<f64>, Vec<f64>) {
    if parallel {
        prepared
            .par_iter()
            .map(|t| (urgency_raw(t.days_until_due), effort_raw(t.estimated_hours)))
            .unzip()
    } else {
        prepared
            .iter()
            .map(|t| (urgency_raw(t.days_until_due), effort_raw(t.estimated_hours)))
            .unzip()
    }
}

/// `(min, max)` of a raw-value slice; unused when the batch is empty.
fn extremes(values: &[f64]) -> (f64, f64) {
    values.iter().fold(
        (f64::INFINITY, f64::NEG_INFINITY),
        |(lo, hi), &v| (lo.min(v), hi.max(v)),
    )
}

fn round4(x: f64) -> f64 {
    (x * 10_000.0).round() / 10_000.0
}
