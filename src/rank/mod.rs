//! Composite scoring and ranking pipeline.
//!
//! One [`RankRunner::run`] call takes a validated batch and produces a
//! [`RankReport`]: tasks ordered by a weighted composite of four normalized
//! dimensions (urgency, importance, effort, dependency pressure), each with
//! its sub-score breakdown and a human-readable rationale, plus the list of
//! dependency cycles found in the batch.
//!
//! The pipeline is pure and stateless; with a fixed reference date the same
//! batch always yields a bit-identical report. Equal composite scores keep
//! their input order (stable sort).

mod config;
mod explain;
mod runner;
mod types;

pub use config::{RankConfig, ScoreWeights};
pub use runner::RankRunner;
pub use types::{RankReport, RankSummary, ScoreResult, SubScores, SummaryEntry, TaskMeta, SUMMARY_LEN};
