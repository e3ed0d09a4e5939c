//! Deterministic task priority ranking.
//!
//! Ranks one batch of tasks by a weighted composite of four normalized
//! dimensions and reports dependency cycles:
//!
//! - **Urgency**: due-date proximity, piecewise-mapped then batch-normalized.
//! - **Importance**: the caller's 1–10 scale on a fixed linear map.
//! - **Effort**: inverse estimated hours; low effort is a "quick win".
//! - **Dependency pressure**: how many other tasks a task blocks (in-degree
//!   in the dependency graph), batch-normalized.
//!
//! Each result carries its sub-score breakdown and a human-readable
//! rationale. Cycle detection runs an explicit-stack DFS over the
//! dependency graph and reports one cycle per back-edge found, without
//! deduplication.
//!
//! # Example
//!
//! ```
//! use taskrank::model::TaskInput;
//! use taskrank::rank::{RankConfig, RankRunner};
//! use chrono::NaiveDate;
//!
//! let today = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
//! let tasks = vec![
//!     TaskInput::new("report", "Write report").with_due_date(today),
//!     TaskInput::new("backlog", "Groom backlog"),
//! ];
//! let report = RankRunner::run(&tasks, &RankConfig::default().with_today(today));
//!
//! assert_eq!(report.results[0].title, "Write report");
//! assert!(report.cycles.is_empty());
//! ```
//!
//! # Architecture
//!
//! The engine is pure and stateless: one call processes one batch with no
//! caching and no cross-batch memory, so concurrent invocations need no
//! locking. Transport, persistence, and UI belong to callers; the
//! [`validate`] module is the only boundary that touches loosely-typed
//! input.

pub mod features;
pub mod graph;
pub mod model;
pub mod rank;
pub mod validate;
