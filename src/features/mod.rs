//! Per-dimension feature estimation and batch normalization.
//!
//! The estimators are pure per-task maps with no cross-task dependency, so
//! they can be evaluated in any order or in parallel. Min-max normalization
//! ([`min_max`]) is the only step that needs the whole batch's raw values:
//! urgency, effort, and dependency pressure are rescaled against the batch
//! extremes, while importance uses a fixed linear map independent of the
//! batch.

mod estimators;
mod normalize;

pub use estimators::{effort_raw, importance_norm, urgency_raw};
pub use normalize::min_max;
