//! Boundary validation.
//!
//! The outside world supplies loosely-typed records ([`TaskDraft`]);
//! everything past this module works with fully typed
//! [`TaskInput`](crate::model::TaskInput)s and never re-checks field shapes.
//!
//! Validation is all-or-nothing at batch granularity: if any record is
//! invalid the whole batch is rejected, and the rejection carries every
//! `(index, error)` pair so callers can report all problems at once.

mod checks;
mod draft;

pub use checks::{validate_batch, BatchRejection, ValidationError};
pub use draft::{DependenciesField, DueDateField, NumberField, TaskDraft};
