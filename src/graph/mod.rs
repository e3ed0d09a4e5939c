//! Dependency graph analysis.
//!
//! Builds an adjacency view over one batch's dependency references and
//! answers two questions:
//!
//! - **Which cycles exist?** Three-state depth-first traversal with an
//!   explicit frame stack (no call recursion, so adversarially deep graphs
//!   cannot exhaust the call stack). One cycle is reported per back-edge
//!   found; the same underlying cycle may appear more than once when
//!   reached via different entry points.
//! - **Who blocks whom?** Per-task dependency pressure: the in-degree
//!   (dependents count), min-max normalized across the batch.
//!
//! Edges to ids absent from the batch are dropped at build time, never
//! reported as errors. A self-dependency is a length-1 cycle.

mod analyzer;

pub use analyzer::{Cycle, DependencyGraph};
