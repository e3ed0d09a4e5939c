//! Adjacency construction, cycle detection, dependency pressure.

use crate::features::min_max;
use crate::model::{TaskId, TaskInput};
use std::collections::HashMap;

/// A closed dependency walk, ids in traversal order.
pub type Cycle = Vec<TaskId>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum VisitState {
    Unvisited,
    InProgress,
    Done,
}

/// Adjacency view over one batch's dependency references.
///
/// One node per distinct id, in first-occurrence order. When a batch
/// carries duplicate ids the last occurrence's edge list wins for that
/// node. Edges pointing at ids not present in the batch are dropped;
/// duplicate edges within one dependency list are kept.
#[derive(Debug)]
pub struct DependencyGraph {
    ids: Vec<TaskId>,
    adj: Vec<Vec<usize>>,
}

impl DependencyGraph {
    pub fn build(tasks: &[TaskInput]) -> Self {
        let mut slot: HashMap<TaskId, usize> = HashMap::with_capacity(tasks.len());
        let mut ids = Vec::with_capacity(tasks.len());
        for task in tasks {
            slot.entry(task.id.clone()).or_insert_with(|| {
                ids.push(task.id.clone());
                ids.len() - 1
            });
        }

        let mut adj = vec![Vec::new(); ids.len()];
        for task in tasks {
            adj[slot[&task.id]] = task
                .dependencies
                .iter()
                .filter_map(|dep| slot.get(dep).copied())
                .collect();
        }

        Self { ids, adj }
    }

    pub fn node_count(&self) -> usize {
        self.ids.len()
    }

    /// Detects dependency cycles with an explicit-stack three-state DFS.
    ///
    /// Every node is tried as a traversal root so cycles in disconnected
    /// components are found. An edge into an in-progress node is a
    /// back-edge; the current path segment from that node through the
    /// current node is recorded as one cycle. No deduplication by node-set:
    /// each back-edge yields its own report.
    pub fn detect_cycles(&self) -> Vec<Cycle> {
        let n = self.ids.len();
        let mut state = vec![VisitState::Unvisited; n];
        let mut cycles = Vec::new();

        // path = nodes on the current DFS walk; frames = (node, next edge)
        let mut path: Vec<usize> = Vec::new();
        let mut frames: Vec<(usize, usize)> = Vec::new();

        for start in 0..n {
            if state[start] != VisitState::Unvisited {
                continue;
            }
            state[start] = VisitState::InProgress;
            path.push(start);
            frames.push((start, 0));

            while let Some(&mut (u, ref mut next)) = frames.last_mut() {
                if *next < self.adj[u].len() {
                    let v = self.adj[u][*next];
                    *next += 1;
                    match state[v] {
                        VisitState::Unvisited => {
                            state[v] = VisitState::InProgress;
                            path.push(v);
                            frames.push((v, 0));
                        }
                        VisitState::InProgress => {
                            // in-progress nodes are on the current path
                            if let Some(pos) = path.iter().position(|&node| node == v) {
                                cycles.push(
                                    path[pos..].iter().map(|&node| self.ids[node].clone()).collect(),
                                );
                            }
                        }
                        VisitState::Done => {}
                    }
                } else {
                    state[u] = VisitState::Done;
                    path.pop();
                    frames.pop();
                }
            }
        }

        cycles
    }

    /// Normalized dependency pressure per id.
    ///
    /// Raw value is the in-degree: how many dependency entries across the
    /// batch point at this node. Min-max rescaled; an all-equal batch maps
    /// to 1.0 for nodes with a positive count and 0.0 otherwise.
    pub fn dependency_pressure(&self) -> HashMap<TaskId, f64> {
        let mut counts = vec![0usize; self.ids.len()];
        for edges in &self.adj {
            for &v in edges {
                counts[v] += 1;
            }
        }

        let (Some(&min), Some(&max)) = (counts.iter().min(), counts.iter().max()) else {
            return HashMap::new();
        };

        self.ids
            .iter()
            .cloned()
            .zip(counts.iter().map(|&c| min_max(c as f64, min as f64, max as f64)))
            .collect()
    }
}
