//! Opt-in structural diagnostics.
//!
//! Queries never run these checks; they assume symmetric, loop-free input.

use serde::Serialize;
use std::collections::HashSet;
use std::fmt;

use crate::graph::types::Distance;
use crate::graph::Graph;

/// A structural problem found in a graph
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Issue {
    /// `from` lists `to`, but `to` has no listing back to `from` with the same weight
    AsymmetricEdge {
        from: String,
        to: String,
        weight: Distance,
    },
    SelfLoop { node: String },
    /// `from` lists `to` more than once
    ParallelEdge { from: String, to: String },
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Issue::AsymmetricEdge { from, to, weight } => write!(
                f,
                "asymmetric edge: {} -> {} ({}) has no matching reverse listing",
                from, to, weight
            ),
            Issue::SelfLoop { node } => write!(f, "self-loop on {}", node),
            Issue::ParallelEdge { from, to } => {
                write!(f, "parallel edge: {} lists {} more than once", from, to)
            }
        }
    }
}

/// Check symmetry, self-loops and parallel edges. Issues follow graph order.
pub fn validate(graph: &Graph) -> Vec<Issue> {
    let mut issues = Vec::new();

    for node in graph.nodes() {
        let mut seen: HashSet<&str> = HashSet::new();

        for neighbor in graph.neighbors(node) {
            if neighbor.node == node {
                issues.push(Issue::SelfLoop {
                    node: node.to_string(),
                });
                continue;
            }

            if !seen.insert(neighbor.node.as_str()) {
                issues.push(Issue::ParallelEdge {
                    from: node.to_string(),
                    to: neighbor.node.clone(),
                });
                continue;
            }

            let mirrored = graph
                .neighbors(&neighbor.node)
                .iter()
                .any(|back| back.node == node && back.weight == neighbor.weight);
            if !mirrored {
                issues.push(Issue::AsymmetricEdge {
                    from: node.to_string(),
                    to: neighbor.node.clone(),
                    weight: neighbor.weight,
                });
            }
        }
    }

    tracing::debug!(issues = issues.len(), "graph validation");
    issues
}
