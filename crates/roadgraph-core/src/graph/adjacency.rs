use std::collections::HashMap;

use crate::error::{GraphError, Result};
use crate::graph::types::{Distance, Neighbor};

/// In-memory weighted graph stored as adjacency lists.
///
/// Each node owns an ordered list of `(neighbor, weight)` listings. An
/// undirected road is two listings, one from each side; `connect` inserts
/// both, `add_edge` inserts one exactly as given. Symmetry is the caller's
/// responsibility and is only checked by [`crate::graph::validate`].
///
/// Nodes iterate in insertion order.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    order: Vec<String>,
    adjacency: HashMap<String, Vec<Neighbor>>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-allocate for a known node count.
    pub fn with_capacity(node_count: usize) -> Self {
        Self {
            order: Vec::with_capacity(node_count),
            adjacency: HashMap::with_capacity(node_count),
        }
    }

    /// Build a graph from `(node, [(neighbor, weight), ..])` entries,
    /// inserting every listing as given.
    ///
    /// Entry nodes keep entry order; neighbors that never appear as an
    /// entry follow after them.
    pub fn from_adjacency<I, N, E, T>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (N, E)>,
        N: Into<String>,
        E: IntoIterator<Item = (T, f64)>,
        T: Into<String>,
    {
        let entries: Vec<(String, E)> = entries
            .into_iter()
            .map(|(node, edges)| (node.into(), edges))
            .collect();

        let mut graph = Graph::with_capacity(entries.len());
        for (node, _) in &entries {
            graph.add_node(node.as_str());
        }
        for (node, edges) in entries {
            for (to, weight) in edges {
                graph.add_edge(&node, to, weight)?;
            }
        }
        Ok(graph)
    }

    /// Register a node. Returns false if it was already present.
    pub fn add_node(&mut self, id: impl Into<String>) -> bool {
        let id = id.into();
        if self.adjacency.contains_key(&id) {
            return false;
        }
        self.adjacency.insert(id.clone(), Vec::new());
        self.order.push(id);
        true
    }

    /// Add a single listing `from -> to`. Both endpoints are registered if
    /// missing.
    pub fn add_edge(&mut self, from: &str, to: impl Into<String>, weight: f64) -> Result<()> {
        let to = to.into();
        if !weight.is_finite() || weight < 0.0 {
            return Err(GraphError::InvalidWeight {
                from: from.to_string(),
                to,
                weight,
            });
        }

        self.add_node(from);
        self.add_node(to.clone());
        if let Some(list) = self.adjacency.get_mut(from) {
            list.push(Neighbor {
                node: to,
                weight: Distance::new(weight),
            });
        }
        Ok(())
    }

    /// Add an undirected road: a listing on each side with the same weight.
    pub fn connect(&mut self, a: &str, b: &str, weight: f64) -> Result<()> {
        self.add_edge(a, b, weight)?;
        self.add_edge(b, a, weight)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.adjacency.contains_key(id)
    }

    /// Adjacency list of a node (empty for unknown nodes).
    pub fn neighbors(&self, id: &str) -> &[Neighbor] {
        self.adjacency.get(id).map(|v| v.as_slice()).unwrap_or(&[])
    }

    /// Node identifiers in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(|s| s.as_str())
    }

    pub fn node_count(&self) -> usize {
        self.order.len()
    }

    /// Number of adjacency listings (an undirected road counts twice).
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(|v| v.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
