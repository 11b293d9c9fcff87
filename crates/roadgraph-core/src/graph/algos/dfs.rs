use crate::graph::types::ConnectivityReport;
use crate::graph::GraphProvider;
use std::collections::HashSet;

/// Nodes reachable from `start` following adjacency lists as given.
///
/// Depth-first with an explicit stack, so stack usage does not grow with
/// path length.
pub fn reachable_from<'a>(provider: &'a dyn GraphProvider, start: &'a str) -> HashSet<&'a str> {
    let mut visited: HashSet<&str> = HashSet::new();
    let mut stack: Vec<&str> = vec![start];

    while let Some(current) = stack.pop() {
        if !visited.insert(current) {
            continue;
        }
        for neighbor in provider.neighbors(current) {
            if !visited.contains(neighbor.node.as_str()) {
                stack.push(neighbor.node.as_str());
            }
        }
    }

    visited
}

/// Full connectivity report: traverse from the first node in graph order
/// and list whatever was not reached.
///
/// An empty graph is connected by convention.
#[tracing::instrument(skip_all, fields(nodes = provider.node_count()))]
pub fn connectivity(provider: &dyn GraphProvider) -> ConnectivityReport {
    let node_count = provider.node_count();
    let Some(start) = provider.node_ids().next() else {
        return ConnectivityReport {
            connected: true,
            start: None,
            visited: 0,
            node_count: 0,
            unreached: Vec::new(),
        };
    };

    let visited = reachable_from(provider, start);
    let unreached: Vec<String> = provider
        .node_ids()
        .filter(|id| !visited.contains(id))
        .map(String::from)
        .collect();

    tracing::debug!(start, visited = visited.len(), unreached = unreached.len(), "connectivity");

    ConnectivityReport {
        connected: visited.len() == node_count,
        start: Some(start.to_string()),
        visited: visited.len(),
        node_count,
        unreached,
    }
}

/// True when every node is reachable from the first node in graph order.
pub fn is_connected(provider: &dyn GraphProvider) -> bool {
    connectivity(provider).connected
}
