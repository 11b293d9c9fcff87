use crate::error::{GraphError, Result};
use crate::graph::GraphProvider;
use std::collections::HashMap;

/// Fail with `NodeNotFound` unless `id` is a node of the graph
pub fn require_node(provider: &dyn GraphProvider, id: &str) -> Result<()> {
    if provider.contains(id) {
        Ok(())
    } else {
        Err(GraphError::node_not_found(id))
    }
}

/// Walk predecessor links from `to` back to `from` and return the path in
/// forward order. Returns an empty path if the chain does not reach `from`.
pub fn reconstruct_path(
    from: &str,
    to: &str,
    predecessors: &HashMap<String, String>,
) -> Vec<String> {
    let mut path = vec![to.to_string()];
    let mut current = to;

    while current != from {
        match predecessors.get(current) {
            Some(pred) => {
                path.push(pred.clone());
                current = pred;
            }
            None => return Vec::new(),
        }
    }

    path.reverse();
    path
}
