use crate::graph::types::ShortConnectionOptions;
use crate::graph::GraphProvider;

/// Nodes whose every listed edge is strictly shorter than `opts.threshold`.
///
/// A node with no edges satisfies the condition vacuously and is kept when
/// `opts.include_isolated` is set (the default). Results follow graph order.
#[tracing::instrument(skip_all, fields(threshold = opts.threshold, include_isolated = opts.include_isolated))]
pub fn short_connections(provider: &dyn GraphProvider, opts: &ShortConnectionOptions) -> Vec<String> {
    let nodes: Vec<String> = provider
        .node_ids()
        .filter(|id| {
            let neighbors = provider.neighbors(id);
            if neighbors.is_empty() {
                return opts.include_isolated;
            }
            neighbors.iter().all(|n| n.weight.value() < opts.threshold)
        })
        .map(String::from)
        .collect();

    tracing::debug!(matched = nodes.len(), total = provider.node_count(), "short connections");
    nodes
}
