use crate::bail_invalid;
use crate::error::Result;
use crate::graph::algos::shared::require_node;
use crate::graph::types::{RouteOptions, RouteSet};
use crate::graph::GraphProvider;
use std::collections::VecDeque;

/// Enumerate every simple path from `from` to `to`, breadth first.
///
/// Each queue entry is a partial path starting at `from`. A path ending at
/// `to` is recorded and not extended; any other path is extended by every
/// neighbor it does not already contain. Edge weights are ignored.
///
/// The number of simple paths grows exponentially with graph density. With
/// `opts.max_paths` set, exploration stops once that many routes are
/// recorded and the result is marked truncated. A cap of zero is rejected
/// with `InvalidValue`.
#[tracing::instrument(skip_all, fields(from = %from, to = %to, max_paths = ?opts.max_paths))]
pub fn enumerate_simple_paths(
    provider: &dyn GraphProvider,
    from: &str,
    to: &str,
    opts: &RouteOptions,
) -> Result<RouteSet> {
    require_node(provider, from)?;
    require_node(provider, to)?;
    if opts.max_paths == Some(0) {
        bail_invalid!("max_paths", 0);
    }

    let mut routes: Vec<Vec<String>> = Vec::new();
    let mut truncated = false;
    let mut expanded = 0usize;
    let mut queue: VecDeque<Vec<String>> = VecDeque::new();
    queue.push_back(vec![from.to_string()]);

    while let Some(path) = queue.pop_front() {
        let Some(last) = path.last() else {
            continue;
        };

        if last == to {
            routes.push(path);
            if opts.max_paths.is_some_and(|max| routes.len() >= max) {
                truncated = !queue.is_empty();
                break;
            }
            continue;
        }

        expanded += 1;
        for neighbor in provider.neighbors(last) {
            if path.contains(&neighbor.node) {
                continue;
            }
            let mut extended = Vec::with_capacity(path.len() + 1);
            extended.extend(path.iter().cloned());
            extended.push(neighbor.node.clone());
            queue.push_back(extended);
        }
    }

    tracing::debug!(routes = routes.len(), expanded, truncated, "route enumeration");

    Ok(RouteSet {
        from: from.to_string(),
        to: to.to_string(),
        routes,
        truncated,
        truncation_reason: truncated.then(|| "max_paths".to_string()),
    })
}
