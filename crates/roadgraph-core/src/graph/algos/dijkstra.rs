use crate::error::Result;
use crate::graph::algos::shared::{reconstruct_path, require_node};
use crate::graph::types::{Distance, PathResult};
use crate::graph::GraphProvider;
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

/// Wrapper for BinaryHeap to use as min-heap (ordered by accumulated
/// distance, then node id)
#[derive(Debug, Clone)]
pub struct HeapEntry {
    pub node_id: String,
    pub distance: Distance,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.node_id == other.node_id && self.distance == other.distance
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.distance
            .cmp(&other.distance)
            .then_with(|| self.node_id.cmp(&other.node_id))
    }
}

/// State tracked during the search
struct DijkstraState {
    distances: HashMap<String, Distance>,
    predecessors: HashMap<String, String>,
    heap: BinaryHeap<Reverse<HeapEntry>>,
    pops: usize,
}

impl DijkstraState {
    fn new(origin: &str) -> Self {
        let mut state = Self {
            distances: HashMap::new(),
            predecessors: HashMap::new(),
            heap: BinaryHeap::new(),
            pops: 0,
        };
        state.distances.insert(origin.to_string(), Distance::ZERO);
        state.heap.push(Reverse(HeapEntry {
            node_id: origin.to_string(),
            distance: Distance::ZERO,
        }));
        state
    }

    /// Best known distance; absent nodes are at infinity
    fn best(&self, id: &str) -> Distance {
        self.distances.get(id).copied().unwrap_or(Distance::INFINITY)
    }
}

/// Shortest weighted path from `from` to `to` (Dijkstra).
///
/// Both endpoints must exist, otherwise `NodeNotFound` is returned before
/// any search runs. An unreachable destination is not an error: the result
/// has `found == false`, an empty path and an infinite distance.
///
/// Stale heap entries are not filtered; relaxing from one can never improve
/// a recorded distance, so they fall through as no-ops. Among several paths
/// of equal length the first one settled by the heap wins.
#[tracing::instrument(skip_all, fields(from = %from, to = %to))]
pub fn shortest_path(provider: &dyn GraphProvider, from: &str, to: &str) -> Result<PathResult> {
    require_node(provider, from)?;
    require_node(provider, to)?;

    let mut state = DijkstraState::new(from);

    while let Some(Reverse(HeapEntry {
        node_id: current_id,
        distance,
    })) = state.heap.pop()
    {
        state.pops += 1;

        if current_id == to {
            break;
        }

        for neighbor in provider.neighbors(&current_id) {
            let candidate = distance + neighbor.weight;
            if candidate < state.best(&neighbor.node) {
                state.distances.insert(neighbor.node.clone(), candidate);
                state
                    .predecessors
                    .insert(neighbor.node.clone(), current_id.clone());
                state.heap.push(Reverse(HeapEntry {
                    node_id: neighbor.node.clone(),
                    distance: candidate,
                }));
            }
        }
    }

    let distance = state.best(to);
    tracing::debug!(pops = state.pops, settled = state.distances.len(), %distance, "dijkstra finished");

    if !distance.is_finite() {
        return Ok(PathResult::unreachable(from, to));
    }

    Ok(PathResult {
        from: from.to_string(),
        to: to.to_string(),
        found: true,
        path: reconstruct_path(from, to, &state.predecessors),
        distance,
    })
}

#[cfg(test)]
mod tests;
