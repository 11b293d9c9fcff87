use crate::graph::adjacency::Graph;
use crate::graph::types::Neighbor;

/// Trait for providing graph adjacency to the query algorithms
pub trait GraphProvider {
    fn contains(&self, id: &str) -> bool;
    fn neighbors(&self, id: &str) -> &[Neighbor];
    fn node_ids(&self) -> Box<dyn Iterator<Item = &str> + '_>;
    fn node_count(&self) -> usize;
}

impl GraphProvider for Graph {
    fn contains(&self, id: &str) -> bool {
        Graph::contains(self, id)
    }

    fn neighbors(&self, id: &str) -> &[Neighbor] {
        Graph::neighbors(self, id)
    }

    fn node_ids(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        Box::new(self.nodes())
    }

    fn node_count(&self) -> usize {
        Graph::node_count(self)
    }
}
