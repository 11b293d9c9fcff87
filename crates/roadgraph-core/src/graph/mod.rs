//! Graph model and query operations
//!
//! Provides the weighted road graph and the algorithms that run over it:
//! - Dijkstra shortest path between two towns
//! - Short connection filter (every road below a threshold)
//! - Connectivity check
//! - Enumeration of all simple routes between two towns
//! - Loaders for TOML/JSON graph documents and opt-in diagnostics

pub mod adjacency;
pub mod algos;
pub mod load;
pub mod provider;
pub mod types;
pub mod validate;

#[cfg(test)]
pub(crate) mod fixtures;

pub use adjacency::Graph;
pub use algos::{
    connectivity, enumerate_simple_paths, is_connected, reachable_from, short_connections,
    shortest_path,
};
pub use load::{load_graph, GraphDocument};
pub use provider::GraphProvider;
pub use types::{
    ConnectivityReport, Distance, Neighbor, PathResult, RouteOptions, RouteSet,
    ShortConnectionOptions,
};
pub use validate::{validate, Issue};
