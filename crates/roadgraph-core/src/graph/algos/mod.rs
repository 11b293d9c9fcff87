//! Graph algorithm implementations
//!
//! Contains the four query operations:
//! - `dijkstra`: Weighted shortest path
//! - `filter`: Nodes whose every edge is short
//! - `dfs`: Reachability and connectivity (explicit stack)
//! - `bfs`: Enumeration of all simple paths
//! - `shared`: Common utilities used by multiple algorithms

pub mod bfs;
pub mod dfs;
pub mod dijkstra;
pub mod filter;
pub mod shared;

pub use bfs::enumerate_simple_paths;
pub use dfs::{connectivity, is_connected, reachable_from};
pub use dijkstra::shortest_path;
pub use filter::short_connections;
pub use shared::{reconstruct_path, require_node};
