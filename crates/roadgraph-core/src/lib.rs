//! Roadgraph Core Library
//!
//! Weighted undirected graph engine for road networks: shortest paths,
//! short connections, connectivity and simple route enumeration.
//!
//! The graph is built once by the caller and only read by queries, so a
//! shared `&Graph` may be queried from several threads at once.

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
