use serde::{Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;

/// Accumulated road distance along a path.
///
/// Wraps an `f64` so it can be totally ordered inside the Dijkstra heap.
/// `Distance::INFINITY` marks an unreachable destination and serializes
/// as `null`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Distance(f64);

impl Distance {
    pub const ZERO: Distance = Distance(0.0);
    pub const INFINITY: Distance = Distance(f64::INFINITY);

    pub fn new(value: f64) -> Self {
        Distance(value)
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn is_finite(&self) -> bool {
        self.0.is_finite()
    }
}

impl Default for Distance {
    fn default() -> Self {
        Self::ZERO
    }
}

impl Eq for Distance {}

impl PartialOrd for Distance {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Distance {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl std::ops::Add for Distance {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Distance(self.0 + other.0)
    }
}

impl From<f64> for Distance {
    fn from(value: f64) -> Self {
        Distance(value)
    }
}

impl From<u32> for Distance {
    fn from(value: u32) -> Self {
        Distance(value as f64)
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_infinite() {
            write!(f, "inf")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

impl Serialize for Distance {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.0.is_finite() {
            serializer.serialize_f64(self.0)
        } else {
            serializer.serialize_none()
        }
    }
}

/// One entry of a node's adjacency list
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Neighbor {
    pub node: String,
    pub weight: Distance,
}

/// Result of a shortest path query.
///
/// `found == false` is the unreachable outcome: the path is empty and the
/// distance is infinite.
#[derive(Debug, Clone, Serialize)]
pub struct PathResult {
    pub from: String,
    pub to: String,
    pub found: bool,
    pub path: Vec<String>,
    pub distance: Distance,
}

impl PathResult {
    pub(crate) fn unreachable(from: &str, to: &str) -> Self {
        PathResult {
            from: from.to_string(),
            to: to.to_string(),
            found: false,
            path: Vec::new(),
            distance: Distance::INFINITY,
        }
    }

    /// Number of edges on the path (0 when unreachable or origin == destination)
    pub fn hop_count(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Options for the short connection filter
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShortConnectionOptions {
    /// Exclusive upper bound on every incident edge weight
    pub threshold: f64,
    /// Whether nodes without any listed edge qualify
    pub include_isolated: bool,
}

impl Default for ShortConnectionOptions {
    fn default() -> Self {
        ShortConnectionOptions {
            threshold: crate::config::DEFAULT_SHORT_THRESHOLD,
            include_isolated: true,
        }
    }
}

impl ShortConnectionOptions {
    pub fn with_threshold(threshold: f64) -> Self {
        ShortConnectionOptions {
            threshold,
            ..Default::default()
        }
    }
}

/// Options for simple path enumeration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RouteOptions {
    /// Stop after this many complete routes have been recorded
    pub max_paths: Option<usize>,
}

/// All simple routes between two nodes, in discovery order
#[derive(Debug, Clone, Serialize)]
pub struct RouteSet {
    pub from: String,
    pub to: String,
    pub routes: Vec<Vec<String>>,
    pub truncated: bool,
    pub truncation_reason: Option<String>,
}

/// Outcome of the connectivity traversal
#[derive(Debug, Clone, Serialize)]
pub struct ConnectivityReport {
    pub connected: bool,
    /// Node the traversal started from (None for an empty graph)
    pub start: Option<String>,
    pub visited: usize,
    pub node_count: usize,
    /// Nodes never reached from `start`, in graph order
    pub unreached: Vec<String>,
}
