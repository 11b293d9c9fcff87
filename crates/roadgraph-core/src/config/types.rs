//! Configuration type definitions

use serde::{Deserialize, Serialize};

/// Default exclusive threshold for short connections (km)
pub const DEFAULT_SHORT_THRESHOLD: f64 = 15.0;

/// Engine configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Short connection filter settings
    #[serde(default)]
    pub short_connections: ShortConnectionsConfig,

    /// Simple path enumeration settings
    #[serde(default)]
    pub routes: RoutesConfig,

    /// Endpoints used by the combined report
    #[serde(default)]
    pub report: ReportConfig,
}

/// Configuration for the short connection filter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShortConnectionsConfig {
    /// Exclusive upper bound for every incident edge weight
    #[serde(default = "default_threshold")]
    pub threshold: f64,

    /// Whether nodes without edges qualify (vacuous truth)
    #[serde(default = "default_include_isolated")]
    pub include_isolated: bool,
}

/// Configuration for simple path enumeration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoutesConfig {
    /// Stop after recording this many routes (unbounded when absent)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_paths: Option<usize>,
}

/// Configuration for the combined report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    #[serde(default = "default_report_from")]
    pub from: String,

    #[serde(default = "default_report_to")]
    pub to: String,
}

fn default_threshold() -> f64 {
    DEFAULT_SHORT_THRESHOLD
}

fn default_include_isolated() -> bool {
    true
}

fn default_report_from() -> String {
    "Madrid".to_string()
}

fn default_report_to() -> String {
    "Getafe".to_string()
}

impl Default for ShortConnectionsConfig {
    fn default() -> Self {
        ShortConnectionsConfig {
            threshold: default_threshold(),
            include_isolated: default_include_isolated(),
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        ReportConfig {
            from: default_report_from(),
            to: default_report_to(),
        }
    }
}
