//! Engine configuration for roadgraph
//!
//! Configuration is read from a TOML file; every field has a default so an
//! empty file (or no file at all) yields the reference behaviour.

pub mod types;

use std::fs;
use std::path::Path;

use crate::bail_invalid;
use crate::error::{GraphError, Result};
use crate::graph::{RouteOptions, ShortConnectionOptions};

pub use types::{
    EngineConfig, ReportConfig, RoutesConfig, ShortConnectionsConfig, DEFAULT_SHORT_THRESHOLD,
};

impl EngineConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| GraphError::io_operation("read config", path.display(), e))?;
        let config: EngineConfig = toml::from_str(&content)?;
        config.validate()?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| GraphError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Reject values the algorithms cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.short_connections.threshold.is_nan() {
            bail_invalid!("short_connections.threshold", self.short_connections.threshold);
        }
        if self.routes.max_paths == Some(0) {
            bail_invalid!("routes.max_paths", 0);
        }
        Ok(())
    }

    /// Options for the short connection filter
    pub fn short_connection_options(&self) -> ShortConnectionOptions {
        ShortConnectionOptions {
            threshold: self.short_connections.threshold,
            include_isolated: self.short_connections.include_isolated,
        }
    }

    /// Options for simple path enumeration
    pub fn route_options(&self) -> RouteOptions {
        RouteOptions {
            max_paths: self.routes.max_paths,
        }
    }
}
