//! CLI argument parsing for roadgraph
//!
//! Global flags: --graph, --config, --format, --quiet, --verbose,
//! --log-level, --log-json

pub mod format;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use roadgraph_core::format::OutputFormat;

/// Roadgraph - queries over a weighted road network
#[derive(Parser, Debug)]
#[command(name = "roadgraph")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Graph file (.toml or .json); defaults to the bundled Madrid towns table
    #[arg(long, global = true, env = "ROADGRAPH_GRAPH")]
    pub graph: Option<PathBuf>,

    /// Engine configuration file (TOML)
    #[arg(long, global = true, env = "ROADGRAPH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. `debug`, `roadgraph_core=trace`)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Shortest route between two towns
    Path {
        /// Origin town
        from: String,
        /// Destination town
        to: String,
    },

    /// Towns whose every road is shorter than a threshold
    Short {
        /// Exclusive distance threshold (overrides config)
        #[arg(long, short)]
        threshold: Option<f64>,

        /// Leave out towns without any road
        #[arg(long)]
        exclude_isolated: bool,
    },

    /// Check whether every town is reachable
    Connected,

    /// All routes between two towns that never revisit a town
    Routes {
        /// Origin town
        from: String,
        /// Destination town
        to: String,

        /// Stop after this many routes (overrides config)
        #[arg(long)]
        max_paths: Option<usize>,
    },

    /// Report asymmetric roads, self-loops and duplicate listings
    Check,

    /// Run every query and print a combined report
    Report {
        /// Origin town for the path queries (overrides config)
        #[arg(long)]
        from: Option<String>,
        /// Destination town for the path queries (overrides config)
        #[arg(long)]
        to: Option<String>,
    },
}
