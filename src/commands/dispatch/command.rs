//! Command trait and context for dispatching commands

use std::path::Path;
use std::time::Instant;

use crate::cli::Cli;
use crate::commands::report;
use roadgraph_core::config::EngineConfig;
use roadgraph_core::error::Result;
use roadgraph_core::graph::{load_graph, Graph, GraphDocument};
use roadgraph_core::trace_time;

/// Bundled table of towns west and south of Madrid
const BUNDLED_GRAPH: &str = include_str!("../../../data/madrid.toml");

/// Load the graph named by `--graph`, or the bundled table
pub fn load_or_bundled_graph(path: Option<&Path>) -> Result<Graph> {
    match path {
        Some(path) => load_graph(path),
        None => GraphDocument::from_toml_str(BUNDLED_GRAPH)?.into_graph(),
    }
}

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub graph: Graph,
    pub config: EngineConfig,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, start: Instant) -> Result<Self> {
        let config = match &cli.config {
            Some(path) => EngineConfig::load(path)?,
            None => EngineConfig::default(),
        };
        trace_time!(start, "load_config");

        let graph = load_or_bundled_graph(cli.graph.as_deref())?;
        trace_time!(start, "load_graph", nodes = graph.node_count());

        Ok(Self {
            cli,
            graph,
            config,
            start,
        })
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// Runs the full report when no subcommand is given
pub struct DefaultReport;

impl Command for DefaultReport {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        report::execute(ctx, None, None)
    }
}
