//! Command dispatch logic for roadgraph

use std::time::Instant;

use crate::cli::Cli;
use roadgraph_core::error::Result;
use tracing::debug;

mod command;
mod commands;

pub use command::CommandContext;
use command::{Command, DefaultReport};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let ctx = CommandContext::new(cli, start)?;

    debug!(elapsed = ?start.elapsed(), nodes = ctx.graph.node_count(), "context_ready");

    match &cli.command {
        None => DefaultReport.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}
