//! Subcommand routing

use crate::cli::Commands;
use crate::commands::dispatch::command::{Command, CommandContext};
use crate::commands::{check, connected, path, report, routes, short};
use roadgraph_core::error::Result;
use roadgraph_core::trace_time;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        let result = match self {
            Commands::Path { from, to } => path::execute(ctx, from, to),
            Commands::Short {
                threshold,
                exclude_isolated,
            } => short::execute(ctx, *threshold, *exclude_isolated),
            Commands::Connected => connected::execute(ctx),
            Commands::Routes {
                from,
                to,
                max_paths,
            } => routes::execute(ctx, from, to, *max_paths),
            Commands::Check => check::execute(ctx),
            Commands::Report { from, to } => report::execute(ctx, from.as_deref(), to.as_deref()),
        };
        trace_time!(ctx.start, "execute_command");
        result
    }
}
