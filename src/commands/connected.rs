//! `roadgraph connected` command - reachability of every town

use crate::commands::dispatch::CommandContext;
use crate::output_by_format_result;
use roadgraph_core::error::Result;
use roadgraph_core::graph::connectivity;

/// Execute the connected command
pub fn execute(ctx: &CommandContext) -> Result<()> {
    let report = connectivity(&ctx.graph);

    output_by_format_result!(ctx.cli.format,
        json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
            Ok(())
        },
        human => {
            println!("connected: {}", if report.connected { "yes" } else { "no" });
            if !ctx.cli.quiet && !report.unreached.is_empty() {
                println!(
                    "unreached from {}: {}",
                    report.start.as_deref().unwrap_or("-"),
                    report.unreached.join(", ")
                );
            }
        }
    )
}
