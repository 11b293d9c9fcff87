//! `roadgraph path` command - shortest route between two towns

use crate::commands::dispatch::CommandContext;
use crate::output_by_format_result;
use roadgraph_core::error::Result;
use roadgraph_core::graph::{shortest_path, PathResult};

/// Execute the path command
pub fn execute(ctx: &CommandContext, from: &str, to: &str) -> Result<()> {
    let result = shortest_path(&ctx.graph, from, to)?;

    output_by_format_result!(ctx.cli.format,
        json => {
            println!("{}", serde_json::to_string_pretty(&result)?);
            Ok(())
        },
        human => {
            println!("{}", render_path(&result));
        }
    )
}

/// One-line rendering shared with the report command
pub fn render_path(result: &PathResult) -> String {
    if result.found {
        format!("{} (distance: {})", result.path.join(" -> "), result.distance)
    } else {
        format!("no route from {} to {}", result.from, result.to)
    }
}
