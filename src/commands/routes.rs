//! `roadgraph routes` command - every simple route between two towns

use crate::commands::dispatch::CommandContext;
use crate::output_by_format_result;
use roadgraph_core::bail_invalid;
use roadgraph_core::error::Result;
use roadgraph_core::graph::{enumerate_simple_paths, RouteOptions, RouteSet};

/// Execute the routes command
pub fn execute(ctx: &CommandContext, from: &str, to: &str, max_paths: Option<usize>) -> Result<()> {
    let mut opts = ctx.config.route_options();
    if let Some(max) = max_paths {
        if max == 0 {
            bail_invalid!("max-paths", max);
        }
        opts = RouteOptions {
            max_paths: Some(max),
        };
    }

    let set = enumerate_simple_paths(&ctx.graph, from, to, &opts)?;

    output_by_format_result!(ctx.cli.format,
        json => {
            println!("{}", serde_json::to_string_pretty(&set)?);
            Ok(())
        },
        human => {
            for line in render_routes(&set) {
                println!("{}", line);
            }
            if !ctx.cli.quiet {
                println!("{} route(s) from {} to {}", set.routes.len(), set.from, set.to);
                if let Some(reason) = &set.truncation_reason {
                    println!("(truncated: {})", reason);
                }
            }
        }
    )
}

/// Numbered route lines shared with the report command
pub fn render_routes(set: &RouteSet) -> Vec<String> {
    set.routes
        .iter()
        .enumerate()
        .map(|(i, route)| format!("{}. {}", i + 1, route.join(" -> ")))
        .collect()
}
