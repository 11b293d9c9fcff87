//! `roadgraph report` command - every query in one pass
//!
//! Runs with the configured endpoints when invoked without a subcommand.

use crate::commands::dispatch::CommandContext;
use crate::commands::path::render_path;
use crate::commands::routes::render_routes;
use crate::output_by_format_result;
use roadgraph_core::error::Result;
use roadgraph_core::graph::{connectivity, enumerate_simple_paths, short_connections, shortest_path};

/// Execute the report command
pub fn execute(ctx: &CommandContext, from: Option<&str>, to: Option<&str>) -> Result<()> {
    let from = from.unwrap_or(ctx.config.report.from.as_str());
    let to = to.unwrap_or(ctx.config.report.to.as_str());

    let path = shortest_path(&ctx.graph, from, to)?;
    let short_opts = ctx.config.short_connection_options();
    let short = short_connections(&ctx.graph, &short_opts);
    let reach = connectivity(&ctx.graph);
    let routes = enumerate_simple_paths(&ctx.graph, from, to, &ctx.config.route_options())?;

    output_by_format_result!(ctx.cli.format,
        json => {
            let output = serde_json::json!({
                "shortest_path": path,
                "short_connections": {
                    "threshold": short_opts.threshold,
                    "nodes": short,
                },
                "connectivity": reach,
                "routes": routes,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok(())
        },
        human => {
            println!("Shortest route from {} to {}:", from, to);
            println!("  {}", render_path(&path));
            println!();
            println!("Towns with every road shorter than {}:", short_opts.threshold);
            println!("  {}", if short.is_empty() { "(none)".to_string() } else { short.join(", ") });
            println!();
            println!(
                "Every town reachable: {}",
                if reach.connected { "yes" } else { "no" }
            );
            println!();
            println!("Routes from {} to {}:", from, to);
            for line in render_routes(&routes) {
                println!("  {}", line);
            }
            if let Some(reason) = &routes.truncation_reason {
                println!("  (truncated: {})", reason);
            }
        }
    )
}
