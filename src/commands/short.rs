//! `roadgraph short` command - towns whose every road is short

use crate::commands::dispatch::CommandContext;
use crate::output_by_format_result;
use roadgraph_core::bail_invalid;
use roadgraph_core::error::Result;
use roadgraph_core::graph::{short_connections, ShortConnectionOptions};

/// Merge CLI overrides onto the configured filter options
pub fn resolve_options(
    ctx: &CommandContext,
    threshold: Option<f64>,
    exclude_isolated: bool,
) -> Result<ShortConnectionOptions> {
    let mut opts = ctx.config.short_connection_options();
    if let Some(threshold) = threshold {
        if threshold.is_nan() {
            bail_invalid!("threshold", threshold);
        }
        opts.threshold = threshold;
    }
    if exclude_isolated {
        opts.include_isolated = false;
    }
    Ok(opts)
}

/// Execute the short command
pub fn execute(ctx: &CommandContext, threshold: Option<f64>, exclude_isolated: bool) -> Result<()> {
    let opts = resolve_options(ctx, threshold, exclude_isolated)?;
    let towns = short_connections(&ctx.graph, &opts);

    output_by_format_result!(ctx.cli.format,
        json => {
            let output = serde_json::json!({
                "threshold": opts.threshold,
                "include_isolated": opts.include_isolated,
                "nodes": towns,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok(())
        },
        human => {
            if !ctx.cli.quiet {
                println!("Towns with every road shorter than {}:", opts.threshold);
            }
            if towns.is_empty() && !ctx.cli.quiet {
                println!("  (none)");
            }
            for town in &towns {
                println!("  {}", town);
            }
        }
    )
}
