//! `roadgraph check` command - structural diagnostics

use crate::commands::dispatch::CommandContext;
use crate::output_by_format_result;
use roadgraph_core::error::{GraphError, Result};
use roadgraph_core::graph::validate;

/// Execute the check command. Fails with a data error when issues exist.
pub fn execute(ctx: &CommandContext) -> Result<()> {
    let issues = validate(&ctx.graph);

    output_by_format_result!(ctx.cli.format,
        json => {
            let output = serde_json::json!({
                "count": issues.len(),
                "issues": issues,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok::<(), GraphError>(())
        },
        human => {
            for issue in &issues {
                println!("{}", issue);
            }
            if issues.is_empty() && !ctx.cli.quiet {
                println!("ok: no issues in {} town(s)", ctx.graph.node_count());
            }
        }
    )?;

    if issues.is_empty() {
        Ok(())
    } else {
        Err(GraphError::CheckFailed {
            count: issues.len(),
        })
    }
}
