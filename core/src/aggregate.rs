//! Fold dispatch results into the final goal outcome: merged reports, the
//! sorted console summary, and one exit code.

use std::collections::BTreeMap;

use anyhow::Result;
use tracing::info;

use crate::console::Console;
use crate::console::SIGIL_FAILED;
use crate::console::SIGIL_SUCCEEDED;
use crate::registry::PluginRegistry;
use crate::result::GoalOutcome;
use crate::result::ToolResult;
use crate::store::ContentStore;
use crate::store::Digest;
use crate::workspace::ReportSink;

/// Directory, inside the output dir, that tool reports are merged under. A
/// tool wanting its report persisted must write it below this root.
pub const REPORT_DIR: &str = "reports";

pub async fn aggregate_results(
    results: Vec<ToolResult>,
    registry: &PluginRegistry,
    store: &dyn ContentStore,
    reports: &dyn ReportSink,
    console: &dyn Console,
) -> Result<GoalOutcome> {
    let results_by_tool = group_by_tool(&results);
    let formatter_failed = results.iter().any(|result| {
        result.exit_code != 0
            && registry
                .descriptor(&result.tool_name)
                .is_some_and(|descriptor| descriptor.is_formatter)
    });

    write_reports(&results_by_tool, store, reports).await?;
    print_results(console, &results_by_tool, formatter_failed);

    Ok(GoalOutcome {
        exit_code: resolve_exit_code(&results),
        results,
    })
}

fn group_by_tool(results: &[ToolResult]) -> BTreeMap<&str, Vec<&ToolResult>> {
    let mut by_tool: BTreeMap<&str, Vec<&ToolResult>> = BTreeMap::new();
    for result in results {
        by_tool.entry(&result.tool_name).or_default().push(result);
    }
    by_tool
}

/// First nonzero exit code scanning the dispatch order backward; 0 if every
/// result succeeded.
pub fn resolve_exit_code(results: &[ToolResult]) -> i32 {
    results
        .iter()
        .rev()
        .find(|result| result.exit_code != 0)
        .map_or(0, |result| result.exit_code)
}

fn print_results(
    console: &dyn Console,
    results_by_tool: &BTreeMap<&str, Vec<&ToolResult>>,
    formatter_failed: bool,
) {
    if !results_by_tool.is_empty() {
        console.print_stderr("");
    }

    for (tool_name, results) in results_by_tool {
        let failed = results.iter().any(|result| result.exit_code != 0);
        let (sigil, status) = if failed {
            (SIGIL_FAILED, "failed")
        } else {
            (SIGIL_SUCCEEDED, "succeeded")
        };
        console.print_stderr(&format!("{sigil} {tool_name} {status}."));
    }

    if formatter_failed {
        console.print_stderr("");
        console.print_stderr("(One or more formatters failed. Run `lintfleet fmt` to fix.)");
    }
}

/// Merge every tool's report digests and persist them under
/// `reports/<tool_name>`. Sink failures abort the goal.
async fn write_reports(
    results_by_tool: &BTreeMap<&str, Vec<&ToolResult>>,
    store: &dyn ContentStore,
    reports: &dyn ReportSink,
) -> Result<()> {
    for (tool_name, results) in results_by_tool {
        let digests: Vec<Digest> = results
            .iter()
            .filter_map(|result| result.report.clone())
            .collect();
        if digests.is_empty() {
            continue;
        }
        let merged = store.merge(&digests).await?;
        let output_dir = format!("{REPORT_DIR}/{tool_name}");
        reports.write_digest(&merged, &output_dir).await?;
        info!("Wrote lint report files to {output_dir}.");
    }
    Ok(())
}
