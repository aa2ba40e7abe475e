//! The goal entry point: partition, batch, dispatch, aggregate.

use anyhow::Result;
use tracing::debug;

use crate::aggregate;
use crate::batcher;
use crate::config::LintConfig;
use crate::console::Console;
use crate::discovery::ElementDiscovery;
use crate::discovery::Specs;
use crate::dispatcher;
use crate::partitioner;
use crate::registry::PluginRegistry;
use crate::result::GoalOutcome;
use crate::store::ContentStore;
use crate::workspace::ReportSink;

/// Collaborators one lint invocation runs against.
pub struct GoalContext<'a> {
    pub registry: &'a PluginRegistry,
    pub discovery: &'a dyn ElementDiscovery,
    pub store: &'a dyn ContentStore,
    pub reports: &'a dyn ReportSink,
    pub console: &'a dyn Console,
}

/// Run every active tool over the given spec selection and fold the results
/// into one outcome.
///
/// Expected conditions (a skipped tool, a nonzero tool exit) are returned as
/// data inside the outcome; only infrastructure faults surface as `Err` and
/// abort the goal without a summary.
pub async fn run_lint(
    ctx: &GoalContext<'_>,
    specs: &Specs,
    config: &LintConfig,
) -> Result<GoalOutcome> {
    let partitions =
        partitioner::resolve_partitions(ctx.registry, ctx.discovery, specs, config).await?;
    if partitions.is_empty() {
        return Ok(GoalOutcome::empty());
    }

    let assignments = batcher::assign_batches(&partitions, config);
    debug!(
        tools = partitions.len(),
        batches = assignments.len(),
        "dispatching batches"
    );
    let results = dispatcher::dispatch_batches(assignments, ctx.store).await?;

    aggregate::aggregate_results(results, ctx.registry, ctx.store, ctx.reports, ctx.console).await
}
