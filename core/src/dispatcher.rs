//! Concurrent batch execution.

use anyhow::Result;
use futures::future::join_all;
use tracing::debug;

use crate::batcher::BatchAssignment;
use crate::element::InputElement;
use crate::result::ToolResult;
use crate::store::ContentStore;

/// Execute every batch and collect results in assignment order.
///
/// Formatter batches get a content snapshot of exactly their files captured
/// before any execution starts, so a formatter's diff sees the true
/// pre-state. All executions run concurrently; a failing batch does not
/// cancel its siblings, and faults are surfaced only after the full join.
pub async fn dispatch_batches(
    assignments: Vec<BatchAssignment>,
    store: &dyn ContentStore,
) -> Result<Vec<ToolResult>> {
    let snapshot_futures = assignments.iter().map(|assignment| async move {
        if !assignment.tool.descriptor().is_formatter {
            return Ok(None);
        }
        let paths: Vec<String> = assignment
            .batch
            .elements
            .iter()
            .flat_map(InputElement::paths)
            .collect();
        store.snapshot(&paths).await.map(Some)
    });
    let snapshots = join_all(snapshot_futures).await;

    let mut prepared = Vec::with_capacity(assignments.len());
    for (assignment, snapshot) in assignments.into_iter().zip(snapshots) {
        let mut batch = assignment.batch;
        batch.snapshot = snapshot?;
        prepared.push((assignment.tool, batch));
    }

    let executions = prepared.into_iter().map(|(tool, batch)| async move {
        let pre_digest = batch.snapshot.as_ref().map(|snapshot| snapshot.digest.clone());
        let outcome = tool.execute(batch).await?;
        if let (Some(pre), Some(post)) = (pre_digest, &outcome.post_snapshot)
            && pre != post.digest
        {
            debug!(tool = %outcome.result.tool_name, "formatter rewrote batch contents");
        }
        anyhow::Ok(outcome)
    });
    let outcomes = join_all(executions).await;

    let mut results = Vec::with_capacity(outcomes.len());
    for outcome in outcomes {
        let outcome = outcome?;
        outcome.result.log();
        results.push(outcome.result);
    }
    Ok(results)
}
