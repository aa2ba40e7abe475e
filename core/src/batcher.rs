//! Deterministic batch assignment.

use std::sync::Arc;

use lintfleet_utils_batching::partition_sequentially;
use tracing::debug;

use crate::config::LintConfig;
use crate::partitioner::ToolPartitions;
use crate::tool::Batch;
use crate::tool::LintTool;

/// One batch paired with the tool that will execute it.
pub struct BatchAssignment {
    pub tool: Arc<dyn LintTool>,
    pub batch: Batch,
}

/// Split every partition into size-bounded batches.
///
/// Assignment order is the dispatch order: tools in registration order,
/// partitions in the order each tool returned them, batches in stable key
/// order. Batches never merge elements across tools or partition keys, and
/// the boundaries depend only on the ordered key set, so an unchanged run
/// batches identically.
pub fn assign_batches(partitions: &[ToolPartitions], config: &LintConfig) -> Vec<BatchAssignment> {
    let mut assignments = Vec::new();
    for tool_partitions in partitions {
        let descriptor = tool_partitions.tool.descriptor();
        for (key, elements) in tool_partitions.partitions.iter() {
            let batches = partition_sequentially(
                elements.iter().cloned(),
                |element| element.key(),
                config.batch_size,
                Some(config.batch_size_max()),
            );
            debug!(
                tool = %descriptor.tool_name,
                partition = ?key,
                batches = batches.len(),
                "assigned batches"
            );
            for elements in batches {
                assignments.push(BatchAssignment {
                    tool: Arc::clone(&tool_partitions.tool),
                    batch: Batch {
                        tool_name: descriptor.tool_name.clone(),
                        key: key.clone(),
                        elements,
                        snapshot: None,
                    },
                });
            }
        }
    }
    assignments
}
