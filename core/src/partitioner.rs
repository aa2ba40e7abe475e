//! Selects the active tools for a run and obtains their partitions.

use std::sync::Arc;

use anyhow::Result;
use futures::future::join_all;
use tracing::debug;

use crate::config::LintConfig;
use crate::discovery::ElementDiscovery;
use crate::discovery::Specs;
use crate::discovery::Target;
use crate::element::InputElement;
use crate::element::TargetFieldSet;
use crate::registry::PluginRegistry;
use crate::tool::ElementKind;
use crate::tool::LintTool;

/// One active tool together with the partitions it asked for.
pub struct ToolPartitions {
    pub tool: Arc<dyn LintTool>,
    pub partitions: crate::element::Partitions,
}

/// Compute the active tool set, resolve each element universe once, and ask
/// every active tool for its partitions concurrently.
///
/// Tools answering with empty partitions are dropped (the skip signal). An
/// empty return means the whole goal short-circuits to an empty outcome.
pub async fn resolve_partitions(
    registry: &PluginRegistry,
    discovery: &dyn ElementDiscovery,
    specs: &Specs,
    config: &LintConfig,
) -> Result<Vec<ToolPartitions>> {
    let active: Vec<Arc<dyn LintTool>> = registry
        .tools()
        .filter(|tool| !(config.skip_formatters && tool.descriptor().is_formatter))
        .filter(|tool| {
            config.only.is_empty()
                || config
                    .only
                    .iter()
                    .any(|name| name == &tool.descriptor().tool_name)
        })
        .cloned()
        .collect();
    if active.is_empty() {
        return Ok(Vec::new());
    }

    // Each universe is fetched once and shared by every tool of that kind.
    let wants_targets = active
        .iter()
        .any(|tool| tool.descriptor().kind == ElementKind::Targets);
    let wants_files = active
        .iter()
        .any(|tool| tool.descriptor().kind == ElementKind::Files);
    let targets = if wants_targets {
        discovery.resolve_targets(specs).await?
    } else {
        Vec::new()
    };
    let files = if wants_files {
        discovery.resolve_files(specs).await?
    } else {
        Vec::new()
    };

    let partition_calls = active.iter().map(|tool| {
        let elements = candidate_elements(tool.as_ref(), &targets, &files);
        async move { tool.partition(elements).await }
    });
    let all_partitions = join_all(partition_calls).await;

    let mut resolved = Vec::new();
    for (tool, partitions) in active.iter().zip(all_partitions) {
        let partitions = partitions?;
        if partitions.is_empty() {
            debug!(tool = %tool.descriptor().tool_name, "tool skipped: no partitions");
            continue;
        }
        resolved.push(ToolPartitions {
            tool: Arc::clone(tool),
            partitions,
        });
    }
    Ok(resolved)
}

/// The subset of the shared universe this tool receives: field-sets for the
/// targets carrying all of its required fields, or the full file list.
fn candidate_elements(
    tool: &dyn LintTool,
    targets: &[Target],
    files: &[String],
) -> Vec<InputElement> {
    match tool.descriptor().kind {
        ElementKind::Targets => {
            let required = tool.required_fields();
            targets
                .iter()
                .filter(|target| target.has_fields(required))
                .map(|target| {
                    InputElement::FieldSet(TargetFieldSet {
                        address: target.address.clone(),
                        sources: target.field_values(required),
                    })
                })
                .collect()
        }
        ElementKind::Files => files.iter().cloned().map(InputElement::File).collect(),
    }
}
