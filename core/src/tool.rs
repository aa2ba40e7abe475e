//! The plugin contract: what every tool adapter implements so the engine can
//! treat heterogeneous linters and formatters identically.

use anyhow::Result;
use async_trait::async_trait;

use crate::element::InputElement;
use crate::element::PartitionKey;
use crate::element::Partitions;
use crate::result::ToolResult;
use crate::store::Snapshot;

/// Which element universe a tool consumes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ElementKind {
    /// Structured targets, filtered to the tool's required fields.
    Targets,
    /// Raw file paths, unfiltered.
    Files,
}

/// Identity of a registered tool plugin.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToolDescriptor {
    pub tool_name: String,
    /// Formatters rewrite files in place and are diffed against a
    /// pre-execution snapshot; linters only read.
    pub is_formatter: bool,
    pub kind: ElementKind,
}

impl ToolDescriptor {
    pub fn linter(tool_name: impl Into<String>, kind: ElementKind) -> Self {
        Self {
            tool_name: tool_name.into(),
            is_formatter: false,
            kind,
        }
    }

    pub fn formatter(tool_name: impl Into<String>, kind: ElementKind) -> Self {
        Self {
            tool_name: tool_name.into(),
            is_formatter: true,
            kind,
        }
    }
}

/// One size-bounded slice of a partition: the unit of concurrent dispatch.
#[derive(Clone, Debug)]
pub struct Batch {
    pub tool_name: String,
    pub key: PartitionKey,
    pub elements: Vec<InputElement>,
    /// Content state captured before dispatch. Present iff the owning tool is
    /// formatter-kind.
    pub snapshot: Option<Snapshot>,
}

/// What a tool hands back for one executed batch.
#[derive(Clone, Debug)]
pub struct ExecuteOutcome {
    pub result: ToolResult,
    /// Content state after an in-place rewrite; formatter-kind tools only.
    /// Diffing it against the batch's pre-snapshot is the adapter's concern.
    pub post_snapshot: Option<Snapshot>,
}

impl From<ToolResult> for ExecuteOutcome {
    fn from(result: ToolResult) -> Self {
        Self {
            result,
            post_snapshot: None,
        }
    }
}

/// Contract implemented by every tool adapter.
///
/// Adapters receive only the elements applicable to them: target-kind tools
/// get field-sets for the targets carrying all of their
/// [`required_fields`](LintTool::required_fields); file-kind tools get the
/// full file list.
#[async_trait]
pub trait LintTool: Send + Sync {
    fn descriptor(&self) -> &ToolDescriptor;

    /// Fields a target must carry for this tool to apply. Target-kind only;
    /// file-kind tools ignore this.
    fn required_fields(&self) -> &[&str] {
        &[]
    }

    /// Group the candidate elements into partitions that must be processed
    /// together. Returning the empty mapping skips the tool for this run.
    async fn partition(&self, elements: Vec<InputElement>) -> Result<Partitions>;

    /// Run the underlying tool over one batch.
    async fn execute(&self, batch: Batch) -> Result<ExecuteOutcome>;
}
