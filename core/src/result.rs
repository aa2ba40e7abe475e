//! Results: what one tool run over one batch produced, and the aggregated
//! outcome of the whole goal.

use tracing::error;
use tracing::info;

use crate::process::FallibleProcessResult;
use crate::store::Digest;

/// Outcome of one tool run over one batch. Immutable once produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToolResult {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
    pub tool_name: String,
    pub partition_description: Option<String>,
    /// Digest of report files the tool generated, if any.
    pub report: Option<Digest>,
}

impl ToolResult {
    pub fn new(exit_code: i32, tool_name: impl Into<String>) -> Self {
        Self {
            exit_code,
            stdout: String::new(),
            stderr: String::new(),
            tool_name: tool_name.into(),
            partition_description: None,
            report: None,
        }
    }

    /// Adapt a completed sandbox execution into a tool result.
    pub fn from_fallible_process_result(
        process_result: FallibleProcessResult,
        tool_name: impl Into<String>,
        partition_description: Option<String>,
        report: Option<Digest>,
    ) -> Self {
        Self {
            exit_code: process_result.exit_code,
            stdout: String::from_utf8_lossy(&process_result.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&process_result.stderr).into_owned(),
            tool_name: tool_name.into(),
            partition_description,
            report,
        }
    }

    /// Human-readable account of this result, rendered once it is collected.
    pub fn message(&self) -> String {
        let mut message = self.tool_name.clone();
        if self.exit_code == 0 {
            message.push_str(" succeeded.");
        } else {
            message.push_str(&format!(" failed (exit code {}).", self.exit_code));
        }
        if let Some(partition) = &self.partition_description {
            message.push_str(&format!("\nPartition: {partition}"));
        }
        if !self.stdout.is_empty() {
            message.push_str(&format!("\n{}", self.stdout));
        }
        if !self.stderr.is_empty() {
            message.push_str(&format!("\n{}", self.stderr));
        }
        if self.partition_description.is_some() || !self.stdout.is_empty() || !self.stderr.is_empty()
        {
            message.push_str("\n\n");
        }
        message
    }

    pub(crate) fn log(&self) {
        if self.exit_code == 0 {
            info!("{}", self.message());
        } else {
            error!("{}", self.message());
        }
    }
}

/// Final aggregated outcome of one goal invocation: the resolved exit code
/// plus every collected result, in dispatch order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GoalOutcome {
    pub exit_code: i32,
    pub results: Vec<ToolResult>,
}

impl GoalOutcome {
    /// Terminal state for a run with no active tools.
    pub fn empty() -> Self {
        Self {
            exit_code: 0,
            results: Vec::new(),
        }
    }
}
