//! Mock tools and in-memory collaborators shared by the integration tests.

#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::Mutex;

use anyhow::Result;
use anyhow::ensure;
use async_trait::async_trait;
use lintfleet_core::Address;
use lintfleet_core::Batch;
use lintfleet_core::Console;
use lintfleet_core::ContentStore;
use lintfleet_core::Digest;
use lintfleet_core::ElementDiscovery;
use lintfleet_core::ElementKind;
use lintfleet_core::ExecuteOutcome;
use lintfleet_core::GoalContext;
use lintfleet_core::InputElement;
use lintfleet_core::LintConfig;
use lintfleet_core::LintTool;
use lintfleet_core::Partitions;
use lintfleet_core::PluginRegistry;
use lintfleet_core::ReportSink;
use lintfleet_core::Snapshot;
use lintfleet_core::Specs;
use lintfleet_core::Target;
use lintfleet_core::ToolDescriptor;
use lintfleet_core::ToolResult;
use lintfleet_core::run_lint;

pub const SOURCES_FIELD: &str = "sources";

#[derive(Default)]
pub struct BufferConsole(Mutex<String>);

impl BufferConsole {
    pub fn output(&self) -> String {
        self.0.lock().unwrap().clone()
    }
}

impl Console for BufferConsole {
    fn print_stderr(&self, line: &str) {
        let mut buffer = self.0.lock().unwrap();
        buffer.push_str(line);
        buffer.push('\n');
    }
}

pub struct MemoryDiscovery {
    pub targets: Vec<Target>,
    pub files: Vec<String>,
}

#[async_trait]
impl ElementDiscovery for MemoryDiscovery {
    async fn resolve_targets(&self, _specs: &Specs) -> Result<Vec<Target>> {
        Ok(self.targets.clone())
    }

    async fn resolve_files(&self, _specs: &Specs) -> Result<Vec<String>> {
        Ok(self.files.clone())
    }
}

/// Content store that fingerprints path lists and records every snapshot
/// request it served.
#[derive(Default)]
pub struct MemoryStore {
    pub snapshot_requests: Mutex<Vec<Vec<String>>>,
}

#[async_trait]
impl ContentStore for MemoryStore {
    async fn snapshot(&self, paths: &[String]) -> Result<Snapshot> {
        self.snapshot_requests.lock().unwrap().push(paths.to_vec());
        Ok(Snapshot {
            digest: Digest::of_bytes(paths.join("\n").as_bytes()),
            files: paths.to_vec(),
        })
    }

    async fn merge(&self, digests: &[Digest]) -> Result<Digest> {
        let joined: Vec<&str> = digests.iter().map(Digest::as_hex).collect();
        Ok(Digest::of_bytes(joined.join("\n").as_bytes()))
    }
}

#[derive(Default)]
pub struct RecordingReportSink {
    pub writes: Mutex<Vec<(Digest, String)>>,
}

#[async_trait]
impl ReportSink for RecordingReportSink {
    async fn write_digest(&self, digest: &Digest, path_prefix: &str) -> Result<()> {
        self.writes
            .lock()
            .unwrap()
            .push((digest.clone(), path_prefix.to_string()));
        Ok(())
    }
}

/// How a mock tool decides its per-batch exit code.
#[derive(Clone)]
pub enum ExitPolicy {
    Fixed(i32),
    /// Fail with the given code iff any element in the batch addresses the
    /// named target.
    FailOnTarget(&'static str, i32),
    /// Always return empty partitions.
    Skip,
}

pub struct MockTool {
    descriptor: ToolDescriptor,
    required: Vec<&'static str>,
    policy: ExitPolicy,
    report: Option<Digest>,
}

impl MockTool {
    pub fn linter(name: &str, policy: ExitPolicy) -> Self {
        Self {
            descriptor: ToolDescriptor::linter(name, ElementKind::Targets),
            required: vec![SOURCES_FIELD],
            policy,
            report: None,
        }
    }

    pub fn file_linter(name: &str, policy: ExitPolicy) -> Self {
        Self {
            descriptor: ToolDescriptor::linter(name, ElementKind::Files),
            required: Vec::new(),
            policy,
            report: None,
        }
    }

    pub fn file_formatter(name: &str, policy: ExitPolicy) -> Self {
        Self {
            descriptor: ToolDescriptor::formatter(name, ElementKind::Files),
            required: Vec::new(),
            policy,
            report: None,
        }
    }

    pub fn formatter(name: &str, policy: ExitPolicy) -> Self {
        Self {
            descriptor: ToolDescriptor::formatter(name, ElementKind::Targets),
            required: vec![SOURCES_FIELD],
            policy,
            report: None,
        }
    }

    pub fn with_required_fields(mut self, required: Vec<&'static str>) -> Self {
        self.required = required;
        self
    }

    pub fn with_report(mut self, report: Digest) -> Self {
        self.report = Some(report);
        self
    }
}

#[async_trait]
impl LintTool for MockTool {
    fn descriptor(&self) -> &ToolDescriptor {
        &self.descriptor
    }

    fn required_fields(&self) -> &[&str] {
        &self.required
    }

    async fn partition(&self, elements: Vec<InputElement>) -> Result<Partitions> {
        if matches!(self.policy, ExitPolicy::Skip) {
            return Ok(Partitions::empty());
        }
        Ok(Partitions::single_partition(elements))
    }

    async fn execute(&self, batch: Batch) -> Result<ExecuteOutcome> {
        if self.descriptor.is_formatter {
            ensure!(
                batch.snapshot.is_some(),
                "formatter batch dispatched without a pre-snapshot"
            );
        } else {
            ensure!(
                batch.snapshot.is_none(),
                "linter batch should not carry a snapshot"
            );
        }

        let exit_code = match &self.policy {
            ExitPolicy::Fixed(code) => *code,
            ExitPolicy::FailOnTarget(target_name, code) => {
                let hit = batch.elements.iter().any(|element| {
                    matches!(
                        element,
                        InputElement::FieldSet(field_set)
                            if field_set.address.target_name() == *target_name
                    )
                });
                if hit { *code } else { 0 }
            }
            ExitPolicy::Skip => 0,
        };

        let mut result = ToolResult::new(exit_code, &self.descriptor.tool_name);
        result.report = self.report.clone();
        Ok(ExecuteOutcome {
            result,
            post_snapshot: batch.snapshot,
        })
    }
}

pub fn make_target(name: &str) -> Target {
    Target {
        address: Address::new("", name),
        fields: BTreeMap::from([(
            SOURCES_FIELD.to_string(),
            vec![format!("{name}.txt")],
        )]),
    }
}

pub struct RunOutput {
    pub exit_code: i32,
    pub stderr: String,
    pub snapshot_requests: Vec<Vec<String>>,
    pub report_writes: Vec<(Digest, String)>,
}

/// Build a registry from `tools` and run the goal against in-memory
/// collaborators.
pub async fn run_goal(
    tools: Vec<MockTool>,
    targets: Vec<Target>,
    files: Vec<String>,
    config: LintConfig,
) -> Result<RunOutput> {
    let mut registry = PluginRegistry::new();
    for tool in tools {
        registry.register(Arc::new(tool))?;
    }

    let discovery = MemoryDiscovery { targets, files };
    let store = MemoryStore::default();
    let reports = RecordingReportSink::default();
    let console = BufferConsole::default();

    let ctx = GoalContext {
        registry: &registry,
        discovery: &discovery,
        store: &store,
        reports: &reports,
        console: &console,
    };
    let outcome = run_lint(&ctx, &Specs::empty(), &config).await?;

    Ok(RunOutput {
        exit_code: outcome.exit_code,
        stderr: console.output(),
        snapshot_requests: store.snapshot_requests.lock().unwrap().clone(),
        report_writes: reports.writes.lock().unwrap().clone(),
    })
}
