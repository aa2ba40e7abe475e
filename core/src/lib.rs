//! Orchestration engine for running many pluggable lint and format tools over
//! one selection of sources.
//!
//! Given a registry of tool plugins and a spec selection, the engine asks each
//! active plugin how to partition its inputs, splits every partition into
//! deterministic size-bounded batches, dispatches all batches concurrently,
//! and folds the results into a single [`GoalOutcome`]: a sorted per-tool
//! summary, merged report files, and one exit code.
//!
//! The tool adapters themselves, the content-addressed store, the process
//! sandbox, and report persistence are collaborators behind the traits in
//! [`discovery`], [`store`], [`process`], and [`workspace`].

pub mod aggregate;
pub mod batcher;
pub mod config;
pub mod console;
pub mod discovery;
pub mod dispatcher;
pub mod element;
pub mod goal;
pub mod partitioner;
pub mod process;
pub mod registry;
pub mod result;
pub mod store;
pub mod tool;
pub mod workspace;

pub use config::LintConfig;
pub use console::Console;
pub use console::StderrConsole;
pub use discovery::ElementDiscovery;
pub use discovery::Specs;
pub use discovery::Target;
pub use element::Address;
pub use element::InputElement;
pub use element::PartitionKey;
pub use element::Partitions;
pub use element::TargetFieldSet;
pub use goal::GoalContext;
pub use goal::run_lint;
pub use process::FallibleProcessResult;
pub use process::Process;
pub use process::ProcessExecutor;
pub use registry::PluginRegistry;
pub use registry::RegistryError;
pub use result::GoalOutcome;
pub use result::ToolResult;
pub use store::ContentStore;
pub use store::Digest;
pub use store::Snapshot;
pub use tool::Batch;
pub use tool::ElementKind;
pub use tool::ExecuteOutcome;
pub use tool::LintTool;
pub use tool::ToolDescriptor;
pub use workspace::ReportSink;
