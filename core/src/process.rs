//! Process sandbox boundary consumed by tool adapters.
//!
//! The engine never launches processes itself; adapters build a [`Process`]
//! and hand it to the executor collaborator, then adapt the fallible result
//! into a [`crate::ToolResult`].

use anyhow::Result;
use async_trait::async_trait;

use crate::store::Digest;

/// Command line handed to the process sandbox.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Process {
    pub argv: Vec<String>,
    pub description: String,
    /// Content the sandbox materializes before running the command.
    pub input_digest: Option<Digest>,
}

impl Process {
    pub fn new(argv: Vec<String>, description: impl Into<String>) -> Self {
        Self {
            argv,
            description: description.into(),
            input_digest: None,
        }
    }

    pub fn with_input_digest(mut self, digest: Digest) -> Self {
        self.input_digest = Some(digest);
        self
    }
}

/// Completed sandbox execution. A nonzero exit code is data, not an error;
/// only sandbox infrastructure failures surface as `Err`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FallibleProcessResult {
    pub exit_code: i32,
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
    /// Content produced by the command, if any.
    pub output_digest: Option<Digest>,
}

/// Runs a command to completion inside the sandbox. Retries and timeouts are
/// the sandbox's concern; the engine treats this as opaque.
#[async_trait]
pub trait ProcessExecutor: Send + Sync {
    async fn run(&self, process: Process) -> Result<FallibleProcessResult>;
}
