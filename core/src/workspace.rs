//! Report persistence boundary.

use anyhow::Result;
use async_trait::async_trait;

use crate::store::Digest;

/// Writes merged report digests into the user-visible output directory.
///
/// Failures here are fatal to the goal and are not retried.
#[async_trait]
pub trait ReportSink: Send + Sync {
    async fn write_digest(&self, digest: &Digest, path_prefix: &str) -> Result<()>;
}
