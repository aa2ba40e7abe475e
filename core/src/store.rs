//! Content-addressed storage boundary: digests, snapshots, and the store
//! collaborator the dispatcher and reporter call into.

use anyhow::Result;
use async_trait::async_trait;
use sha2::Digest as _;
use sha2::Sha256;

/// Content-addressed fingerprint, immutable once created.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Digest(String);

impl Digest {
    pub fn from_hex(hex: impl Into<String>) -> Self {
        Self(hex.into())
    }

    /// SHA-256 fingerprint of raw bytes, hex-encoded.
    pub fn of_bytes(bytes: &[u8]) -> Self {
        let fingerprint = Sha256::digest(bytes);
        let mut hex = String::with_capacity(fingerprint.len() * 2);
        for byte in fingerprint {
            hex.push_str(&format!("{byte:02x}"));
        }
        Self(hex)
    }

    pub fn as_hex(&self) -> &str {
        &self.0
    }
}

/// A digest together with the file paths it covers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot {
    pub digest: Digest,
    pub files: Vec<String>,
}

/// Computes and merges digests over file sets.
///
/// Used for capturing formatter pre-state and for merging report digests.
/// Failures here are infrastructure faults and abort the goal.
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Capture the current content state of exactly `paths`.
    async fn snapshot(&self, paths: &[String]) -> Result<Snapshot>;

    /// Merge several digests into one.
    async fn merge(&self, digests: &[Digest]) -> Result<Digest>;
}
