//! Element discovery boundary: resolving the current spec selection into the
//! target and raw-file universes tools draw their inputs from.

use std::collections::BTreeMap;

use anyhow::Result;
use async_trait::async_trait;

use crate::element::Address;

/// Raw target/file selection for one invocation, as given by the caller.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Specs(Vec<String>);

impl Specs {
    pub fn new(specs: impl IntoIterator<Item = String>) -> Self {
        Self(specs.into_iter().collect())
    }

    pub fn empty() -> Self {
        Self(Vec::new())
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

/// One discovered target: an address plus the fields it carries, each field
/// holding the source paths it contributes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Target {
    pub address: Address,
    pub fields: BTreeMap<String, Vec<String>>,
}

impl Target {
    /// A target is applicable to a tool iff it carries all of the tool's
    /// required fields.
    pub fn has_fields(&self, required: &[&str]) -> bool {
        required.iter().all(|field| self.fields.contains_key(*field))
    }

    /// Source paths of the `required` fields, flattened in declaration order.
    pub fn field_values(&self, required: &[&str]) -> Vec<String> {
        required
            .iter()
            .flat_map(|field| self.fields.get(*field).cloned().unwrap_or_default())
            .collect()
    }
}

/// Resolves a spec selection into its element universes. Pure query; each
/// universe is fetched once per run and shared across tools of that kind.
#[async_trait]
pub trait ElementDiscovery: Send + Sync {
    async fn resolve_targets(&self, specs: &Specs) -> Result<Vec<Target>>;
    async fn resolve_files(&self, specs: &Specs) -> Result<Vec<String>>;
}
