//! Input elements: the units of work offered to tool plugins, and the
//! partition grouping plugins hand back.

use std::fmt;

/// Address of one target within the build graph, e.g. `src/py/project:tests`.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Address {
    path: String,
    target_name: String,
}

impl Address {
    pub fn new(path: impl Into<String>, target_name: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            target_name: target_name.into(),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn target_name(&self) -> &str {
        &self.target_name
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.path, self.target_name)
    }
}

/// The slice of one target that a target-kind tool declared it needs: the
/// address plus the source paths carried by the tool's required fields.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TargetFieldSet {
    pub address: Address,
    pub sources: Vec<String>,
}

/// One unit of work offered to a tool plugin.
///
/// Exactly one variant populates any given partition, matching the owning
/// plugin's declared element kind.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputElement {
    FieldSet(TargetFieldSet),
    File(String),
}

impl InputElement {
    /// Stable identity used for batch assignment and ordering.
    pub fn key(&self) -> String {
        match self {
            InputElement::FieldSet(field_set) => field_set.address.to_string(),
            InputElement::File(path) => path.clone(),
        }
    }

    /// File paths this element resolves to when a snapshot must be taken.
    pub fn paths(&self) -> Vec<String> {
        match self {
            InputElement::FieldSet(field_set) => field_set.sources.clone(),
            InputElement::File(path) => vec![path.clone()],
        }
    }
}

/// Opaque grouping label chosen by a plugin; `None` means no grouping
/// distinction.
pub type PartitionKey = Option<String>;

/// Ordered mapping from partition key to the elements that must be processed
/// together.
///
/// A plugin returns the empty mapping to signal that it should be skipped for
/// this run, e.g. because it is disabled by configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Partitions(Vec<(PartitionKey, Vec<InputElement>)>);

impl Partitions {
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    /// Helper constructor for plugins that have only one, key-less partition.
    pub fn single_partition(elements: impl IntoIterator<Item = InputElement>) -> Self {
        Self(vec![(None, elements.into_iter().collect())])
    }

    pub fn push(&mut self, key: PartitionKey, elements: Vec<InputElement>) {
        self.0.push((key, elements));
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, (PartitionKey, Vec<InputElement>)> {
        self.0.iter()
    }
}

impl IntoIterator for Partitions {
    type Item = (PartitionKey, Vec<InputElement>);
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
