//! Process-wide plugin registry.

use std::collections::HashMap;
use std::sync::Arc;

use thiserror::Error;

use crate::tool::LintTool;
use crate::tool::ToolDescriptor;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("tool `{0}` is already registered")]
    DuplicateTool(String),
}

/// Append-only table of tool plugins, populated once at startup and dispatched
/// by virtual call. Iteration order is registration order, which fixes the
/// dispatch order downstream.
#[derive(Default)]
pub struct PluginRegistry {
    tools: Vec<Arc<dyn LintTool>>,
    by_name: HashMap<String, usize>,
}

impl PluginRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, tool: Arc<dyn LintTool>) -> Result<(), RegistryError> {
        let tool_name = tool.descriptor().tool_name.clone();
        if self.by_name.contains_key(&tool_name) {
            return Err(RegistryError::DuplicateTool(tool_name));
        }
        self.by_name.insert(tool_name, self.tools.len());
        self.tools.push(tool);
        Ok(())
    }

    pub fn tools(&self) -> impl Iterator<Item = &Arc<dyn LintTool>> {
        self.tools.iter()
    }

    pub fn descriptor(&self, tool_name: &str) -> Option<&ToolDescriptor> {
        self.by_name
            .get(tool_name)
            .map(|index| self.tools[*index].descriptor())
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }
}
