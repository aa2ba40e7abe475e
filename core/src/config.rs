//! Caller-facing options for one lint invocation.

use anyhow::Result;
use serde::Deserialize;

pub const DEFAULT_BATCH_SIZE: usize = 128;

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct LintConfig {
    /// Tool names to run; empty means every registered tool. Names matching
    /// no registered tool are inert.
    pub only: Vec<String>,
    /// Skip formatter-kind tools entirely.
    pub skip_formatters: bool,
    /// Target batch size. The hard per-batch cap is four times this.
    pub batch_size: usize,
}

impl Default for LintConfig {
    fn default() -> Self {
        Self {
            only: Vec::new(),
            skip_formatters: false,
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }
}

impl LintConfig {
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        Ok(toml::from_str(raw)?)
    }

    pub fn batch_size_max(&self) -> usize {
        self.batch_size * 4
    }
}
