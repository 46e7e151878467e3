use std::collections::BTreeSet;
use std::path::PathBuf;

use crate::ports::ToolLocator;

/// Pretends only the listed tools are installed, under `/usr/bin`.
#[derive(Debug, Default)]
pub struct FakeToolLocator {
    available: BTreeSet<String>,
}

impl FakeToolLocator {
    pub fn with(tools: &[&str]) -> Self {
        Self { available: tools.iter().map(|t| t.to_string()).collect() }
    }
}

impl ToolLocator for FakeToolLocator {
    fn locate(&self, tool: &str) -> Option<PathBuf> {
        self.available.contains(tool).then(|| PathBuf::from("/usr/bin").join(tool))
    }
}
