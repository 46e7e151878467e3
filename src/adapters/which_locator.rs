use std::path::PathBuf;

use tracing::debug;

use crate::ports::ToolLocator;

/// Looks tools up on the process `PATH`.
#[derive(Debug, Clone, Default)]
pub struct PathToolLocator;

impl PathToolLocator {
    pub fn new() -> Self {
        Self
    }
}

impl ToolLocator for PathToolLocator {
    fn locate(&self, tool: &str) -> Option<PathBuf> {
        match which::which(tool) {
            Ok(path) => {
                debug!(tool, path = %path.display(), "resolved tool");
                Some(path)
            }
            Err(err) => {
                debug!(tool, error = %err, "tool not found on PATH");
                None
            }
        }
    }
}
