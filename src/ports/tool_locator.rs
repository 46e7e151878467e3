use std::path::PathBuf;

/// Resolves executables the installer depends on.
pub trait ToolLocator {
    /// Absolute path of `tool` on the execution path, if any.
    fn locate(&self, tool: &str) -> Option<PathBuf>;

    fn is_available(&self, tool: &str) -> bool {
        self.locate(tool).is_some()
    }
}
