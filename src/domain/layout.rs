//! Path catalog for an installation target.

use std::path::{Path, PathBuf};

pub const CLAUDE_DIR: &str = ".claude";
pub const COMMANDS_DIR: &str = "commands";
pub const HOOKS_DIR: &str = "hooks";
pub const SETTINGS_FILE: &str = "settings.toml";
pub const UPDATE_SCRIPT: &str = "update-ghflow.sh";
pub const COMMAND_EXTENSION: &str = "md";

/// Locations ghflow writes to under a target directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClaudeLayout {
    root: PathBuf,
}

impl ClaudeLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn claude_dir(&self) -> PathBuf {
        self.root.join(CLAUDE_DIR)
    }

    pub fn commands_dir(&self) -> PathBuf {
        self.claude_dir().join(COMMANDS_DIR)
    }

    pub fn hooks_dir(&self) -> PathBuf {
        self.claude_dir().join(HOOKS_DIR)
    }

    pub fn settings_file(&self) -> PathBuf {
        self.claude_dir().join(SETTINGS_FILE)
    }

    pub fn update_script(&self) -> PathBuf {
        self.root.join(UPDATE_SCRIPT)
    }

    /// Display form of `path` relative to the target root.
    pub fn display_relative(&self, path: &Path) -> String {
        path.strip_prefix(&self.root).unwrap_or(path).display().to_string()
    }
}
