use std::path::{Path, PathBuf};

use tracing::debug;

use crate::adapters::filesystem::copy_tree;
use crate::domain::layout::{COMMANDS_DIR, HOOKS_DIR};
use crate::domain::{AppError, PayloadOrigin};
use crate::ports::{CopiedFiles, PayloadSource};

/// Payload read from a checkout of the command bundle.
#[derive(Debug, Clone)]
pub struct DirectoryPayload {
    root: PathBuf,
}

impl DirectoryPayload {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl PayloadSource for DirectoryPayload {
    fn origin(&self) -> PayloadOrigin {
        PayloadOrigin::Directory(self.root.clone())
    }

    fn copy_commands(&self, dest: &Path) -> Result<CopiedFiles, AppError> {
        let commands = self.root.join(COMMANDS_DIR);
        if !commands.is_dir() {
            return Err(AppError::CommandsSourceMissing(commands));
        }
        debug!(from = %commands.display(), to = %dest.display(), "copying commands");
        Ok(copy_tree(&commands, dest)?)
    }

    fn copy_hooks(&self, dest: &Path) -> Result<Option<CopiedFiles>, AppError> {
        let hooks = self.root.join(HOOKS_DIR);
        if !hooks.is_dir() {
            return Ok(None);
        }
        debug!(from = %hooks.display(), to = %dest.display(), "copying hooks");
        Ok(Some(copy_tree(&hooks, dest)?))
    }
}
