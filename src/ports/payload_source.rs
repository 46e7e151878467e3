//! Source of the command and hook payload.

use std::path::{Path, PathBuf};

use crate::domain::{AppError, PayloadOrigin};

/// Files written by a copy, relative to the destination directory.
pub type CopiedFiles = Vec<PathBuf>;

pub trait PayloadSource {
    fn origin(&self) -> PayloadOrigin;

    /// Copy every file under `commands/` into `dest`, overwriting same names.
    ///
    /// Fails with [`AppError::CommandsSourceMissing`] when the source has no
    /// commands directory.
    fn copy_commands(&self, dest: &Path) -> Result<CopiedFiles, AppError>;

    /// Copy every file under `hooks/` into `dest`.
    ///
    /// Returns `None` when the source ships no hooks directory.
    fn copy_hooks(&self, dest: &Path) -> Result<Option<CopiedFiles>, AppError>;
}
