use std::fs;
use std::path::{Path, PathBuf};

use include_dir::{Dir, DirEntry, include_dir};

use crate::adapters::filesystem::set_executable;
use crate::domain::{AppError, PayloadOrigin};
use crate::ports::{CopiedFiles, PayloadSource};

static COMMANDS: Dir = include_dir!("$CARGO_MANIFEST_DIR/commands");
static HOOKS: Dir = include_dir!("$CARGO_MANIFEST_DIR/hooks");

/// Payload compiled into the binary from the repository's `commands/` and `hooks/`.
#[derive(Debug, Clone, Default)]
pub struct EmbeddedPayload;

impl EmbeddedPayload {
    pub fn new() -> Self {
        Self
    }
}

fn collect_files(dir: &Dir<'_>, out: &mut Vec<PathBuf>) {
    for entry in dir.entries() {
        match entry {
            DirEntry::Dir(sub) => collect_files(sub, out),
            DirEntry::File(file) => out.push(file.path().to_path_buf()),
        }
    }
}

fn extract(dir: &Dir<'_>, dest: &Path, executable: bool) -> Result<CopiedFiles, AppError> {
    let mut files = Vec::new();
    collect_files(dir, &mut files);
    files.sort();

    fs::create_dir_all(dest)?;
    for relative in &files {
        let Some(file) = dir.get_file(relative) else {
            continue;
        };
        let target = dest.join(relative);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&target, file.contents())?;
        if executable {
            set_executable(&target)?;
        }
    }
    Ok(files)
}

impl PayloadSource for EmbeddedPayload {
    fn origin(&self) -> PayloadOrigin {
        PayloadOrigin::Embedded
    }

    fn copy_commands(&self, dest: &Path) -> Result<CopiedFiles, AppError> {
        extract(&COMMANDS, dest, false)
    }

    fn copy_hooks(&self, dest: &Path) -> Result<Option<CopiedFiles>, AppError> {
        extract(&HOOKS, dest, true).map(Some)
    }
}
