//! Post-install checks shared by `install` and `doctor`.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::domain::ClaudeLayout;
use crate::domain::layout::COMMAND_EXTENSION;

/// Command files under `dir`, relative to it and sorted.
pub fn command_files(dir: &Path) -> io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    collect(dir, Path::new(""), &mut files)?;
    files.sort();
    Ok(files)
}

fn collect(root: &Path, relative: &Path, out: &mut Vec<PathBuf>) -> io::Result<()> {
    for entry in fs::read_dir(root.join(relative))? {
        let entry = entry?;
        let child = relative.join(entry.file_name());
        if entry.file_type()?.is_dir() {
            collect(root, &child, out)?;
        } else if child.extension().is_some_and(|ext| ext == COMMAND_EXTENSION) {
            out.push(child);
        }
    }
    Ok(())
}

/// Command names (file stems) in listing order.
pub fn command_names(files: &[PathBuf]) -> Vec<String> {
    files
        .iter()
        .filter_map(|path| path.file_stem())
        .map(|stem| stem.to_string_lossy().to_string())
        .collect()
}

/// Verify the installation at `layout`.
///
/// Returns the installed command files, or every problem found.
pub fn verify_installation(layout: &ClaudeLayout) -> Result<Vec<PathBuf>, Vec<String>> {
    let mut problems = Vec::new();
    let commands_dir = layout.commands_dir();
    let settings = layout.settings_file();

    let mut files = Vec::new();
    if !commands_dir.is_dir() {
        problems.push(format!("{} does not exist", layout.display_relative(&commands_dir)));
    } else {
        match command_files(&commands_dir) {
            Ok(found) if found.is_empty() => problems.push(format!(
                "no command files (*.{}) found in {}",
                COMMAND_EXTENSION,
                layout.display_relative(&commands_dir)
            )),
            Ok(found) => files = found,
            Err(err) => problems.push(format!(
                "cannot read {}: {}",
                layout.display_relative(&commands_dir),
                err
            )),
        }
    }

    if !settings.is_file() {
        problems.push(format!("{} does not exist", layout.display_relative(&settings)));
    }

    if problems.is_empty() { Ok(files) } else { Err(problems) }
}
