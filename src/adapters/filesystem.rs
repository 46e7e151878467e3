//! Recursive copy helpers shared by payload sources.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::ports::CopiedFiles;

/// Copy the tree under `src` into `dest`, overwriting existing files.
///
/// Returned paths are relative to `dest`, sorted. Permission bits travel with
/// the file contents.
pub fn copy_tree(src: &Path, dest: &Path) -> io::Result<CopiedFiles> {
    let mut copied = Vec::new();
    copy_tree_into(src, dest, Path::new(""), &mut copied)?;
    copied.sort();
    Ok(copied)
}

fn copy_tree_into(
    src: &Path,
    dest: &Path,
    relative: &Path,
    copied: &mut Vec<PathBuf>,
) -> io::Result<()> {
    fs::create_dir_all(dest.join(relative))?;

    for entry in fs::read_dir(src.join(relative))? {
        let entry = entry?;
        let child = relative.join(entry.file_name());
        let file_type = entry.file_type()?;

        if file_type.is_dir() {
            copy_tree_into(src, dest, &child, copied)?;
        } else {
            fs::copy(entry.path(), dest.join(&child))?;
            copied.push(child);
        }
    }
    Ok(())
}

/// Set the executable bits on a file (Unix only).
pub fn set_executable(path: &Path) -> io::Result<()> {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mut perms = fs::metadata(path)?.permissions();
        perms.set_mode(0o755);
        fs::set_permissions(path, perms)?;
    }
    #[cfg(not(unix))]
    let _ = path;
    Ok(())
}
