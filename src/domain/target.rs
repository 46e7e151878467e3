//! Installation target resolution.

use std::path::{Path, PathBuf};

use crate::domain::AppError;

/// Files whose presence marks a directory as a project root.
pub const ROOT_MARKERS: &[&str] = &["package.json", "pyproject.toml", "Cargo.toml", "go.mod"];

/// Version-control directory that also marks a project root.
pub const VCS_DIR: &str = ".git";

/// Where the target directory was found relative to the start directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetOrigin {
    StartDir,
    Parent,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTarget {
    pub path: PathBuf,
    pub origin: TargetOrigin,
}

/// Whether `dir` carries a root marker file or a `.git` directory.
pub fn is_project_root(dir: &Path) -> bool {
    ROOT_MARKERS.iter().any(|marker| dir.join(marker).is_file()) || dir.join(VCS_DIR).is_dir()
}

/// Pick the target: `start` if it is a project root, otherwise its parent.
///
/// `start` is canonicalized first so `..` components name the real parent.
pub fn resolve_target(start: &Path) -> Result<ResolvedTarget, AppError> {
    let Ok(start) = start.canonicalize() else {
        return Err(AppError::ProjectNotFound { searched: start.to_path_buf() });
    };
    let start = start.as_path();

    if is_project_root(start) {
        return Ok(ResolvedTarget { path: start.to_path_buf(), origin: TargetOrigin::StartDir });
    }

    if let Some(parent) = start.parent()
        && is_project_root(parent)
    {
        return Ok(ResolvedTarget { path: parent.to_path_buf(), origin: TargetOrigin::Parent });
    }

    Err(AppError::ProjectNotFound { searched: start.to_path_buf() })
}
