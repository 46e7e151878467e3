use std::fs;
use std::path::{Path, PathBuf};

use git2::Repository;
use tracing::debug;

use crate::domain::{AppError, UpdateStrategy};
use crate::ports::GitPort;

/// Inspects payload checkouts with libgit2.
#[derive(Debug, Clone, Default)]
pub struct GitRepositoryAdapter;

impl GitRepositoryAdapter {
    pub fn new() -> Self {
        Self
    }

    /// Find `source` among the submodules of the work tree containing `target`.
    fn submodule_of(target: &Path, source: &Path) -> Option<(PathBuf, PathBuf)> {
        let repo = Repository::discover(target).ok()?;
        let workdir = fs::canonicalize(repo.workdir()?).ok()?;
        let submodules = match repo.submodules() {
            Ok(submodules) => submodules,
            Err(err) => {
                debug!(error = %err, "could not list submodules");
                return None;
            }
        };

        let path = submodules.iter().map(|sm| sm.path().to_path_buf()).find(|relative| {
            fs::canonicalize(workdir.join(relative)).is_ok_and(|resolved| resolved == source)
        })?;
        Some((workdir, path))
    }
}

impl GitPort for GitRepositoryAdapter {
    fn update_strategy(&self, target: &Path, source: &Path) -> Result<UpdateStrategy, AppError> {
        let target = fs::canonicalize(target)?;
        let source = fs::canonicalize(source)?;

        if let Some((repo, path)) = Self::submodule_of(&target, &source) {
            return Ok(UpdateStrategy::Submodule { repo, path });
        }

        match Repository::open(&source) {
            Ok(_) => Ok(UpdateStrategy::Pull { source }),
            Err(err) => {
                debug!(source = %source.display(), error = %err, "payload source is not a git work tree");
                Ok(UpdateStrategy::Reinstall { source })
            }
        }
    }
}
