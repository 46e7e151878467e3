//! Generated `update-ghflow.sh`.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::AppError;
use crate::domain::templates::{self, UPDATE_SCRIPT_TEMPLATE};

/// How the update script refreshes the command bundle before reinstalling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateStrategy {
    /// Source is a git submodule at `path`, relative to the work tree `repo`
    /// that contains the target.
    Submodule { repo: PathBuf, path: PathBuf },
    /// Source is a standalone git work tree.
    Pull { source: PathBuf },
    /// Source directory exists but is not under version control.
    Reinstall { source: PathBuf },
    /// Payload is the bundle compiled into the binary.
    Embedded,
}

impl UpdateStrategy {
    fn label(&self) -> &'static str {
        match self {
            UpdateStrategy::Submodule { .. } => "submodule",
            UpdateStrategy::Pull { .. } => "pull",
            UpdateStrategy::Reinstall { .. } => "reinstall",
            UpdateStrategy::Embedded => "embedded",
        }
    }
}

#[derive(Debug, Serialize)]
struct UpdateScriptContext {
    version: &'static str,
    strategy: &'static str,
    target_dir: String,
    source_dir: Option<String>,
    repo_dir: Option<String>,
    submodule_path: Option<String>,
}

/// Render the update script for `target`.
///
/// `source` is the absolute payload directory, when there is one.
pub fn render_update_script(
    target: &Path,
    source: Option<&Path>,
    strategy: &UpdateStrategy,
) -> Result<String, AppError> {
    let (repo_dir, submodule_path) = match strategy {
        UpdateStrategy::Submodule { repo, path } => {
            (Some(repo.display().to_string()), Some(path.display().to_string()))
        }
        _ => (None, None),
    };
    let ctx = UpdateScriptContext {
        version: env!("CARGO_PKG_VERSION"),
        strategy: strategy.label(),
        target_dir: target.display().to_string(),
        source_dir: source.map(|p| p.display().to_string()),
        repo_dir,
        submodule_path,
    };
    templates::render(UPDATE_SCRIPT_TEMPLATE, &ctx)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submodule_strategy_updates_submodule_then_reinstalls() {
        let script = render_update_script(
            Path::new("/work/app"),
            Some(Path::new("/work/app/vendor/ghflow")),
            &UpdateStrategy::Submodule {
                repo: PathBuf::from("/work"),
                path: PathBuf::from("app/vendor/ghflow"),
            },
        )
        .unwrap();

        assert!(script.starts_with("#!/usr/bin/env bash\n"));
        assert!(script.contains("git -C /work submodule update --remote -- app/vendor/ghflow"));
        assert!(script.contains("ghflow install --path \"$TARGET_DIR\" --source /work/app/vendor/ghflow"));
        assert!(!script.contains("pull --ff-only"));
    }

    #[test]
    fn pull_strategy_quotes_paths_with_spaces() {
        let script = render_update_script(
            Path::new("/work/my app"),
            Some(Path::new("/opt/gh flow")),
            &UpdateStrategy::Pull { source: PathBuf::from("/opt/gh flow") },
        )
        .unwrap();

        assert!(script.contains("TARGET_DIR='/work/my app'"));
        assert!(script.contains("git -C '/opt/gh flow' pull --ff-only"));
    }

    #[test]
    fn embedded_strategy_reinstalls_without_source() {
        let script =
            render_update_script(Path::new("/work/app"), None, &UpdateStrategy::Embedded).unwrap();

        assert!(script.contains("cargo install ghflow"));
        assert!(script.contains("ghflow install --path \"$TARGET_DIR\"\n"));
        assert!(!script.contains("--source"));
    }

    #[test]
    fn reinstall_strategy_skips_git() {
        let script = render_update_script(
            Path::new("/work/app"),
            Some(Path::new("/opt/bundle")),
            &UpdateStrategy::Reinstall { source: PathBuf::from("/opt/bundle") },
        )
        .unwrap();

        assert!(!script.contains("git -C"));
        assert!(script.contains("--source /opt/bundle"));
    }
}
