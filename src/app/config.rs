//! Option resolution for CLI invocations.
//!
//! Flags win over environment variables, which win over built-in defaults.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::domain::settings::DEFAULT_BRANCH;
use crate::domain::{AppError, PayloadOrigin};

/// Payload checkout used when `--source` is absent.
pub const SOURCE_ENV: &str = "GHFLOW_SOURCE";

/// Tracing filter directive, e.g. `ghflow=debug`.
pub const LOG_ENV: &str = "GHFLOW_LOG";

/// Raw install inputs as given on the command line.
#[derive(Debug, Clone, Default)]
pub struct InstallRequest {
    pub path: Option<PathBuf>,
    pub source: Option<PathBuf>,
    pub default_branch: Option<String>,
}

/// Fully resolved install inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallOptions {
    /// Directory the target search starts from.
    pub start_dir: PathBuf,
    pub payload: PayloadOrigin,
    pub default_branch: String,
}

impl InstallOptions {
    /// Options for installing the embedded bundle from `start_dir`.
    pub fn new(start_dir: impl Into<PathBuf>) -> Self {
        Self {
            start_dir: start_dir.into(),
            payload: PayloadOrigin::Embedded,
            default_branch: DEFAULT_BRANCH.to_string(),
        }
    }

    pub fn with_source(mut self, source: impl Into<PathBuf>) -> Self {
        self.payload = PayloadOrigin::Directory(source.into());
        self
    }

    pub fn with_default_branch(mut self, branch: impl Into<String>) -> Self {
        self.default_branch = branch.into();
        self
    }
}

/// Resolve a request against the working directory and `GHFLOW_SOURCE`.
pub fn resolve_install_options(
    request: InstallRequest,
    cwd: &Path,
    env_source: Option<OsString>,
) -> Result<InstallOptions, AppError> {
    let start_dir = absolutize(request.path.unwrap_or_else(|| cwd.to_path_buf()), cwd);

    let source = request.source.or_else(|| env_source.filter(|s| !s.is_empty()).map(PathBuf::from));
    let payload = match source {
        Some(path) => PayloadOrigin::Directory(absolutize(path, cwd)),
        None => PayloadOrigin::Embedded,
    };

    let default_branch = request.default_branch.unwrap_or_else(|| DEFAULT_BRANCH.to_string());
    validate_branch_name(&default_branch)?;

    Ok(InstallOptions { start_dir, payload, default_branch })
}

/// Resolve the start directory for read-only commands.
pub fn resolve_start_dir(path: Option<PathBuf>, cwd: &Path) -> PathBuf {
    absolutize(path.unwrap_or_else(|| cwd.to_path_buf()), cwd)
}

fn absolutize(path: PathBuf, cwd: &Path) -> PathBuf {
    if path.is_absolute() { path } else { cwd.join(path) }
}

fn validate_branch_name(branch: &str) -> Result<(), AppError> {
    if git2::Reference::is_valid_name(&format!("refs/heads/{branch}")) {
        Ok(())
    } else {
        Err(AppError::config_error(format!("Invalid default branch name '{}'", branch)))
    }
}
