//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution.

use std::path::{Path, PathBuf};

use crate::adapters::{
    DirectoryPayload, EmbeddedPayload, GitHubCommandAdapter, GitRepositoryAdapter, PathToolLocator,
};
use crate::app::commands::{detect as detect_cmd, doctor as doctor_cmd, install as install_cmd};
use crate::app::config::{SOURCE_ENV, resolve_install_options, resolve_start_dir};
use crate::app::AppContext;

pub use crate::app::commands::detect::DetectReport;
pub use crate::app::commands::doctor::{DoctorOptions, DoctorOutcome};
pub use crate::app::commands::install::{InstallOutcome, InstallWarning, SettingsReport};
pub use crate::app::config::{InstallOptions, InstallRequest};
pub use crate::domain::{AppError, PayloadOrigin};

fn create_context() -> AppContext<PathToolLocator, GitHubCommandAdapter, GitRepositoryAdapter> {
    AppContext::new(
        PathToolLocator::new(),
        GitHubCommandAdapter::new(),
        GitRepositoryAdapter::new(),
    )
}

// =============================================================================
// Install Command API
// =============================================================================

/// Install from the current directory, resolving the payload from the request
/// and `GHFLOW_SOURCE`.
pub fn install(request: InstallRequest) -> Result<InstallOutcome, AppError> {
    let cwd = std::env::current_dir()?;
    let options = resolve_install_options(request, &cwd, std::env::var_os(SOURCE_ENV))?;
    install_at(&options)
}

/// Install with fully resolved options.
pub fn install_at(options: &InstallOptions) -> Result<InstallOutcome, AppError> {
    let ctx = create_context();
    match &options.payload {
        PayloadOrigin::Directory(root) => {
            install_cmd::execute(&ctx, &DirectoryPayload::new(root), options)
        }
        PayloadOrigin::Embedded => install_cmd::execute(&ctx, &EmbeddedPayload::new(), options),
    }
}

// =============================================================================
// Doctor Command API
// =============================================================================

/// Check the installation for the project at (or above) `path`.
pub fn doctor(path: Option<PathBuf>, options: DoctorOptions) -> Result<DoctorOutcome, AppError> {
    let start = resolve_start_dir(path, &std::env::current_dir()?);
    doctor_at(&start, options)
}

pub fn doctor_at(start_dir: &Path, options: DoctorOptions) -> Result<DoctorOutcome, AppError> {
    doctor_cmd::execute(start_dir, options)
}

// =============================================================================
// Detect Command API
// =============================================================================

/// Detect ecosystems for the project at (or above) `path`.
pub fn detect(path: Option<PathBuf>) -> Result<DetectReport, AppError> {
    let start = resolve_start_dir(path, &std::env::current_dir()?);
    detect_at(&start)
}

pub fn detect_at(start_dir: &Path) -> Result<DetectReport, AppError> {
    detect_cmd::execute(start_dir)
}
