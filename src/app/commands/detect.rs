use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::{AppError, EcosystemSet, MarkerSnapshot, TargetOrigin, detect, resolve_target};

/// Detected ecosystems for a resolved target.
#[derive(Debug, Clone, Serialize)]
pub struct DetectReport {
    pub target: PathBuf,
    #[serde(skip)]
    pub origin: TargetOrigin,
    pub ecosystems: EcosystemSet,
    pub package_manager: Option<&'static str>,
}

pub fn execute(start_dir: &Path) -> Result<DetectReport, AppError> {
    let target = resolve_target(start_dir)?;
    let snapshot = MarkerSnapshot::capture(&target.path)?;
    let ecosystems = detect(&snapshot);
    let package_manager = snapshot.package_json().map(|_| snapshot.package_manager().name());

    Ok(DetectReport { target: target.path, origin: target.origin, ecosystems, package_manager })
}
