//! Detect command implementation.

use std::path::PathBuf;

use crate::domain::{AppError, TargetOrigin};

pub fn run_detect(path: Option<PathBuf>, json: bool) -> Result<(), AppError> {
    let report = crate::app::api::detect(path)?;

    if json {
        let rendered = serde_json::to_string_pretty(&report).map_err(|e| {
            AppError::config_error(format!("Failed to serialize detection report: {}", e))
        })?;
        println!("{}", rendered);
        return Ok(());
    }

    if report.origin == TargetOrigin::Parent {
        println!("📁 Using parent directory: {}", report.target.display());
    }
    println!("🔍 Project types: {}", report.ecosystems.labels().join(", "));
    if let Some(manager) = report.package_manager {
        println!("📦 Package manager: {}", manager);
    }
    Ok(())
}
