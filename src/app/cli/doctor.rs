//! Doctor command implementation.

use std::path::PathBuf;

use crate::domain::AppError;

pub fn run_doctor(path: Option<PathBuf>, strict: bool) -> Result<i32, AppError> {
    let options = crate::app::api::DoctorOptions { strict };
    let outcome = crate::app::api::doctor(path, options)?;

    if outcome.exit_code == 0 {
        println!(
            "✅ {} command(s) installed in {} ({} warning(s))",
            outcome.command_count,
            outcome.target.display(),
            outcome.warnings
        );
    } else {
        println!("❌ {} error(s), {} warning(s)", outcome.errors, outcome.warnings);
    }
    Ok(outcome.exit_code)
}
