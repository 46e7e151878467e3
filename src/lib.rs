//! ghflow: install GitHub workflow commands into a project's `.claude/` directory.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{
    AppError, DetectReport, DoctorOptions, DoctorOutcome, InstallOptions, InstallOutcome,
    InstallRequest, InstallWarning, PayloadOrigin, SettingsReport, detect, detect_at, doctor,
    doctor_at, install, install_at,
};
pub use domain::{Ecosystem, EcosystemSet};
