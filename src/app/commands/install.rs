//! The install pipeline.
//!
//! Stages run in a fixed order. Fatal failures return `Err` and leave any
//! directories already created in place; advisory failures are collected as
//! [`InstallWarning`]s.

use std::fs;
use std::path::PathBuf;

use tracing::{debug, info, info_span};

use crate::adapters::filesystem::set_executable;
use crate::app::AppContext;
use crate::app::commands::verify::{command_names, verify_installation};
use crate::app::config::InstallOptions;
use crate::domain::settings::{ecosystem_sections, render_default_settings};
use crate::domain::update_script::render_update_script;
use crate::domain::{
    AppError, ClaudeLayout, EcosystemSet, MarkerSnapshot, PayloadOrigin, ResolvedTarget,
    SectionChange, SettingsDocument, UpdateStrategy, detect, resolve_target,
};
use crate::ports::{AuthStatus, GitHubPort, GitPort, PayloadSource, ToolLocator};

/// Executables that must resolve on `PATH` before anything is written.
pub const REQUIRED_TOOLS: &[&str] = &["git", "gh"];

/// Non-fatal conditions met during an install.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallWarning {
    /// The payload source has no `hooks/` directory.
    HooksMissing,
    /// `gh auth status` reported no usable login.
    GitHubUnauthenticated { details: String },
    /// `gh auth status` could not be run.
    GitHubCheckFailed { details: String },
}

/// Settings-generation summary.
#[derive(Debug, Clone)]
pub struct SettingsReport {
    pub path: PathBuf,
    pub created: bool,
    pub ecosystems: EcosystemSet,
    pub sections: Vec<(&'static str, SectionChange)>,
}

#[derive(Debug, Clone)]
pub struct InstallOutcome {
    pub target: ResolvedTarget,
    pub payload: PayloadOrigin,
    pub settings: SettingsReport,
    pub hooks: Vec<PathBuf>,
    pub update_script: PathBuf,
    pub update_strategy: UpdateStrategy,
    pub github_authenticated: bool,
    /// Installed command names, sorted by path.
    pub commands: Vec<String>,
    pub warnings: Vec<InstallWarning>,
}

pub fn execute<T, H, G, P>(
    ctx: &AppContext<T, H, G>,
    payload: &P,
    options: &InstallOptions,
) -> Result<InstallOutcome, AppError>
where
    T: ToolLocator,
    H: GitHubPort,
    G: GitPort,
    P: PayloadSource,
{
    let _span = info_span!("install", start = %options.start_dir.display()).entered();
    let mut warnings = Vec::new();

    check_dependencies(ctx.tools())?;

    let target = resolve_target(&options.start_dir)?;
    info!(target = %target.path.display(), origin = ?target.origin, "resolved target");
    let layout = ClaudeLayout::new(&target.path);

    fs::create_dir_all(layout.commands_dir())?;
    fs::create_dir_all(layout.hooks_dir())?;

    let copied = payload.copy_commands(&layout.commands_dir())?;
    info!(count = copied.len(), "copied command payload");

    let settings = write_settings(&layout, &options.default_branch)?;

    let hooks = match payload.copy_hooks(&layout.hooks_dir())? {
        Some(files) => files,
        None => {
            warnings.push(InstallWarning::HooksMissing);
            Vec::new()
        }
    };

    let github_authenticated = match ctx.github().auth_status() {
        Ok(AuthStatus::Authenticated) => true,
        Ok(AuthStatus::Unauthenticated { details }) => {
            warnings.push(InstallWarning::GitHubUnauthenticated { details });
            false
        }
        Err(err) => {
            warnings.push(InstallWarning::GitHubCheckFailed { details: err.to_string() });
            false
        }
    };

    let origin = payload.origin();
    let update_strategy = match origin.directory() {
        Some(source) => ctx.git().update_strategy(layout.root(), source)?,
        None => UpdateStrategy::Embedded,
    };
    let update_script = write_update_script(&layout, origin.directory(), &update_strategy)?;

    let files = verify_installation(&layout).map_err(AppError::VerificationFailed)?;

    Ok(InstallOutcome {
        target,
        payload: origin,
        settings,
        hooks,
        update_script,
        update_strategy,
        github_authenticated,
        commands: command_names(&files),
        warnings,
    })
}

/// Fail with every required tool that is not on `PATH`.
pub fn check_dependencies<T: ToolLocator>(tools: &T) -> Result<(), AppError> {
    let missing: Vec<String> = REQUIRED_TOOLS
        .iter()
        .filter(|tool| !tools.is_available(tool))
        .map(|tool| tool.to_string())
        .collect();

    if missing.is_empty() { Ok(()) } else { Err(AppError::MissingDependencies { tools: missing }) }
}

fn write_settings(layout: &ClaudeLayout, default_branch: &str) -> Result<SettingsReport, AppError> {
    let path = layout.settings_file();
    let created = !path.exists();
    let original =
        if created { render_default_settings(default_branch)? } else { fs::read_to_string(&path)? };

    let mut document = SettingsDocument::parse(&path, &original)?;
    let snapshot = MarkerSnapshot::capture(layout.root())?;
    let ecosystems = detect(&snapshot);

    let sections = ecosystem_sections(&ecosystems, &snapshot)
        .iter()
        .map(|section| (section.name, document.upsert(section)))
        .collect::<Vec<_>>();

    let rendered = document.render();
    if created || rendered != original {
        fs::write(&path, rendered)?;
    }
    debug!(created, ecosystems = ?ecosystems.labels(), ?sections, "settings written");

    Ok(SettingsReport { path, created, ecosystems, sections })
}

fn write_update_script(
    layout: &ClaudeLayout,
    source: Option<&std::path::Path>,
    strategy: &UpdateStrategy,
) -> Result<PathBuf, AppError> {
    let content = render_update_script(layout.root(), source, strategy)?;
    let path = layout.update_script();
    fs::write(&path, content)?;
    set_executable(&path)?;
    Ok(path)
}
