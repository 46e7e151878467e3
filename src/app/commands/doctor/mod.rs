mod diagnostics;

use std::fs;
use std::path::{Path, PathBuf};

use crate::app::commands::verify::verify_installation;
use crate::domain::settings::{NODEJS_SECTION, PYTHON_SECTION, ecosystem_sections};
use crate::domain::{AppError, ClaudeLayout, MarkerSnapshot, SettingsView, detect, resolve_target};

use diagnostics::Diagnostics;

#[derive(Debug, Clone, Default)]
pub struct DoctorOptions {
    pub strict: bool,
}

#[derive(Debug, Clone)]
pub struct DoctorOutcome {
    pub target: PathBuf,
    pub command_count: usize,
    pub errors: usize,
    pub warnings: usize,
    pub exit_code: i32,
}

pub fn execute(start_dir: &Path, options: DoctorOptions) -> Result<DoctorOutcome, AppError> {
    let target = resolve_target(start_dir)?;
    let layout = ClaudeLayout::new(&target.path);
    let mut diagnostics = Diagnostics::default();

    let command_count = match verify_installation(&layout) {
        Ok(files) => files.len(),
        Err(problems) => {
            for problem in problems {
                diagnostics.push_error(".claude", problem);
            }
            0
        }
    };

    settings_checks(&layout, &mut diagnostics)?;

    if !layout.hooks_dir().is_dir() {
        diagnostics.push_warning(layout.display_relative(&layout.hooks_dir()), "does not exist");
    }
    if !layout.update_script().is_file() {
        diagnostics.push_warning(
            layout.display_relative(&layout.update_script()),
            "does not exist; re-run `ghflow install` to regenerate it",
        );
    }

    diagnostics.emit();

    let errors = diagnostics.error_count();
    let warnings = diagnostics.warning_count();
    let exit_code = if errors > 0 {
        1
    } else if warnings > 0 && options.strict {
        2
    } else {
        0
    };

    Ok(DoctorOutcome { target: target.path, command_count, errors, warnings, exit_code })
}

fn settings_checks(layout: &ClaudeLayout, diagnostics: &mut Diagnostics) -> Result<(), AppError> {
    let path = layout.settings_file();
    if !path.is_file() {
        return Ok(());
    }
    let display = layout.display_relative(&path);

    let view = match SettingsView::parse(&path, &fs::read_to_string(&path)?) {
        Ok(view) => view,
        Err(err) => {
            diagnostics.push_error(display, err.to_string());
            return Ok(());
        }
    };

    if view.github.is_none() {
        diagnostics.push_error(&display, "missing [github] section with default_branch");
    }
    if view.tools.is_none() {
        diagnostics.push_warning(&display, "missing [tools] section");
    }

    let snapshot = MarkerSnapshot::capture(layout.root())?;
    let ecosystems = detect(&snapshot);
    for section in ecosystem_sections(&ecosystems, &snapshot) {
        let present = match section.name {
            NODEJS_SECTION => view.nodejs.is_some(),
            PYTHON_SECTION => view.python.is_some(),
            _ => true,
        };
        if !present {
            diagnostics.push_warning(
                &display,
                format!(
                    "project uses {} but [{}] is missing; re-run `ghflow install`",
                    ecosystems.labels().join(", "),
                    section.name
                ),
            );
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::{TempDir, tempdir};

    fn installed_project(settings: &str) -> TempDir {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("pyproject.toml"), "[project]\n").unwrap();
        let layout = ClaudeLayout::new(dir.path());
        fs::create_dir_all(layout.commands_dir()).unwrap();
        fs::create_dir_all(layout.hooks_dir()).unwrap();
        fs::write(layout.commands_dir().join("commit.md"), "# Commit\n").unwrap();
        fs::write(layout.settings_file(), settings).unwrap();
        fs::write(layout.update_script(), "#!/usr/bin/env bash\n").unwrap();
        dir
    }

    const HEALTHY: &str = "[tools]\ngit = true\n\n[github]\ndefault_branch = \"main\"\n\n[python]\ntest_command = \"pytest\"\n";

    #[test]
    fn healthy_installation_passes() {
        let dir = installed_project(HEALTHY);

        let outcome = execute(dir.path(), DoctorOptions::default()).unwrap();

        assert_eq!(outcome.exit_code, 0);
        assert_eq!(outcome.command_count, 1);
        assert_eq!(outcome.errors + outcome.warnings, 0);
    }

    #[test]
    fn missing_ecosystem_section_is_a_warning() {
        let dir = installed_project("[tools]\n\n[github]\ndefault_branch = \"main\"\n");

        let lenient = execute(dir.path(), DoctorOptions::default()).unwrap();
        let strict = execute(dir.path(), DoctorOptions { strict: true }).unwrap();

        assert_eq!(lenient.warnings, 1);
        assert_eq!(lenient.exit_code, 0);
        assert_eq!(strict.exit_code, 2);
    }

    #[test]
    fn unparsable_settings_is_an_error() {
        let dir = installed_project("[github\n");

        let outcome = execute(dir.path(), DoctorOptions::default()).unwrap();

        assert_eq!(outcome.errors, 1);
        assert_eq!(outcome.exit_code, 1);
    }

    #[test]
    fn empty_commands_directory_is_an_error() {
        let dir = installed_project(HEALTHY);
        fs::remove_file(ClaudeLayout::new(dir.path()).commands_dir().join("commit.md")).unwrap();

        let outcome = execute(dir.path(), DoctorOptions::default()).unwrap();

        assert_eq!(outcome.exit_code, 1);
        assert_eq!(outcome.command_count, 0);
    }

    #[test]
    fn non_project_directory_is_rejected() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("x");
        fs::create_dir(&nested).unwrap();

        assert!(matches!(
            execute(&nested, DoctorOptions::default()),
            Err(AppError::ProjectNotFound { .. })
        ));
    }
}
