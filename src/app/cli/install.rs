//! Install command implementation.

use std::path::PathBuf;

use crate::app::api::{InstallOutcome, InstallRequest, InstallWarning};
use crate::domain::{AppError, ClaudeLayout, SectionChange, TargetOrigin};

pub fn run_install(
    source: Option<PathBuf>,
    path: Option<PathBuf>,
    default_branch: Option<String>,
) -> Result<(), AppError> {
    let outcome = crate::app::api::install(InstallRequest { path, source, default_branch })?;
    report(&outcome);
    Ok(())
}

fn report(outcome: &InstallOutcome) {
    if outcome.target.origin == TargetOrigin::Parent {
        println!("📁 Using parent directory: {}", outcome.target.path.display());
    }
    println!("📦 Installing from {}", outcome.payload);
    println!("🔍 Project types: {}", outcome.settings.ecosystems.labels().join(", "));

    if outcome.settings.created {
        println!("✅ Created .claude/settings.toml");
    }
    for (section, change) in &outcome.settings.sections {
        match change {
            SectionChange::Inserted => println!("  Added [{}] settings", section),
            SectionChange::Filled(n) => println!("  Filled {} missing key(s) in [{}]", n, section),
            SectionChange::Unchanged => {}
            SectionChange::Skipped => {
                println!("  ⚠️  Skipped [{}]: the existing `{}` key is not a table", section, section)
            }
        }
    }

    if !outcome.hooks.is_empty() {
        println!("✅ Installed {} hook file(s)", outcome.hooks.len());
    }
    if outcome.github_authenticated {
        println!("✅ GitHub CLI is authenticated");
    }

    if !outcome.warnings.is_empty() {
        println!("⚠️  Warnings:");
        for warning in &outcome.warnings {
            match warning {
                InstallWarning::HooksMissing => {
                    println!("  • No hooks directory in the command bundle; skipped hooks")
                }
                InstallWarning::GitHubUnauthenticated { details } => {
                    println!("  • GitHub CLI is not authenticated ({})", details);
                    println!("    Run `gh auth login` before using the commands");
                }
                InstallWarning::GitHubCheckFailed { details } => {
                    println!("  • Could not check GitHub CLI authentication: {}", details);
                    println!("    Run `gh auth status` to investigate");
                }
            }
        }
    }

    println!(
        "✅ Installed {} command(s) into {}",
        outcome.commands.len(),
        ClaudeLayout::new(&outcome.target.path).commands_dir().display()
    );
    for name in &outcome.commands {
        println!("  /{}", name);
    }

    println!();
    println!("Next steps:");
    println!("  1. Review .claude/settings.toml and adjust commands for your project");
    println!("  2. Commit .claude/ so your team shares the same commands");
    println!(
        "  3. Run ./{} to pull bundle updates later",
        outcome.update_script.file_name().map(|n| n.to_string_lossy()).unwrap_or_default()
    );
}
