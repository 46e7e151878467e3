//! `.claude/settings.toml` generation.
//!
//! The default block comes from an embedded template and is only written when
//! the file does not exist. Ecosystem sections are upserted by table name, so
//! repeated installs never duplicate them and values a user edited survive.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use toml_edit::{DocumentMut, Item, Table};
use tracing::warn;

use crate::domain::AppError;
use crate::domain::ecosystem::{Ecosystem, EcosystemSet, MarkerSnapshot};
use crate::domain::templates::{self, SETTINGS_TEMPLATE};

pub const DEFAULT_BRANCH: &str = "main";
pub const NODEJS_SECTION: &str = "nodejs";
pub const PYTHON_SECTION: &str = "python";

#[derive(Debug, Serialize)]
struct DefaultSettingsContext<'a> {
    version: &'a str,
    default_branch: &'a str,
}

/// Render the default settings block.
pub fn render_default_settings(default_branch: &str) -> Result<String, AppError> {
    templates::render(
        SETTINGS_TEMPLATE,
        &DefaultSettingsContext { version: env!("CARGO_PKG_VERSION"), default_branch },
    )
}

/// A table of string settings owned by one ecosystem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EcosystemSection {
    pub name: &'static str,
    pub entries: Vec<(&'static str, String)>,
}

impl EcosystemSection {
    fn nodejs(snapshot: &MarkerSnapshot) -> Self {
        let manager = snapshot.package_manager();
        let run = manager.run_prefix();
        Self {
            name: NODEJS_SECTION,
            entries: vec![
                ("package_manager", manager.name().to_string()),
                ("install_command", format!("{} install", manager.name())),
                ("test_command", format!("{} test", manager.name())),
                ("lint_command", format!("{run} lint")),
                ("build_command", format!("{run} build")),
            ],
        }
    }

    fn python() -> Self {
        Self {
            name: PYTHON_SECTION,
            entries: vec![
                ("test_command", "pytest".to_string()),
                ("lint_command", "ruff check .".to_string()),
                ("format_command", "ruff format .".to_string()),
            ],
        }
    }
}

/// Sections to upsert for a detected set, in detection order.
///
/// `react` folds into the Node.js section; rust, go, php and generic have no
/// template.
pub fn ecosystem_sections(set: &EcosystemSet, snapshot: &MarkerSnapshot) -> Vec<EcosystemSection> {
    let mut sections = Vec::new();
    if set.contains(Ecosystem::Node) || set.contains(Ecosystem::React) {
        sections.push(EcosystemSection::nodejs(snapshot));
    }
    if set.contains(Ecosystem::Python) {
        sections.push(EcosystemSection::python());
    }
    sections
}

/// Result of upserting one section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionChange {
    Inserted,
    Filled(usize),
    Unchanged,
    /// The key holds a non-table value and was left as is.
    Skipped,
}

/// Format-preserving view of a settings file.
#[derive(Debug, Clone)]
pub struct SettingsDocument {
    path: PathBuf,
    doc: DocumentMut,
}

impl SettingsDocument {
    pub fn parse(path: &Path, text: &str) -> Result<Self, AppError> {
        let doc = text.parse::<DocumentMut>().map_err(|e| AppError::SettingsParse {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;
        Ok(Self { path: path.to_path_buf(), doc })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn has_section(&self, name: &str) -> bool {
        self.doc.get(name).is_some_and(Item::is_table_like)
    }

    /// Insert the section, or add its missing keys to an existing one.
    pub fn upsert(&mut self, section: &EcosystemSection) -> SectionChange {
        if let Some(item) = self.doc.get(section.name)
            && !item.is_table_like()
        {
            warn!(
                path = %self.path.display(),
                section = section.name,
                "settings key is not a table; leaving it unchanged"
            );
            return SectionChange::Skipped;
        }

        let existing = self.doc.get_mut(section.name).and_then(Item::as_table_like_mut);

        let Some(table) = existing else {
            let mut table = Table::new();
            for (key, value) in &section.entries {
                table.insert(key, toml_edit::value(value.as_str()));
            }
            self.doc.insert(section.name, Item::Table(table));
            return SectionChange::Inserted;
        };

        let mut filled = 0;
        for (key, value) in &section.entries {
            if !table.contains_key(key) {
                table.insert(key, toml_edit::value(value.as_str()));
                filled += 1;
            }
        }
        if filled == 0 { SectionChange::Unchanged } else { SectionChange::Filled(filled) }
    }

    pub fn render(&self) -> String {
        self.doc.to_string()
    }
}

/// Typed read-back of a settings file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SettingsView {
    #[serde(default)]
    pub tools: Option<toml::Table>,
    #[serde(default)]
    pub github: Option<GitHubSettings>,
    #[serde(default)]
    pub nodejs: Option<toml::Table>,
    #[serde(default)]
    pub python: Option<toml::Table>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GitHubSettings {
    pub default_branch: String,
    #[serde(default)]
    pub conventional_commits: bool,
    #[serde(default)]
    pub link_issues: bool,
    #[serde(default)]
    pub draft_pull_requests: bool,
}

impl SettingsView {
    pub fn parse(path: &Path, text: &str) -> Result<Self, AppError> {
        toml::from_str(text)
            .map_err(|e| AppError::SettingsParse { path: path.to_path_buf(), details: e.to_string() })
    }
}
