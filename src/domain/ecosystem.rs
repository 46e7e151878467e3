//! Project ecosystem detection.
//!
//! Detection is a pure function over a [`MarkerSnapshot`]; reading the
//! filesystem happens once in [`MarkerSnapshot::capture`].

use std::collections::BTreeSet;
use std::fmt;
use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::domain::AppError;

const PACKAGE_JSON: &str = "package.json";

/// Files inspected when building a snapshot.
pub const ECOSYSTEM_MARKERS: &[&str] = &[
    PACKAGE_JSON,
    "pyproject.toml",
    "requirements.txt",
    "setup.py",
    "Cargo.toml",
    "go.mod",
    "composer.json",
    "pnpm-lock.yaml",
    "yarn.lock",
    "bun.lockb",
    "package-lock.json",
];

/// Detected technology stack label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Ecosystem {
    Node,
    React,
    Python,
    Rust,
    Go,
    Php,
    Generic,
}

impl Ecosystem {
    pub fn label(self) -> &'static str {
        match self {
            Ecosystem::Node => "node",
            Ecosystem::React => "react",
            Ecosystem::Python => "python",
            Ecosystem::Rust => "rust",
            Ecosystem::Go => "go",
            Ecosystem::Php => "php",
            Ecosystem::Generic => "generic",
        }
    }
}

impl fmt::Display for Ecosystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Non-exclusive set of detected ecosystems, ordered by variant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct EcosystemSet(BTreeSet<Ecosystem>);

impl EcosystemSet {
    pub fn contains(&self, ecosystem: Ecosystem) -> bool {
        self.0.contains(&ecosystem)
    }

    pub fn iter(&self) -> impl Iterator<Item = Ecosystem> + '_ {
        self.0.iter().copied()
    }

    pub fn labels(&self) -> Vec<&'static str> {
        self.iter().map(Ecosystem::label).collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<Ecosystem> for EcosystemSet {
    fn from_iter<I: IntoIterator<Item = Ecosystem>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Node package manager, inferred from lockfiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PackageManager {
    #[default]
    Npm,
    Pnpm,
    Yarn,
    Bun,
}

impl PackageManager {
    pub fn name(self) -> &'static str {
        match self {
            PackageManager::Npm => "npm",
            PackageManager::Pnpm => "pnpm",
            PackageManager::Yarn => "yarn",
            PackageManager::Bun => "bun",
        }
    }

    /// Command prefix used to run a package script.
    pub fn run_prefix(self) -> &'static str {
        match self {
            PackageManager::Npm => "npm run",
            PackageManager::Pnpm => "pnpm",
            PackageManager::Yarn => "yarn",
            PackageManager::Bun => "bun run",
        }
    }
}

/// Which marker files exist in a directory, plus the text of `package.json`.
#[derive(Debug, Clone, Default)]
pub struct MarkerSnapshot {
    present: BTreeSet<String>,
    package_json: Option<String>,
}

impl MarkerSnapshot {
    /// Read the marker state of `dir`.
    pub fn capture(dir: &Path) -> Result<Self, AppError> {
        let mut snapshot = Self::default();
        for marker in ECOSYSTEM_MARKERS {
            if dir.join(marker).is_file() {
                snapshot.present.insert((*marker).to_string());
            }
        }
        if snapshot.has(PACKAGE_JSON) {
            // Only scanned for substrings, so non-UTF-8 bytes are replaced.
            let bytes = fs::read(dir.join(PACKAGE_JSON))?;
            snapshot.package_json = Some(String::from_utf8_lossy(&bytes).into_owned());
        }
        Ok(snapshot)
    }

    /// Build a snapshot from in-memory data.
    pub fn from_parts<I, S>(files: I, package_json: Option<&str>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut present: BTreeSet<String> = files.into_iter().map(Into::into).collect();
        if package_json.is_some() {
            present.insert(PACKAGE_JSON.to_string());
        }
        Self { present, package_json: package_json.map(str::to_string) }
    }

    pub fn has(&self, marker: &str) -> bool {
        self.present.contains(marker)
    }

    pub fn package_json(&self) -> Option<&str> {
        self.package_json.as_deref()
    }

    pub fn package_manager(&self) -> PackageManager {
        if self.has("pnpm-lock.yaml") {
            PackageManager::Pnpm
        } else if self.has("yarn.lock") {
            PackageManager::Yarn
        } else if self.has("bun.lockb") {
            PackageManager::Bun
        } else {
            PackageManager::Npm
        }
    }
}

/// Derive the ecosystem set for a snapshot.
pub fn detect(snapshot: &MarkerSnapshot) -> EcosystemSet {
    let mut found = BTreeSet::new();

    if snapshot.has(PACKAGE_JSON) {
        found.insert(Ecosystem::Node);
        if snapshot.package_json().is_some_and(|text| text.contains("\"react\"")) {
            found.insert(Ecosystem::React);
        }
    }
    if ["pyproject.toml", "requirements.txt", "setup.py"].iter().any(|m| snapshot.has(m)) {
        found.insert(Ecosystem::Python);
    }
    if snapshot.has("Cargo.toml") {
        found.insert(Ecosystem::Rust);
    }
    if snapshot.has("go.mod") {
        found.insert(Ecosystem::Go);
    }
    if snapshot.has("composer.json") {
        found.insert(Ecosystem::Php);
    }

    if found.is_empty() {
        found.insert(Ecosystem::Generic);
    }
    EcosystemSet(found)
}
