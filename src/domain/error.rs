use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for ghflow operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Required executables are not resolvable on PATH.
    #[error("Missing required tools: {}. Install them and re-run.", tools.join(", "))]
    MissingDependencies { tools: Vec<String> },

    /// Neither the start directory nor its parent looks like a project root.
    #[error(
        "No project found in {} or its parent. Run from a directory containing package.json, pyproject.toml, Cargo.toml, go.mod or .git",
        searched.display()
    )]
    ProjectNotFound { searched: PathBuf },

    /// The payload source has no `commands/` directory.
    #[error("Commands directory not found: {}", .0.display())]
    CommandsSourceMissing(PathBuf),

    /// Post-install verification found problems.
    #[error("Installation verification failed:\n  - {}", .0.join("\n  - "))]
    VerificationFailed(Vec<String>),

    /// Settings file exists but is not valid TOML.
    #[error("Failed to parse {}: {details}", path.display())]
    SettingsParse { path: PathBuf, details: String },

    /// Template registration or rendering failed.
    #[error("Template error in '{name}': {details}")]
    Template { name: String, details: String },

    /// External tool execution failed.
    #[error("{tool} failed: {error}")]
    ExternalToolError { tool: String, error: String },
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    pub(crate) fn template(name: &str, err: impl std::fmt::Display) -> Self {
        AppError::Template { name: name.to_string(), details: err.to_string() }
    }
}
