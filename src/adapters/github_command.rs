use std::process::Command;

use tracing::debug;

use crate::domain::AppError;
use crate::ports::{AuthStatus, GitHubPort};

#[derive(Debug, Clone, Default)]
pub struct GitHubCommandAdapter;

impl GitHubCommandAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl GitHubPort for GitHubCommandAdapter {
    fn auth_status(&self) -> Result<AuthStatus, AppError> {
        let output = Command::new("gh").args(["auth", "status"]).output().map_err(|e| {
            AppError::ExternalToolError {
                tool: "gh".into(),
                error: format!("Failed to execute gh CLI: {}", e),
            }
        })?;

        if output.status.success() {
            return Ok(AuthStatus::Authenticated);
        }

        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        debug!(status = ?output.status.code(), %stderr, "gh auth status reported no login");
        Ok(AuthStatus::Unauthenticated {
            details: if stderr.is_empty() { "not logged in".to_string() } else { stderr },
        })
    }
}
