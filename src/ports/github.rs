use crate::domain::AppError;

/// Outcome of `gh auth status`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthStatus {
    Authenticated,
    Unauthenticated { details: String },
}

pub trait GitHubPort {
    /// Query whether the GitHub CLI has a usable login.
    ///
    /// `Err` is reserved for failing to run the CLI at all.
    fn auth_status(&self) -> Result<AuthStatus, AppError>;
}
