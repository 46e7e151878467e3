use std::sync::Mutex;

use crate::domain::AppError;
use crate::ports::{AuthStatus, GitHubPort};

pub struct FakeGitHub {
    status: AuthStatus,
    pub calls: Mutex<usize>,
}

impl FakeGitHub {
    pub fn authenticated() -> Self {
        Self { status: AuthStatus::Authenticated, calls: Mutex::new(0) }
    }

    pub fn unauthenticated(details: &str) -> Self {
        Self {
            status: AuthStatus::Unauthenticated { details: details.to_string() },
            calls: Mutex::new(0),
        }
    }
}

impl GitHubPort for FakeGitHub {
    fn auth_status(&self) -> Result<AuthStatus, AppError> {
        *self.calls.lock().unwrap() += 1;
        Ok(self.status.clone())
    }
}
