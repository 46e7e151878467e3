use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::domain::{AppError, UpdateStrategy};
use crate::ports::GitPort;

/// Returns a configured strategy; defaults to reinstalling from the source.
#[derive(Default)]
pub struct FakeGit {
    pub strategy: Mutex<Option<UpdateStrategy>>,
    pub queries: Mutex<Vec<(PathBuf, PathBuf)>>,
}

impl FakeGit {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_strategy(&self, strategy: UpdateStrategy) {
        *self.strategy.lock().unwrap() = Some(strategy);
    }
}

impl GitPort for FakeGit {
    fn update_strategy(&self, target: &Path, source: &Path) -> Result<UpdateStrategy, AppError> {
        self.queries.lock().unwrap().push((target.to_path_buf(), source.to_path_buf()));
        Ok(self
            .strategy
            .lock()
            .unwrap()
            .clone()
            .unwrap_or_else(|| UpdateStrategy::Reinstall { source: source.to_path_buf() }))
    }
}
