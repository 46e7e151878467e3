use std::path::Path;

use crate::domain::{AppError, UpdateStrategy};

pub trait GitPort {
    /// Decide how an update script should refresh a payload directory that was
    /// installed into `target`.
    fn update_strategy(&self, target: &Path, source: &Path) -> Result<UpdateStrategy, AppError>;
}
