pub mod filesystem;
pub mod git_repository;
pub mod github_command;
pub mod payload;
pub mod which_locator;

pub use git_repository::GitRepositoryAdapter;
pub use github_command::GitHubCommandAdapter;
pub use payload::{DirectoryPayload, EmbeddedPayload};
pub use which_locator::PathToolLocator;
