mod git;
mod github;
mod payload_source;
mod tool_locator;

pub use git::GitPort;
pub use github::{AuthStatus, GitHubPort};
pub use payload_source::{CopiedFiles, PayloadSource};
pub use tool_locator::ToolLocator;
