mod fake_git;
mod fake_github;
mod fake_tool_locator;

pub use fake_git::FakeGit;
pub use fake_github::FakeGitHub;
pub use fake_tool_locator::FakeToolLocator;
