use crate::ports::{GitHubPort, GitPort, ToolLocator};

/// Application context holding dependencies for command execution.
pub struct AppContext<T: ToolLocator, H: GitHubPort, G: GitPort> {
    tools: T,
    github: H,
    git: G,
}

impl<T: ToolLocator, H: GitHubPort, G: GitPort> AppContext<T, H, G> {
    /// Create a new application context.
    pub fn new(tools: T, github: H, git: G) -> Self {
        Self { tools, github, git }
    }

    /// Get a reference to the tool locator.
    pub fn tools(&self) -> &T {
        &self.tools
    }

    /// Get a reference to the GitHub CLI port.
    pub fn github(&self) -> &H {
        &self.github
    }

    /// Get a reference to the git inspection port.
    pub fn git(&self) -> &G {
        &self.git
    }
}
