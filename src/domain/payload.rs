use std::fmt;
use std::path::{Path, PathBuf};

/// Where the command and hook payload is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PayloadOrigin {
    /// A checkout of the bundle with `commands/` and optional `hooks/`.
    Directory(PathBuf),
    /// The bundle compiled into the binary.
    Embedded,
}

impl PayloadOrigin {
    pub fn directory(&self) -> Option<&Path> {
        match self {
            PayloadOrigin::Directory(path) => Some(path),
            PayloadOrigin::Embedded => None,
        }
    }
}

impl fmt::Display for PayloadOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PayloadOrigin::Directory(path) => write!(f, "{}", path.display()),
            PayloadOrigin::Embedded => f.write_str("embedded bundle"),
        }
    }
}
