mod directory;
mod embedded;

pub use directory::DirectoryPayload;
pub use embedded::EmbeddedPayload;
