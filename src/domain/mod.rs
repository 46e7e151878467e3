pub mod ecosystem;
pub mod error;
pub mod layout;
pub mod payload;
pub mod settings;
pub mod target;
pub mod templates;
pub mod update_script;

pub use ecosystem::{Ecosystem, EcosystemSet, MarkerSnapshot, PackageManager, detect};
pub use error::AppError;
pub use layout::ClaudeLayout;
pub use payload::PayloadOrigin;
pub use settings::{EcosystemSection, SectionChange, SettingsDocument, SettingsView};
pub use target::{ResolvedTarget, TargetOrigin, resolve_target};
pub use update_script::UpdateStrategy;
