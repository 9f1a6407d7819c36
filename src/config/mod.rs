pub mod paths;
pub mod profile;
pub mod settings;
pub mod store;

pub use paths::Environment;
pub use profile::resolve_profile;
pub use settings::{SettingKey, Settings};
pub use store::ConfigStore;
