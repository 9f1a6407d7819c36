use std::path::PathBuf;

use crate::config::{self, ConfigStore, Environment};
use crate::output::Output;

#[derive(Debug)]
pub struct AppContext {
    pub profile: Option<String>,
    pub store: ConfigStore,
    pub output: Output,
}

impl AppContext {
    pub fn bootstrap(profile: Option<String>, config_home: Option<PathBuf>, json: bool) -> Self {
        let env = Environment::from_process().with_config_home(config_home);
        Self::with_environment(&env, profile, json)
    }

    pub fn with_environment(env: &Environment, profile: Option<String>, json: bool) -> Self {
        let profile = config::resolve_profile(profile.as_deref());
        let store = ConfigStore::open(env, profile.as_deref());
        let output = Output::new(json);

        Self {
            profile,
            store,
            output,
        }
    }
}
