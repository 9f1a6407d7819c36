use std::env;
use std::path::{Path, PathBuf};

pub const HOME_ENV: &str = "KITOPS_HOME";

const APP_DIR: &str = ".kitops";
const PROFILES_DIR: &str = "profiles";
const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Clone, Default)]
pub struct Environment {
    config_home: Option<PathBuf>,
    kitops_home: Option<PathBuf>,
    user_home: Option<PathBuf>,
}

impl Environment {
    pub fn new(kitops_home: Option<PathBuf>, user_home: Option<PathBuf>) -> Self {
        Self {
            config_home: None,
            kitops_home: kitops_home.filter(|dir| !dir.as_os_str().is_empty()),
            user_home,
        }
    }

    pub fn from_process() -> Self {
        Self::new(env::var_os(HOME_ENV).map(PathBuf::from), dirs::home_dir())
    }

    pub fn with_config_home(mut self, config_home: Option<PathBuf>) -> Self {
        self.config_home = config_home.filter(|dir| !dir.as_os_str().is_empty());
        self
    }

    pub fn base_dir(&self) -> PathBuf {
        if let Some(dir) = self.config_home.as_ref().or(self.kitops_home.as_ref()) {
            return dir.clone();
        }

        match &self.user_home {
            Some(home) => home.join(APP_DIR),
            None => PathBuf::from(APP_DIR),
        }
    }

    pub fn config_file(&self, profile: Option<&str>) -> PathBuf {
        config_file(&self.base_dir(), profile)
    }
}

pub fn config_file(base: &Path, profile: Option<&str>) -> PathBuf {
    match profile.filter(|name| !name.is_empty()) {
        Some(name) => base.join(PROFILES_DIR).join(name).join(CONFIG_FILE),
        None => base.join(CONFIG_FILE),
    }
}
