use std::path::{Path, PathBuf};

use tracing::warn;

use crate::error::AppResult;

use super::paths::Environment;
use super::settings::{self, SettingKey, Settings};

#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn open(env: &Environment, profile: Option<&str>) -> Self {
        Self::new(env.config_file(profile))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> AppResult<Settings> {
        settings::load(&self.path)
    }

    pub fn save(&self, settings: &Settings) -> AppResult<()> {
        settings::save(&self.path, settings)
    }

    pub fn get(&self, key: &str) -> AppResult<String> {
        let settings = self.load()?;
        let key = key.parse::<SettingKey>()?;
        Ok(settings.get(key).to_string())
    }

    /// Falls back to defaults when the file cannot be loaded.
    pub fn set(&self, key: &str, value: &str) -> AppResult<Settings> {
        let key = key.parse::<SettingKey>()?;

        let mut settings = self.load().unwrap_or_else(|err| {
            warn!(
                path = %self.path.display(),
                error = %err,
                "could not load config, starting from defaults"
            );
            Settings::default()
        });

        settings.set(key, value);
        self.save(&settings)?;
        Ok(settings)
    }

    pub fn list(&self) -> AppResult<Vec<(SettingKey, String)>> {
        let settings = self.load()?;
        Ok(settings
            .entries()
            .map(|(key, value)| (key, value.to_string()))
            .collect())
    }

    pub fn reset(&self) -> AppResult<Settings> {
        let settings = Settings::default();
        self.save(&settings)?;
        Ok(settings)
    }
}
