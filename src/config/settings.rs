use std::fs;
use std::io;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::{AppError, AppResult};
use crate::logging::LogLevel;

const DEFAULT_PROGRESS: &str = "plain";

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub log_level: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub progress: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub config_dir: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Info.as_str().to_string(),
            progress: DEFAULT_PROGRESS.to_string(),
            config_dir: String::new(),
        }
    }
}

impl Settings {
    pub fn get(&self, key: SettingKey) -> &str {
        match key {
            SettingKey::LogLevel => &self.log_level,
            SettingKey::Progress => &self.progress,
            SettingKey::ConfigDir => &self.config_dir,
        }
    }

    pub fn set(&mut self, key: SettingKey, value: impl Into<String>) {
        let slot = match key {
            SettingKey::LogLevel => &mut self.log_level,
            SettingKey::Progress => &mut self.progress,
            SettingKey::ConfigDir => &mut self.config_dir,
        };
        *slot = value.into();
    }

    pub fn entries(&self) -> impl Iterator<Item = (SettingKey, &str)> {
        SettingKey::ALL
            .into_iter()
            .map(move |key| (key, self.get(key)))
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum SettingKey {
    LogLevel,
    Progress,
    ConfigDir,
}

impl SettingKey {
    pub const ALL: [SettingKey; 3] = [
        SettingKey::LogLevel,
        SettingKey::Progress,
        SettingKey::ConfigDir,
    ];

    pub fn field_name(&self) -> &'static str {
        match self {
            SettingKey::LogLevel => "LogLevel",
            SettingKey::Progress => "Progress",
            SettingKey::ConfigDir => "ConfigDir",
        }
    }

    pub fn json_key(&self) -> &'static str {
        match self {
            SettingKey::LogLevel => "log_level",
            SettingKey::Progress => "progress",
            SettingKey::ConfigDir => "config_dir",
        }
    }

    pub fn lookup(key: &str) -> Option<Self> {
        let titled = capitalize_first(key);
        Self::ALL
            .into_iter()
            .find(|candidate| candidate.field_name() == titled || candidate.json_key() == key)
    }
}

impl FromStr for SettingKey {
    type Err = AppError;

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        Self::lookup(key).ok_or_else(|| AppError::UnknownKey(key.to_string()))
    }
}

fn capitalize_first(key: &str) -> String {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn load(path: &Path) -> AppResult<Settings> {
    if path.as_os_str().is_empty() {
        return Err(AppError::InvalidInput("config path is empty".to_string()));
    }

    let raw = match fs::read(path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "config file absent, using defaults");
            return Ok(Settings::default());
        }
        Err(err) => return Err(err.into()),
    };

    let settings = decode(&raw).map_err(AppError::Decode)?;
    debug!(path = %path.display(), "loaded config");
    Ok(settings)
}

// Object keys match the JSON key names case-insensitively.
fn decode(raw: &[u8]) -> serde_json::Result<Settings> {
    let object: Map<String, Value> = serde_json::from_slice(raw)?;
    let folded = object
        .into_iter()
        .map(|(key, value)| (fold_key(key), value))
        .collect::<Map<_, _>>();
    serde_json::from_value(Value::Object(folded))
}

fn fold_key(key: String) -> String {
    SettingKey::ALL
        .into_iter()
        .map(|candidate| candidate.json_key())
        .find(|json_key| json_key.eq_ignore_ascii_case(&key))
        .map_or(key, str::to_string)
}

pub fn save(path: &Path, settings: &Settings) -> AppResult<()> {
    let mut payload = serde_json::to_vec(settings)?;
    payload.push(b'\n');
    fs::write(path, payload)?;

    debug!(path = %path.display(), "saved config");
    Ok(())
}
