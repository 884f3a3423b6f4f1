//! Configuration for the SSML demo webhook.
//!
//! Stored as TOML at `<workspace root>/config/config.toml`. The workspace root
//! is `SSMLBASE_HOME` when set, otherwise the OS data directory.
//! The topic set is compiled in and not configurable.

use anyhow::{Context, Result};
use directories::BaseDirs;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const HOME_ENV: &str = "SSMLBASE_HOME";

/// Root configuration persisted per installation.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// Records every dispatched intent and its output turns in the intent log.
    #[serde(default)]
    pub debug: bool,
    #[serde(default)]
    pub intent_log: IntentLogSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IntentLogSettings {
    /// File name under `<workspace root>/logs`.
    #[serde(default = "default_log_file_name")]
    pub file_name: String,
}

impl Default for IntentLogSettings {
    fn default() -> Self {
        Self {
            file_name: default_log_file_name(),
        }
    }
}

fn default_log_file_name() -> String {
    "intents.jsonl".into()
}

impl AppConfig {
    pub fn intent_log_path(&self) -> Result<PathBuf> {
        Ok(logs_dir()?.join(&self.intent_log.file_name))
    }
}

/// Returns the root directory where runtime files live.
///
/// Order of precedence:
/// 1. `SSMLBASE_HOME` environment variable.
/// 2. OS-specific data directory via `directories::BaseDirs`.
pub fn workspace_root() -> Result<PathBuf> {
    if let Ok(path) = env::var(HOME_ENV) {
        return Ok(PathBuf::from(path));
    }
    let base_dirs = BaseDirs::new().context("Unable to determine OS data directory")?;
    Ok(base_dirs.data_dir().join("SSMLBase"))
}

pub fn config_dir() -> Result<PathBuf> {
    Ok(workspace_root()?.join("config"))
}

pub fn logs_dir() -> Result<PathBuf> {
    Ok(workspace_root()?.join("logs"))
}

pub fn config_file_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE_NAME))
}

/// Loads the configuration from disk or returns defaults.
pub fn load_or_default() -> Result<AppConfig> {
    let path = config_file_path()?;
    if path.exists() {
        load_from(&path)
    } else {
        Ok(AppConfig::default())
    }
}

pub fn load_from(path: &Path) -> Result<AppConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {:?}", path))?;
    let cfg: AppConfig =
        toml::from_str(&data).with_context(|| format!("Failed to parse config file {:?}", path))?;
    Ok(cfg)
}

/// Persists the configuration to disk.
pub fn save(config: &AppConfig) -> Result<()> {
    let dir = config_dir()?;
    fs::create_dir_all(&dir)?;
    let data = toml::to_string_pretty(config)?;
    fs::write(config_file_path()?, data)?;
    Ok(())
}
