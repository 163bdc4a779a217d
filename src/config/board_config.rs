use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::repository::DEFAULT_STORAGE_KEY;

pub const DATA_DIR_ENV: &str = "TASKBOARD_DATA_DIR";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BoardConfig {
    /// Key the task list is stored under
    pub storage_key: String,

    /// Prefix of the reference link shown for each task
    pub lookup_base_url: String,

    /// Directory for the desktop file store (defaults to the platform data dir)
    pub data_dir: Option<PathBuf>,

    /// tracing filter directive, e.g. "info" or "taskboard=debug"
    pub log_level: String,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            lookup_base_url: "https://es.wikipedia.org/wiki/".to_string(),
            data_dir: None,
            log_level: "info".to_string(),
        }
    }
}

impl BoardConfig {
    /// Load configuration from the user config directory
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from `path`, writing the defaults there if the
    /// file does not exist yet.
    pub fn load_from(path: &Path) -> Result<Self> {
        let mut config = if path.exists() {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file {:?}", path))?;
            toml::from_str::<Self>(&content)
                .with_context(|| format!("Invalid config file {:?}", path))?
        } else {
            let default_config = Self::default();
            default_config.save_to(path)?;
            default_config
        };

        if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
            if !dir.is_empty() {
                config.data_dir = Some(PathBuf::from(dir));
            }
        }

        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;

        tracing::info!("Configuration saved to: {:?}", path);
        Ok(())
    }

    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        Ok(config_dir.join("taskboard").join("config.toml"))
    }

    /// Where the desktop build keeps its task list
    pub fn resolved_data_dir(&self) -> PathBuf {
        self.data_dir.clone().unwrap_or_else(|| {
            dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("taskboard")
        })
    }
}
