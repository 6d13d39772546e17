use crate::error::{Result, ShelfError};
use crate::model::Status;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_CATALOG_FILE: &str = "library.json";
const DEFAULT_COUNTER_FILE: &str = "counter.txt";

/// Keys accepted by [`ShelfConfig::get`] and [`ShelfConfig::set`].
pub const KEYS: [&str; 3] = ["catalog-file", "counter-file", "default-status"];

/// Configuration for shelf, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShelfConfig {
    /// Catalog file name, relative to the data directory
    #[serde(default = "default_catalog_file")]
    pub catalog_file: String,

    /// Id counter file name, relative to the data directory
    #[serde(default = "default_counter_file")]
    pub counter_file: String,

    /// Status given to newly added books
    #[serde(default = "default_status")]
    pub default_status: String,
}

fn default_catalog_file() -> String {
    DEFAULT_CATALOG_FILE.to_string()
}

fn default_counter_file() -> String {
    DEFAULT_COUNTER_FILE.to_string()
}

fn default_status() -> String {
    Status::default().label().to_string()
}

impl Default for ShelfConfig {
    fn default() -> Self {
        Self {
            catalog_file: default_catalog_file(),
            counter_file: default_counter_file(),
            default_status: default_status(),
        }
    }
}

impl ShelfConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(ShelfError::Io)?;
        let config: ShelfConfig =
            serde_json::from_str(&content).map_err(ShelfError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(ShelfError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(ShelfError::Serialization)?;
        fs::write(config_path, content).map_err(ShelfError::Io)?;
        Ok(())
    }

    /// The configured default status, parsed.
    pub fn status(&self) -> Result<Status> {
        Status::parse(&self.default_status)
            .map_err(|e| ShelfError::Config(format!("default-status: {}", e)))
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "catalog-file" => Some(self.catalog_file.clone()),
            "counter-file" => Some(self.counter_file.clone()),
            "default-status" => Some(self.default_status.clone()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "catalog-file" => self.catalog_file = file_name(key, value)?,
            "counter-file" => self.counter_file = file_name(key, value)?,
            "default-status" => {
                Status::parse(value).map_err(|e| ShelfError::Config(format!("{}: {}", key, e)))?;
                self.default_status = value.to_string();
            }
            other => {
                return Err(ShelfError::Config(format!(
                    "Unknown config key: {} (expected one of {})",
                    other,
                    KEYS.join(", ")
                )))
            }
        }
        Ok(())
    }
}

fn file_name(key: &str, value: &str) -> Result<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ShelfError::Config(format!("{} cannot be empty", key)));
    }
    Ok(value.to_string())
}
