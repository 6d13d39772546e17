//! # Commands
//!
//! One module per operation. Each command takes plain Rust arguments, works against a
//! [`CatalogStore`](crate::store::catalog::CatalogStore) and returns a [`CmdResult`]:
//! the records it touched or listed, plus human readable messages for the UI to show.
//! Commands never print.

use crate::config::ShelfConfig;
use crate::error::Result;
use crate::model::Record;
use std::path::PathBuf;

pub mod add;
pub mod config;
pub mod helpers;
pub mod list;
pub mod remove;
pub mod search;
pub mod status;

#[derive(Debug, Clone)]
pub struct ShelfPaths {
    pub data_dir: PathBuf,
}

impl ShelfPaths {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn catalog_path(&self, config: &ShelfConfig) -> PathBuf {
        self.data_dir.join(&config.catalog_file)
    }

    pub fn counter_path(&self, config: &ShelfConfig) -> PathBuf {
        self.data_dir.join(&config.counter_file)
    }

    pub fn load_config(&self) -> Result<ShelfConfig> {
        ShelfConfig::load(&self.data_dir)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_records: Vec<Record>,
    pub listed_records: Vec<Record>,
    /// Shown above the listed records.
    pub heading: Option<String>,
    pub config: Option<ShelfConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_records(mut self, records: Vec<Record>) -> Self {
        self.affected_records = records;
        self
    }

    pub fn with_listed_records(mut self, records: Vec<Record>) -> Self {
        self.listed_records = records;
        self
    }

    pub fn with_heading(mut self, heading: impl Into<String>) -> Self {
        self.heading = Some(heading.into());
        self
    }

    pub fn with_config(mut self, config: ShelfConfig) -> Self {
        self.config = Some(config);
        self
    }
}
