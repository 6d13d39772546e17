//! Identifier counter.
//!
//! Ids come from an [`IdSource`] handed to whoever builds new records, so tests can
//! swap the file-backed [`FileCounter`] for a [`MemoryCounter`].
//!
//! `FileCounter` keeps a single base-10 integer in a text file. The first call creates
//! the file holding `0` and yields `0`; every later call reads `N`, writes `N + 1` and
//! yields `N + 1`. There is no locking: two processes drawing ids at the same time can
//! be handed the same value.

use super::ensure_parent;
use crate::error::{Result, ShelfError};
use std::fs;
use std::path::PathBuf;
use tracing::debug;

pub trait IdSource {
    /// Hand out the next identifier and persist the new counter value.
    fn next_id(&mut self) -> Result<u64>;
}

pub struct FileCounter {
    path: PathBuf,
}

impl FileCounter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn write_value(&self, value: u64) -> Result<()> {
        ensure_parent(&self.path)?;
        fs::write(&self.path, value.to_string()).map_err(ShelfError::Io)
    }
}

impl IdSource for FileCounter {
    fn next_id(&mut self) -> Result<u64> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "initializing id counter");
            self.write_value(0)?;
            return Ok(0);
        }

        let raw = fs::read_to_string(&self.path).map_err(ShelfError::Io)?;
        let current: u64 = raw.trim().parse().map_err(|_| {
            ShelfError::StorageCorrupt(format!(
                "counter file {} does not hold an integer: {:?}",
                self.path.display(),
                raw
            ))
        })?;
        let next = current.checked_add(1).ok_or_else(|| {
            ShelfError::StorageCorrupt(format!(
                "counter file {} is exhausted",
                self.path.display()
            ))
        })?;
        self.write_value(next)?;
        debug!(path = %self.path.display(), id = next, "issued id");
        Ok(next)
    }
}

/// In-memory counter for testing. Follows the same sequence as [`FileCounter`].
#[derive(Debug, Default)]
pub struct MemoryCounter {
    value: Option<u64>,
}

impl MemoryCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// A counter that already holds `value`; the next id will be `value + 1`.
    pub fn starting_at(value: u64) -> Self {
        Self { value: Some(value) }
    }

    pub fn current(&self) -> Option<u64> {
        self.value
    }
}

impl IdSource for MemoryCounter {
    fn next_id(&mut self) -> Result<u64> {
        let next = match self.value {
            None => 0,
            Some(n) => n
                .checked_add(1)
                .ok_or_else(|| ShelfError::StorageCorrupt("counter is exhausted".into()))?,
        };
        self.value = Some(next);
        Ok(next)
    }
}
