//! # Storage Layer
//!
//! Storage is split in two, the same way for the catalog and for ids:
//!
//! - A **backend** knows *where* bytes live. [`CatalogBackend`] reads and writes the raw
//!   catalog text; it knows nothing about JSON or records.
//! - A **store** knows *what* the bytes mean. [`catalog::CatalogStore`] parses the text
//!   into validated [`Record`](crate::model::Record)s, serializes them back, and wraps
//!   every mutation in a load → mutate → save transaction.
//!
//! ## Implementations
//!
//! - [`fs::FileBackend`]: production storage, a single `library.json` file
//! - [`memory::MemBackend`]: in-memory storage for tests, can simulate write failures
//! - [`counter::FileCounter`] / [`counter::MemoryCounter`]: id issuing
//!
//! ## Storage Format
//!
//! ```text
//! <data dir>/
//! ├── library.json   # JSON array of {id, title, author, year, status}, pretty-printed
//! ├── counter.txt    # last issued id, plain base-10 integer
//! └── config.json    # optional configuration
//! ```
//!
//! Both files are rewritten in full on every change, with no locking and no
//! write-then-rename. A crash mid-write can leave a truncated file behind.

use crate::error::{Result, ShelfError};
use std::path::Path;

pub mod catalog;
pub mod counter;
pub mod fs;
pub mod memory;

/// Raw I/O for the catalog document.
pub trait CatalogBackend {
    /// Read the whole catalog text. `Ok(None)` when it does not exist yet.
    fn read_catalog(&self) -> Result<Option<String>>;

    /// Create an empty catalog so later reads find it.
    fn create_catalog(&self) -> Result<()>;

    /// Replace the whole catalog text.
    fn write_catalog(&self, content: &str) -> Result<()>;

    /// Human readable location, used in messages and logs.
    fn location(&self) -> String;
}

/// Creates the directory `path` will live in, if it is missing.
pub(crate) fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent).map_err(ShelfError::Io)?;
        }
    }
    Ok(())
}
