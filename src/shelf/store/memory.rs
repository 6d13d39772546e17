use super::CatalogBackend;
use crate::error::{Result, ShelfError};
use std::cell::{Cell, RefCell};

/// In-memory catalog backend for testing and development.
/// Does NOT persist data.
///
/// Uses `RefCell` for interior mutability since shelf is single-threaded,
/// matching the `&self` signatures of [`CatalogBackend`].
#[derive(Default)]
pub struct MemBackend {
    content: RefCell<Option<String>>,
    writes: Cell<usize>,
    simulate_write_error: Cell<bool>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// A backend whose catalog already holds `content`.
    pub fn with_content(content: impl Into<String>) -> Self {
        Self {
            content: RefCell::new(Some(content.into())),
            ..Self::default()
        }
    }

    /// Current catalog text, `None` if it was never created.
    pub fn content(&self) -> Option<String> {
        self.content.borrow().clone()
    }

    /// Drop the catalog, as if the file had been deleted.
    pub fn remove_catalog(&self) {
        *self.content.borrow_mut() = None;
    }

    /// Number of successful `write_catalog` calls.
    pub fn writes(&self) -> usize {
        self.writes.get()
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.set(simulate);
    }
}

impl CatalogBackend for MemBackend {
    fn read_catalog(&self) -> Result<Option<String>> {
        Ok(self.content.borrow().clone())
    }

    fn create_catalog(&self) -> Result<()> {
        *self.content.borrow_mut() = Some(String::new());
        Ok(())
    }

    fn write_catalog(&self, content: &str) -> Result<()> {
        if self.simulate_write_error.get() {
            return Err(ShelfError::Io(std::io::Error::other("Simulated write error")));
        }
        *self.content.borrow_mut() = Some(content.to_string());
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }

    fn location(&self) -> String {
        "<memory>".to_string()
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::RecordData;

    /// Builds catalog JSON from `(id, title, author, year, status)` rows.
    pub fn catalog_json(rows: &[(u64, &str, &str, &str, &str)]) -> String {
        let data: Vec<RecordData> = rows
            .iter()
            .map(|(id, title, author, year, status)| RecordData {
                id: *id,
                title: title.to_string(),
                author: author.to_string(),
                year: year.to_string(),
                status: status.to_string(),
            })
            .collect();
        serde_json::to_string_pretty(&data).unwrap()
    }

    pub fn backend_with(rows: &[(u64, &str, &str, &str, &str)]) -> MemBackend {
        MemBackend::with_content(catalog_json(rows))
    }
}
