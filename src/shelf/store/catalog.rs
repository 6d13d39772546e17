//! The catalog store: a transient, validated view of the catalog document.
//!
//! Every public operation starts from a fresh load. Nothing read in one operation is
//! reused by the next, so edits made to the file between operations are picked up.
//!
//! ## Unreadable documents
//!
//! A catalog that is not valid JSON is reported, not raised: reads see an empty
//! catalog and get [`LoadOutcome::Unreadable`]. Writes are refused with
//! [`ShelfError::StorageCorrupt`] instead of replacing the unreadable document with
//! whatever happened to be in memory. A document that parses but has the wrong shape,
//! or holds a record that fails validation, aborts the whole load.

use super::CatalogBackend;
use crate::error::{Result, ShelfError};
use crate::model::{Record, RecordData};
use serde::Serialize;
use serde_json::error::Category;
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The document was read; holds the number of records.
    Loaded(usize),
    /// There was no document. An empty one has been created.
    Missing,
    /// The document is not valid JSON. Nothing was read.
    Unreadable(String),
}

pub struct CatalogStore<B: CatalogBackend> {
    backend: B,
    records: Vec<Record>,
}

impl<B: CatalogBackend> CatalogStore<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            records: Vec::new(),
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Reads the document into the in-memory sequence.
    ///
    /// On [`LoadOutcome::Missing`] and [`LoadOutcome::Unreadable`] the sequence is left
    /// as it was.
    pub fn load(&mut self) -> Result<LoadOutcome> {
        let Some(text) = self.backend.read_catalog()? else {
            debug!(location = %self.backend.location(), "no catalog yet, creating one");
            self.backend.create_catalog()?;
            return Ok(LoadOutcome::Missing);
        };

        if text.trim().is_empty() {
            self.records.clear();
            return Ok(LoadOutcome::Loaded(0));
        }

        let data: Vec<RecordData> = match serde_json::from_str(&text) {
            Ok(data) => data,
            Err(e) => match e.classify() {
                Category::Syntax | Category::Eof => {
                    warn!(location = %self.backend.location(), error = %e, "catalog is not valid JSON");
                    return Ok(LoadOutcome::Unreadable(e.to_string()));
                }
                Category::Data => {
                    return Err(ShelfError::StorageCorrupt(format!(
                        "{}: {}",
                        self.backend.location(),
                        e
                    )));
                }
                Category::Io => return Err(ShelfError::Serialization(e)),
            },
        };

        let records = data
            .into_iter()
            .enumerate()
            .map(|(pos, entry)| {
                let id = entry.id;
                Record::from_data(entry).map_err(|e| {
                    ShelfError::StorageCorrupt(format!(
                        "{}: entry {} (id {}): {}",
                        self.backend.location(),
                        pos + 1,
                        id,
                        e
                    ))
                })
            })
            .collect::<Result<Vec<_>>>()?;

        debug!(location = %self.backend.location(), count = records.len(), "loaded catalog");
        self.records = records;
        Ok(LoadOutcome::Loaded(self.records.len()))
    }

    /// Writes the whole in-memory sequence as a pretty-printed JSON array.
    pub fn save(&self) -> Result<()> {
        let data: Vec<RecordData> = self.records.iter().map(Record::to_data).collect();
        let content = to_pretty_json(&data)?;
        self.backend.write_catalog(&content)
    }

    /// Starts an operation from an empty view and loads the document into it.
    pub fn refresh(&mut self) -> Result<LoadOutcome> {
        self.records.clear();
        self.load()
    }

    /// Load, mutate, save.
    ///
    /// The document is written only when `f` succeeds. An unreadable document is never
    /// overwritten.
    pub fn transaction<T>(
        &mut self,
        f: impl FnOnce(&mut Vec<Record>) -> Result<T>,
    ) -> Result<(LoadOutcome, T)> {
        let outcome = self.refresh()?;
        if let LoadOutcome::Unreadable(reason) = &outcome {
            return Err(ShelfError::StorageCorrupt(format!(
                "{} could not be read ({}); refusing to overwrite it",
                self.backend.location(),
                reason
            )));
        }
        let value = f(&mut self.records)?;
        self.save()?;
        Ok((outcome, value))
    }
}

fn to_pretty_json<T: Serialize>(value: &T) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value
        .serialize(&mut ser)
        .map_err(|e| ShelfError::StorageCorrupt(format!("could not encode catalog: {}", e)))?;
    String::from_utf8(buf)
        .map_err(|e| ShelfError::StorageCorrupt(format!("could not encode catalog: {}", e)))
}
