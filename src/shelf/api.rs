//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single entry
//! point for every shelf operation, whatever the UI.
//!
//! It dispatches to `commands/*.rs` and hands back `Result<CmdResult>`. It holds no
//! business logic and does no printing.
//!
//! ## Generic Over Storage
//!
//! `ShelfApi<B, C>` is generic over the catalog backend and the id source:
//! - Production: `ShelfApi<FileBackend, FileCounter>`, see [`ShelfApi::open`]
//! - Testing: `ShelfApi<MemBackend, MemoryCounter>`

use crate::commands;
use crate::error::Result;
use crate::model::Status;
use crate::store::catalog::CatalogStore;
use crate::store::counter::{FileCounter, IdSource};
use crate::store::fs::FileBackend;
use crate::store::CatalogBackend;

pub struct ShelfApi<B: CatalogBackend, C: IdSource> {
    store: CatalogStore<B>,
    ids: C,
    default_status: Status,
    paths: commands::ShelfPaths,
}

impl ShelfApi<FileBackend, FileCounter> {
    /// Wires the file-backed stores for a data directory, honouring its `config.json`.
    pub fn open(paths: commands::ShelfPaths) -> Result<Self> {
        let config = paths.load_config()?;
        let backend = FileBackend::new(paths.catalog_path(&config));
        let ids = FileCounter::new(paths.counter_path(&config));
        Ok(Self::new(backend, ids, paths).with_default_status(config.status()?))
    }

    /// Config commands for a data directory, without opening the stores. Works even
    /// when the current `config.json` names an unusable default status.
    pub fn configure(
        paths: &commands::ShelfPaths,
        action: ConfigAction,
    ) -> Result<commands::CmdResult> {
        commands::config::run(paths, action)
    }
}

impl<B: CatalogBackend, C: IdSource> ShelfApi<B, C> {
    pub fn new(backend: B, ids: C, paths: commands::ShelfPaths) -> Self {
        Self {
            store: CatalogStore::new(backend),
            ids,
            default_status: Status::default(),
            paths,
        }
    }

    pub fn with_default_status(mut self, status: Status) -> Self {
        self.default_status = status;
        self
    }

    pub fn add_book(
        &mut self,
        title: &str,
        author: &str,
        year: &str,
    ) -> Result<commands::CmdResult> {
        commands::add::run(
            &mut self.store,
            &mut self.ids,
            self.default_status.clone(),
            title,
            author,
            year,
        )
    }

    pub fn remove_book(&mut self, id: &str) -> Result<commands::CmdResult> {
        commands::remove::run(&mut self.store, id)
    }

    pub fn search_books(&mut self, query: &str) -> Result<commands::CmdResult> {
        commands::search::run(&mut self.store, query)
    }

    pub fn change_status(&mut self, id: &str, status: &str) -> Result<commands::CmdResult> {
        commands::status::run(&mut self.store, id, status)
    }

    pub fn list_books(&mut self) -> Result<commands::CmdResult> {
        commands::list::run(&mut self.store)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths, action)
    }

    pub fn paths(&self) -> &commands::ShelfPaths {
        &self.paths
    }

    pub fn store(&self) -> &CatalogStore<B> {
        &self.store
    }

    pub fn ids(&self) -> &C {
        &self.ids
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel, ShelfPaths};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ShelfError;
    use crate::store::counter::MemoryCounter;
    use crate::store::memory::fixtures::backend_with;
    use crate::store::memory::MemBackend;
    use tempfile::TempDir;

    fn api(backend: MemBackend) -> ShelfApi<MemBackend, MemoryCounter> {
        ShelfApi::new(backend, MemoryCounter::starting_at(5), ShelfPaths::new("."))
    }

    #[test]
    fn add_then_list() {
        let mut api = api(backend_with(&[(5, "T", "A", "2000", "в наличии")]));
        api.add_book("X", "Y", "2001").unwrap();

        let listed = api.list_books().unwrap().listed_records;
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].id(), 5);
        assert_eq!(listed[1].id(), 6);
        assert_eq!(api.ids().current(), Some(6));
    }

    #[test]
    fn default_status_applies_to_new_books() {
        let mut api = api(MemBackend::new())
            .with_default_status(Status::parse("checked out").unwrap());
        let result = api.add_book("X", "Y", "2001").unwrap();
        assert_eq!(result.affected_records[0].status().label(), "checked out");
    }

    #[test]
    fn dispatches_remove_search_and_status() {
        let mut api = api(backend_with(&[
            (5, "T", "A", "2000", "в наличии"),
            (6, "U", "B", "2000", "в наличии"),
        ]));

        assert_eq!(api.search_books("2000").unwrap().listed_records.len(), 2);
        api.change_status("6", "выдана").unwrap();
        api.remove_book("5").unwrap();
        assert!(matches!(api.remove_book("5"), Err(ShelfError::NotFound(5))));

        let listed = api.list_books().unwrap().listed_records;
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].status().label(), "выдана");
        assert_eq!(api.store().backend().writes(), 2);
    }

    #[test]
    fn open_uses_configured_file_names() {
        let dir = TempDir::new().unwrap();
        let paths = ShelfPaths::new(dir.path());
        let mut config = crate::config::ShelfConfig::default();
        config.set("catalog-file", "books.json").unwrap();
        config.set("counter-file", "ids.txt").unwrap();
        config.save(dir.path()).unwrap();

        let mut api = ShelfApi::open(paths).unwrap();
        api.add_book("X", "Y", "2001").unwrap();

        assert!(dir.path().join("books.json").exists());
        assert_eq!(std::fs::read_to_string(dir.path().join("ids.txt")).unwrap(), "1");
    }

    #[test]
    fn first_book_added_through_open_has_a_positive_id() {
        let dir = TempDir::new().unwrap();
        let added = ShelfApi::open(ShelfPaths::new(dir.path()))
            .unwrap()
            .add_book("Dune", "Herbert", "1965")
            .unwrap();
        assert_eq!(added.affected_records[0].id(), 1);

        let listed = ShelfApi::open(ShelfPaths::new(dir.path()))
            .unwrap()
            .list_books()
            .unwrap()
            .listed_records;
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id(), 1);
    }

    #[test]
    fn configure_works_without_opening_the_stores() {
        let dir = TempDir::new().unwrap();
        let paths = ShelfPaths::new(dir.path());

        ShelfApi::configure(&paths, ConfigAction::Set("catalog-file".into(), "books.json".into()))
            .unwrap();
        assert!(!dir.path().join("books.json").exists());

        let mut api = ShelfApi::open(paths).unwrap();
        let shown = api
            .config(ConfigAction::ShowKey("catalog-file".into()))
            .unwrap();
        assert_eq!(shown.messages[0].content, "books.json");
        assert_eq!(api.paths().data_dir, dir.path());

        api.add_book("X", "Y", "2001").unwrap();
        assert!(dir.path().join("books.json").exists());
    }
}
