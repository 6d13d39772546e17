//! # Shelf Architecture
//!
//! Shelf is a small catalog for a home library: books with a title, an author, a
//! publication year and an availability status, kept in a JSON file next to an id
//! counter file. The library does the work; the `shelf` binary is a thin client.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (main.rs, args.rs)                                     │
//! │  - Parses arguments, prints results, owns exit codes        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API (api.rs)                                               │
//! │  - Thin facade, one method per operation                    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Commands (commands/*.rs)                                   │
//! │  - add, remove, search, status, list, config                │
//! │  - Return CmdResult: records plus messages, never print     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage (store/)                                           │
//! │  - CatalogStore: load / save / transaction                  │
//! │  - CatalogBackend: FileBackend, MemBackend                  │
//! │  - IdSource: FileCounter, MemoryCounter                     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Every Operation Reloads
//!
//! Nothing is cached between operations. Each one reads the whole catalog file,
//! changes the in-memory copy, and writes the whole file back. There is no locking,
//! so two processes editing the same catalog race and the last write wins.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`store`]: Catalog and id storage
//! - [`model`]: The validated [`model::Record`] and its [`model::Status`]
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
