//! # Storage Layer
//!
//! Two pieces live here:
//!
//! - [`backend::StorageBackend`]: the durable key-value medium. It knows nothing
//!   about notes, only string keys and string values.
//! - [`notes::NotesStore`]: the in-memory note collection and selection, which
//!   writes through to a backend after every mutation.
//!
//! ## Implementations
//!
//! - [`fs_backend::FsBackend`]: one file per key inside a data directory,
//!   written atomically (temp file, then rename).
//! - [`mem_backend::MemBackend`]: in-memory, for tests. Can simulate write
//!   failures.
//!
//! ## Storage Layout
//!
//! ```text
//! <data dir>/
//! ├── quick-notes__v1         # JSON array of notes
//! ├── quick-notes__selected   # raw selected id, absent when nothing is selected
//! └── quicknotes.toml         # optional configuration
//! ```
//!
//! Both record names are configurable (see [`crate::config`]).

pub mod backend;
pub mod fs_backend;
pub mod mem_backend;
pub mod notes;

pub use backend::StorageBackend;
pub use notes::{NotesStore, StorageKeys};
