//! # Quick Notes Architecture
//!
//! Quick Notes is a **UI-agnostic note store**. The binary in this crate is one
//! presentation layer over it; a GUI or web front end would sit in the same
//! place and use the same types.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Presentation (main.rs, args.rs, render.rs)                 │
//! │  - Parses arguments, prompts, formats output                │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Editing & display (editor.rs, debounce.rs, view.rs)        │
//! │  - Debounced commits of buffered edits                      │
//! │  - Row model for the notes list                             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (store/notes.rs, filter.rs, id.rs)                    │
//! │  - Note collection + selection, write-through persistence   │
//! │  - Pure search/ordering                                     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage (store/backend.rs)                                 │
//! │  - StorageBackend key-value trait                           │
//! │  - FsBackend (production), MemBackend (testing)             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Failure Model
//!
//! Core operations never return errors. Unreadable or malformed records load
//! as an empty store, failed writes are logged through `tracing` and the
//! in-memory state carries on, and operations on unknown ids do nothing.
//! Errors ([`error::NotesError`]) only appear at the edges: configuration,
//! directory discovery and terminal I/O.
//!
//! ## Module Overview
//!
//! - [`store`]: `NotesStore` and the storage backends
//! - [`filter`]: query filtering and display order
//! - [`id`]: note id generation
//! - [`editor`]: debounced editing session
//! - [`debounce`]: the scheduled-value primitive behind it
//! - [`view`]: list rows for presentation layers
//! - [`model`]: `Note` and `NoteFields`
//! - [`clock`]: time source
//! - [`config`]: layered configuration
//! - [`error`]: error types

pub mod clock;
pub mod config;
pub mod debounce;
pub mod editor;
pub mod error;
pub mod filter;
pub mod id;
pub mod model;
pub mod store;
pub mod view;
