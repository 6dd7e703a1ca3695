//! # Recipebox Architecture
//!
//! Recipebox is a **UI-agnostic recipe catalog library**. The command-line client in
//! `cli/` is one way to drive it; the same core could sit behind a web page or a TUI.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders templates, owns stdout/stderr  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Form Controller (form.rs) + API Layer (api.rs)             │
//! │  - Form state and the idle/editing mode flag                │
//! │  - Facade over commands, owns the page cursor               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - add, delete, update, get/view, search, list              │
//! │  - Operates on Rust types, returns `CmdResult`              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - RecipeStore: in-memory sequence mirrored to one key      │
//! │  - StorageBackend: FileBackend, MemoryBackend               │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No I/O Assumptions in Core
//!
//! From `api.rs` inward, code never writes to stdout/stderr and never exits the
//! process. Diagnostics go through `tracing`; user-facing outcomes travel back
//! as [`commands::CmdMessage`] values inside a [`commands::CmdResult`].
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`store`]: Recipe store and key-value backends
//! - [`model`]: Core data types (`Recipe`, `RecipeId`)
//! - [`pagination`]: Page slicing and the current-page cursor
//! - [`form`]: Form controller with explicit edit mode
//! - [`image`]: Image file to data URL conversion
//! - [`config`]: Configuration management
//! - [`init`]: Data directory resolution and context bootstrap
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod form;
pub mod image;
pub mod init;
pub mod model;
pub mod pagination;
pub mod store;
