//! Local JSON credential store CLI.
//!
//! Keeps site credentials in a single plaintext JSON document and offers
//! CRUD, listing, search, export, and statistics over it. Educational use
//! only: passwords are not encrypted.
//!
//! ## Modules
//! - `cli` — Command-line handlers
//! - `core` — Store operations (load/save, entries, export)
//! - `models` — Data structures
//! - `util` — Filesystem and logging helpers

pub mod cli;
pub mod constants;
pub mod core;
pub mod error;
pub mod models;
pub mod util;
