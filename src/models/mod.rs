//! Data structures persisted in the store file.

pub mod entry;
pub mod store_file;
