//! Centralized constants for file names, permissions, and formats.

/// Default store file, relative to the working directory.
pub const DEFAULT_STORE_FILE: &str = "store.json";

/// Schema version written into new stores.
pub const STORE_VERSION: u32 = 1;

/// Permission mode for the store file (it holds plaintext passwords).
pub const STORE_FILE_MODE: u32 = 0o600;

/// Permission mode for export files.
pub const EXPORT_FILE_MODE: u32 = 0o600;

/// Column header of CSV exports.
pub const CSV_HEADER: [&str; 4] = ["site", "username", "password", "last_updated"];
