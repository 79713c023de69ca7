//! Typed failures of store operations.
//!
//! Each kind maps to its own process exit code so scripts can tell a missing
//! site from a corrupted file without parsing stderr.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store already exists at {}", .0.display())]
    AlreadyExists(PathBuf),

    #[error("entry for '{0}' already exists, use 'update' instead")]
    DuplicateSite(String),

    #[error("no entry found for '{0}'")]
    NotFound(String),

    #[error("nothing to update (provide --username and/or --password)")]
    NoFieldsProvided,

    #[error("{0} cannot be empty")]
    EmptyField(&'static str),

    #[error("refusing to export over the store file {}", .0.display())]
    ExportOverwritesStore(PathBuf),

    #[error("store file not found: {} (run 'init' first)", .0.display())]
    NotInitialized(PathBuf),

    #[error("malformed store {}: {reason}", path.display())]
    MalformedStore { path: PathBuf, reason: String },

    #[error("{action} {}: {source}", path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl StoreError {
    pub(crate) fn io(action: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StoreError::Io {
            action,
            path: path.into(),
            source,
        }
    }

    pub(crate) fn malformed(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        StoreError::MalformedStore {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Process exit code for this failure kind.
    pub fn exit_code(&self) -> i32 {
        match self {
            StoreError::AlreadyExists(_) => 3,
            StoreError::DuplicateSite(_) => 4,
            StoreError::NotFound(_) => 5,
            StoreError::NoFieldsProvided | StoreError::EmptyField(_) => 6,
            StoreError::NotInitialized(_) => 7,
            StoreError::MalformedStore { .. } => 8,
            StoreError::Io { .. } => 9,
            StoreError::ExportOverwritesStore(_) => 10,
        }
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;
