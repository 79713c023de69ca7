//! Store file model.

use crate::constants;
use crate::models::entry::Entry;
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreFile {
    pub metadata: StoreMetadata,
    pub entries: IndexMap<String, Entry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreMetadata {
    pub version: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub count: usize,
}

impl StoreFile {
    /// An empty store created at `now`.
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            metadata: StoreMetadata {
                version: constants::STORE_VERSION,
                created_at: now,
                updated_at: now,
                count: 0,
            },
            entries: IndexMap::new(),
        }
    }
}
