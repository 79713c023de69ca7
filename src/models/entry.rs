use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One site's credential record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub username: String,
    pub password: String,
    pub last_updated: DateTime<Utc>,
}

/// A site paired with the listable part of its entry (no password).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryRow {
    pub site: String,
    pub username: String,
    pub last_updated: DateTime<Utc>,
}
