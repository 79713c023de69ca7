//! Loading, validating, and saving the store file.

use crate::constants;
use crate::error::{Result, StoreError};
use crate::models::store_file::StoreFile;
use crate::util::fs as store_fs;
use chrono::{DateTime, Utc};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::debug;

/// Create a new empty store at `path`. Refuses to overwrite an existing file.
pub fn init(path: &Path, now: DateTime<Utc>) -> Result<StoreFile> {
    if path.exists() {
        return Err(StoreError::AlreadyExists(path.to_path_buf()));
    }
    let store = StoreFile::new(now);
    save(path, &store)?;
    debug!(path = %path.display(), "initialized store");
    Ok(store)
}

pub fn load(path: &Path) -> Result<StoreFile> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(StoreError::NotInitialized(path.to_path_buf()))
        }
        Err(e) if e.kind() == ErrorKind::InvalidData => {
            return Err(StoreError::malformed(path, e.to_string()))
        }
        Err(e) => return Err(StoreError::io("read store", path, e)),
    };
    let store: StoreFile =
        serde_json::from_str(&content).map_err(|e| StoreError::malformed(path, e.to_string()))?;
    validate(&store).map_err(|reason| StoreError::malformed(path, reason))?;
    debug!(path = %path.display(), entries = store.entries.len(), "loaded store");
    Ok(store)
}

/// Structural checks the typed decode cannot express.
fn validate(store: &StoreFile) -> std::result::Result<(), String> {
    if store.metadata.count != store.entries.len() {
        return Err(format!(
            "metadata.count is {} but {} entries are present",
            store.metadata.count,
            store.entries.len()
        ));
    }
    if store.entries.keys().any(|site| site.is_empty()) {
        return Err("entry with empty site name".to_string());
    }
    Ok(())
}

/// Persist the whole document, replacing the previous file atomically.
pub fn save(path: &Path, store: &StoreFile) -> Result<()> {
    let mut content = serde_json::to_string_pretty(store)
        .map_err(|e| StoreError::malformed(path, e.to_string()))?;
    content.push('\n');
    store_fs::write_atomic(path, content.as_bytes(), constants::STORE_FILE_MODE)
        .map_err(|e| StoreError::io("write store", path, e))?;
    debug!(path = %path.display(), entries = store.entries.len(), "saved store");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use tempfile::TempDir;

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(1_757_000_000 + secs, 0).unwrap()
    }

    #[test]
    fn test_init_writes_empty_store() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("store.json");
        init(&path, at(0)).unwrap();

        let store = load(&path).unwrap();
        assert_eq!(store.metadata.version, 1);
        assert_eq!(store.metadata.count, 0);
        assert_eq!(store.metadata.created_at, at(0));
        assert_eq!(store.metadata.updated_at, at(0));
        assert!(store.entries.is_empty());
    }

    #[test]
    fn test_init_refuses_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("store.json");
        fs::write(&path, "keep me").unwrap();

        let err = init(&path, at(0)).unwrap_err();
        assert!(matches!(err, StoreError::AlreadyExists(_)));
        assert_eq!(fs::read_to_string(&path).unwrap(), "keep me");
    }

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = load(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, StoreError::NotInitialized(_)));
    }

    #[test]
    fn test_load_invalid_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("store.json");
        fs::write(&path, "{not json").unwrap();
        assert!(matches!(
            load(&path).unwrap_err(),
            StoreError::MalformedStore { .. }
        ));
    }

    #[test]
    fn test_load_missing_metadata_field() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("store.json");
        fs::write(
            &path,
            r#"{"metadata":{"version":1,"created_at":"2025-09-04T14:00:00Z","count":0},"entries":{}}"#,
        )
        .unwrap();
        let err = load(&path).unwrap_err();
        assert!(err.to_string().contains("updated_at"), "{}", err);
    }

    #[test]
    fn test_load_missing_entries_section() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("store.json");
        fs::write(
            &path,
            r#"{"metadata":{"version":1,"created_at":"2025-09-04T14:00:00Z","updated_at":"2025-09-04T14:00:00Z","count":0}}"#,
        )
        .unwrap();
        let err = load(&path).unwrap_err();
        assert!(matches!(err, StoreError::MalformedStore { .. }));
        assert!(err.to_string().contains("entries"), "{}", err);
    }

    #[test]
    fn test_load_non_utf8_content() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("store.json");
        fs::write(&path, [0x7b, 0xff, 0xfe, 0x7d]).unwrap();
        assert!(matches!(
            load(&path).unwrap_err(),
            StoreError::MalformedStore { .. }
        ));
    }

    #[test]
    fn test_load_count_mismatch() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("store.json");
        fs::write(
            &path,
            r#"{
  "metadata": {"version": 1, "created_at": "2025-09-04T14:00:00Z", "updated_at": "2025-09-04T14:00:00Z", "count": 2},
  "entries": {
    "github": {"username": "alice", "password": "mypass123", "last_updated": "2025-09-04T14:00:00Z"}
  }
}"#,
        )
        .unwrap();
        let err = load(&path).unwrap_err();
        assert!(matches!(err, StoreError::MalformedStore { .. }));
        assert!(err.to_string().contains("metadata.count is 2"));
    }

    #[test]
    fn test_load_accepts_whole_second_timestamps() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("store.json");
        fs::write(
            &path,
            r#"{
  "metadata": {"version": 1, "created_at": "2025-09-04T14:00:00Z", "updated_at": "2025-09-04T14:05:00Z", "count": 1},
  "entries": {
    "github": {"username": "alice", "password": "mypass123", "last_updated": "2025-09-04T14:05:00Z"}
  }
}"#,
        )
        .unwrap();
        let store = load(&path).unwrap();
        let entry = &store.entries["github"];
        assert_eq!(entry.username, "alice");
        assert_eq!(
            entry.last_updated,
            Utc.with_ymd_and_hms(2025, 9, 4, 14, 5, 0).unwrap()
        );
    }

    #[test]
    fn test_save_then_load_preserves_entry_order() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("store.json");
        let mut store = StoreFile::new(at(0));
        for site in ["zeta", "alpha", "mid"] {
            store.add(site, "user", "pw", at(1)).unwrap();
        }
        save(&path, &store).unwrap();

        let loaded = load(&path).unwrap();
        let sites: Vec<&str> = loaded.entries.keys().map(String::as_str).collect();
        assert_eq!(sites, vec!["zeta", "alpha", "mid"]);
        assert_eq!(loaded, store);
    }

    #[test]
    fn test_save_writes_timestamps_with_z_suffix() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("store.json");
        init(&path, at(0)).unwrap();
        let raw = fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        let created = value["metadata"]["created_at"].as_str().unwrap();
        assert!(created.ends_with('Z'), "{}", created);
        assert!(raw.contains("\n  \"metadata\""));
    }
}
