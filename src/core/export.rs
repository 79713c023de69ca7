//! Export of store entries to CSV or JSON.
//!
//! Rows follow the store's insertion order. The store file itself is never
//! touched.

use crate::constants;
use crate::error::{Result, StoreError};
use crate::models::store_file::StoreFile;
use crate::util::fs as store_fs;
use chrono::{DateTime, SecondsFormat, Utc};
use clap::ValueEnum;
use serde::Serialize;
use std::path::Path;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

#[derive(Debug, Serialize)]
struct ExportRow<'a> {
    site: &'a str,
    username: &'a str,
    password: &'a str,
    last_updated: DateTime<Utc>,
}

fn rows(store: &StoreFile) -> impl Iterator<Item = ExportRow<'_>> {
    store.entries.iter().map(|(site, entry)| ExportRow {
        site,
        username: &entry.username,
        password: &entry.password,
        last_updated: entry.last_updated,
    })
}

pub fn to_csv(store: &StoreFile) -> std::result::Result<Vec<u8>, csv::Error> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(constants::CSV_HEADER)?;
    for row in rows(store) {
        let last_updated = row.last_updated.to_rfc3339_opts(SecondsFormat::AutoSi, true);
        writer.write_record([row.site, row.username, row.password, last_updated.as_str()])?;
    }
    writer
        .into_inner()
        .map_err(|e| csv::Error::from(e.into_error()))
}

pub fn to_json(store: &StoreFile) -> serde_json::Result<Vec<u8>> {
    let rows: Vec<ExportRow<'_>> = rows(store).collect();
    let mut out = serde_json::to_vec_pretty(&rows)?;
    out.push(b'\n');
    Ok(out)
}

/// Write all entries to `out` in `format`. Returns the number of rows written.
///
/// `store_path` is the file `store` was loaded from; `out` must not resolve to it.
pub fn export(store: &StoreFile, format: ExportFormat, out: &Path, store_path: &Path) -> Result<usize> {
    let clobbers_store = store_fs::same_file(out, store_path)
        .map_err(|e| StoreError::io("resolve export path", out, e))?;
    if clobbers_store {
        return Err(StoreError::ExportOverwritesStore(out.to_path_buf()));
    }
    let content = match format {
        ExportFormat::Csv => to_csv(store).map_err(|e| StoreError::io("encode csv", out, e.into()))?,
        ExportFormat::Json => {
            to_json(store).map_err(|e| StoreError::io("encode json", out, e.into()))?
        }
    };
    store_fs::write_atomic(out, &content, constants::EXPORT_FILE_MODE)
        .map_err(|e| StoreError::io("write export", out, e))?;
    let written = store.entries.len();
    info!(path = %out.display(), rows = written, ?format, "exported entries");
    Ok(written)
}
