//! Entry operations on an in-memory store.
//!
//! Mutations keep `metadata.count` equal to the number of entries and bump
//! `metadata.updated_at`; reads leave the store untouched. Callers persist
//! with [`crate::core::store::save`].

use crate::error::{Result, StoreError};
use crate::models::entry::{Entry, EntryRow};
use crate::models::store_file::StoreFile;
use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::Serialize;
use tracing::info;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum SortKey {
    #[default]
    Site,
    #[value(name = "last_updated", alias = "last-updated")]
    LastUpdated,
}

/// Which fields an update touched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UpdatedFields {
    pub username: bool,
    pub password: bool,
}

impl UpdatedFields {
    pub fn names(&self) -> Vec<&'static str> {
        let mut names = Vec::new();
        if self.username {
            names.push("username");
        }
        if self.password {
            names.push("password");
        }
        names
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stats {
    pub entries_count: usize,
    pub oldest: Option<DateTime<Utc>>,
    pub newest: Option<DateTime<Utc>>,
    pub avg_password_length: f64,
}

fn require_non_empty(field: &'static str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(StoreError::EmptyField(field));
    }
    Ok(())
}

impl StoreFile {
    fn touch(&mut self, now: DateTime<Utc>) {
        self.metadata.count = self.entries.len();
        self.metadata.updated_at = now;
    }

    pub fn add(&mut self, site: &str, username: &str, password: &str, now: DateTime<Utc>) -> Result<()> {
        require_non_empty("site", site)?;
        require_non_empty("username", username)?;
        require_non_empty("password", password)?;
        if self.entries.contains_key(site) {
            return Err(StoreError::DuplicateSite(site.to_string()));
        }
        self.entries.insert(
            site.to_string(),
            Entry {
                username: username.to_string(),
                password: password.to_string(),
                last_updated: now,
            },
        );
        self.touch(now);
        info!(site, "added entry");
        Ok(())
    }

    pub fn get(&self, site: &str) -> Result<&Entry> {
        self.entries
            .get(site)
            .ok_or_else(|| StoreError::NotFound(site.to_string()))
    }

    pub fn update(
        &mut self,
        site: &str,
        username: Option<&str>,
        password: Option<&str>,
        now: DateTime<Utc>,
    ) -> Result<UpdatedFields> {
        if username.is_none() && password.is_none() {
            return Err(StoreError::NoFieldsProvided);
        }
        if !self.entries.contains_key(site) {
            return Err(StoreError::NotFound(site.to_string()));
        }
        if let Some(username) = username {
            require_non_empty("username", username)?;
        }
        if let Some(password) = password {
            require_non_empty("password", password)?;
        }
        let entry = self
            .entries
            .get_mut(site)
            .ok_or_else(|| StoreError::NotFound(site.to_string()))?;

        let mut changed = UpdatedFields::default();
        if let Some(username) = username {
            entry.username = username.to_string();
            changed.username = true;
        }
        if let Some(password) = password {
            entry.password = password.to_string();
            changed.password = true;
        }
        entry.last_updated = now;
        self.touch(now);
        info!(site, fields = ?changed.names(), "updated entry");
        Ok(changed)
    }

    pub fn delete(&mut self, site: &str, now: DateTime<Utc>) -> Result<Entry> {
        let removed = self
            .entries
            .shift_remove(site)
            .ok_or_else(|| StoreError::NotFound(site.to_string()))?;
        self.touch(now);
        info!(site, "deleted entry");
        Ok(removed)
    }

    pub fn list(&self, sort: SortKey) -> Vec<EntryRow> {
        let mut rows: Vec<EntryRow> = self.entries.iter().map(to_row).collect();
        match sort {
            SortKey::Site => rows.sort_by(|a, b| a.site.cmp(&b.site)),
            SortKey::LastUpdated => rows.sort_by(|a, b| {
                a.last_updated
                    .cmp(&b.last_updated)
                    .then_with(|| a.site.cmp(&b.site))
            }),
        }
        rows
    }

    /// Case-insensitive substring match over site and username, sorted by site.
    pub fn search(&self, keyword: &str) -> Vec<EntryRow> {
        if keyword.is_empty() {
            return Vec::new();
        }
        let needle = keyword.to_lowercase();
        let mut rows: Vec<EntryRow> = self
            .entries
            .iter()
            .filter(|(site, entry)| {
                site.to_lowercase().contains(&needle)
                    || entry.username.to_lowercase().contains(&needle)
            })
            .map(to_row)
            .collect();
        rows.sort_by(|a, b| a.site.cmp(&b.site));
        rows
    }

    pub fn stats(&self) -> Stats {
        let total = self.entries.len();
        if total == 0 {
            return Stats {
                entries_count: 0,
                oldest: None,
                newest: None,
                avg_password_length: 0.0,
            };
        }
        let oldest = self.entries.values().map(|e| e.last_updated).min();
        let newest = self.entries.values().map(|e| e.last_updated).max();
        let chars: usize = self
            .entries
            .values()
            .map(|e| e.password.chars().count())
            .sum();
        let avg = chars as f64 / total as f64;
        Stats {
            entries_count: total,
            oldest,
            newest,
            avg_password_length: (avg * 10.0).round() / 10.0,
        }
    }
}

fn to_row((site, entry): (&String, &Entry)) -> EntryRow {
    EntryRow {
        site: site.clone(),
        username: entry.username.clone(),
        last_updated: entry.last_updated,
    }
}
