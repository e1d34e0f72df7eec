//! File-backed key/value slot.
//!
//! The file holds one JSON object mapping keys to string values. Every
//! read goes to disk, so changes made by another process between commands
//! are picked up; every write replaces the file through a temp sibling.
//! A write over a file that no longer parses moves it aside to `<name>.bak`
//! and starts from an empty object.

use std::collections::BTreeMap;
use std::ffi::OsString;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::traits::KeyValueStore;
use crate::error::{JournalError, Result};
use crate::fs::write_replacing;

/// Key/value slot persisted as a JSON object file.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    /// Use the file at `path`. The file is created on first write.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_items(&self) -> Result<BTreeMap<String, String>> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(err) => return Err(err.into()),
        };
        if contents.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        serde_json::from_str(&contents).map_err(|e| {
            JournalError::MalformedPersistedData(format!("{}: {}", self.path.display(), e))
        })
    }

    /// Where a corrupt file is moved before it is replaced.
    pub fn backup_path(&self) -> PathBuf {
        let mut name = OsString::from(self.path.as_os_str());
        name.push(".bak");
        PathBuf::from(name)
    }

    /// Current items for a read-modify-write; a corrupt file is set aside.
    fn items_for_update(&self) -> Result<BTreeMap<String, String>> {
        match self.read_items() {
            Err(JournalError::MalformedPersistedData(reason)) => {
                let backup = self.backup_path();
                std::fs::rename(&self.path, &backup)?;
                warn!(
                    %reason,
                    backup = %backup.display(),
                    "unreadable storage file moved aside"
                );
                Ok(BTreeMap::new())
            }
            other => other,
        }
    }

    fn write_items(&self, items: &BTreeMap<String, String>) -> Result<()> {
        let contents = serde_json::to_vec_pretty(items)?;
        write_replacing(&self.path, &contents)?;
        debug!(path = %self.path.display(), keys = items.len(), "storage file written");
        Ok(())
    }
}

impl KeyValueStore for FileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_items()?.remove(key))
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        let mut items = self.items_for_update()?;
        items.insert(key.to_string(), value.to_string());
        self.write_items(&items)
    }

    fn remove_item(&mut self, key: &str) -> Result<()> {
        let mut items = self.items_for_update()?;
        if items.remove(key).is_some() {
            self.write_items(&items)?;
        }
        Ok(())
    }
}
