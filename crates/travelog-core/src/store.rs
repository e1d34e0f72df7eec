//! Entry store: the journal's collection serialized under one key.
//!
//! Every operation goes back to the backend (load, mutate, save), so the
//! store never holds a cached copy that could drift from what is persisted.

use tracing::debug;

use crate::clock::allocate_id;
use crate::error::{JournalError, Result};
use crate::storage::{Entry, EntryId, KeyValueStore};

/// Key the collection is stored under.
pub const STORAGE_KEY: &str = "travelEntries";

/// Result of a lenient load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Loaded {
    /// Entries in storage (insertion) order
    pub entries: Vec<Entry>,
    /// Set when stored data was unreadable and treated as empty
    pub warning: Option<String>,
}

/// Load/save/add/remove over a key/value backend.
#[derive(Debug)]
pub struct EntryStore<S> {
    backend: S,
}

impl<S: KeyValueStore> EntryStore<S> {
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    /// Load the collection, failing on unreadable data.
    ///
    /// # Errors
    ///
    /// Returns `JournalError::MalformedPersistedData` if the stored blob is
    /// not a JSON array of entries, or `JournalError::Storage` if the
    /// backend cannot be read.
    pub fn try_load(&self) -> Result<Vec<Entry>> {
        let Some(raw) = self.backend.get_item(STORAGE_KEY)? else {
            return Ok(Vec::new());
        };
        let entries: Vec<Entry> = serde_json::from_str(&raw)
            .map_err(|e| JournalError::MalformedPersistedData(e.to_string()))?;
        debug!(count = entries.len(), "entries loaded");
        Ok(entries)
    }

    /// Load the collection, treating unreadable data as empty.
    ///
    /// Backend I/O failures are still returned as errors; only malformed
    /// data is downgraded to a warning.
    pub fn load_lenient(&self) -> Result<Loaded> {
        match self.try_load() {
            Ok(entries) => Ok(Loaded {
                entries,
                warning: None,
            }),
            Err(JournalError::MalformedPersistedData(reason)) => {
                debug!(%reason, "stored entries are unreadable; starting from an empty list");
                Ok(Loaded {
                    entries: Vec::new(),
                    warning: Some(format!(
                        "Stored entries could not be read and were ignored ({})",
                        reason
                    )),
                })
            }
            Err(err) => Err(err),
        }
    }

    /// Load the collection; empty when nothing is stored or data is unreadable.
    pub fn load(&self) -> Result<Vec<Entry>> {
        Ok(self.load_lenient()?.entries)
    }

    /// Serialize `entries` and overwrite the stored blob.
    ///
    /// An empty collection removes the key instead, which loads the same way.
    pub fn save(&mut self, entries: &[Entry]) -> Result<()> {
        if entries.is_empty() {
            self.backend.remove_item(STORAGE_KEY)?;
            debug!("last entry removed; storage key cleared");
            return Ok(());
        }
        let raw = serde_json::to_string(entries)?;
        self.backend.set_item(STORAGE_KEY, &raw)?;
        debug!(count = entries.len(), "entries saved");
        Ok(())
    }

    /// Append `entry` to the stored collection.
    pub fn add(&mut self, entry: Entry) -> Result<()> {
        let mut entries = self.load()?;
        entries.push(entry);
        self.save(&entries)
    }

    /// Remove the entry with `id`.
    ///
    /// Returns `true` if an entry was removed. An unknown id leaves the
    /// collection as it was.
    pub fn remove(&mut self, id: EntryId) -> Result<bool> {
        let mut entries = self.load()?;
        let before = entries.len();
        entries.retain(|entry| entry.id != id);
        let removed = entries.len() != before;
        if removed {
            self.save(&entries)?;
        }
        debug!(id, removed, "entry removal");
        Ok(removed)
    }

    /// Id for an entry created at `now_millis`, unique within the collection.
    pub fn next_id(&self, now_millis: i64) -> Result<EntryId> {
        allocate_id(now_millis, &self.load()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    fn sample() -> Vec<Entry> {
        vec![
            Entry::new(1, "Kyoto", "2024-04-01").with_memo("temples\nmatcha"),
            Entry::new(2, "Osaka", "2024-04-03").with_image("data:image/png;base64,iVBORw0K"),
        ]
    }

    #[test]
    fn test_load_without_blob_is_empty() {
        let store = EntryStore::new(MemoryStorage::new());
        assert!(store.load().unwrap().is_empty());
        assert!(store.try_load().unwrap().is_empty());
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let mut store = EntryStore::new(MemoryStorage::new());
        let entries = sample();
        store.save(&entries).unwrap();
        assert_eq!(store.load().unwrap(), entries);
    }

    #[test]
    fn test_add_appends_in_insertion_order() {
        let mut store = EntryStore::new(MemoryStorage::new());
        store.add(Entry::new(5, "A", "2024-01-01")).unwrap();
        store.add(Entry::new(3, "B", "2024-01-02")).unwrap();

        let ids: Vec<_> = store.load().unwrap().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![5, 3]);
    }

    #[test]
    fn test_remove_only_matching_entry() {
        let mut store = EntryStore::new(MemoryStorage::new());
        store.save(&sample()).unwrap();

        assert!(store.remove(1).unwrap());

        let remaining = store.load().unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, 2);
    }

    #[test]
    fn test_removing_last_entry_clears_key() {
        let mut store = EntryStore::new(MemoryStorage::new());
        store.add(Entry::new(1, "Solo", "2024-01-01")).unwrap();

        assert!(store.remove(1).unwrap());

        assert!(store.backend().get_item(STORAGE_KEY).unwrap().is_none());
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let mut store = EntryStore::new(MemoryStorage::new());
        store.save(&sample()).unwrap();

        assert!(!store.remove(99).unwrap());
        assert_eq!(store.load().unwrap(), sample());
    }

    #[test]
    fn test_malformed_blob_loads_empty_with_warning() {
        let store = EntryStore::new(MemoryStorage::new().with_item(STORAGE_KEY, "{oops"));

        let loaded = store.load_lenient().unwrap();
        assert!(loaded.entries.is_empty());
        assert!(loaded.warning.is_some());
        assert!(matches!(
            store.try_load().unwrap_err(),
            JournalError::MalformedPersistedData(_)
        ));
    }

    #[test]
    fn test_wrong_shape_is_malformed() {
        let store = EntryStore::new(MemoryStorage::new().with_item(STORAGE_KEY, r#"{"id":1}"#));
        assert!(store.try_load().is_err());
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_next_id_avoids_collision() {
        let mut store = EntryStore::new(MemoryStorage::new());
        store.add(Entry::new(1_000, "A", "2024-01-01")).unwrap();
        assert_eq!(store.next_id(1_000).unwrap(), 1_001);
        assert_eq!(store.next_id(2_000).unwrap(), 2_000);
    }

    #[test]
    fn test_next_id_after_max_id_is_an_error() {
        let mut store = EntryStore::new(MemoryStorage::new());
        store.add(Entry::new(i64::MAX, "Edge", "2024-01-01")).unwrap();
        assert!(matches!(
            store.next_id(1_700_000_000_000),
            Err(JournalError::IdOverflow(i64::MAX))
        ));
    }
}
