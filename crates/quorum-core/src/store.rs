//! Track-record persistence: a single slot holding the full ordered list.
//!
//! The store is deliberately wholesale: read everything at mount, rewrite
//! everything on each mutation. Screens own the list shape (ordering,
//! dedup-by-id); the store only serializes it.

use crate::types::TrackRecordItem;
use std::path::Path;
use std::sync::Mutex;
use thiserror::Error;

const RECORD_TREE: &str = "track_record";
const RECORD_KEY: &str = "entries";

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("store open/access failed: {0}")]
    Backend(#[from] sled::Error),
    #[error("stored list is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// Repository seam for the track-record list. Implemented by the sled store
/// in production and an in-memory store in tests.
pub trait TrackRecordStore: Send + Sync {
    /// Full ordered list; empty when nothing was ever saved.
    fn load_all(&self) -> Result<Vec<TrackRecordItem>, StoreError>;

    /// Replace the stored list wholesale.
    fn save_all(&self, items: &[TrackRecordItem]) -> Result<(), StoreError>;
}

/// sled-backed store: one key in one tree, JSON-serialized list.
pub struct SledTrackRecordStore {
    db: sled::Db,
}

impl SledTrackRecordStore {
    /// Open (or create) the store at `path`, e.g. `./data/quorum_track_record`.
    pub fn open_path(path: &Path) -> Result<Self, StoreError> {
        let db = sled::open(path)?;
        Ok(Self { db })
    }
}

impl TrackRecordStore for SledTrackRecordStore {
    fn load_all(&self) -> Result<Vec<TrackRecordItem>, StoreError> {
        let tree = self.db.open_tree(RECORD_TREE)?;
        match tree.get(RECORD_KEY)? {
            Some(bytes) => Ok(serde_json::from_slice(&bytes)?),
            None => Ok(Vec::new()),
        }
    }

    fn save_all(&self, items: &[TrackRecordItem]) -> Result<(), StoreError> {
        let tree = self.db.open_tree(RECORD_TREE)?;
        let bytes = serde_json::to_vec(items)?;
        tree.insert(RECORD_KEY, bytes)?;
        tree.flush()?;
        Ok(())
    }
}

/// In-memory store for tests and ephemeral sessions.
#[derive(Default)]
pub struct MemoryTrackRecordStore {
    items: Mutex<Vec<TrackRecordItem>>,
}

impl TrackRecordStore for MemoryTrackRecordStore {
    fn load_all(&self) -> Result<Vec<TrackRecordItem>, StoreError> {
        Ok(self.items.lock().expect("store lock").clone())
    }

    fn save_all(&self, items: &[TrackRecordItem]) -> Result<(), StoreError> {
        *self.items.lock().expect("store lock") = items.to_vec();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_items() -> Vec<TrackRecordItem> {
        vec![
            TrackRecordItem::new("Tech Ltd", "Chaired cyber-risk deep dive", "Technology"),
            TrackRecordItem::new("Green Energy Co", "Pushed Scope 3 disclosure", "ESG"),
        ]
    }

    #[test]
    fn sled_store_round_trips_ordered_list() {
        let dir = tempfile::tempdir().unwrap();
        let store = SledTrackRecordStore::open_path(&dir.path().join("records")).unwrap();
        assert!(store.load_all().unwrap().is_empty());

        let items = sample_items();
        store.save_all(&items).unwrap();
        assert_eq!(store.load_all().unwrap(), items);
    }

    #[test]
    fn save_is_wholesale_replacement() {
        let store = MemoryTrackRecordStore::default();
        store.save_all(&sample_items()).unwrap();
        let solo = vec![TrackRecordItem::new("Solo Co", "One entry", "Governance")];
        store.save_all(&solo).unwrap();
        assert_eq!(store.load_all().unwrap(), solo);
    }

    #[test]
    fn corrupt_slot_surfaces_as_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("records");
        {
            let db = sled::open(&path).unwrap();
            db.open_tree(RECORD_TREE)
                .unwrap()
                .insert(RECORD_KEY, &b"not json"[..])
                .unwrap();
        }
        let store = SledTrackRecordStore::open_path(&path).unwrap();
        assert!(matches!(store.load_all(), Err(StoreError::Corrupt(_))));
    }
}
