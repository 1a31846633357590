//! File-backed preference store persisting the map as JSON.

use arc_swap::ArcSwap;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

use crate::core::PrefValue;
use crate::error::{PrefError, Result};
use crate::notify::{ChangeListener, ListenerId, ListenerRegistry};
use crate::store::PreferenceStore;

type Snapshot = HashMap<String, PrefValue>;

/// Preference store persisted to a single JSON file.
///
/// The full map lives in memory behind the same snapshot model as
/// [`MemoryStore`](crate::store::MemoryStore); reads never touch the disk.
/// Each write serializes the whole map back to the file before the new
/// snapshot becomes visible, so a reopened store always sees the last
/// committed write. Writers are serialized by a mutex; listeners are
/// notified after the swap, outside the writer lock.
pub struct JsonFileStore {
    path: PathBuf,
    map: Arc<ArcSwap<Snapshot>>,
    writer: Arc<Mutex<()>>,
    listeners: ListenerRegistry,
}

impl JsonFileStore {
    /// Open the store at `path`, loading any previously persisted map.
    ///
    /// A missing file yields an empty store; the file is created on the
    /// first write.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or is not a
    /// valid persisted preference map.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let map = if path.exists() {
            let raw = fs::read_to_string(&path)?;
            serde_json::from_str(&raw).map_err(|e| PrefError::Persist(e.to_string()))?
        } else {
            Snapshot::new()
        };
        debug!(path = %path.display(), keys = map.len(), "opened preference file");

        Ok(Self {
            path,
            map: Arc::new(ArcSwap::from_pointee(map)),
            writer: Arc::new(Mutex::new(())),
            listeners: ListenerRegistry::new(),
        })
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.map.load().len()
    }

    /// Whether the store holds no keys.
    pub fn is_empty(&self) -> bool {
        self.map.load().is_empty()
    }

    /// Apply a mutation, persist the result, then publish the new snapshot.
    fn mutate(&self, apply: impl FnOnce(&mut Snapshot)) -> Result<()> {
        let _guard = self.writer.lock();
        let mut next = (*self.map.load_full()).clone();
        apply(&mut next);

        let raw =
            serde_json::to_string_pretty(&next).map_err(|e| PrefError::Persist(e.to_string()))?;
        fs::write(&self.path, raw)?;

        self.map.store(Arc::new(next));
        Ok(())
    }
}

impl PreferenceStore for JsonFileStore {
    fn value(&self, key: &str) -> Option<PrefValue> {
        self.map.load().get(key).cloned()
    }

    fn set_value(&self, key: &str, value: PrefValue) -> Result<()> {
        self.mutate(|map| {
            map.insert(key.to_string(), value);
        })?;
        self.listeners.notify(key);
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let existed = self.contains(key);
        self.mutate(|map| {
            map.remove(key);
        })?;
        if existed {
            self.listeners.notify(key);
        }
        Ok(())
    }

    fn contains(&self, key: &str) -> bool {
        self.map.load().contains_key(key)
    }

    fn register_listener(&self, listener: ChangeListener) -> ListenerId {
        self.listeners.register(listener)
    }

    fn unregister_listener(&self, id: ListenerId) {
        self.listeners.unregister(id)
    }
}

impl std::fmt::Debug for JsonFileStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JsonFileStore")
            .field("path", &self.path)
            .field("keys", &self.map.load().len())
            .finish_non_exhaustive()
    }
}

impl Clone for JsonFileStore {
    fn clone(&self) -> Self {
        Self {
            path: self.path.clone(),
            map: Arc::clone(&self.map),
            writer: Arc::clone(&self.writer),
            listeners: self.listeners.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::StoreExt;
    use tempfile::TempDir;

    #[test]
    fn test_open_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::open(dir.path().join("prefs.json")).unwrap();
        assert!(store.is_empty());
        assert!(!store.path().exists());
    }

    #[test]
    fn test_writes_survive_reopen() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prefs.json");

        let store = JsonFileStore::open(&path).unwrap();
        store.set("dark_mode", true).unwrap();
        store.set("volume", 0.8f32).unwrap();
        store.set("uid", 12345i64).unwrap();
        drop(store);

        let reopened = JsonFileStore::open(&path).unwrap();
        assert_eq!(reopened.len(), 3);
        assert!(reopened.get("dark_mode", false).unwrap());
        assert_eq!(reopened.get("volume", 0.0f32).unwrap(), 0.8);
        assert_eq!(reopened.get("uid", 0i64).unwrap(), 12345);
    }

    #[test]
    fn test_remove_is_persisted() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prefs.json");

        let store = JsonFileStore::open(&path).unwrap();
        store.set("tmp", "x".to_string()).unwrap();
        store.remove("tmp").unwrap();
        drop(store);

        let reopened = JsonFileStore::open(&path).unwrap();
        assert!(!reopened.contains("tmp"));
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prefs.json");
        fs::write(&path, "not json at all {{").unwrap();

        let err = JsonFileStore::open(&path).unwrap_err();
        assert!(matches!(err, PrefError::Persist(_)));
    }
}
