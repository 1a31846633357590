//! In-memory preference store with lock-free reads.

use arc_swap::ArcSwap;
use std::collections::HashMap;
use std::sync::Arc;

use crate::core::PrefValue;
use crate::error::Result;
use crate::notify::{ChangeListener, ListenerId, ListenerRegistry};
use crate::store::PreferenceStore;

type Snapshot = HashMap<String, PrefValue>;

/// In-memory preference store.
///
/// Reads load an immutable map snapshot through `arc-swap` and never block;
/// writes clone the snapshot, apply the mutation and swap it in atomically,
/// then notify listeners. Cloning the store is cheap and yields a handle to
/// the same underlying map and listener registry.
///
/// # Examples
///
/// ```rust
/// use prefwatch::prelude::*;
///
/// # fn example() -> prefwatch::error::Result<()> {
/// let store = MemoryStore::new();
/// store.set("username", "ada".to_string())?;
///
/// assert!(store.contains("username"));
/// assert_eq!(store.get("username", String::new())?, "ada");
/// # Ok(())
/// # }
/// # example().unwrap();
/// ```
pub struct MemoryStore {
    map: Arc<ArcSwap<Snapshot>>,
    listeners: ListenerRegistry,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            map: Arc::new(ArcSwap::from_pointee(Snapshot::new())),
            listeners: ListenerRegistry::new(),
        }
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.map.load().len()
    }

    /// Whether the store holds no keys.
    pub fn is_empty(&self) -> bool {
        self.map.load().is_empty()
    }

    fn mutate(&self, apply: impl Fn(&mut Snapshot)) {
        self.map.rcu(|current| {
            let mut next = (**current).clone();
            apply(&mut next);
            next
        });
    }
}

impl PreferenceStore for MemoryStore {
    fn value(&self, key: &str) -> Option<PrefValue> {
        self.map.load().get(key).cloned()
    }

    fn set_value(&self, key: &str, value: PrefValue) -> Result<()> {
        self.mutate(|map| {
            map.insert(key.to_string(), value.clone());
        });
        self.listeners.notify(key);
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let existed = self.contains(key);
        self.mutate(|map| {
            map.remove(key);
        });
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

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for MemoryStore {
    fn clone(&self) -> Self {
        Self {
            map: Arc::clone(&self.map),
            listeners: self.listeners.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Kind;
    use crate::error::PrefError;
    use crate::store::StoreExt;
    use proptest::prelude::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_missing_key_returns_default() {
        let store = MemoryStore::new();
        assert_eq!(store.get("absent", 7i32).unwrap(), 7);
        assert!(!store.contains("absent"));
    }

    #[test]
    fn test_set_then_get() {
        let store = MemoryStore::new();
        store.set("count", 41i32).unwrap();
        store.set("count", 42i32).unwrap();
        assert_eq!(store.get("count", 0i32).unwrap(), 42);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_kind_mismatch_is_an_error() {
        let store = MemoryStore::new();
        store.set("volume", 0.8f32).unwrap();

        let err = store.get("volume", 0i32).unwrap_err();
        match err {
            PrefError::KindMismatch {
                key,
                expected,
                found,
            } => {
                assert_eq!(key, "volume");
                assert_eq!(expected, Kind::Int);
                assert_eq!(found, Kind::Float);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_remove() {
        let store = MemoryStore::new();
        store.set("tmp", true).unwrap();
        store.remove("tmp").unwrap();
        assert!(!store.contains("tmp"));
        assert!(store.is_empty());
    }

    #[test]
    fn test_write_notifies_with_key() {
        let store = MemoryStore::new();
        let count = Arc::new(AtomicUsize::new(0));

        let count_clone = Arc::clone(&count);
        store.register_listener(Box::new(move |key| {
            assert_eq!(key, "theme");
            count_clone.fetch_add(1, Ordering::SeqCst);
        }));

        store.set("theme", "dark".to_string()).unwrap();
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_remove_missing_key_does_not_notify() {
        let store = MemoryStore::new();
        let count = Arc::new(AtomicUsize::new(0));

        let count_clone = Arc::clone(&count);
        store.register_listener(Box::new(move |_| {
            count_clone.fetch_add(1, Ordering::SeqCst);
        }));

        store.remove("never_set").unwrap();
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_clone_shares_state() {
        let store = MemoryStore::new();
        let store2 = store.clone();

        store.set("shared", 1i64).unwrap();
        assert_eq!(store2.get("shared", 0i64).unwrap(), 1);
    }

    fn any_pref_value() -> impl Strategy<Value = PrefValue> {
        prop_oneof![
            any::<String>().prop_map(PrefValue::Text),
            any::<i32>().prop_map(PrefValue::Int),
            any::<bool>().prop_map(PrefValue::Bool),
            (-1.0e6f32..1.0e6f32).prop_map(PrefValue::Float),
            any::<i64>().prop_map(PrefValue::Long),
        ]
    }

    proptest! {
        #[test]
        fn prop_raw_round_trip(key in "[a-z_]{1,16}", value in any_pref_value()) {
            let store = MemoryStore::new();
            store.set_value(&key, value.clone()).unwrap();
            prop_assert_eq!(store.value(&key), Some(value));
        }
    }
}
