//! The store trait and its typed accessor extension.

use crate::core::{PrefScalar, PrefValue};
use crate::error::{PrefError, Result};
use crate::notify::{ChangeListener, ListenerId};

/// A string-keyed store of scalar preference values with key-level change
/// notification.
///
/// The trait is object-safe and works on the tagged [`PrefValue`]
/// representation; callers normally go through the typed accessors on
/// [`StoreExt`] instead. Implementations fire one change notification per
/// committed write, after the new value is visible to readers.
pub trait PreferenceStore: Send + Sync {
    /// Read the raw value stored under `key`, if any.
    fn value(&self, key: &str) -> Option<PrefValue>;

    /// Store `value` under `key` and notify listeners of the change.
    fn set_value(&self, key: &str, value: PrefValue) -> Result<()>;

    /// Remove `key` from the store; listeners are notified only if the key
    /// was present.
    fn remove(&self, key: &str) -> Result<()>;

    /// Whether the store currently holds a value for `key`.
    fn contains(&self, key: &str) -> bool;

    /// Register a change listener; it will be invoked with the changed key
    /// after every committed write, possibly from an arbitrary thread.
    fn register_listener(&self, listener: ChangeListener) -> ListenerId;

    /// Remove a listener registered with
    /// [`register_listener`](Self::register_listener).
    fn unregister_listener(&self, id: ListenerId);
}

/// Typed `get`/`set` over any [`PreferenceStore`].
///
/// The default value's type selects the accessor, mirroring the tagged
/// dispatch of [`PrefValue`] at the call site:
///
/// ```rust
/// use prefwatch::prelude::*;
///
/// # fn example() -> prefwatch::error::Result<()> {
/// let store = MemoryStore::new();
/// store.set("dark_mode", true)?;
///
/// assert!(store.get("dark_mode", false)?);
/// assert_eq!(store.get("volume", 0.5f32)?, 0.5); // missing key -> default
/// # Ok(())
/// # }
/// # example().unwrap();
/// ```
pub trait StoreExt: PreferenceStore {
    /// Read `key` as `T`, falling back to `default` when the key is absent.
    ///
    /// # Errors
    ///
    /// Returns [`PrefError::KindMismatch`] when the key holds a value of a
    /// different kind than `T`.
    fn get<T: PrefScalar>(&self, key: &str, default: T) -> Result<T> {
        match self.value(key) {
            None => Ok(default),
            Some(stored) => {
                let found = stored.kind();
                T::from_value(stored).ok_or_else(|| PrefError::KindMismatch {
                    key: key.to_string(),
                    expected: T::KIND,
                    found,
                })
            }
        }
    }

    /// Store `value` under `key`, firing one change notification.
    fn set<T: PrefScalar>(&self, key: &str, value: T) -> Result<()> {
        self.set_value(key, value.into_value())
    }
}

impl<S: PreferenceStore + ?Sized> StoreExt for S {}
