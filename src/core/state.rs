//! Current-value handle kept fresh by a background task.

use arc_swap::ArcSwap;
use std::sync::Arc;
use tokio::task::JoinHandle;

use crate::core::PrefScalar;
use crate::error::Result;
use crate::notify::observe;
use crate::store::{PreferenceStore, StoreExt};

/// The current value of one preference key as lock-free readable state.
///
/// `PrefState` resolves the key once at construction (stored value, or the
/// default when absent) and then keeps itself up to date by consuming an
/// [`observe`] subscription on a spawned task. [`get`](Self::get) loads the
/// latest snapshot without locking, which makes the handle suitable for
/// hot read paths such as a render loop. Dropping the handle aborts the
/// task and deregisters the store listener.
///
/// Must be constructed from within a tokio runtime.
///
/// # Examples
///
/// ```rust
/// use prefwatch::prelude::*;
/// use std::sync::Arc;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> prefwatch::error::Result<()> {
/// let store = Arc::new(MemoryStore::new());
/// let state = PrefState::new(&store, "dark_mode", false)?;
///
/// assert_eq!(*state.get(), false);
/// # Ok(())
/// # }
/// ```
pub struct PrefState<T> {
    current: Arc<ArcSwap<T>>,
    task: JoinHandle<()>,
}

impl<T: PrefScalar> PrefState<T> {
    /// Start tracking `key`, using `default` when the key has no value.
    ///
    /// # Errors
    ///
    /// Returns [`PrefError::KindMismatch`](crate::error::PrefError) when
    /// the key already holds a value of a different kind.
    pub fn new<S>(store: &Arc<S>, key: &str, default: T) -> Result<Self>
    where
        S: PreferenceStore + ?Sized + 'static,
    {
        let initial = store.get(key, default.clone())?;
        let mut sub = observe(store, key, default);

        let current = Arc::new(ArcSwap::from_pointee(initial));
        let writer = Arc::clone(&current);
        let task = tokio::spawn(async move {
            while let Some(value) = sub.recv().await {
                writer.store(Arc::new(value));
            }
        });

        Ok(Self { current, task })
    }

    /// Load the latest value. Lock-free.
    pub fn get(&self) -> Arc<T> {
        self.current.load_full()
    }
}

impl<T> Drop for PrefState<T> {
    fn drop(&mut self) {
        // Aborting drops the subscription, which deregisters the listener.
        self.task.abort();
    }
}
