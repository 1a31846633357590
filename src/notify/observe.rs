//! The listener-to-stream bridge behind [`observe`].

use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::warn;

use crate::core::PrefScalar;
use crate::store::{PreferenceStore, StoreExt};

/// Observe the value stored under `key`, typed by `default`.
///
/// Registers a change listener with the store and returns a
/// [`Subscription`] yielding the key's current value:
///
/// - if the key already holds a value, it is read and emitted immediately,
///   before any change notification is consumed;
/// - afterwards, each committed write to that exact key produces one
///   emission carrying the value read back at notification time; writes to
///   other keys are filtered out;
/// - emissions are buffered without bound, so the notifying thread never
///   waits on a slow consumer and delivery stays FIFO.
///
/// Dropping the subscription deregisters the listener exactly once. A write
/// that changed the key to a different value kind is skipped with a warning
/// rather than terminating the subscription.
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
/// store.set("dark_mode", true)?;
///
/// let mut sub = observe(&store, "dark_mode", false);
/// assert_eq!(sub.recv().await, Some(true)); // pre-existing value
///
/// store.set("dark_mode", false)?;
/// assert_eq!(sub.recv().await, Some(false));
/// # Ok(())
/// # }
/// ```
pub fn observe<T, S>(store: &Arc<S>, key: &str, default: T) -> Subscription<T>
where
    T: PrefScalar,
    S: PreferenceStore + ?Sized + 'static,
{
    let (tx, rx) = mpsc::unbounded_channel();

    let reader = Arc::clone(store);
    let observed = key.to_string();
    let fallback = default.clone();
    let emit = tx.clone();
    let id = store.register_listener(Box::new(move |changed: &str| {
        if changed != observed {
            return;
        }
        match reader.get(&observed, fallback.clone()) {
            // Send only fails once the receiver is gone; nothing to do then.
            Ok(value) => {
                let _ = emit.send(value);
            }
            Err(err) => warn!(key = %observed, %err, "skipping emission of mismatched value kind"),
        }
    }));

    // Initial emission for a pre-existing value. The listener is already
    // live, so a write racing this read may be delivered first; both carry
    // the value current at their own read time.
    if store.contains(key) {
        match store.get(key, default) {
            Ok(value) => {
                let _ = tx.send(value);
            }
            Err(err) => warn!(key, %err, "skipping initial emission of mismatched value kind"),
        }
    }

    let unregister = {
        let store = Arc::clone(store);
        Box::new(move || store.unregister_listener(id))
    };

    Subscription {
        guard: ListenerGuard {
            unregister: Some(unregister),
        },
        rx,
    }
}

/// Deregisters the store listener on drop, exactly once.
struct ListenerGuard {
    unregister: Option<Box<dyn FnOnce() + Send + Sync>>,
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        if let Some(unregister) = self.unregister.take() {
            unregister();
        }
    }
}

/// A live observation of one preference key.
///
/// Produced by [`observe`]. Values arrive in write order; drop the
/// subscription to deregister the underlying store listener. No emission is
/// delivered after the drop completes (a notification racing teardown is
/// dropped).
pub struct Subscription<T> {
    // Declared before `rx` so deregistration happens before the channel
    // closes.
    guard: ListenerGuard,
    rx: mpsc::UnboundedReceiver<T>,
}

impl<T> Subscription<T> {
    /// Wait for the next emission.
    ///
    /// The registered listener keeps the store alive for as long as the
    /// subscription exists, so this pends until the observed key changes.
    pub async fn recv(&mut self) -> Option<T> {
        self.rx.recv().await
    }

    /// Take the next buffered emission without waiting.
    pub fn try_recv(&mut self) -> std::result::Result<T, mpsc::error::TryRecvError> {
        self.rx.try_recv()
    }
}

impl<T> std::fmt::Debug for Subscription<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("open", &self.guard.unregister.is_some())
            .finish()
    }
}
