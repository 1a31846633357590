//! Listener registry for key-level change notifications.

use parking_lot::Mutex;
use std::sync::Arc;
use tracing::debug;

/// A change callback, invoked with the key that changed.
pub type ChangeListener = Box<dyn Fn(&str) + Send + Sync>;

/// Identifier handed out by [`ListenerRegistry::register`].
///
/// Pass it back to [`ListenerRegistry::unregister`] to remove the listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(usize);

/// Internal registry state.
struct RegistryInner {
    listeners: Vec<(ListenerId, ChangeListener)>,
    next_id: usize,
}

/// Registry of change listeners for a preference store.
///
/// Stores call [`notify`](Self::notify) with the changed key after each
/// committed write; every registered callback sees every key and does its
/// own filtering. Callbacks run synchronously on the notifying thread while
/// the registry is locked, so they must be quick and must not re-enter the
/// registry.
pub struct ListenerRegistry {
    inner: Arc<Mutex<RegistryInner>>,
}

impl ListenerRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(RegistryInner {
                listeners: Vec::new(),
                next_id: 0,
            })),
        }
    }

    /// Register a change listener and return its id.
    pub fn register(&self, listener: ChangeListener) -> ListenerId {
        let mut inner = self.inner.lock();
        let id = ListenerId(inner.next_id);
        inner.next_id += 1;
        inner.listeners.push((id, listener));
        debug!(id = id.0, "change listener registered");
        id
    }

    /// Remove a previously registered listener.
    ///
    /// Unknown ids are ignored, so a second unregister for the same id is a
    /// no-op.
    pub fn unregister(&self, id: ListenerId) {
        let mut inner = self.inner.lock();
        inner.listeners.retain(|(lid, _)| *lid != id);
        debug!(id = id.0, "change listener unregistered");
    }

    /// Invoke every registered listener with the changed key, in
    /// registration order.
    pub fn notify(&self, key: &str) {
        let inner = self.inner.lock();
        for (_id, listener) in &inner.listeners {
            listener(key);
        }
    }

    /// Number of registered listeners.
    pub fn len(&self) -> usize {
        self.inner.lock().listeners.len()
    }

    /// Whether the registry has no listeners.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for ListenerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for ListenerRegistry {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}
