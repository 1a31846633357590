//! Change notification: listener registry and the observe bridge.
//!
//! Stores push "key K changed" callbacks through a [`ListenerRegistry`];
//! [`observe`] adapts those callbacks into a buffered, per-key stream of
//! typed values.

pub mod observe;
pub mod registry;

pub use observe::{observe, Subscription};
pub use registry::{ChangeListener, ListenerId, ListenerRegistry};
