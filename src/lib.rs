//! # prefwatch
//!
//! Typed key-value preference store with reactive change observation.
//!
//! ## Overview
//!
//! `prefwatch` provides a small settings layer that combines:
//! - A string-keyed store of five scalar kinds (text, int, bool, float, long)
//! - Typed accessors dispatched by the caller's default value
//! - Lock-free reads using `arc-swap`
//! - Per-key change observation as a buffered value stream
//!
//! ## Quick Start
//!
//! ```rust
//! use prefwatch::prelude::*;
//! use std::sync::Arc;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> prefwatch::error::Result<()> {
//! let store = Arc::new(MemoryStore::new());
//!
//! // Typed writes and reads; missing keys fall back to the default.
//! store.set("dark_mode", true)?;
//! assert!(store.get("dark_mode", false)?);
//! assert_eq!(store.get("volume", 0.5f32)?, 0.5);
//!
//! // Observe a key: pre-existing values are emitted immediately, each
//! // later write to that key is delivered in order.
//! let mut sub = observe(&store, "dark_mode", false);
//! assert_eq!(sub.recv().await, Some(true));
//!
//! store.set("dark_mode", false)?;
//! assert_eq!(sub.recv().await, Some(false));
//! # Ok(())
//! # }
//! ```
//!
//! ## Features
//!
//! - **Lock-free reads**: stores keep an immutable map snapshot behind
//!   `arc-swap`; readers never block writers
//! - **Typed access**: the default value picks the accessor, a stored-kind
//!   mismatch is a hard error rather than a silent coercion
//! - **Reactive observation**: [`notify::observe`] bridges store change
//!   callbacks into an unbounded-buffered per-key stream
//! - **Reactive state**: [`core::PrefState`] holds a key's current value
//!   behind a lock-free handle, updated by a background task
//! - **Persistence** (feature `json-store`, default): [`store::JsonFileStore`]
//!   persists the map to a JSON file on every write
//!
//! ## Feature Flags
//!
//! ```toml
//! [dependencies]
//! prefwatch = { version = "0.1", default-features = false }
//! ```
//!
//! Disable default features to drop the file-backed store and the
//! `serde_json` dependency.

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod core;
pub mod error;
pub mod notify;
pub mod store;

/// Convenient re-exports for common usage patterns.
pub mod prelude {
    pub use crate::core::{Kind, PrefScalar, PrefState, PrefValue};
    pub use crate::error::{PrefError, Result};
    pub use crate::notify::{observe, Subscription};
    pub use crate::store::{MemoryStore, PreferenceStore, StoreExt};

    #[cfg(feature = "json-store")]
    pub use crate::store::JsonFileStore;
}
