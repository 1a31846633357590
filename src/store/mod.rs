//! Preference store implementations.

mod memory;
mod preference_store;

#[cfg(feature = "json-store")]
mod json_file;

pub use memory::MemoryStore;
pub use preference_store::{PreferenceStore, StoreExt};

#[cfg(feature = "json-store")]
pub use json_file::JsonFileStore;
