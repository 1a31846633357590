//! Error types for prefwatch.

use crate::core::Kind;

/// Result type alias for prefwatch operations.
pub type Result<T> = std::result::Result<T, PrefError>;

/// Errors that can occur when working with a preference store.
#[derive(Debug, thiserror::Error)]
pub enum PrefError {
    /// A key holds a value of a different kind than the one requested.
    ///
    /// This is a caller programming error (e.g. reading `"volume"` with an
    /// integer default after writing a float to it), not a recoverable
    /// runtime condition.
    #[error("Key '{key}' holds a {found} value, expected {expected}")]
    KindMismatch {
        /// The key that was read
        key: String,
        /// The kind implied by the caller's default value
        expected: Kind,
        /// The kind actually stored under the key
        found: Kind,
    },

    /// IO error while reading or writing a file-backed store.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to encode or decode the persisted preference map.
    #[cfg(feature = "json-store")]
    #[error("Failed to persist preferences: {0}")]
    Persist(String),
}
