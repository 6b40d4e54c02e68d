//! Error types for the helpers workspace.
//!
//! Every fallible helper returns [`Error`] through the [`Result`] alias.
//! All variants are recoverable; nothing here is meant to abort a process.

use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for all helper operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    // ═══════════════════════════════════════════════════════════════════════════
    // CACHE ERRORS
    // ═══════════════════════════════════════════════════════════════════════════

    /// The key has never been set, or was removed.
    #[error("key not found: {0}")]
    KeyNotFound(String),

    /// The key is present but its expiration instant has passed.
    #[error("key expired: {0}")]
    KeyExpired(String),

    /// The key is already present (expired entries count as present).
    #[error("key already exists: {0}")]
    KeyExists(String),

    // ═══════════════════════════════════════════════════════════════════════════
    // COLLECTION ERRORS
    // ═══════════════════════════════════════════════════════════════════════════

    /// An operation that needs at least one element got none.
    #[error("slice is empty")]
    EmptySlice,
}

impl Error {
    /// Returns true if the lookup found nothing usable.
    ///
    /// Most callers treat an expired key exactly like a missing one.
    pub fn is_miss(&self) -> bool {
        matches!(self, Error::KeyNotFound(_) | Error::KeyExpired(_))
    }

    /// Returns true if this error came from a cache operation.
    pub fn is_cache_error(&self) -> bool {
        matches!(
            self,
            Error::KeyNotFound(_) | Error::KeyExpired(_) | Error::KeyExists(_)
        )
    }

    /// Returns the key the error refers to, if any.
    pub fn key(&self) -> Option<&str> {
        match self {
            Error::KeyNotFound(key) | Error::KeyExpired(key) | Error::KeyExists(key) => Some(key),
            Error::EmptySlice => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::KeyExists("alice".into());
        assert_eq!(err.to_string(), "key already exists: alice");
        assert_eq!(Error::EmptySlice.to_string(), "slice is empty");
    }

    #[test]
    fn test_error_classification() {
        assert!(Error::KeyNotFound("a".into()).is_miss());
        assert!(Error::KeyExpired("a".into()).is_miss());
        assert!(!Error::KeyExists("a".into()).is_miss());
        assert!(!Error::EmptySlice.is_miss());

        assert!(Error::KeyExists("a".into()).is_cache_error());
        assert!(!Error::EmptySlice.is_cache_error());
    }

    #[test]
    fn test_error_key() {
        assert_eq!(Error::KeyExpired("bob".into()).key(), Some("bob"));
        assert_eq!(Error::EmptySlice.key(), None);
    }
}
