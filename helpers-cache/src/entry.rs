//! Stored values and their expiration instants.

use std::time::{Duration, Instant};

/// When a cached value stops being valid.
///
/// Expiry is fixed when the entry is created and evaluated lazily against the
/// clock on every read. `Never` is distinct from an instant in the past.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Expiry {
    /// The entry never expires.
    #[default]
    Never,
    /// The entry expires once the clock moves past this instant.
    At(Instant),
}

impl Expiry {
    /// Computes the expiry for a value stored at `now` with the given TTL.
    ///
    /// A zero TTL yields [`Expiry::Never`]. So does a TTL too large to be
    /// represented as an instant.
    pub fn after(ttl: Duration, now: Instant) -> Self {
        if ttl.is_zero() {
            return Expiry::Never;
        }
        now.checked_add(ttl).map_or(Expiry::Never, Expiry::At)
    }

    /// Returns true if the expiry lies strictly before `now`.
    #[inline]
    pub fn is_expired(&self, now: Instant) -> bool {
        match self {
            Expiry::Never => false,
            Expiry::At(at) => now > *at,
        }
    }

    /// Returns the expiration instant, or `None` for entries that never expire.
    pub fn instant(&self) -> Option<Instant> {
        match self {
            Expiry::Never => None,
            Expiry::At(at) => Some(*at),
        }
    }
}

/// Cache entry: a value plus its expiry.
///
/// Entries are never mutated after creation; overwriting a key replaces the
/// whole entry.
#[derive(Clone, Debug)]
pub(crate) struct Entry<T> {
    value: T,
    expiry: Expiry,
}

impl<T> Entry<T> {
    pub(crate) fn new(value: T, expiry: Expiry) -> Self {
        Self { value, expiry }
    }

    pub(crate) fn value(&self) -> &T {
        &self.value
    }

    pub(crate) fn into_value(self) -> T {
        self.value
    }

    #[inline]
    pub(crate) fn is_expired(&self, now: Instant) -> bool {
        self.expiry.is_expired(now)
    }
}
