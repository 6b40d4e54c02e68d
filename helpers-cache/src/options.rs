//! Per-call insertion options.

use std::time::{Duration, Instant};

use crate::entry::Expiry;

/// Options for a single `set` or `set_or_fail` call.
///
/// Without an explicit expiry the cache applies its default TTL.
///
/// ```rust
/// use std::time::{Duration, Instant};
/// use helpers_cache::SetOptions;
///
/// let opts = SetOptions::new().valid_until(Instant::now() + Duration::from_secs(5));
/// let forever = SetOptions::new().never_expires();
/// # let _ = (opts, forever);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SetOptions {
    expiry: Option<Expiry>,
}

impl SetOptions {
    /// Creates options that defer to the cache's default TTL.
    pub fn new() -> Self {
        Self::default()
    }

    /// Expires the entry at an absolute instant, ignoring the default TTL.
    ///
    /// The instant may already be in the past, which stores an entry that is
    /// expired from the start.
    pub fn valid_until(self, at: Instant) -> Self {
        self.expiry(Expiry::At(at))
    }

    /// Keeps the entry forever, ignoring the default TTL.
    pub fn never_expires(self) -> Self {
        self.expiry(Expiry::Never)
    }

    /// Sets the expiry explicitly.
    pub fn expiry(mut self, expiry: Expiry) -> Self {
        self.expiry = Some(expiry);
        self
    }

    /// Resolves the final expiry for an entry stored at `now`.
    pub(crate) fn resolve(&self, ttl: Duration, now: Instant) -> Expiry {
        self.expiry.unwrap_or_else(|| Expiry::after(ttl, now))
    }
}
