//! In-memory TTL cache keyed by strings.

use std::borrow::Borrow;
use std::collections::hash_map::{self, HashMap};
use std::time::{Duration, Instant};

use parking_lot::RwLock;
use tracing::{debug, instrument};

use helpers_core::error::{Error, Result};

use crate::config::CacheConfig;
use crate::entry::Entry;
use crate::options::SetOptions;

/// In-memory cache for values of a single type.
///
/// Thread-safe and supports TTL-based expiration. Expiration is lazy: an
/// expired entry stays in the map, reported as [`Error::KeyExpired`], until
/// [`delete`](Cache::delete), [`get_and_delete`](Cache::get_and_delete),
/// [`cleanup`](Cache::cleanup) or [`drain`](Cache::drain) removes it. There is
/// no background eviction; callers that want bounded memory run `cleanup`
/// on their own schedule.
///
/// # Thread Safety
///
/// A single readers-writer lock guards the map. Lookups share it, every
/// mutation takes it exclusively. Share a cache across threads with `Arc`.
pub struct Cache<T> {
    entries: RwLock<HashMap<String, Entry<T>>>,
    config: CacheConfig,
}

impl<T> Cache<T> {
    /// Creates a cache whose entries never expire by default.
    pub fn new() -> Self {
        Self::with_config(CacheConfig::default())
    }

    /// Creates a cache with custom configuration.
    pub fn with_config(config: CacheConfig) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            config,
        }
    }

    /// Creates a cache applying `ttl` to every entry without an explicit expiry.
    pub fn with_ttl(ttl: Duration) -> Self {
        Self::with_config(CacheConfig::new().with_ttl(ttl))
    }

    /// Returns the configuration the cache was built with.
    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    fn new_entry(&self, value: T, options: SetOptions) -> Entry<T> {
        Entry::new(value, options.resolve(self.config.ttl, Instant::now()))
    }

    /// Stores a value with the default TTL, replacing any existing entry.
    pub fn set(&self, key: impl Into<String>, value: T) -> Result<()> {
        self.set_with_options(key, value, SetOptions::default())
    }

    /// Stores a value, replacing any existing entry.
    pub fn set_with_options(
        &self,
        key: impl Into<String>,
        value: T,
        options: SetOptions,
    ) -> Result<()> {
        let entry = self.new_entry(value, options);
        self.entries.write().insert(key.into(), entry);
        Ok(())
    }

    /// Like [`set`](Cache::set), but fails with [`Error::KeyExists`] if the
    /// key is present.
    pub fn set_or_fail(&self, key: impl Into<String>, value: T) -> Result<()> {
        self.set_or_fail_with_options(key, value, SetOptions::default())
    }

    /// Like [`set_with_options`](Cache::set_with_options), but fails with
    /// [`Error::KeyExists`] if the key is present.
    ///
    /// An expired entry that has not been reclaimed still counts as present.
    /// The cache is left untouched on failure.
    pub fn set_or_fail_with_options(
        &self,
        key: impl Into<String>,
        value: T,
        options: SetOptions,
    ) -> Result<()> {
        let mut entries = self.entries.write();

        match entries.entry(key.into()) {
            hash_map::Entry::Occupied(slot) => Err(Error::KeyExists(slot.key().clone())),
            hash_map::Entry::Vacant(slot) => {
                slot.insert(self.new_entry(value, options));
                Ok(())
            }
        }
    }

    /// Removes the entry and returns its value.
    ///
    /// Fails like [`get`](Cache::get), but the key is gone afterwards either
    /// way, including when it had expired.
    pub fn get_and_delete(&self, key: &str) -> Result<T> {
        let removed = self.entries.write().remove(key);
        Self::live(key, removed, Instant::now()).map(Entry::into_value)
    }

    /// Removes the entry for `key`. Removing an absent key is not an error.
    pub fn delete(&self, key: &str) -> Result<()> {
        self.entries.write().remove(key);
        Ok(())
    }

    /// Takes every entry out of the cache, returning the ones still valid.
    ///
    /// The whole map is swapped for an empty one under a single lock
    /// acquisition; filtering happens after the lock is released. All entries
    /// are judged against one instant captured when the call starts. Expired
    /// entries are dropped.
    #[instrument(level = "debug", skip(self))]
    pub fn drain(&self) -> HashMap<String, T> {
        let now = Instant::now();

        let snapshot = {
            let mut entries = self.entries.write();
            let capacity = entries.len();
            std::mem::replace(&mut *entries, HashMap::with_capacity(capacity))
        };

        let total = snapshot.len();
        let live: HashMap<String, T> = snapshot
            .into_iter()
            .filter(|(_, entry)| !entry.is_expired(now))
            .map(|(key, entry)| (key, entry.into_value()))
            .collect();

        debug!(drained = live.len(), discarded = total - live.len(), "Drained cache");
        live
    }

    /// Removes all expired entries.
    ///
    /// Entries are judged against one instant captured when the call starts.
    #[instrument(level = "debug", skip(self))]
    pub fn cleanup(&self) {
        let now = Instant::now();

        let (removed, remaining) = {
            let mut entries = self.entries.write();
            let before = entries.len();
            entries.retain(|_, entry| !entry.is_expired(now));
            (before - entries.len(), entries.len())
        };

        debug!(removed, remaining, "Removed expired cache entries");
    }

    /// Returns the number of stored entries, expired ones included.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Returns true if the cache holds no entries at all.
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Returns cache statistics.
    pub fn stats(&self) -> CacheStats {
        let now = Instant::now();
        let entries = self.entries.read();
        let expired = entries.values().filter(|e| e.is_expired(now)).count();

        CacheStats {
            total_entries: entries.len(),
            expired_entries: expired,
            valid_entries: entries.len() - expired,
        }
    }

    /// Checks that a looked-up entry exists and has not expired.
    fn live<E>(key: &str, entry: Option<E>, now: Instant) -> Result<E>
    where
        E: Borrow<Entry<T>>,
    {
        let entry = entry.ok_or_else(|| Error::KeyNotFound(key.to_owned()))?;

        if entry.borrow().is_expired(now) {
            return Err(Error::KeyExpired(key.to_owned()));
        }

        Ok(entry)
    }
}

impl<T: Clone> Cache<T> {
    /// Returns a copy of the value stored under `key`.
    ///
    /// Fails with [`Error::KeyNotFound`] if the key is absent and with
    /// [`Error::KeyExpired`] if its expiry has passed. Reading never removes
    /// anything.
    pub fn get(&self, key: &str) -> Result<T> {
        let entries = self.entries.read();
        let entry = Self::live(key, entries.get(key), Instant::now())?;
        Ok(entry.value().clone())
    }
}

impl<T> Default for Cache<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Cache statistics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Total entries (including expired)
    pub total_entries: usize,
    /// Expired entries
    pub expired_entries: usize,
    /// Valid (non-expired) entries
    pub valid_entries: usize,
}
