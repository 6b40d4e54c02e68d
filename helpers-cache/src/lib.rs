//! # Helpers Cache
//!
//! Generic in-process TTL cache keyed by strings.
//!
//! - **Lazy expiration**: entries are checked against the clock on read and
//!   reclaimed only by explicit calls
//! - **Per-call overrides**: [`SetOptions`] replaces the default TTL for one insert
//! - **Bulk operations**: [`Cache::drain`] and [`Cache::cleanup`]
//!
//! ## Example
//!
//! ```rust
//! use std::time::Duration;
//! use helpers_cache::{Cache, SetOptions};
//! use helpers_core::Error;
//!
//! let cache = Cache::with_ttl(Duration::from_secs(60));
//! cache.set("alice", 1)?;
//! cache.set_with_options("bob", 2, SetOptions::new().never_expires())?;
//!
//! assert_eq!(cache.get("alice")?, 1);
//! assert!(matches!(cache.set_or_fail("alice", 3), Err(Error::KeyExists(_))));
//!
//! let all = cache.drain();
//! assert_eq!(all.len(), 2);
//! # Ok::<(), Error>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

mod cache;
mod config;
mod entry;
mod options;

pub use cache::{Cache, CacheStats};
pub use config::CacheConfig;
pub use entry::Expiry;
pub use options::SetOptions;

// Re-export the error types the cache returns
pub use helpers_core::error::{Error, Result};
