//! # Helpers Core
//!
//! Shared building blocks for the `helpers-*` crates.
//!
//! - **Errors**: one error enum for the whole workspace, so callers can match
//!   cache and collection failures the same way.
//!
//! ## Example
//!
//! ```rust
//! use helpers_core::Error;
//!
//! let err = Error::KeyExpired("session:42".into());
//! assert!(err.is_miss());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, clippy::all)]

pub mod error;

pub use error::{Error, Result};
