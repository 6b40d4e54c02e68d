//! # Helpers Collections
//!
//! Single-pass collection transforms with no state.
//!
//! - **Slices**: [`slices::map`], [`slices::try_map`], [`slices::group_by`],
//!   [`slices::key_by`], [`slices::associate`], [`slices::random`]
//! - **Maps**: [`maps::map_values`]
//! - **Anys**: fallbacks for absent and zero values
//!
//! ## Example
//!
//! ```rust
//! use helpers_collections::slices;
//!
//! let groups = slices::group_by(vec![1, 2, 3, 4, 5], |n| n % 2);
//! assert_eq!(groups[&1], vec![1, 3, 5]);
//!
//! let parsed: Result<Vec<u8>, _> = slices::try_map(["1", "x", "3"], str::parse::<u8>);
//! assert!(parsed.is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

pub mod anys;
pub mod maps;
pub mod slices;
