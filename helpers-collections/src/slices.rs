//! Element-wise transforms over sequences.
//!
//! Every function consumes anything iterable and walks it once, left to right.
//! Map-producing functions resolve duplicate keys in favour of the later element.

use std::collections::HashMap;
use std::hash::Hash;

use rand::Rng;

use helpers_core::error::{Error, Result};

/// Applies `f` to every element, preserving order.
pub fn map<I, U, F>(items: I, f: F) -> Vec<U>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> U,
{
    items.into_iter().map(f).collect()
}

/// Applies a fallible `f` to every element, preserving order.
///
/// Stops at the first error and returns it; `f` is not called on any later
/// element.
pub fn try_map<I, U, E, F>(items: I, f: F) -> std::result::Result<Vec<U>, E>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> std::result::Result<U, E>,
{
    items.into_iter().map(f).collect()
}

/// Groups elements by the key `key_fn` computes for them.
///
/// Each group keeps its elements in input order.
pub fn group_by<I, K, F>(items: I, mut key_fn: F) -> HashMap<K, Vec<I::Item>>
where
    I: IntoIterator,
    K: Eq + Hash,
    F: FnMut(&I::Item) -> K,
{
    let mut groups: HashMap<K, Vec<I::Item>> = HashMap::new();
    for item in items {
        groups.entry(key_fn(&item)).or_default().push(item);
    }
    groups
}

/// Indexes elements by the key `key_fn` computes for them.
pub fn key_by<I, K, F>(items: I, mut key_fn: F) -> HashMap<K, I::Item>
where
    I: IntoIterator,
    K: Eq + Hash,
    F: FnMut(&I::Item) -> K,
{
    items.into_iter().map(|item| (key_fn(&item), item)).collect()
}

/// Builds a map from a key and a value derived from each element.
pub fn associate<I, K, V, FK, FV>(items: I, mut key_fn: FK, mut value_fn: FV) -> HashMap<K, V>
where
    I: IntoIterator,
    K: Eq + Hash,
    FK: FnMut(&I::Item) -> K,
    FV: FnMut(I::Item) -> V,
{
    items
        .into_iter()
        .map(|item| (key_fn(&item), value_fn(item)))
        .collect()
}

/// Picks a random element using the thread-local RNG.
///
/// Not suitable where unpredictability matters.
pub fn random<T>(slice: &[T]) -> Result<&T> {
    random_with(slice, &mut rand::thread_rng())
}

/// Picks a random element using the given RNG.
///
/// Returns [`Error::EmptySlice`] for an empty slice. A single-element slice
/// yields that element without drawing from `rng`.
pub fn random_with<'a, T, R: Rng>(slice: &'a [T], rng: &mut R) -> Result<&'a T> {
    match slice {
        [] => Err(Error::EmptySlice),
        [only] => Ok(only),
        _ => Ok(&slice[rng.gen_range(0..slice.len())]),
    }
}
