//! Transforms over key/value maps.

use std::collections::HashMap;
use std::hash::Hash;

/// Applies `f` to every value, keeping the keys.
pub fn map_values<I, K, V, R, F>(map: I, mut f: F) -> HashMap<K, R>
where
    I: IntoIterator<Item = (K, V)>,
    K: Eq + Hash,
    F: FnMut(V) -> R,
{
    map.into_iter().map(|(key, value)| (key, f(value))).collect()
}
