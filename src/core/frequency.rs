//! Generic occurrence counting
//!
//! Backs both the top-show and top-device queries: count keys across a
//! record slice, optionally filtered, then pick the maximum.

use std::collections::HashMap;
use std::hash::Hash;

use crate::error::AppError;

/// Count occurrences of `key(item)` across all items.
pub(crate) fn count_by<T, K, F>(items: &[T], key: F) -> HashMap<K, u64>
where
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    count_by_filtered(items, key, |_| true)
}

/// Count occurrences of `key(item)` across items accepted by `filter`.
pub(crate) fn count_by_filtered<T, K, F, P>(items: &[T], key: F, filter: P) -> HashMap<K, u64>
where
    K: Eq + Hash,
    F: Fn(&T) -> K,
    P: Fn(&T) -> bool,
{
    let mut counts: HashMap<K, u64> = HashMap::new();
    for item in items {
        if filter(item) {
            *counts.entry(key(item)).or_default() += 1;
        }
    }
    counts
}

/// Entry with the highest count. Tie order is unspecified.
pub(crate) fn most_frequent<K: Clone>(counts: &HashMap<K, u64>) -> Result<(K, u64), AppError> {
    counts
        .iter()
        .max_by_key(|(_, count)| **count)
        .map(|(key, count)| (key.clone(), *count))
        .ok_or(AppError::EmptyInput)
}
