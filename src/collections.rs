//! Slice helpers for cleaning up lists of extracted links.

use std::collections::HashSet;
use std::hash::Hash;

/// Unique items from `items`.
///
/// Output order is unspecified; callers needing stable order should dedup
/// with their own seen-set.
#[must_use]
pub fn deduplicate<T>(items: &[T]) -> Vec<T>
where
    T: Eq + Hash + Clone,
{
    let unique: HashSet<&T> = items.iter().collect();
    unique.into_iter().cloned().collect()
}

/// Items for which `predicate` holds, in input order.
pub fn filter_slice<S, F>(items: &[S], mut predicate: F) -> Vec<String>
where
    S: AsRef<str>,
    F: FnMut(&str) -> bool,
{
    items
        .iter()
        .map(AsRef::as_ref)
        .filter(|&item| predicate(item))
        .map(str::to_string)
        .collect()
}

/// Whitespace-trimmed copy of every item, same order and length.
#[must_use]
pub fn trim_all<S: AsRef<str>>(items: &[S]) -> Vec<String> {
    items
        .iter()
        .map(|item| item.as_ref().trim().to_string())
        .collect()
}

/// Items that are not empty after trimming, in input order.
///
/// Kept items are returned as given, not trimmed.
#[must_use]
pub fn remove_blank<S: AsRef<str>>(items: &[S]) -> Vec<String> {
    filter_slice(items, |item| !item.trim().is_empty())
}
