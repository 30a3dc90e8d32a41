//! List operations: duplicates, order-preserving dedup, intersection.

use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::hash::Hash;

/// Values that occur more than once, ascending, each listed once.
pub fn find_duplicates<T: Ord + Clone>(items: &[T]) -> Vec<T> {
    let mut counts: BTreeMap<&T, usize> = BTreeMap::new();
    for item in items {
        *counts.entry(item).or_insert(0) += 1;
    }

    counts
        .into_iter()
        .filter(|&(_, count)| count > 1)
        .map(|(item, _)| item.clone())
        .collect()
}

/// Each distinct value once, in order of first occurrence.
pub fn remove_duplicates_preserve_order<T: Eq + Hash + Clone>(items: &[T]) -> Vec<T> {
    let mut seen = HashSet::with_capacity(items.len());
    items
        .iter()
        .filter(|item| seen.insert(*item))
        .cloned()
        .collect()
}

/// Sorted, duplicate-free values present in both inputs.
pub fn find_common_elements<T: Ord + Clone>(a: &[T], b: &[T]) -> Vec<T> {
    let left: BTreeSet<&T> = a.iter().collect();
    let right: BTreeSet<&T> = b.iter().collect();
    left.intersection(&right).map(|item| (*item).clone()).collect()
}
