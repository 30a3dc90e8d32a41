//! Higher-order helpers: filter+map, group-by, operation pipelines,
//! max-by-key.
//!
//! Callers supply behaviour as closures. Where a list of differently-typed
//! closures is needed (see [`apply_operations`]), box them as
//! `Box<dyn Fn(T) -> T>`.

use indexmap::IndexMap;
use std::hash::Hash;

/// `transform(x)` for every `x` in `data` where `predicate(x)` holds,
/// in original order.
pub fn filter_and_transform<T, U, P, F>(data: &[T], predicate: P, transform: F) -> Vec<U>
where
    P: Fn(&T) -> bool,
    F: Fn(&T) -> U,
{
    data.iter().filter(|x| predicate(x)).map(transform).collect()
}

/// Group elements by `key_fn`.
///
/// Groups appear in the order their key is first seen; elements keep their
/// original order within each group.
pub fn group_by_property<T, K, F>(data: &[T], key_fn: F) -> IndexMap<K, Vec<T>>
where
    T: Clone,
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    let mut groups: IndexMap<K, Vec<T>> = IndexMap::new();
    for item in data {
        groups.entry(key_fn(item)).or_default().push(item.clone());
    }
    groups
}

/// Apply each operation in turn to every element.
///
/// The first operation runs over the whole sequence before the second
/// begins. With no operations the result is a copy of `data`.
pub fn apply_operations<T, F>(data: &[T], operations: &[F]) -> Vec<T>
where
    T: Clone,
    F: Fn(T) -> T,
{
    operations.iter().fold(data.to_vec(), |values, op| {
        values.into_iter().map(op).collect()
    })
}

/// The first element whose `key_fn` value is the maximum, or `None` for
/// empty input.
pub fn find_max_by_criteria<T, K, F>(data: &[T], key_fn: F) -> Option<&T>
where
    K: PartialOrd,
    F: Fn(&T) -> K,
{
    let mut best: Option<(&T, K)> = None;
    for item in data {
        let key = key_fn(item);
        // Strictly greater: earlier elements win ties.
        let replace = match &best {
            Some((_, best_key)) => key > *best_key,
            None => true,
        };
        if replace {
            best = Some((item, key));
        }
    }
    best.map(|(item, _)| item)
}
