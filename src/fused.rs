//! Single-pass combinators that transform and filter, or transform and find,
//! without building an intermediate collection.
//!
//! - [`mash`] / [`mash_with`] / [`try_mash`] collect pairs into an ordered
//!   [`Mapping`], skipping absent entries.
//! - [`map_select`] transforms every item and keeps the present results.
//! - [`map_detect`] transforms items until the first present result.
//!
//! All of them accept any [`IntoIterator`], which includes the lazy sequences
//! from [`recurrence`](crate::recurrence()) and [`slice_view`](crate::slice_view()).
//! The [`FusedExt`] trait offers the same operations as iterator methods.
//!
//! ```rust
//! use accrue::prelude::*;
//!
//! let doubled: Vec<_> = [1, 2, 3].into_iter().map_select(|x| (x > 1).then(|| 2 * x)).collect();
//! assert_eq!(doubled, vec![4, 6]);
//!
//! // First power of three above 100; the infinite source is pulled only as far as needed.
//! let hit = recurrence(1_u32, |x: &u32| Some(x * 3)).map_detect(|x| (x > 100).then_some(x));
//! assert_eq!(hit, Some(243));
//! ```

use std::convert::Infallible;
use std::hash::Hash;
use std::iter::FusedIterator;

use indexmap::IndexMap;

/// Insertion-ordered mapping with unique keys.
pub type Mapping<K, V> = IndexMap<K, V>;

/// An entry accepted by [`mash`]: a bare pair, or an optional pair where
/// `None` means "no entry here".
pub trait PairEntry {
    type Key;
    type Value;

    /// The pair, or `None` for an absent entry.
    fn into_pair(self) -> Option<(Self::Key, Self::Value)>;
}

impl<K, V> PairEntry for (K, V) {
    type Key = K;
    type Value = V;

    fn into_pair(self) -> Option<(K, V)> {
        Some(self)
    }
}

impl<K, V> PairEntry for Option<(K, V)> {
    type Key = K;
    type Value = V;

    fn into_pair(self) -> Option<(K, V)> {
        self
    }
}

/// Collect pairs into a [`Mapping`].
///
/// Absent entries are skipped. Keys keep the position of their first
/// occurrence; for duplicate keys the last value wins.
///
/// ```rust
/// use accrue::prelude::*;
///
/// let mapping = mash([Some(("a", 1)), None, Some(("b", 2))]);
/// assert_eq!(mapping, Mapping::from([("a", 1), ("b", 2)]));
/// ```
pub fn mash<I, P>(pairs: I) -> Mapping<P::Key, P::Value>
where
    I: IntoIterator<Item = P>,
    P: PairEntry,
    P::Key: Hash + Eq,
{
    mash_with(pairs, |k, v| (k, v))
}

/// Collect pairs into a [`Mapping`], transforming each present pair first.
///
/// ```rust
/// use accrue::prelude::*;
///
/// let mapping = mash_with([("a", 1), ("b", 2)], |k, v| (k.to_string(), 2 * v));
/// assert_eq!(mapping["a"], 2);
/// assert_eq!(mapping["b"], 4);
/// ```
pub fn mash_with<I, P, K, V, F>(pairs: I, mut transform: F) -> Mapping<K, V>
where
    I: IntoIterator<Item = P>,
    P: PairEntry,
    K: Hash + Eq,
    F: FnMut(P::Key, P::Value) -> (K, V),
{
    match try_mash(pairs, |k, v| Ok::<_, Infallible>(transform(k, v))) {
        Ok(mapping) => mapping,
        Err(never) => match never {},
    }
}

/// Collect pairs into a [`Mapping`] through a fallible transform.
///
/// The first error is returned as is and the partially built mapping is
/// dropped; the caller never sees a partial result.
pub fn try_mash<I, P, K, V, E, F>(pairs: I, mut transform: F) -> Result<Mapping<K, V>, E>
where
    I: IntoIterator<Item = P>,
    P: PairEntry,
    K: Hash + Eq,
    F: FnMut(P::Key, P::Value) -> Result<(K, V), E>,
{
    let pairs = pairs.into_iter();
    let mut mapping = Mapping::with_capacity(pairs.size_hint().0);
    for (position, entry) in pairs.enumerate() {
        let Some((key, value)) = entry.into_pair() else {
            tracing::trace!(position, "skipping absent pair entry");
            continue;
        };
        let (key, value) = transform(key, value)?;
        mapping.insert(key, value);
    }
    Ok(mapping)
}

/// Lazy map+filter in a single pass.
///
/// Created via [`map_select`] or [`FusedExt::map_select`].
#[derive(Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct MapSelect<I, F> {
    iter: I,
    f: F,
}

/// Apply `f` to every item and keep the results that are present.
///
/// `f` runs exactly once per item, in order, and only as items are pulled.
pub fn map_select<I, U, F>(items: I, f: F) -> MapSelect<I::IntoIter, F>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> Option<U>,
{
    MapSelect {
        iter: items.into_iter(),
        f,
    }
}

impl<I, U, F> Iterator for MapSelect<I, F>
where
    I: Iterator,
    F: FnMut(I::Item) -> Option<U>,
{
    type Item = U;

    fn next(&mut self) -> Option<U> {
        for item in self.iter.by_ref() {
            if let Some(selected) = (self.f)(item) {
                return Some(selected);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.iter.size_hint().1)
    }
}

impl<I, U, F> FusedIterator for MapSelect<I, F>
where
    I: FusedIterator,
    F: FnMut(I::Item) -> Option<U>,
{
}

/// Eager [`map_select`] through a fallible transform; stops at the first error.
pub fn try_map_select<I, U, E, F>(items: I, mut f: F) -> Result<Vec<U>, E>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> Result<Option<U>, E>,
{
    let mut selected = Vec::new();
    for item in items {
        if let Some(value) = f(item)? {
            selected.push(value);
        }
    }
    Ok(selected)
}

/// Apply `f` to items in order and return the first present result.
///
/// No item after the first hit is pulled, so this works on infinite sequences
/// that eventually match. An infinite sequence that never matches makes this
/// call loop forever.
///
/// ```rust
/// use accrue::prelude::*;
///
/// assert_eq!(map_detect([1, 2, 3], |x| (x > 1).then(|| 2 * x)), Some(4));
/// assert_eq!(map_detect([1, 2, 3], |x| (x > 10).then(|| 2 * x)), None);
/// ```
pub fn map_detect<I, U, F>(items: I, mut f: F) -> Option<U>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> Option<U>,
{
    for item in items {
        if let Some(found) = f(item) {
            return Some(found);
        }
    }
    None
}

/// [`map_detect`] through a fallible transform.
///
/// Returns the first error or the first present result, whichever comes
/// first; nothing after it is pulled.
pub fn try_map_detect<I, U, E, F>(items: I, mut f: F) -> Result<Option<U>, E>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> Result<Option<U>, E>,
{
    for item in items {
        if let Some(found) = f(item)? {
            return Ok(Some(found));
        }
    }
    Ok(None)
}

/// Method syntax for the fused combinators on any iterator.
pub trait FusedExt: Iterator + Sized {
    /// Method form of [`map_select`].
    fn map_select<U, F>(self, f: F) -> MapSelect<Self, F>
    where
        F: FnMut(Self::Item) -> Option<U>,
    {
        map_select(self, f)
    }

    /// Takes `&mut self`, so the iterator can be resumed after a hit.
    fn map_detect<U, F>(&mut self, f: F) -> Option<U>
    where
        F: FnMut(Self::Item) -> Option<U>,
    {
        map_detect(self, f)
    }

    /// Method form of [`mash`].
    fn mash(self) -> Mapping<<Self::Item as PairEntry>::Key, <Self::Item as PairEntry>::Value>
    where
        Self::Item: PairEntry,
        <Self::Item as PairEntry>::Key: Hash + Eq,
    {
        mash(self)
    }

    /// Method form of [`mash_with`].
    fn mash_with<K, V, F>(self, transform: F) -> Mapping<K, V>
    where
        Self::Item: PairEntry,
        K: Hash + Eq,
        F: FnMut(<Self::Item as PairEntry>::Key, <Self::Item as PairEntry>::Value) -> (K, V),
    {
        mash_with(self, transform)
    }
}

impl<I: Iterator> FusedExt for I {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recurrence::recurrence;
    use std::cell::Cell;

    #[test]
    fn test_mash_pairs() {
        let mapping = mash([(":a", 1), (":b", 2)]);
        assert_eq!(mapping, Mapping::from([(":a", 1), (":b", 2)]));
    }

    #[test]
    fn test_mash_skips_absent_entries() {
        let mapping = mash(vec![Some(("a", 1)), None, Some(("b", 2)), None]);
        assert_eq!(mapping.len(), 2);
        assert_eq!(mapping.get("a"), Some(&1));
        assert_eq!(mapping.get("b"), Some(&2));
    }

    #[test]
    fn test_mash_with_transform() {
        let mapping = [('a', 1), ('b', 2)].into_iter().mash_with(|k, v| (k.to_string(), 2 * v));
        assert_eq!(mapping, Mapping::from([("a".to_string(), 2), ("b".to_string(), 4)]));
    }

    #[test]
    fn test_mash_last_write_wins_first_position_kept() {
        let mapping = mash([("x", 1), ("y", 2), ("x", 3)]);
        let entries: Vec<_> = mapping.into_iter().collect();
        assert_eq!(entries, vec![("x", 3), ("y", 2)]);
    }

    #[test]
    fn test_try_mash_is_all_or_nothing() {
        let seen = Cell::new(0);
        let result = try_mash([("a", "1"), ("b", "two"), ("c", "3")], |k, v| {
            seen.set(seen.get() + 1);
            v.parse::<i32>().map(|n| (k, n))
        });

        assert!(result.is_err());
        assert_eq!(seen.get(), 2);
    }

    #[test]
    fn test_map_select_keeps_order() {
        let selected: Vec<_> = map_select([1, 2, 3], |x| (x > 1).then(|| 2 * x)).collect();
        assert_eq!(selected, vec![4, 6]);
    }

    #[test]
    fn test_map_select_calls_once_per_item() {
        let calls = Cell::new(0);
        let selected: Vec<_> = (1..=10)
            .map_select(|x| {
                calls.set(calls.get() + 1);
                (x % 3 == 0).then_some(x)
            })
            .collect();

        assert_eq!(selected, vec![3, 6, 9]);
        assert_eq!(calls.get(), 10);
    }

    #[test]
    fn test_map_select_over_infinite_recurrence() {
        let evens: Vec<_> = recurrence(1_u32, |x: &u32| Some(x + 1))
            .map_select(|x| (x % 2 == 0).then_some(x))
            .take(3)
            .collect();
        assert_eq!(evens, vec![2, 4, 6]);
    }

    #[test]
    fn test_try_map_select_stops_at_error() {
        let calls = Cell::new(0);
        let result = try_map_select(["1", "x", "3"], |s| {
            calls.set(calls.get() + 1);
            s.parse::<i32>().map(Some)
        });
        assert!(result.is_err());
        assert_eq!(calls.get(), 2);

        let ok: Result<Vec<i32>, std::num::ParseIntError> =
            try_map_select(["1", "", "3"], |s| if s.is_empty() { Ok(None) } else { s.parse().map(Some) });
        assert_eq!(ok.unwrap(), vec![1, 3]);
    }

    #[test]
    fn test_map_detect_first_match() {
        assert_eq!(map_detect([1, 2, 3], |x| (x > 1).then(|| 2 * x)), Some(4));
        assert_eq!(map_detect([1, 2, 3], |x| (x > 10).then(|| 2 * x)), None);
        assert_eq!(map_detect(Vec::<i32>::new(), Some), None);
    }

    #[test]
    fn test_map_detect_short_circuits() {
        let pulled = Cell::new(0);
        let mut items = (1..).inspect(|_| pulled.set(pulled.get() + 1));

        assert_eq!(items.map_detect(|x| (x == 4).then_some("four")), Some("four"));
        assert_eq!(pulled.get(), 4);
        assert_eq!(items.next(), Some(5));
    }

    #[test]
    fn test_try_map_detect() {
        let found: Result<_, &str> = try_map_detect([1, 2, 3], |x| Ok((x == 2).then_some(x * 10)));
        assert_eq!(found, Ok(Some(20)));

        let failed = try_map_detect([1, 2, 3], |x| if x == 2 { Err("two") } else { Ok(None::<i32>) });
        assert_eq!(failed, Err("two"));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn map_select_equals_map_then_filter(items in proptest::collection::vec(-50_i32..50, 0..64)) {
                let f = |x: i32| (x % 3 != 0).then(|| x * 2);
                let fused: Vec<_> = map_select(items.clone(), f).collect();
                let unfused: Vec<_> = items.iter().map(|&x| f(x)).filter(Option::is_some).flatten().collect();
                prop_assert_eq!(fused, unfused);
            }

            #[test]
            fn map_detect_is_head_of_map_select(items in proptest::collection::vec(-50_i32..50, 0..64)) {
                let f = |x: i32| (x > 20).then(|| x - 20);
                prop_assert_eq!(map_detect(items.clone(), f), map_select(items, f).next());
            }

            #[test]
            fn mash_keeps_last_value_per_key(pairs in proptest::collection::vec((0_u8..8, any::<i16>()), 0..32)) {
                let mapping = mash(pairs.clone());
                for (key, value) in &mapping {
                    let last = pairs.iter().rev().find(|(k, _)| k == key).map(|(_, v)| v);
                    prop_assert_eq!(Some(value), last);
                }
                let mut keys: Vec<_> = pairs.iter().map(|(k, _)| *k).collect();
                keys.sort_unstable();
                keys.dedup();
                prop_assert_eq!(mapping.len(), keys.len());
            }
        }
    }
}
