//! Map-like sources that can be copied into an [`OrderedMap`].
//!
//! `from_map`, `replace`, `merge` and `merge_in_place` accept anything that
//! implements [`MapSource`]. A source reports whether the order it enumerates
//! its entries in is meaningful. Ordered sources (another `OrderedMap`, a list
//! of pairs, a `BTreeMap`) have that order preserved exactly. Unordered sources
//! such as `HashMap` are copied in whatever order they enumerate, which is
//! best-effort and may differ between runs.

use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

use super::OrderedMap;

/// A map-like value whose entries can be enumerated by reference.
///
/// # Examples
///
/// ```
/// use ordered_hash::map::{MapSource, OrderedMap};
///
/// let pairs = vec![("b", 2), ("a", 1)];
/// assert!(pairs.is_ordered());
///
/// let map = OrderedMap::from_map(&pairs);
/// assert_eq!(map.ordered_keys(), &["b", "a"]);
/// ```
pub trait MapSource<K, V> {
    /// Whether [`source_iter`](Self::source_iter) yields entries in a defined order.
    fn is_ordered(&self) -> bool;

    /// Enumerate the entries of this source.
    fn source_iter<'a>(&'a self) -> impl Iterator<Item = (&'a K, &'a V)>
    where
        K: 'a,
        V: 'a;
}

impl<K, V> MapSource<K, V> for OrderedMap<K, V>
where
    K: Hash + Eq,
{
    fn is_ordered(&self) -> bool {
        true
    }

    fn source_iter<'a>(&'a self) -> impl Iterator<Item = (&'a K, &'a V)>
    where
        K: 'a,
        V: 'a,
    {
        self.iter()
    }
}

impl<K, V, S> MapSource<K, V> for HashMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    fn is_ordered(&self) -> bool {
        false
    }

    fn source_iter<'a>(&'a self) -> impl Iterator<Item = (&'a K, &'a V)>
    where
        K: 'a,
        V: 'a,
    {
        self.iter()
    }
}

// Sorted by key; that is the order it exposes.
impl<K: Ord, V> MapSource<K, V> for BTreeMap<K, V> {
    fn is_ordered(&self) -> bool {
        true
    }

    fn source_iter<'a>(&'a self) -> impl Iterator<Item = (&'a K, &'a V)>
    where
        K: 'a,
        V: 'a,
    {
        self.iter()
    }
}

impl<K, V> MapSource<K, V> for [(K, V)] {
    fn is_ordered(&self) -> bool {
        true
    }

    fn source_iter<'a>(&'a self) -> impl Iterator<Item = (&'a K, &'a V)>
    where
        K: 'a,
        V: 'a,
    {
        self.iter().map(|(k, v)| (k, v))
    }
}

impl<K, V, const N: usize> MapSource<K, V> for [(K, V); N] {
    fn is_ordered(&self) -> bool {
        true
    }

    fn source_iter<'a>(&'a self) -> impl Iterator<Item = (&'a K, &'a V)>
    where
        K: 'a,
        V: 'a,
    {
        self.iter().map(|(k, v)| (k, v))
    }
}

impl<K, V> MapSource<K, V> for Vec<(K, V)> {
    fn is_ordered(&self) -> bool {
        true
    }

    fn source_iter<'a>(&'a self) -> impl Iterator<Item = (&'a K, &'a V)>
    where
        K: 'a,
        V: 'a,
    {
        self.iter().map(|(k, v)| (k, v))
    }
}
