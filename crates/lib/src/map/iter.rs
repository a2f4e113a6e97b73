//! Iterators over an [`OrderedMap`](super::OrderedMap).
//!
//! Every iterator walks the order sequence, so entries come out in first-insertion
//! order. Each call to `iter()`, `keys()`, `values()` starts a fresh pass.

use std::collections::HashMap;
use std::hash::Hash;
use std::iter::FusedIterator;
use std::{slice, vec};

/// Borrowing iterator over `(&K, &V)` pairs in insertion order.
pub struct Iter<'a, K, V> {
    keys: slice::Iter<'a, K>,
    map: &'a HashMap<K, V>,
}

impl<'a, K, V> Iter<'a, K, V> {
    pub(super) fn new(keys: &'a [K], map: &'a HashMap<K, V>) -> Self {
        Self {
            keys: keys.iter(),
            map,
        }
    }
}

impl<K, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Self {
            keys: self.keys.clone(),
            map: self.map,
        }
    }
}

impl<'a, K: Hash + Eq, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let key = self.keys.next()?;
        self.map.get(key).map(|value| (key, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.keys.size_hint()
    }
}

impl<K: Hash + Eq, V> DoubleEndedIterator for Iter<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let key = self.keys.next_back()?;
        self.map.get(key).map(|value| (key, value))
    }
}

impl<K: Hash + Eq, V> ExactSizeIterator for Iter<'_, K, V> {}
impl<K: Hash + Eq, V> FusedIterator for Iter<'_, K, V> {}

/// Iterator over `(&K, &mut V)` pairs in insertion order.
///
/// The store hands out mutable references in its own order, so building this
/// iterator pairs them back up with the order sequence up front.
pub struct IterMut<'a, K, V> {
    entries: vec::IntoIter<(&'a K, &'a mut V)>,
}

impl<'a, K: Hash + Eq, V> IterMut<'a, K, V> {
    pub(super) fn new(keys: &'a [K], map: &'a mut HashMap<K, V>) -> Self {
        let mut slots: HashMap<&'a K, &'a mut V> = map.iter_mut().collect();
        let entries: Vec<_> = keys
            .iter()
            .filter_map(|key| slots.remove(key).map(|value| (key, value)))
            .collect();
        Self {
            entries: entries.into_iter(),
        }
    }
}

impl<'a, K, V> Iterator for IterMut<'a, K, V> {
    type Item = (&'a K, &'a mut V);

    fn next(&mut self) -> Option<Self::Item> {
        self.entries.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.entries.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for IterMut<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.entries.next_back()
    }
}

impl<K, V> ExactSizeIterator for IterMut<'_, K, V> {}
impl<K, V> FusedIterator for IterMut<'_, K, V> {}

/// Owning iterator over `(K, V)` pairs in insertion order.
pub struct IntoIter<K, V> {
    keys: vec::IntoIter<K>,
    map: HashMap<K, V>,
}

impl<K, V> IntoIter<K, V> {
    pub(super) fn new(keys: Vec<K>, map: HashMap<K, V>) -> Self {
        Self {
            keys: keys.into_iter(),
            map,
        }
    }
}

impl<K: Hash + Eq, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        let key = self.keys.next()?;
        self.map.remove(&key).map(|value| (key, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.keys.size_hint()
    }
}

impl<K: Hash + Eq, V> DoubleEndedIterator for IntoIter<K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let key = self.keys.next_back()?;
        self.map.remove(&key).map(|value| (key, value))
    }
}

impl<K: Hash + Eq, V> ExactSizeIterator for IntoIter<K, V> {}
impl<K: Hash + Eq, V> FusedIterator for IntoIter<K, V> {}

/// Iterator over keys in insertion order.
#[derive(Clone)]
pub struct Keys<'a, K> {
    keys: slice::Iter<'a, K>,
}

impl<'a, K> Keys<'a, K> {
    pub(super) fn new(keys: &'a [K]) -> Self {
        Self { keys: keys.iter() }
    }
}

impl<'a, K> Iterator for Keys<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.keys.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.keys.size_hint()
    }
}

impl<K> DoubleEndedIterator for Keys<'_, K> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.keys.next_back()
    }
}

impl<K> ExactSizeIterator for Keys<'_, K> {}
impl<K> FusedIterator for Keys<'_, K> {}

/// Iterator over values in key order.
pub struct Values<'a, K, V> {
    inner: Iter<'a, K, V>,
}

impl<'a, K, V> Values<'a, K, V> {
    pub(super) fn new(inner: Iter<'a, K, V>) -> Self {
        Self { inner }
    }
}

impl<K, V> Clone for Values<'_, K, V> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<'a, K: Hash + Eq, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, value)| value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K: Hash + Eq, V> DoubleEndedIterator for Values<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(_, value)| value)
    }
}

impl<K: Hash + Eq, V> ExactSizeIterator for Values<'_, K, V> {}
impl<K: Hash + Eq, V> FusedIterator for Values<'_, K, V> {}

/// Iterator over mutable values in key order.
pub struct ValuesMut<'a, K, V> {
    inner: IterMut<'a, K, V>,
}

impl<'a, K, V> ValuesMut<'a, K, V> {
    pub(super) fn new(inner: IterMut<'a, K, V>) -> Self {
        Self { inner }
    }
}

impl<'a, K, V> Iterator for ValuesMut<'a, K, V> {
    type Item = &'a mut V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, value)| value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for ValuesMut<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(_, value)| value)
    }
}

impl<K, V> ExactSizeIterator for ValuesMut<'_, K, V> {}
impl<K, V> FusedIterator for ValuesMut<'_, K, V> {}
