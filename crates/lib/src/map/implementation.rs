//! The insertion-ordered map.
//!
//! [`OrderedMap`] keeps two structures in lockstep: a `HashMap` holding the
//! entries and a `Vec` recording the order in which keys were first inserted.
//! Every mutation updates both, so the order sequence always lists each stored
//! key exactly once, in first-insertion order.

use std::any::Any;
use std::borrow::Borrow;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Index;

use tracing::{debug, trace};

use super::errors::MapError;
use super::iter::{IntoIter, Iter, IterMut, Keys, Values, ValuesMut};
use super::source::MapSource;
use crate::Result;

/// An associative container that remembers the order keys were first inserted.
///
/// Re-assigning an existing key replaces its value in place; only deleting a
/// key and setting it again moves it to the end. Iteration, `Debug` output and
/// serialization all follow insertion order, and equality is order-sensitive.
///
/// # Examples
///
/// ```
/// use ordered_hash::OrderedMap;
///
/// let mut map = OrderedMap::new();
/// map.set("name", "Alice");
/// map.set("age", "30");
/// map.set("name", "Bob");
///
/// let keys: Vec<_> = map.keys().copied().collect();
/// assert_eq!(keys, vec!["name", "age"]);
/// assert_eq!(map.get("name"), Some(&"Bob"));
/// ```
#[derive(Clone)]
pub struct OrderedMap<K, V> {
    pub(super) map: HashMap<K, V>,
    pub(super) keys: Vec<K>,
}

impl<K, V> Default for OrderedMap<K, V> {
    fn default() -> Self {
        Self {
            map: HashMap::new(),
            keys: Vec::new(),
        }
    }
}

impl<K: Hash + Eq, V> OrderedMap<K, V> {
    /// Create a new empty `OrderedMap`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty map with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            map: HashMap::with_capacity(capacity),
            keys: Vec::with_capacity(capacity),
        }
    }

    /// Get the number of entries.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Check if the map is empty.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Check if `key` is present.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.map.contains_key(key)
    }

    /// Get a value by key.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.map.get(key)
    }

    /// Get a mutable reference to a value. Its position is unaffected.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.map.get_mut(key)
    }

    /// Index of `key` in insertion order, if present.
    pub fn position<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        if !self.map.contains_key(key) {
            return None;
        }
        self.keys.iter().position(|k| k.borrow() == key)
    }

    /// The order sequence itself: every key, in first-insertion order.
    pub fn ordered_keys(&self) -> &[K] {
        &self.keys
    }

    /// Remove `key` and return its value. Removing an absent key is a no-op.
    pub fn delete<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let value = self.map.remove(key)?;
        if let Some(index) = self.keys.iter().position(|k| k.borrow() == key) {
            self.keys.remove(index);
        }
        Some(value)
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.map.clear();
        self.keys.clear();
    }

    /// Remove every entry for which `predicate` returns true.
    ///
    /// The predicate sees each entry once, in order, before anything is removed,
    /// so removals can never cause an entry to be skipped or visited twice.
    pub fn delete_if<F>(&mut self, predicate: F) -> &mut Self
    where
        F: FnMut(&K, &V) -> bool,
    {
        self.reject_in_place(predicate);
        self
    }

    /// Like [`delete_if`](Self::delete_if) with a fallible predicate.
    ///
    /// The first error is returned as-is and the map is left unchanged.
    pub fn try_delete_if<E, F>(&mut self, mut predicate: F) -> std::result::Result<&mut Self, E>
    where
        F: FnMut(&K, &V) -> std::result::Result<bool, E>,
    {
        let mut doomed = Vec::new();
        for (index, (key, value)) in self.iter().enumerate() {
            if predicate(key, value)? {
                doomed.push(index);
            }
        }
        self.remove_positions(&doomed);
        Ok(self)
    }

    /// Remove every entry for which `predicate` returns true, reporting whether
    /// anything was removed.
    pub fn reject_in_place<F>(&mut self, mut predicate: F) -> bool
    where
        F: FnMut(&K, &V) -> bool,
    {
        let doomed: Vec<usize> = self
            .iter()
            .enumerate()
            .filter_map(|(index, (key, value))| predicate(key, value).then_some(index))
            .collect();
        self.remove_positions(&doomed);
        !doomed.is_empty()
    }

    /// Keep only the entries for which `predicate` returns true.
    pub fn retain<F>(&mut self, mut predicate: F)
    where
        F: FnMut(&K, &V) -> bool,
    {
        self.reject_in_place(|key, value| !predicate(key, value));
    }

    /// Drop the entries at the given (ascending) positions of the order sequence.
    fn remove_positions(&mut self, positions: &[usize]) {
        if positions.is_empty() {
            return;
        }

        let mut doomed = positions.iter().peekable();
        let mut index = 0;
        let map = &mut self.map;
        self.keys.retain(|key| {
            let remove = doomed.next_if_eq(&&index).is_some();
            index += 1;
            if remove {
                map.remove(key);
            }
            !remove
        });

        debug!(
            removed = positions.len(),
            remaining = self.keys.len(),
            "Removed entries by predicate"
        );
    }

    /// Iterate over `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(&self.keys, &self.map)
    }

    /// Iterate over `(key, &mut value)` pairs in insertion order.
    pub fn iter_mut(&mut self) -> IterMut<'_, K, V> {
        IterMut::new(&self.keys, &mut self.map)
    }

    /// Iterate over keys in insertion order.
    pub fn keys(&self) -> Keys<'_, K> {
        Keys::new(&self.keys)
    }

    /// Iterate over values in key order.
    pub fn values(&self) -> Values<'_, K, V> {
        Values::new(self.iter())
    }

    /// Iterate over mutable values in key order.
    pub fn values_mut(&mut self) -> ValuesMut<'_, K, V> {
        ValuesMut::new(self.iter_mut())
    }

    /// Compare against a value of unknown type.
    ///
    /// Only another `OrderedMap<K, V>` can be equal; anything else is simply
    /// unequal.
    ///
    /// ```
    /// use ordered_hash::OrderedMap;
    ///
    /// let map = OrderedMap::from_pairs([("a", 1)]);
    /// assert!(map.equals_any(&OrderedMap::from_pairs([("a", 1)])));
    /// assert!(!map.equals_any(&42));
    /// ```
    pub fn equals_any(&self, other: &dyn Any) -> bool
    where
        K: 'static,
        V: PartialEq + 'static,
    {
        other
            .downcast_ref::<Self>()
            .is_some_and(|other| self == other)
    }
}

impl<K: Hash + Eq + Clone, V> OrderedMap<K, V> {
    /// Build a map from key/value pairs, in the order given.
    ///
    /// A key that appears more than once keeps the position of its first
    /// occurrence and the value of its last.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
    {
        pairs.into_iter().collect()
    }

    /// Build a map from a flattened `[k1, v1, k2, v2, ...]` list.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::InvalidArgument`] if the list has an odd number of
    /// items. Nothing is built in that case.
    ///
    /// Keys and values are both converted from the one item type `T`, so a
    /// [`Document`](crate::document::Document) built this way can only hold
    /// text fields. Use [`from_pairs`](Self::from_pairs) for mixed values.
    ///
    /// ```
    /// use ordered_hash::OrderedMap;
    ///
    /// let map: OrderedMap<String, String> = OrderedMap::from_flat(["a", "1", "b", "2"]).unwrap();
    /// assert_eq!(map.get("b").map(String::as_str), Some("2"));
    ///
    /// assert!(OrderedMap::<String, String>::from_flat(["a", "1", "b"]).is_err());
    /// ```
    pub fn from_flat<T, I>(items: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        K: From<T>,
        V: From<T>,
    {
        let items: Vec<T> = items.into_iter().collect();
        if items.len() % 2 != 0 {
            debug!(count = items.len(), "Rejected flattened pair list");
            return Err(MapError::odd_item_count(items.len()).into());
        }

        let mut map = Self::with_capacity(items.len() / 2);
        let mut items = items.into_iter();
        while let (Some(key), Some(value)) = (items.next(), items.next()) {
            map.set(K::from(key), V::from(value));
        }
        Ok(map)
    }

    /// Insert or update a value.
    ///
    /// A new key is appended to the order; an existing key keeps its position
    /// and has its value replaced, which is returned.
    pub fn set(&mut self, key: K, value: V) -> Option<V> {
        match self.map.entry(key) {
            Entry::Occupied(mut entry) => Some(entry.insert(value)),
            Entry::Vacant(entry) => {
                self.keys.push(entry.key().clone());
                entry.insert(value);
                None
            }
        }
    }
}

impl<K: Hash + Eq + Clone, V: Clone> OrderedMap<K, V> {
    /// Copy the entries of any map-like source.
    ///
    /// Ordered sources keep their order. Unordered sources such as `HashMap`
    /// are copied in their own enumeration order, which is unspecified.
    pub fn from_map<S>(source: &S) -> Self
    where
        S: MapSource<K, V> + ?Sized,
    {
        let mut map = Self::new();
        map.merge_in_place(source);
        map
    }

    /// Discard the current contents and order and adopt those of `source`.
    pub fn replace<S>(&mut self, source: &S)
    where
        S: MapSource<K, V> + ?Sized,
    {
        *self = Self::from_map(source);
    }

    /// Return a new map with the entries of `other` merged into a copy of this one.
    ///
    /// Keys present in both take `other`'s value but keep their position here.
    /// Keys new to this map are appended in `other`'s order.
    ///
    /// ```
    /// use ordered_hash::OrderedMap;
    ///
    /// let left = OrderedMap::from_pairs([("a", 1), ("b", 2)]);
    /// let right = OrderedMap::from_pairs([("b", 3), ("c", 4)]);
    ///
    /// let merged = left.merge(&right);
    /// assert_eq!(merged.to_vec(), vec![("a", 1), ("b", 3), ("c", 4)]);
    /// ```
    pub fn merge<S>(&self, other: &S) -> Self
    where
        S: MapSource<K, V> + ?Sized,
    {
        let mut merged = self.clone();
        merged.merge_in_place(other);
        merged
    }

    /// Merge the entries of `other` into this map, with [`merge`](Self::merge) semantics.
    pub fn merge_in_place<S>(&mut self, other: &S) -> &mut Self
    where
        S: MapSource<K, V> + ?Sized,
    {
        if !other.is_ordered() {
            trace!("Merging from an unordered source; appended keys follow its enumeration order");
        }
        for (key, value) in other.source_iter() {
            self.set(key.clone(), value.clone());
        }
        self
    }

    /// Return a new map without the entries for which `predicate` returns true.
    pub fn reject<F>(&self, mut predicate: F) -> Self
    where
        F: FnMut(&K, &V) -> bool,
    {
        self.iter()
            .filter(|&(key, value)| !predicate(key, value))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }

    /// Export the entries as a list of pairs, in order.
    pub fn to_vec(&self) -> Vec<(K, V)> {
        self.iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }
}

impl<K, V> PartialEq for OrderedMap<K, V>
where
    K: Hash + Eq,
    V: PartialEq,
{
    /// Order-sensitive: the same pairs inserted in a different order are unequal.
    fn eq(&self, other: &Self) -> bool {
        self.keys == other.keys && self.values().eq(other.values())
    }
}

impl<K: Hash + Eq, V: Eq> Eq for OrderedMap<K, V> {}

impl<K: Hash + Eq, V: Hash> Hash for OrderedMap<K, V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len());
        for (key, value) in self {
            key.hash(state);
            value.hash(state);
        }
    }
}

impl<K, V> fmt::Debug for OrderedMap<K, V>
where
    K: Hash + Eq + fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, Q, V> Index<&Q> for OrderedMap<K, V>
where
    K: Hash + Eq + Borrow<Q>,
    Q: Hash + Eq + ?Sized,
{
    type Output = V;

    /// # Panics
    ///
    /// Panics if `key` is not present.
    fn index(&self, key: &Q) -> &V {
        &self.map[key]
    }
}

impl<K: Hash + Eq + Clone, V> FromIterator<(K, V)> for OrderedMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<K: Hash + Eq + Clone, V> Extend<(K, V)> for OrderedMap<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.set(key, value);
        }
    }
}

impl<K: Hash + Eq + Clone, V, const N: usize> From<[(K, V); N]> for OrderedMap<K, V> {
    fn from(pairs: [(K, V); N]) -> Self {
        Self::from_pairs(pairs)
    }
}

impl<K: Hash + Eq, V> IntoIterator for OrderedMap<K, V> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.keys, self.map)
    }
}

impl<'a, K: Hash + Eq, V> IntoIterator for &'a OrderedMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, K: Hash + Eq, V> IntoIterator for &'a mut OrderedMap<K, V> {
    type Item = (&'a K, &'a mut V);
    type IntoIter = IterMut<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
