//! Insertion-ordered storage with optional keys.
//!
//! [`OrderedHybridCollection`] keeps every value in the order it was added. Values can be
//! appended without identity ("sequenced") or under a key ("keyed"), in which case a
//! second insertion under the same key is either ignored or overwrites the value in place.
//!
//! # Example
//! ```
//! use sqlclause::OrderedHybridCollection;
//!
//! let mut c = OrderedHybridCollection::new();
//! c.add_sequenced("a");
//! c.add_keyed("k", "b", false);
//! c.add_keyed("k", "c", false); // ignored
//! c.add_sequenced("d");
//! c.add_keyed("k", "e", true); // overwrites in place
//!
//! assert_eq!(c.values(), &["a", "e", "d"]);
//! assert_eq!(c.index_of("k"), Some(1));
//! ```

use crate::error::{ClauseError, ClauseResult};
use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;
use std::ops::Index;

/// A sequence of values supporting both plain appends and keyed, deduplicated inserts.
///
/// Overall insertion order is preserved; a keyed overwrite keeps the original position.
/// There is no removal.
#[derive(Debug, Clone)]
pub struct OrderedHybridCollection<K, V> {
    values: Vec<V>,
    index_of_key: HashMap<K, usize>,
}

impl<K, V> Default for OrderedHybridCollection<K, V> {
    fn default() -> Self {
        Self {
            values: Vec::new(),
            index_of_key: HashMap::new(),
        }
    }
}

impl<K, V> OrderedHybridCollection<K, V> {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a value without a key.
    pub fn add_sequenced(&mut self, value: V) {
        self.values.push(value);
    }

    /// Number of values (keyed and sequenced).
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the collection holds no values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Value at `index`, or `None` when out of range.
    pub fn get(&self, index: usize) -> Option<&V> {
        self.values.get(index)
    }

    /// Value at `index`, failing with [`ClauseError::OutOfRange`] when out of range.
    pub fn try_get(&self, index: usize) -> ClauseResult<&V> {
        self.values
            .get(index)
            .ok_or_else(|| ClauseError::out_of_range(index, self.values.len()))
    }

    /// All values in insertion order.
    pub fn values(&self) -> &[V] {
        &self.values
    }

    /// Iterate over values in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, V> {
        self.values.iter()
    }
}

impl<K: Eq + Hash, V> OrderedHybridCollection<K, V> {
    /// Insert `value` under `key`.
    ///
    /// A new key appends the value. An existing key overwrites the value at its
    /// original position when `overwrite` is true and is ignored otherwise.
    /// Returns `true` if the collection changed.
    pub fn add_keyed(&mut self, key: K, value: V, overwrite: bool) -> bool {
        if let Some(&index) = self.index_of_key.get(&key) {
            if overwrite {
                self.values[index] = value;
            }
            return overwrite;
        }

        self.index_of_key.insert(key, self.values.len());
        self.values.push(value);
        true
    }

    /// Position of a keyed value. Sequenced values are not reachable by key.
    pub fn index_of<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index_of_key.get(key).copied()
    }

    /// Check if a keyed insertion under `key` has happened.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index_of_key.contains_key(key)
    }

    /// Keyed value, or `None` if the key was never used.
    pub fn get_by_key<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index_of(key).map(|index| &self.values[index])
    }

    /// Mutable keyed value.
    pub fn get_by_key_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index_of(key).map(|index| &mut self.values[index])
    }

    /// Keyed value, or `V::default()` when the key is missing.
    pub fn get_by_key_or_default<Q>(&self, key: &Q) -> V
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
        V: Default + Clone,
    {
        self.get_by_key(key).cloned().unwrap_or_default()
    }
}

impl<K, V> Index<usize> for OrderedHybridCollection<K, V> {
    type Output = V;

    fn index(&self, index: usize) -> &V {
        &self.values[index]
    }
}

impl<'a, K, V> IntoIterator for &'a OrderedHybridCollection<K, V> {
    type Item = &'a V;
    type IntoIter = std::slice::Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

impl<K, V> FromIterator<V> for OrderedHybridCollection<K, V> {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
            index_of_key: HashMap::new(),
        }
    }
}

impl<K, V> Extend<V> for OrderedHybridCollection<K, V> {
    fn extend<I: IntoIterator<Item = V>>(&mut self, iter: I) {
        self.values.extend(iter);
    }
}
