//! Associative containers with zero-value reads.
//!
//! Iteration order is unspecified and changes between runs and
//! insertions. Anything that prints or compares keys should go through
//! [`AssocMap::keys_sorted`] or compare as sets.

use std::fmt;
use std::hash::Hash;

use itertools::Itertools;
use rustc_hash::FxHashMap;

#[derive(Clone)]
pub struct AssocMap<K, V> {
    entries: FxHashMap<K, V>,
}

impl<K: Eq + Hash, V: Clone + Default> AssocMap<K, V> {
    pub fn new() -> Self {
        AssocMap {
            entries: FxHashMap::default(),
        }
    }

    /// Pre-sizes the table; the length stays 0.
    pub fn with_capacity(capacity: usize) -> Self {
        AssocMap {
            entries: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The stored value, or the zero value when `key` is absent.
    pub fn get(&self, key: &K) -> V {
        self.entries.get(key).cloned().unwrap_or_default()
    }

    /// `(value, present)`, telling a stored zero apart from a missing key.
    pub fn lookup(&self, key: &K) -> (V, bool) {
        match self.entries.get(key) {
            Some(value) => (value.clone(), true),
            None => (V::default(), false),
        }
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    pub fn insert(&mut self, key: K, value: V) {
        self.entries.insert(key, value);
    }

    /// Applies `f` to the current value (zero if absent) and stores the
    /// result, the way `m[k]++` works.
    pub fn update<F: FnOnce(V) -> V>(&mut self, key: K, f: F) {
        let slot = self.entries.entry(key).or_default();
        *slot = f(std::mem::take(slot));
    }

    /// Removing a missing key does nothing.
    pub fn remove(&mut self, key: &K) {
        self.entries.remove(key);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.entries.iter()
    }

    pub fn keys_sorted(&self) -> Vec<&K>
    where
        K: Ord,
    {
        self.entries.keys().sorted().collect()
    }
}

impl<K: Eq + Hash, V: Clone + Default> Default for AssocMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash, V: PartialEq> PartialEq for AssocMap<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<K: Eq + Hash, V: Clone + Default> FromIterator<(K, V)> for AssocMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        AssocMap {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<K, V> fmt::Display for AssocMap<K, V>
where
    K: Eq + Hash + Ord + fmt::Display,
    V: Clone + Default + fmt::Display,
{
    /// Renders as `map[k:v k:v]` with keys sorted.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let body = self
            .entries
            .iter()
            .sorted_by(|a, b| a.0.cmp(b.0))
            .map(|(k, v)| format!("{k}:{v}"))
            .join(" ");
        write!(f, "map[{body}]")
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for AssocMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.entries.iter()).finish()
    }
}

/// A set built on [`AssocMap`] with unit values.
#[derive(Clone, PartialEq, Default)]
pub struct KeySet<K: Eq + Hash> {
    members: AssocMap<K, ()>,
}

impl<K: Eq + Hash> KeySet<K> {
    pub fn new() -> Self {
        KeySet {
            members: AssocMap::new(),
        }
    }

    /// Returns `false` when `key` was already present.
    pub fn insert(&mut self, key: K) -> bool {
        let fresh = !self.members.contains_key(&key);
        self.members.insert(key, ());
        fresh
    }

    pub fn contains(&self, key: &K) -> bool {
        self.members.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn sorted(&self) -> Vec<&K>
    where
        K: Ord,
    {
        self.members.keys_sorted()
    }
}

impl<K: Eq + Hash> FromIterator<K> for KeySet<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        KeySet {
            members: iter.into_iter().map(|k| (k, ())).collect(),
        }
    }
}

impl<K: Eq + Hash + fmt::Debug> fmt::Debug for KeySet<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.members.iter().map(|(k, _)| k)).finish()
    }
}
