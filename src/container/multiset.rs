//! A keyed container whose entries belong to any number of named subsets.
//!
//! `MultiSetContainer` stores key/value pairs like an ordered map and, on
//! top of that, tracks which named subsets ("sets") every key currently
//! belongs to. Subsets are non-disjoint: one key may carry several tags at
//! once. Two auxiliary indexes are kept consistent by every mutating
//! operation:
//!
//! - a per-key tag set (which subsets does this key belong to), and
//! - a per-tag key set (which keys does this subset contain).
//!
//! Subsets are pruned the moment their last member is removed, so
//! [`enumerate_sets`](MultiSetContainer::enumerate_sets) only ever reports
//! populated tags. Membership is idempotent: adding the same `(key, tag)`
//! pair twice is a no-op.
//!
//! The structure is not thread-safe; wrap it in a lock for concurrent
//! mutation.

use std::collections::{BTreeMap, BTreeSet, btree_map};
use std::hash::Hash;

use hashbrown::HashMap;
use itertools::{EitherOrBoth, Itertools};

use crate::debug_invariants::DebugInvariants;
use crate::error::GridBoxError;

/// Ordered keyed storage with non-disjoint named subsets.
#[derive(Clone, Debug)]
pub struct MultiSetContainer<K, V, T>
where
    K: Ord + Hash + Eq + Clone,
    T: Ord + Clone,
{
    items: BTreeMap<K, V>,
    memberships: HashMap<K, BTreeSet<T>>,
    sets: BTreeMap<T, BTreeSet<K>>,
}

impl<K, V, T> Default for MultiSetContainer<K, V, T>
where
    K: Ord + Hash + Eq + Clone,
    T: Ord + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, T> MultiSetContainer<K, V, T>
where
    K: Ord + Hash + Eq + Clone,
    T: Ord + Clone,
{
    /// Creates an empty container.
    pub fn new() -> Self {
        Self {
            items: BTreeMap::new(),
            memberships: HashMap::new(),
            sets: BTreeMap::new(),
        }
    }

    // ------------------------------------------------------------------
    // Base-map surface
    // ------------------------------------------------------------------

    /// Inserts a key/value pair, returning the previous value if any.
    /// Existing subset memberships of the key are preserved.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        self.items.insert(key, value)
    }

    /// Removes a key and its value, purging the key from every subset.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let value = self.items.remove(key)?;
        if let Some(tags) = self.memberships.remove(key) {
            for tag in tags {
                if let btree_map::Entry::Occupied(mut entry) = self.sets.entry(tag) {
                    entry.get_mut().remove(key);
                    if entry.get().is_empty() {
                        entry.remove();
                    }
                }
            }
        }
        Some(value)
    }

    /// Value stored under `key`.
    pub fn get(&self, key: &K) -> Option<&V> {
        self.items.get(key)
    }

    /// Mutable value stored under `key`.
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        self.items.get_mut(key)
    }

    /// Whether `key` is present in the base map.
    pub fn contains_key(&self, key: &K) -> bool {
        self.items.contains_key(key)
    }

    /// Number of stored key/value pairs.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the base map is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates all key/value pairs in ascending key order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.items.iter()
    }

    /// Iterates all keys in ascending order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.items.keys()
    }

    // ------------------------------------------------------------------
    // Subset membership
    // ------------------------------------------------------------------

    /// Records that `key` belongs to the subset `tag`.
    ///
    /// Returns `false` without changing anything when the key is not in the
    /// base map or is already a member of that subset.
    pub fn add_to_set(&mut self, key: &K, tag: T) -> bool {
        if !self.items.contains_key(key) {
            return false;
        }
        let newly_added = self
            .memberships
            .entry(key.clone())
            .or_default()
            .insert(tag.clone());
        if newly_added {
            self.sets.entry(tag).or_default().insert(key.clone());
        }
        newly_added
    }

    /// Removes `key` from the subset `tag`.
    ///
    /// A membership that does not exist is silently ignored (returns
    /// `false`). The subset disappears from the tag enumeration the moment
    /// its last member is removed.
    pub fn remove_from_set(&mut self, key: &K, tag: &T) -> bool {
        let Some(tags) = self.memberships.get_mut(key) else {
            return false;
        };
        if !tags.remove(tag) {
            return false;
        }
        if tags.is_empty() {
            self.memberships.remove(key);
        }
        if let btree_map::Entry::Occupied(mut entry) = self.sets.entry(tag.clone()) {
            entry.get_mut().remove(key);
            if entry.get().is_empty() {
                entry.remove();
            }
        }
        true
    }

    /// A read view over the members of subset `tag`; empty for unknown tags.
    pub fn set(&self, tag: &T) -> SetView<'_, K, V> {
        SetView {
            keys: self.sets.get(tag),
            items: &self.items,
        }
    }

    /// Number of members of subset `tag`.
    pub fn set_len(&self, tag: &T) -> usize {
        self.sets.get(tag).map_or(0, BTreeSet::len)
    }

    /// Tags the given key currently belongs to, ascending.
    pub fn tags_of(&self, key: &K) -> impl Iterator<Item = &T> {
        self.memberships.get(key).into_iter().flatten()
    }

    /// All tags with at least one member, ascending.
    pub fn enumerate_sets(&self) -> Vec<T> {
        self.sets.keys().cloned().collect()
    }

    /// Applies `f` to every member of subset `tag`, with mutable access to
    /// the stored values.
    pub fn for_each_in_set_mut(&mut self, tag: &T, mut f: impl FnMut(&K, &mut V)) {
        let Some(keys) = self.sets.get(tag) else {
            return;
        };
        for key in keys {
            if let Some(value) = self.items.get_mut(key) {
                f(key, value);
            }
        }
    }

    // ------------------------------------------------------------------
    // Set algebra over subset keys
    // ------------------------------------------------------------------

    /// Keys present in both subsets, ascending.
    pub fn set_intersection(&self, a: &T, b: &T) -> Vec<K> {
        self.merge_sets(a, b, |side| matches!(side, EitherOrBoth::Both(_, _)))
    }

    /// Keys present in either subset, ascending, without duplicates.
    pub fn set_union(&self, a: &T, b: &T) -> Vec<K> {
        self.merge_sets(a, b, |_| true)
    }

    /// Keys present in the first subset but not the second, ascending.
    pub fn set_difference(&self, a: &T, b: &T) -> Vec<K> {
        self.merge_sets(a, b, |side| matches!(side, EitherOrBoth::Left(_)))
    }

    /// Keys present in exactly one of the two subsets, ascending.
    pub fn set_symmetric_difference(&self, a: &T, b: &T) -> Vec<K> {
        self.merge_sets(a, b, |side| !matches!(side, EitherOrBoth::Both(_, _)))
    }

    /// Ordered merge over two subset key sequences; `keep` decides which
    /// merge outcomes survive.
    fn merge_sets(&self, a: &T, b: &T, keep: impl Fn(&EitherOrBoth<&K, &K>) -> bool) -> Vec<K> {
        let left = self.sets.get(a).into_iter().flatten();
        let right = self.sets.get(b).into_iter().flatten();
        left.merge_join_by(right, |x, y| x.cmp(y))
            .filter(|side| keep(side))
            .map(|side| match side {
                EitherOrBoth::Both(k, _) | EitherOrBoth::Left(k) | EitherOrBoth::Right(k) => {
                    k.clone()
                }
            })
            .collect()
    }
}

impl<K, V, T> DebugInvariants for MultiSetContainer<K, V, T>
where
    K: Ord + Hash + Eq + Clone,
    T: Ord + Clone,
{
    fn debug_assert_invariants(&self) {
        crate::debug_invariants!(self.validate_invariants(), "MultiSetContainer");
    }

    fn validate_invariants(&self) -> Result<(), GridBoxError> {
        for (key, tags) in &self.memberships {
            if !self.items.contains_key(key) {
                return Err(GridBoxError::InvariantViolation(
                    "membership index references a key missing from the base map".into(),
                ));
            }
            if tags.is_empty() {
                return Err(GridBoxError::InvariantViolation(
                    "membership index holds an empty tag set".into(),
                ));
            }
            for tag in tags {
                if !self.sets.get(tag).is_some_and(|set| set.contains(key)) {
                    return Err(GridBoxError::InvariantViolation(
                        "membership entry missing from the per-tag index".into(),
                    ));
                }
            }
        }
        for (tag, keys) in &self.sets {
            if keys.is_empty() {
                return Err(GridBoxError::InvariantViolation(
                    "per-tag index holds an empty subset".into(),
                ));
            }
            for key in keys {
                if !self
                    .memberships
                    .get(key)
                    .is_some_and(|tags| tags.contains(tag))
                {
                    return Err(GridBoxError::InvariantViolation(
                        "per-tag entry missing from the membership index".into(),
                    ));
                }
            }
        }
        Ok(())
    }
}

/// Read view over one subset's members, ascending by key.
///
/// The view is a pair of borrows and is `Copy`; iteration consumes a copy,
/// so a view can be iterated several times.
pub struct SetView<'a, K, V>
where
    K: Ord,
{
    keys: Option<&'a BTreeSet<K>>,
    items: &'a BTreeMap<K, V>,
}

impl<K, V> Clone for SetView<'_, K, V>
where
    K: Ord,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<K, V> Copy for SetView<'_, K, V> where K: Ord {}

impl<'a, K, V> SetView<'a, K, V>
where
    K: Ord,
{
    /// Whether the subset has no members.
    pub fn is_empty(&self) -> bool {
        self.keys.is_none_or(BTreeSet::is_empty)
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.keys.map_or(0, BTreeSet::len)
    }

    /// Whether `key` is a member of the subset.
    pub fn contains(&self, key: &K) -> bool {
        self.keys.is_some_and(|keys| keys.contains(key))
    }

    /// Iterates the member keys, ascending.
    pub fn keys(self) -> impl Iterator<Item = &'a K> {
        self.keys.into_iter().flatten()
    }

    /// Iterates `(key, value)` members, ascending by key.
    pub fn iter(self) -> impl Iterator<Item = (&'a K, &'a V)> {
        let items = self.items;
        self.keys
            .into_iter()
            .flatten()
            .filter_map(move |key| items.get(key).map(|value| (key, value)))
    }
}
