// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

/// A small set of keys that keeps insertion order and counts its changes.
///
/// Keys live in a `Vec<T>` with uniqueness enforced by equality, so `T` only
/// needs [`PartialEq`]. Toggling a key appends it or removes it; remaining keys
/// never move.
///
/// Equality compares contents and order only, not the revision counter.
#[derive(Clone, Debug, Default)]
pub struct OrderedToggleSet<T> {
    items: Vec<T>,
    revision: u64,
}

impl<T> OrderedToggleSet<T> {
    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            items: Vec::new(),
            revision: 0,
        }
    }

    /// Returns `true` if the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns the keys in insertion order.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Returns an iterator over the keys in insertion order.
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Returns the current revision counter.
    ///
    /// The counter bumps only when the contents change; no-op calls leave it
    /// unchanged.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Removes all keys.
    pub fn clear(&mut self) {
        if self.items.is_empty() {
            return;
        }
        self.items.clear();
        self.bump_revision();
    }

    fn bump_revision(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

impl<T> OrderedToggleSet<T>
where
    T: PartialEq,
{
    /// Returns `true` if the set contains `key`.
    #[must_use]
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        T: PartialEq<Q>,
        Q: ?Sized,
    {
        self.items.iter().any(|k| k == key)
    }

    /// Toggles `key`: removes it if present, appends it otherwise.
    ///
    /// Returns `true` if `key` is in the set afterwards.
    pub fn toggle(&mut self, key: T) -> bool {
        self.bump_revision();
        if let Some(idx) = self.position_of(&key) {
            self.items.remove(idx);
            false
        } else {
            self.items.push(key);
            true
        }
    }

    /// Appends `key` if it is not already present.
    pub fn insert(&mut self, key: T) {
        if self.position_of(&key).is_none() {
            self.items.push(key);
            self.bump_revision();
        }
    }

    /// Removes `key` if present.
    pub fn remove(&mut self, key: &T) {
        if let Some(idx) = self.position_of(key) {
            self.items.remove(idx);
            self.bump_revision();
        }
    }

    fn position_of(&self, key: &T) -> Option<usize> {
        self.items.iter().position(|k| k == key)
    }
}

impl<T: PartialEq> PartialEq for OrderedToggleSet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<T: Eq> Eq for OrderedToggleSet<T> {}

impl<T: PartialEq> FromIterator<T> for OrderedToggleSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        for key in iter {
            set.insert(key);
        }
        set
    }
}

impl<'a, T> IntoIterator for &'a OrderedToggleSet<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
