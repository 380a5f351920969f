/* SPDX-FileCopyrightText: © 2024-2025 Decompollaborate */
/* SPDX-License-Identifier: MIT */

use core::{borrow::Borrow, hash::Hash};

#[cfg(not(feature = "std"))]
use alloc::collections::btree_set::{self, BTreeSet};

#[cfg(feature = "std")]
use std::collections::hash_set::{self, HashSet};

/// A set without iteration-order guarantees. See
/// [`UnorderedMap`](super::UnorderedMap).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnorderedSet<T>
where
    T: Ord + Hash + Eq,
{
    #[cfg(not(feature = "std"))]
    inner: BTreeSet<T>,
    #[cfg(feature = "std")]
    inner: HashSet<T>,
}

impl<T> UnorderedSet<T>
where
    T: Ord + Hash + Eq,
{
    pub fn new() -> Self {
        Self {
            #[cfg(not(feature = "std"))]
            inner: BTreeSet::new(),
            #[cfg(feature = "std")]
            inner: HashSet::new(),
        }
    }

    pub fn insert(&mut self, value: T) -> bool {
        self.inner.insert(value)
    }

    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord + Hash + Eq,
    {
        self.inner.contains(value)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    #[cfg(not(feature = "std"))]
    pub fn iter(&self) -> btree_set::Iter<T> {
        self.inner.iter()
    }
    #[cfg(feature = "std")]
    pub fn iter(&self) -> hash_set::Iter<T> {
        self.inner.iter()
    }
}

impl<T> Default for UnorderedSet<T>
where
    T: Ord + Hash + Eq,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> IntoIterator for &'a UnorderedSet<T>
where
    T: Ord + Hash + Eq,
{
    type Item = &'a T;
    #[cfg(not(feature = "std"))]
    type IntoIter = btree_set::Iter<'a, T>;
    #[cfg(feature = "std")]
    type IntoIter = hash_set::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
