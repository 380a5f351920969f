/* SPDX-FileCopyrightText: © 2024-2025 Decompollaborate */
/* SPDX-License-Identifier: MIT */

use alloc::collections::btree_map::{self, BTreeMap};
use core::ops::{Add, RangeBounds};

use ::polonius_the_crab::prelude::*;

use crate::addresses::{Size, SizedAddress};

pub type Range<'a, K, V> = btree_map::Range<'a, K, V>;

/// An ordered map whose lookups may resolve to the entry *containing* the
/// queried key: an entry with a known size spans `[key, key + size)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddendedOrderedMap<K, V>
where
    K: Ord,
    V: SizedAddress,
{
    inner: BTreeMap<K, V>,
}

impl<K, V> AddendedOrderedMap<K, V>
where
    K: Ord,
    V: SizedAddress,
{
    pub const fn new() -> Self {
        Self {
            inner: BTreeMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<K, V> {
        self.inner.iter()
    }

    pub fn values(&self) -> btree_map::Values<K, V> {
        self.inner.values()
    }

    pub fn values_mut(&mut self) -> btree_map::ValuesMut<K, V> {
        self.inner.values_mut()
    }

    pub fn range<R>(&self, range: R) -> Range<'_, K, V>
    where
        R: RangeBounds<K>,
    {
        self.inner.range(range)
    }
}

impl<K, V> AddendedOrderedMap<K, V>
where
    K: Ord + Copy + Add<Size, Output = K>,
    V: SizedAddress,
{
    #[must_use]
    pub fn find(&self, key: &K, settings: FindSettings) -> Option<&V> {
        if !settings.allow_addend {
            self.inner.get(key)
        } else {
            let (other_key, v) = self.inner.range(..=key).next_back()?;

            if other_key == key {
                Some(v)
            } else if let Some(siz) = v.size() {
                if *key < *other_key + siz {
                    Some(v)
                } else {
                    None
                }
            } else if !settings.reject_sizeless_addended {
                Some(v)
            } else {
                None
            }
        }
    }

    #[must_use]
    pub fn find_mut(&mut self, key: &K, settings: FindSettings) -> Option<&mut V> {
        if !settings.allow_addend {
            self.inner.get_mut(key)
        } else {
            let (other_key, v) = self.inner.range_mut(..=key).next_back()?;

            if other_key == key {
                Some(v)
            } else if let Some(siz) = v.size() {
                if *key < *other_key + siz {
                    Some(v)
                } else {
                    None
                }
            } else if !settings.reject_sizeless_addended {
                Some(v)
            } else {
                None
            }
        }
    }

    /// Find the entry containing `key`, inserting a fresh one if none does.
    ///
    /// Also reports whether the entry was just created.
    pub fn find_mut_or_insert_with<F>(
        &mut self,
        key: K,
        settings: FindSettings,
        default: F,
    ) -> (&mut V, bool)
    where
        F: FnOnce() -> (K, V),
    {
        let mut slf = self;

        // The plain "match find_mut" formulation trips the current borrow
        // checker, so go through polonius.
        polonius!(|slf| -> (&'polonius mut V, bool) {
            if let Some(x) = slf.find_mut(&key, settings) {
                polonius_return!((x, false));
            }
        });

        let (k, v) = default();
        (slf.inner.entry(k).or_insert(v), true)
    }
}

impl<K, V> Default for AddendedOrderedMap<K, V>
where
    K: Ord,
    V: SizedAddress,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, K, V> IntoIterator for &'a AddendedOrderedMap<K, V>
where
    K: Ord,
    V: SizedAddress,
{
    type Item = (&'a K, &'a V);
    type IntoIter = btree_map::Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct FindSettings {
    allow_addend: bool,
    reject_sizeless_addended: bool,
}

impl FindSettings {
    pub const fn new(allow_addend: bool) -> Self {
        Self {
            allow_addend,
            reject_sizeless_addended: true,
        }
    }

    pub const fn with_allow_addend(self, allow_addend: bool) -> Self {
        Self {
            allow_addend,
            ..self
        }
    }

    pub const fn with_reject_sizeless_addended(self, reject_sizeless_addended: bool) -> Self {
        Self {
            reject_sizeless_addended,
            ..self
        }
    }

    pub const fn allow_addend(&self) -> bool {
        self.allow_addend
    }
}
