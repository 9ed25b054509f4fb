//! Grouping of adjacent elements that share a key.
//!
//! Unlike a hash-based group-by, a key that reappears after a different key
//! starts a new group, and no group is held back until the input ends: each
//! group is yielded as soon as the first element of the next group (or the end
//! of the input) is seen.

use crate::comparer::EqualityComparer;
use std::fmt;
use std::iter::FusedIterator;

/// A key with the run of contiguous elements that shared it.
///
/// The key is the one computed for the first element of the run.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grouping<K, T> {
    key: K,
    elements: Vec<T>,
}

impl<K, T> Grouping<K, T> {
    /// The shared key.
    pub const fn key(&self) -> &K {
        &self.key
    }

    /// Elements of the run, in source order.
    pub fn elements(&self) -> &[T] {
        &self.elements
    }

    /// Number of elements in the run. Never zero.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether the run is empty. Never true for a yielded grouping.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Split into key and elements.
    pub fn into_parts(self) -> (K, Vec<T>) {
        (self.key, self.elements)
    }
}

impl<K, T> IntoIterator for Grouping<K, T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a, K, T> IntoIterator for &'a Grouping<K, T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

/// Iterator over runs of adjacent elements with equal keys.
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct GroupAdjacent<I: Iterator, K, F, E> {
    iter: I,
    key: F,
    eq: E,
    pending: Option<(K, I::Item)>,
}

impl<I: Iterator, K, F, E> GroupAdjacent<I, K, F, E> {
    pub(crate) const fn new(iter: I, key: F, eq: E) -> Self {
        Self {
            iter,
            key,
            eq,
            pending: None,
        }
    }
}

impl<I, K, F, E> Iterator for GroupAdjacent<I, K, F, E>
where
    I: Iterator,
    F: FnMut(&I::Item) -> K,
    E: EqualityComparer<K>,
{
    type Item = Grouping<K, I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        let (key, first) = match self.pending.take() {
            Some(pending) => pending,
            None => {
                let item = self.iter.next()?;
                ((self.key)(&item), item)
            }
        };

        let mut elements = vec![first];
        for item in self.iter.by_ref() {
            let k = (self.key)(&item);
            if self.eq.equals(&key, &k) {
                elements.push(item);
            } else {
                self.pending = Some((k, item));
                break;
            }
        }
        Some(Grouping { key, elements })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lo, hi) = self.iter.size_hint();
        let extra = usize::from(self.pending.is_some());
        (
            usize::from(lo.saturating_add(extra) > 0),
            hi.and_then(|h| h.checked_add(extra)),
        )
    }
}

impl<I, K, F, E> FusedIterator for GroupAdjacent<I, K, F, E>
where
    I: FusedIterator,
    F: FnMut(&I::Item) -> K,
    E: EqualityComparer<K>,
{
}

impl<I, K, F, E> fmt::Debug for GroupAdjacent<I, K, F, E>
where
    I: Iterator + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GroupAdjacent")
            .field("iter", &self.iter)
            .field("pending", &self.pending.is_some())
            .finish()
    }
}
