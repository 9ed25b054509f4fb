//! Keyed distinct operators.
//!
//! - [`DistinctBy`]: keeps the first element seen for each key, globally.
//! - [`DistinctUntilChanged`]: drops an element when its key equals the key
//!   of the element right before it.
//!
//! Both keep source order and pull their input once.

use crate::comparer::{ComparerSet, EqualityComparer};
use std::fmt;
use std::iter::FusedIterator;

/// Iterator yielding the first element for every distinct key.
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct DistinctBy<I, K, F, E> {
    iter: I,
    key: F,
    seen: ComparerSet<K, E>,
}

impl<I, K, F, E> DistinctBy<I, K, F, E>
where
    I: Iterator,
    F: FnMut(&I::Item) -> K,
    E: EqualityComparer<K>,
{
    pub(crate) fn new(iter: I, key: F, eq: E) -> Self {
        Self {
            iter,
            key,
            seen: ComparerSet::new(eq),
        }
    }
}

impl<I, K, F, E> Iterator for DistinctBy<I, K, F, E>
where
    I: Iterator,
    F: FnMut(&I::Item) -> K,
    E: EqualityComparer<K>,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let item = self.iter.next()?;
            if self.seen.insert((self.key)(&item)) {
                return Some(item);
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.iter.size_hint().1)
    }
}

impl<I, K, F, E> FusedIterator for DistinctBy<I, K, F, E>
where
    I: FusedIterator,
    F: FnMut(&I::Item) -> K,
    E: EqualityComparer<K>,
{
}

impl<I: fmt::Debug, K, F, E> fmt::Debug for DistinctBy<I, K, F, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DistinctBy").field("iter", &self.iter).finish()
    }
}

/// Iterator dropping elements whose key repeats the previous element's key.
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct DistinctUntilChanged<I, K, F, E> {
    iter: I,
    key: F,
    eq: E,
    prev: Option<K>,
}

impl<I, K, F, E> DistinctUntilChanged<I, K, F, E> {
    pub(crate) const fn new(iter: I, key: F, eq: E) -> Self {
        Self {
            iter,
            key,
            eq,
            prev: None,
        }
    }
}

impl<I, K, F, E> Iterator for DistinctUntilChanged<I, K, F, E>
where
    I: Iterator,
    F: FnMut(&I::Item) -> K,
    E: EqualityComparer<K>,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let item = self.iter.next()?;
            let key = (self.key)(&item);
            if let Some(prev) = &self.prev
                && self.eq.equals(prev, &key)
            {
                continue;
            }
            self.prev = Some(key);
            return Some(item);
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lo, hi) = self.iter.size_hint();
        let lo = if self.prev.is_none() { lo.min(1) } else { 0 };
        (lo, hi)
    }
}

impl<I, K, F, E> FusedIterator for DistinctUntilChanged<I, K, F, E>
where
    I: FusedIterator,
    F: FnMut(&I::Item) -> K,
    E: EqualityComparer<K>,
{
}

impl<I: fmt::Debug, K: fmt::Debug, F, E> fmt::Debug for DistinctUntilChanged<I, K, F, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DistinctUntilChanged")
            .field("iter", &self.iter)
            .field("prev", &self.prev)
            .finish()
    }
}
