//! Extremum and single-element accessors.
//!
//! [`Extrema`] selects every element whose key is the maximum (or minimum)
//! of the sequence. It reads nothing until consumed, and then reads its source
//! exactly once.
//!
//! For an empty source, [`Extrema::first`] and [`Extrema::last`] fail with
//! [`Error::EmptySequence`]; the `_or_none` variants return `None`.

use crate::comparer::Comparer;
use crate::error::{Error, Result};
use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Direction {
    Max,
    Min,
}

/// The elements of a sequence that share its extreme key, in source order.
#[must_use = "extrema are lazy and do nothing unless consumed"]
pub struct Extrema<I, K, F, C> {
    source: I,
    key: F,
    cmp: C,
    direction: Direction,
    _key: PhantomData<fn() -> K>,
}

impl<I, K, F, C> Extrema<I, K, F, C>
where
    I: Iterator,
    F: FnMut(&I::Item) -> K,
    C: Comparer<K>,
{
    pub(crate) const fn new(source: I, key: F, cmp: C, direction: Direction) -> Self {
        Self {
            source,
            key,
            cmp,
            direction,
            _key: PhantomData,
        }
    }

    /// How `candidate` ranks against the current extreme key: `Greater` means
    /// it is more extreme.
    fn rank(&self, candidate: &K, current: &K) -> Ordering {
        match self.direction {
            Direction::Max => self.cmp.compare(candidate, current),
            Direction::Min => self.cmp.compare(current, candidate),
        }
    }

    /// Scan the source once; among ties keep the earliest element, or the
    /// latest when `keep_later_ties` is set.
    fn select(mut self, keep_later_ties: bool) -> Option<I::Item> {
        let first = self.source.next()?;
        let mut best_key = (self.key)(&first);
        let mut best = first;
        while let Some(item) = self.source.next() {
            let key = (self.key)(&item);
            match self.rank(&key, &best_key) {
                Ordering::Greater => {}
                Ordering::Equal if keep_later_ties => {}
                _ => continue,
            }
            best_key = key;
            best = item;
        }
        Some(best)
    }

    /// The first element with the extreme key.
    ///
    /// # Errors
    /// [`Error::EmptySequence`] if the source is empty.
    pub fn first(self) -> Result<I::Item> {
        self.first_or_none().ok_or(Error::EmptySequence)
    }

    /// The first element with the extreme key, or `None` for an empty source.
    pub fn first_or_none(self) -> Option<I::Item> {
        self.select(false)
    }

    /// The last element with the extreme key.
    ///
    /// # Errors
    /// [`Error::EmptySequence`] if the source is empty.
    pub fn last(self) -> Result<I::Item> {
        self.last_or_none().ok_or(Error::EmptySequence)
    }

    /// The last element with the extreme key, or `None` for an empty source.
    pub fn last_or_none(self) -> Option<I::Item> {
        self.select(true)
    }

    /// All elements with the extreme key, in source order.
    pub fn into_vec(mut self) -> Vec<I::Item> {
        let mut out = Vec::new();
        let Some(first) = self.source.next() else {
            return out;
        };
        let mut best_key = (self.key)(&first);
        out.push(first);
        while let Some(item) = self.source.next() {
            let key = (self.key)(&item);
            match self.rank(&key, &best_key) {
                Ordering::Greater => {
                    out.clear();
                    best_key = key;
                    out.push(item);
                }
                Ordering::Equal => out.push(item),
                Ordering::Less => {}
            }
        }
        out
    }
}

impl<I, K, F, C> IntoIterator for Extrema<I, K, F, C>
where
    I: Iterator,
    F: FnMut(&I::Item) -> K,
    C: Comparer<K>,
{
    type Item = I::Item;
    type IntoIter = std::vec::IntoIter<I::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_vec().into_iter()
    }
}

impl<I: fmt::Debug, K, F, C> fmt::Debug for Extrema<I, K, F, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Extrema")
            .field("source", &self.source)
            .field("direction", &self.direction)
            .finish()
    }
}

/// The only element of `iter`.
pub(crate) fn single<I: Iterator>(mut iter: I) -> Result<I::Item> {
    let first = iter.next().ok_or(Error::EmptySequence)?;
    match iter.next() {
        None => Ok(first),
        Some(_) => Err(Error::TooManyElements),
    }
}

/// The only element of `iter`, or `None` when it is empty.
pub(crate) fn single_or_none<I: Iterator>(mut iter: I) -> Result<Option<I::Item>> {
    let Some(first) = iter.next() else {
        return Ok(None);
    };
    match iter.next() {
        None => Ok(Some(first)),
        Some(_) => Err(Error::TooManyElements),
    }
}
