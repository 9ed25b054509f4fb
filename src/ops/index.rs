//! Index tracking.

use std::iter::FusedIterator;

/// An element paired with its position in one enumeration of its source.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemWithIndex<T> {
    /// Position of the element, counted from the start offset.
    pub index: usize,
    /// The element.
    pub item: T,
}

impl<T> ItemWithIndex<T> {
    /// Pair `item` with `index`.
    pub const fn new(index: usize, item: T) -> Self {
        Self { index, item }
    }

    /// Split back into `(index, item)`.
    pub fn into_parts(self) -> (usize, T) {
        (self.index, self.item)
    }
}

impl<T> From<(usize, T)> for ItemWithIndex<T> {
    fn from((index, item): (usize, T)) -> Self {
        Self { index, item }
    }
}

/// Iterator pairing each element with its index.
///
/// Indexes never wrap: once index `usize::MAX` has been handed out the
/// iterator ends, without pulling the source again.
#[derive(Clone, Debug)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Index<I> {
    iter: I,
    next: Option<usize>,
}

impl<I> Index<I> {
    pub(crate) const fn new(iter: I, start: usize) -> Self {
        Self {
            iter,
            next: Some(start),
        }
    }

    /// Indexes still available before the counter is exhausted, or `None`
    /// when more than `usize::MAX` remain.
    fn headroom(&self) -> Option<usize> {
        match self.next {
            Some(n) => (usize::MAX - n).checked_add(1),
            None => Some(0),
        }
    }
}

impl<I: Iterator> Iterator for Index<I> {
    type Item = ItemWithIndex<I::Item>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let index = self.next?;
        let item = self.iter.next()?;
        self.next = index.checked_add(1);
        Some(ItemWithIndex { index, item })
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lo, hi) = self.iter.size_hint();
        match self.headroom() {
            Some(room) => (lo.min(room), Some(hi.map_or(room, |hi| hi.min(room)))),
            None => (lo, hi),
        }
    }
}

impl<I: ExactSizeIterator> ExactSizeIterator for Index<I> {}

impl<I: FusedIterator> FusedIterator for Index<I> {}
