//! Fixed-size batching.
//!
//! [`SequenceExt::batch`](crate::SequenceExt::batch) groups consecutive
//! elements into buckets of at most `size` elements. Useful ahead of work
//! whose per-element cost is dominated by setup, such as bulk inserts or
//! batched lookups.

use crate::error::Result;
use crate::validation::ensure_in_range;
use std::iter::FusedIterator;

/// Largest up-front allocation for a bucket; bigger buckets grow as filled.
const MAX_PREALLOC: usize = 1024;

/// Iterator over consecutive buckets of a sequence.
///
/// Every bucket holds exactly `size` elements except possibly the last,
/// which holds the remainder. No bucket is ever empty.
#[derive(Clone, Debug)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Batch<I> {
    iter: I,
    size: usize,
    done: bool,
}

impl<I: Iterator> Batch<I> {
    pub(crate) fn new(iter: I, size: usize) -> Result<Self> {
        let size = ensure_in_range("size", size, 1, usize::MAX)?;
        Ok(Self {
            iter,
            size,
            done: false,
        })
    }

    /// Maximum number of elements per bucket.
    pub const fn size(&self) -> usize {
        self.size
    }
}

impl<I: Iterator> Iterator for Batch<I> {
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let Some(first) = self.iter.next() else {
            self.done = true;
            return None;
        };

        let mut bucket = Vec::with_capacity(self.size.min(MAX_PREALLOC));
        bucket.push(first);
        while bucket.len() < self.size {
            match self.iter.next() {
                Some(item) => bucket.push(item),
                None => {
                    self.done = true;
                    break;
                }
            }
        }
        Some(bucket)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        let (lo, hi) = self.iter.size_hint();
        (lo.div_ceil(self.size), hi.map(|h| h.div_ceil(self.size)))
    }
}

impl<I: Iterator> FusedIterator for Batch<I> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_hint_rounds_up() {
        let b = Batch::new(0..10, 4).unwrap();
        assert_eq!(b.size_hint(), (3, Some(3)));
    }

    #[test]
    fn stops_after_short_tail() {
        let mut b = Batch::new(0..5, 2).unwrap();
        assert_eq!(b.next(), Some(vec![0, 1]));
        assert_eq!(b.next(), Some(vec![2, 3]));
        assert_eq!(b.next(), Some(vec![4]));
        assert_eq!(b.next(), None);
        assert_eq!(b.size_hint(), (0, Some(0)));
    }
}
