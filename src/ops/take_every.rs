//! Every n-th element.

use crate::error::Result;
use crate::validation::ensure_in_range;
use std::iter::FusedIterator;

/// Iterator over the elements at positions `0, step, 2 * step, ...`.
#[derive(Clone, Debug)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct TakeEvery<I> {
    iter: I,
    step: usize,
    started: bool,
}

impl<I: Iterator> TakeEvery<I> {
    pub(crate) fn new(iter: I, step: usize) -> Result<Self> {
        let step = ensure_in_range("step", step, 1, usize::MAX)?;
        Ok(Self {
            iter,
            step,
            started: false,
        })
    }
}

impl<I: Iterator> Iterator for TakeEvery<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.started {
            self.iter.nth(self.step - 1)
        } else {
            self.started = true;
            self.iter.next()
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let step = self.step;
        let count = |n: usize| {
            if self.started {
                n / step
            } else {
                n.div_ceil(step)
            }
        };
        let (lo, hi) = self.iter.size_hint();
        (count(lo), hi.map(count))
    }
}

impl<I: FusedIterator> FusedIterator for TakeEvery<I> {}
