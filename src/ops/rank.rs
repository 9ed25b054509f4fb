//! Dense and sparse ranking by key.
//!
//! Ranking needs to see every key before it can yield anything, so the
//! adapter buffers its whole input on the first pull. Until then, nothing is
//! read.
//!
//! Output is ordered by key (ascending under the comparer, stable for ties)
//! and each element is paired with a 1-based rank:
//!
//! | keys        | dense ranks | sparse ranks |
//! |-------------|-------------|--------------|
//! | a a b c c d | 1 1 2 3 3 4 | 1 1 3 4 4 6  |

use crate::comparer::Comparer;
use std::fmt;
use std::marker::PhantomData;
use std::vec;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum RankMode {
    Dense,
    Sparse,
}

/// Iterator over `(rank, element)` pairs in key order.
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Rank<I: Iterator, K, F, C> {
    source: Option<I>,
    ranked: Option<vec::IntoIter<(usize, I::Item)>>,
    key: F,
    cmp: C,
    mode: RankMode,
    _key: PhantomData<fn() -> K>,
}

impl<I: Iterator, K, F, C> Rank<I, K, F, C> {
    pub(crate) const fn new(iter: I, key: F, cmp: C, mode: RankMode) -> Self {
        Self {
            source: Some(iter),
            ranked: None,
            key,
            cmp,
            mode,
            _key: PhantomData,
        }
    }
}

impl<I, K, F, C> Rank<I, K, F, C>
where
    I: Iterator,
    F: FnMut(&I::Item) -> K,
    C: Comparer<K>,
{
    fn rank(&mut self, iter: &mut I) -> Vec<(usize, I::Item)> {
        let mut keyed: Vec<(K, I::Item)> = iter.map(|item| ((self.key)(&item), item)).collect();
        keyed.sort_by(|a, b| self.cmp.compare(&a.0, &b.0));

        let mut out = Vec::with_capacity(keyed.len());
        let mut prev: Option<K> = None;
        let mut rank = 0;
        for (position, (key, item)) in keyed.into_iter().enumerate() {
            let tied = prev
                .as_ref()
                .is_some_and(|p| self.cmp.compare(p, &key).is_eq());
            if !tied {
                rank = match self.mode {
                    RankMode::Dense => rank + 1,
                    RankMode::Sparse => position + 1,
                };
            }
            prev = Some(key);
            out.push((rank, item));
        }
        out
    }
}

impl<I, K, F, C> Iterator for Rank<I, K, F, C>
where
    I: Iterator,
    F: FnMut(&I::Item) -> K,
    C: Comparer<K>,
{
    type Item = (usize, I::Item);

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(mut iter) = self.source.take() {
            self.ranked = Some(self.rank(&mut iter).into_iter());
        }
        self.ranked.as_mut()?.next()
    }
}

impl<I: Iterator, K, F, C> fmt::Debug for Rank<I, K, F, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rank")
            .field("mode", &self.mode)
            .field("pending", &self.source.is_some())
            .finish()
    }
}
