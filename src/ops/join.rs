//! Keyed outer joins of two sequences.
//!
//! All joins are hash joins: one side (the *lookup* side) is read completely
//! into a `HashMap<K, Vec<usize>>` index on the first pull of the result, and
//! the other side (the *driving* side) is then streamed, one row at a time.
//!
//! - [`LeftJoin`]: drives with the first sequence, looks up the second;
//!   yields `(L, Option<R>)`.
//! - [`RightJoin`]: drives with the second sequence, looks up the first;
//!   yields `(Option<L>, R)`.
//! - [`FullJoin`]: drives with the first sequence, looks up the second, then
//!   yields the second sequence's unmatched rows; yields [`EitherOrBoth`].
//!
//! Output order follows the driving side; an element with several partners
//! yields one row per partner, in the lookup side's order. Keys require
//! `Eq + Hash`, and elements are cloned when they pair with more than one
//! partner.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::vec;

/// One row of a full outer join.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EitherOrBoth<L, R> {
    /// A first-sequence element with no partner.
    Left(L),
    /// A second-sequence element with no partner.
    Right(R),
    /// A matched pair.
    Both(L, R),
}

impl<L, R> EitherOrBoth<L, R> {
    /// The first-sequence side, if present.
    pub fn left(self) -> Option<L> {
        match self {
            Self::Left(l) | Self::Both(l, _) => Some(l),
            Self::Right(_) => None,
        }
    }

    /// The second-sequence side, if present.
    pub fn right(self) -> Option<R> {
        match self {
            Self::Right(r) | Self::Both(_, r) => Some(r),
            Self::Left(_) => None,
        }
    }

    /// Both sides as options.
    pub fn into_options(self) -> (Option<L>, Option<R>) {
        match self {
            Self::Left(l) => (Some(l), None),
            Self::Right(r) => (None, Some(r)),
            Self::Both(l, r) => (Some(l), Some(r)),
        }
    }
}

/// Rows of the lookup side, indexed by key.
struct Lookup<K, T> {
    rows: Vec<T>,
    index: HashMap<K, Vec<usize>>,
    matched: Vec<bool>,
}

impl<K: Eq + Hash, T> Lookup<K, T> {
    fn build<I, F>(rows: I, mut key: F) -> Self
    where
        I: IntoIterator<Item = T>,
        F: FnMut(&T) -> K,
    {
        let mut index: HashMap<K, Vec<usize>> = HashMap::new();
        let rows: Vec<T> = rows
            .into_iter()
            .enumerate()
            .map(|(i, row)| {
                index.entry(key(&row)).or_default().push(i);
                row
            })
            .collect();
        tracing::trace!(rows = rows.len(), keys = index.len(), "join lookup built");
        Self {
            matched: vec![false; rows.len()],
            rows,
            index,
        }
    }

    /// Positions of the rows matching `key`, marking them matched, along
    /// with the rows they index into.
    fn probe(&mut self, key: &K) -> (&[usize], &[T]) {
        match self.index.get(key) {
            Some(positions) => {
                for &i in positions {
                    self.matched[i] = true;
                }
                (positions, &self.rows)
            }
            None => (&[], &self.rows),
        }
    }

    fn into_unmatched(self) -> vec::IntoIter<T> {
        self.rows
            .into_iter()
            .zip(self.matched)
            .filter_map(|(row, matched)| (!matched).then_some(row))
            .collect::<Vec<_>>()
            .into_iter()
    }
}

/// A lookup side that has not been read yet.
enum Side<S, K, T> {
    Pending(S),
    Ready(Lookup<K, T>),
    Drained,
}

impl<S, K, T> Side<S, K, T>
where
    S: IntoIterator<Item = T>,
    K: Eq + Hash,
{
    fn ready<F: FnMut(&T) -> K>(&mut self, key: F) -> Option<&mut Lookup<K, T>> {
        if let Self::Pending(_) = self {
            *self = match std::mem::replace(self, Self::Drained) {
                Self::Pending(rows) => Self::Ready(Lookup::build(rows, key)),
                other => other,
            };
        }
        match self {
            Self::Ready(lookup) => Some(lookup),
            Self::Pending(_) | Self::Drained => None,
        }
    }
}

/// Iterator over a left outer join.
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct LeftJoin<I, S, K, FL, FR>
where
    I: Iterator,
    S: IntoIterator,
{
    first: I,
    second: Side<S, K, S::Item>,
    first_key: FL,
    second_key: FR,
    buffered: vec::IntoIter<(I::Item, Option<S::Item>)>,
}

impl<I, S, K, FL, FR> LeftJoin<I, S, K, FL, FR>
where
    I: Iterator,
    S: IntoIterator,
{
    pub(crate) fn new(first: I, second: S, first_key: FL, second_key: FR) -> Self {
        Self {
            first,
            second: Side::Pending(second),
            first_key,
            second_key,
            buffered: Vec::new().into_iter(),
        }
    }
}

impl<I, S, K, FL, FR> Iterator for LeftJoin<I, S, K, FL, FR>
where
    I: Iterator,
    I::Item: Clone,
    S: IntoIterator,
    S::Item: Clone,
    K: Eq + Hash,
    FL: FnMut(&I::Item) -> K,
    FR: FnMut(&S::Item) -> K,
{
    type Item = (I::Item, Option<S::Item>);

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(row) = self.buffered.next() {
            return Some(row);
        }
        let lookup = self.second.ready(&mut self.second_key)?;
        let left = self.first.next()?;
        let (positions, rows) = lookup.probe(&(self.first_key)(&left));
        match positions {
            [] => Some((left, None)),
            [only] => Some((left, Some(rows[*only].clone()))),
            [head, rest @ ..] => {
                self.buffered = rest
                    .iter()
                    .map(|&i| (left.clone(), Some(rows[i].clone())))
                    .collect::<Vec<_>>()
                    .into_iter();
                Some((left, Some(rows[*head].clone())))
            }
        }
    }
}

/// Iterator over a right outer join.
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct RightJoin<I, S, K, FL, FR>
where
    I: Iterator,
    S: IntoIterator,
{
    first: Side<I, K, I::Item>,
    second: Option<S>,
    driving: Option<S::IntoIter>,
    first_key: FL,
    second_key: FR,
    buffered: vec::IntoIter<(Option<I::Item>, S::Item)>,
}

impl<I, S, K, FL, FR> RightJoin<I, S, K, FL, FR>
where
    I: Iterator,
    S: IntoIterator,
{
    pub(crate) fn new(first: I, second: S, first_key: FL, second_key: FR) -> Self {
        Self {
            first: Side::Pending(first),
            second: Some(second),
            driving: None,
            first_key,
            second_key,
            buffered: Vec::new().into_iter(),
        }
    }
}

impl<I, S, K, FL, FR> Iterator for RightJoin<I, S, K, FL, FR>
where
    I: Iterator,
    I::Item: Clone,
    S: IntoIterator,
    S::Item: Clone,
    K: Eq + Hash,
    FL: FnMut(&I::Item) -> K,
    FR: FnMut(&S::Item) -> K,
{
    type Item = (Option<I::Item>, S::Item);

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(row) = self.buffered.next() {
            return Some(row);
        }
        let lookup = self.first.ready(&mut self.first_key)?;
        if let Some(second) = self.second.take() {
            self.driving = Some(second.into_iter());
        }
        let right = self.driving.as_mut()?.next()?;
        let (positions, rows) = lookup.probe(&(self.second_key)(&right));
        match positions {
            [] => Some((None, right)),
            [only] => Some((Some(rows[*only].clone()), right)),
            [head, rest @ ..] => {
                self.buffered = rest
                    .iter()
                    .map(|&i| (Some(rows[i].clone()), right.clone()))
                    .collect::<Vec<_>>()
                    .into_iter();
                Some((Some(rows[*head].clone()), right))
            }
        }
    }
}

/// Iterator over a full outer join.
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct FullJoin<I, S, K, FL, FR>
where
    I: Iterator,
    S: IntoIterator,
{
    first: I,
    second: Side<S, K, S::Item>,
    first_key: FL,
    second_key: FR,
    buffered: vec::IntoIter<EitherOrBoth<I::Item, S::Item>>,
    unmatched: Option<vec::IntoIter<S::Item>>,
}

impl<I, S, K, FL, FR> FullJoin<I, S, K, FL, FR>
where
    I: Iterator,
    S: IntoIterator,
{
    pub(crate) fn new(first: I, second: S, first_key: FL, second_key: FR) -> Self {
        Self {
            first,
            second: Side::Pending(second),
            first_key,
            second_key,
            buffered: Vec::new().into_iter(),
            unmatched: None,
        }
    }
}

impl<I, S, K, FL, FR> Iterator for FullJoin<I, S, K, FL, FR>
where
    I: Iterator,
    I::Item: Clone,
    S: IntoIterator,
    S::Item: Clone,
    K: Eq + Hash,
    FL: FnMut(&I::Item) -> K,
    FR: FnMut(&S::Item) -> K,
{
    type Item = EitherOrBoth<I::Item, S::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(row) = self.buffered.next() {
            return Some(row);
        }
        if let Some(unmatched) = &mut self.unmatched {
            return unmatched.next().map(EitherOrBoth::Right);
        }

        let lookup = self.second.ready(&mut self.second_key)?;
        let Some(left) = self.first.next() else {
            // First side exhausted: switch to the second side's leftovers.
            if let Side::Ready(done) = std::mem::replace(&mut self.second, Side::Drained) {
                self.unmatched = Some(done.into_unmatched());
            }
            return self.unmatched.as_mut()?.next().map(EitherOrBoth::Right);
        };

        let (positions, rows) = lookup.probe(&(self.first_key)(&left));
        match positions {
            [] => Some(EitherOrBoth::Left(left)),
            [only] => Some(EitherOrBoth::Both(left, rows[*only].clone())),
            [head, rest @ ..] => {
                self.buffered = rest
                    .iter()
                    .map(|&i| EitherOrBoth::Both(left.clone(), rows[i].clone()))
                    .collect::<Vec<_>>()
                    .into_iter();
                Some(EitherOrBoth::Both(left, rows[*head].clone()))
            }
        }
    }
}

impl<I, S, K, FL, FR> fmt::Debug for LeftJoin<I, S, K, FL, FR>
where
    I: Iterator + fmt::Debug,
    S: IntoIterator,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LeftJoin").field("first", &self.first).finish()
    }
}

impl<I, S, K, FL, FR> fmt::Debug for RightJoin<I, S, K, FL, FR>
where
    I: Iterator,
    S: IntoIterator,
    S::IntoIter: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RightJoin")
            .field("driving", &self.driving)
            .finish()
    }
}

impl<I, S, K, FL, FR> fmt::Debug for FullJoin<I, S, K, FL, FR>
where
    I: Iterator + fmt::Debug,
    S: IntoIterator,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FullJoin").field("first", &self.first).finish()
    }
}
