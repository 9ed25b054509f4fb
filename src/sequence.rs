//! The [`SequenceExt`] extension trait.
//!
//! `SequenceExt` is implemented for every [`Iterator`] and is the entry point
//! to all sequence operators of this crate:
//!
//! - **Shaping**: [`batch`](SequenceExt::batch), [`batch_map`](SequenceExt::batch_map),
//!   [`take_every`](SequenceExt::take_every), [`index`](SequenceExt::index),
//!   [`index_from`](SequenceExt::index_from)
//! - **Filtering**: [`distinct_by`](SequenceExt::distinct_by),
//!   [`distinct_until_changed`](SequenceExt::distinct_until_changed)
//! - **Grouping and ranking**: [`group_adjacent`](SequenceExt::group_adjacent),
//!   [`dense_rank_by`](SequenceExt::dense_rank_by), [`rank_by`](SequenceExt::rank_by)
//! - **Joins**: [`left_join`](SequenceExt::left_join),
//!   [`right_join`](SequenceExt::right_join), [`full_join`](SequenceExt::full_join)
//! - **Trees**: [`traverse_tree`](SequenceExt::traverse_tree)
//! - **Terminal**: [`index_of_sequence`](SequenceExt::index_of_sequence),
//!   [`maxima_by`](SequenceExt::maxima_by), [`minima_by`](SequenceExt::minima_by),
//!   [`single`](SequenceExt::single), [`single_or_none`](SequenceExt::single_or_none)
//!
//! Operators with a bounded parameter validate it when called and return a
//! [`Result`]. Operators returning a sequence read nothing from their inputs
//! until the returned adapter is pulled.
//!
//! Operators that compare keys come in two flavours: the plain one uses the
//! key type's own ordering or equality ([`Natural`], [`DefaultEquality`]), and
//! the `_with` one takes a caller comparer.
//!
//! # Example
//! ```
//! use ironseq::*;
//!
//! # fn main() -> Result<()> {
//! let readings = [3, 3, 4, 4, 4, 3, 5];
//!
//! let changes: Vec<_> = readings.into_iter().distinct_until_changed().collect();
//! assert_eq!(changes, vec![3, 4, 3, 5]);
//!
//! let pairs: Vec<Vec<i32>> = readings.into_iter().batch(2)?.collect();
//! assert_eq!(pairs, vec![vec![3, 3], vec![4, 4], vec![4, 3], vec![5]]);
//!
//! assert_eq!(readings.into_iter().index_of_sequence([4, 3]), Some(4));
//! # Ok(())
//! # }
//! ```

use crate::comparer::{Comparer, DefaultEquality, EqualityComparer, Natural};
use crate::error::Result;
use crate::ops::extrema::{self, Direction};
use crate::ops::rank::RankMode;
use crate::ops::search::index_of_sequence_by;
use crate::ops::{
    Batch, DistinctBy, DistinctUntilChanged, Extrema, FullJoin, GroupAdjacent, Index, LeftJoin,
    Rank, RightJoin, TakeEvery,
};
use crate::tree::{Traverse, TreeTraversalOrder, traverse};
use std::hash::Hash;
use std::iter::Map;

/// Key function that returns a copy of the element itself.
pub type Identity<T> = fn(&T) -> T;

/// Sequence operators for every [`Iterator`].
pub trait SequenceExt: Iterator + Sized {
    /// Split the sequence into buckets of `size` elements.
    ///
    /// The last bucket holds whatever is left and may be shorter; no bucket is
    /// ever empty.
    ///
    /// # Errors
    /// [`Error::OutOfRange`](crate::Error::OutOfRange) naming `size` if `size`
    /// is 0.
    fn batch(self, size: usize) -> Result<Batch<Self>> {
        Batch::new(self, size)
    }

    /// Split the sequence into buckets of `size` elements and map each
    /// bucket through `f`.
    ///
    /// # Errors
    /// [`Error::OutOfRange`](crate::Error::OutOfRange) naming `size` if `size`
    /// is 0.
    fn batch_map<R, F>(self, size: usize, f: F) -> Result<Map<Batch<Self>, F>>
    where
        F: FnMut(Vec<Self::Item>) -> R,
    {
        Ok(Batch::new(self, size)?.map(f))
    }

    /// Keep the first element for each distinct key, in source order.
    ///
    /// # Example
    /// ```
    /// use ironseq::SequenceExt;
    ///
    /// let words = ["apple", "avocado", "banana", "blueberry", "cherry"];
    /// let firsts: Vec<_> = words.into_iter().distinct_by(|w| w.chars().next()).collect();
    /// assert_eq!(firsts, vec!["apple", "banana", "cherry"]);
    /// ```
    fn distinct_by<K, F>(self, key: F) -> DistinctBy<Self, K, F, DefaultEquality>
    where
        K: Eq + Hash,
        F: FnMut(&Self::Item) -> K,
    {
        DistinctBy::new(self, key, DefaultEquality)
    }

    /// Like [`distinct_by`](SequenceExt::distinct_by), matching keys with `eq`.
    fn distinct_by_with<K, F, E>(self, key: F, eq: E) -> DistinctBy<Self, K, F, E>
    where
        F: FnMut(&Self::Item) -> K,
        E: EqualityComparer<K>,
    {
        DistinctBy::new(self, key, eq)
    }

    /// Drop every element equal to the element right before it.
    fn distinct_until_changed(
        self,
    ) -> DistinctUntilChanged<Self, Self::Item, Identity<Self::Item>, DefaultEquality>
    where
        Self::Item: Clone + Eq + Hash,
    {
        let identity: Identity<Self::Item> = <Self::Item as Clone>::clone;
        DistinctUntilChanged::new(self, identity, DefaultEquality)
    }

    /// Drop every element whose key equals the previous element's key.
    fn distinct_until_changed_by<K, F>(
        self,
        key: F,
    ) -> DistinctUntilChanged<Self, K, F, DefaultEquality>
    where
        K: Eq + Hash,
        F: FnMut(&Self::Item) -> K,
    {
        DistinctUntilChanged::new(self, key, DefaultEquality)
    }

    /// Like [`distinct_until_changed_by`](SequenceExt::distinct_until_changed_by),
    /// matching keys with `eq`.
    fn distinct_until_changed_by_with<K, F, E>(
        self,
        key: F,
        eq: E,
    ) -> DistinctUntilChanged<Self, K, F, E>
    where
        F: FnMut(&Self::Item) -> K,
        E: EqualityComparer<K>,
    {
        DistinctUntilChanged::new(self, key, eq)
    }

    /// Group runs of adjacent elements sharing a key.
    ///
    /// Each [`Grouping`](crate::Grouping) carries the key of the first element
    /// of its run. Equal keys that are not adjacent produce separate groups.
    ///
    /// # Example
    /// ```
    /// use ironseq::SequenceExt;
    ///
    /// let runs: Vec<(bool, Vec<i32>)> = [2, 4, 1, 3, 6]
    ///     .into_iter()
    ///     .group_adjacent(|n| n % 2 == 0)
    ///     .map(|g| g.into_parts())
    ///     .collect();
    /// assert_eq!(runs, vec![(true, vec![2, 4]), (false, vec![1, 3]), (true, vec![6])]);
    /// ```
    fn group_adjacent<K, F>(self, key: F) -> GroupAdjacent<Self, K, F, DefaultEquality>
    where
        K: Eq + Hash,
        F: FnMut(&Self::Item) -> K,
    {
        GroupAdjacent::new(self, key, DefaultEquality)
    }

    /// Like [`group_adjacent`](SequenceExt::group_adjacent), matching keys with
    /// `eq`.
    fn group_adjacent_with<K, F, E>(self, key: F, eq: E) -> GroupAdjacent<Self, K, F, E>
    where
        F: FnMut(&Self::Item) -> K,
        E: EqualityComparer<K>,
    {
        GroupAdjacent::new(self, key, eq)
    }

    /// Pair each element with its dense rank by key.
    ///
    /// Elements come out in ascending key order (stable for ties). Ranks start
    /// at 1, tied keys share a rank, and the next distinct key gets the next
    /// integer.
    fn dense_rank_by<K, F>(self, key: F) -> Rank<Self, K, F, Natural>
    where
        K: Ord,
        F: FnMut(&Self::Item) -> K,
    {
        Rank::new(self, key, Natural, RankMode::Dense)
    }

    /// Like [`dense_rank_by`](SequenceExt::dense_rank_by), ordering keys with
    /// `cmp`.
    fn dense_rank_by_with<K, F, C>(self, key: F, cmp: C) -> Rank<Self, K, F, C>
    where
        F: FnMut(&Self::Item) -> K,
        C: Comparer<K>,
    {
        Rank::new(self, key, cmp, RankMode::Dense)
    }

    /// Pair each element with its rank by key, leaving gaps after ties.
    ///
    /// The rank of a key is one more than the number of elements with a
    /// smaller key.
    ///
    /// # Example
    /// ```
    /// use ironseq::SequenceExt;
    ///
    /// let scores = [("ann", 90), ("bob", 70), ("cy", 90), ("dee", 80)];
    /// let ranked: Vec<(usize, &str)> = scores
    ///     .into_iter()
    ///     .rank_by(|&(_, score)| std::cmp::Reverse(score))
    ///     .map(|(rank, (name, _))| (rank, name))
    ///     .collect();
    /// assert_eq!(ranked, vec![(1, "ann"), (1, "cy"), (3, "dee"), (4, "bob")]);
    /// ```
    fn rank_by<K, F>(self, key: F) -> Rank<Self, K, F, Natural>
    where
        K: Ord,
        F: FnMut(&Self::Item) -> K,
    {
        Rank::new(self, key, Natural, RankMode::Sparse)
    }

    /// Like [`rank_by`](SequenceExt::rank_by), ordering keys with `cmp`.
    fn rank_by_with<K, F, C>(self, key: F, cmp: C) -> Rank<Self, K, F, C>
    where
        F: FnMut(&Self::Item) -> K,
        C: Comparer<K>,
    {
        Rank::new(self, key, cmp, RankMode::Sparse)
    }

    /// Left outer join with `second` on equal keys.
    ///
    /// Every element of this sequence appears at least once: paired with each
    /// matching element of `second`, or with `None`.
    ///
    /// # Example
    /// ```
    /// use ironseq::SequenceExt;
    ///
    /// let users = [(1, "ann"), (2, "bob")];
    /// let orders = [(1, "book"), (1, "pen")];
    /// let rows: Vec<_> = users
    ///     .into_iter()
    ///     .left_join(orders, |u| u.0, |o| o.0)
    ///     .map(|(u, o)| (u.1, o.map(|o| o.1)))
    ///     .collect();
    /// assert_eq!(rows, vec![("ann", Some("book")), ("ann", Some("pen")), ("bob", None)]);
    /// ```
    fn left_join<S, K, FL, FR>(
        self,
        second: S,
        first_key: FL,
        second_key: FR,
    ) -> LeftJoin<Self, S, K, FL, FR>
    where
        Self::Item: Clone,
        S: IntoIterator,
        S::Item: Clone,
        K: Eq + Hash,
        FL: FnMut(&Self::Item) -> K,
        FR: FnMut(&S::Item) -> K,
    {
        LeftJoin::new(self, second, first_key, second_key)
    }

    /// Right outer join with `second` on equal keys.
    ///
    /// Rows follow the order of `second`; every element of `second` appears
    /// at least once.
    fn right_join<S, K, FL, FR>(
        self,
        second: S,
        first_key: FL,
        second_key: FR,
    ) -> RightJoin<Self, S, K, FL, FR>
    where
        Self::Item: Clone,
        S: IntoIterator,
        S::Item: Clone,
        K: Eq + Hash,
        FL: FnMut(&Self::Item) -> K,
        FR: FnMut(&S::Item) -> K,
    {
        RightJoin::new(self, second, first_key, second_key)
    }

    /// Full outer join with `second` on equal keys.
    ///
    /// Rows for this sequence come first, in its order; the elements of
    /// `second` that matched nothing follow, in their order.
    fn full_join<S, K, FL, FR>(
        self,
        second: S,
        first_key: FL,
        second_key: FR,
    ) -> FullJoin<Self, S, K, FL, FR>
    where
        Self::Item: Clone,
        S: IntoIterator,
        S::Item: Clone,
        K: Eq + Hash,
        FL: FnMut(&Self::Item) -> K,
        FR: FnMut(&S::Item) -> K,
    {
        FullJoin::new(self, second, first_key, second_key)
    }

    /// Pair each element with its position, starting at 0.
    fn index(self) -> Index<Self> {
        Index::new(self, 0)
    }

    /// Pair each element with its position, starting at `start`.
    ///
    /// The sequence ends after the element given index `usize::MAX`; indexes
    /// never wrap around.
    fn index_from(self, start: usize) -> Index<Self> {
        Index::new(self, start)
    }

    /// Keep every `step`-th element, starting with the first.
    ///
    /// # Errors
    /// [`Error::OutOfRange`](crate::Error::OutOfRange) naming `step` if `step`
    /// is 0.
    fn take_every(self, step: usize) -> Result<TakeEvery<Self>> {
        TakeEvery::new(self, step)
    }

    /// Offset of the first occurrence of `pattern` as a contiguous run.
    ///
    /// Returns `Some(0)` for an empty pattern and `None` when there is no
    /// occurrence. The sequence is read one element at a time and reading
    /// stops at the end of the first match.
    ///
    /// # Example
    /// ```
    /// use ironseq::SequenceExt;
    ///
    /// let haystack = [1, 2, 1, 2, 1, 3];
    /// assert_eq!(haystack.into_iter().index_of_sequence([1, 2, 1, 3]), Some(2));
    /// assert_eq!(haystack.into_iter().index_of_sequence([3, 1]), None);
    /// ```
    fn index_of_sequence<P>(self, pattern: P) -> Option<usize>
    where
        P: IntoIterator,
        Self::Item: PartialEq<P::Item>,
    {
        index_of_sequence_by(self, pattern, |element, wanted| element == wanted)
    }

    /// Like [`index_of_sequence`](SequenceExt::index_of_sequence), matching
    /// elements with `eq`.
    fn index_of_sequence_with<P, E>(self, pattern: P, eq: E) -> Option<usize>
    where
        P: IntoIterator<Item = Self::Item>,
        E: EqualityComparer<Self::Item>,
    {
        index_of_sequence_by(self, pattern, |element, wanted| eq.equals(element, wanted))
    }

    /// The elements with the greatest key.
    ///
    /// # Example
    /// ```
    /// use ironseq::SequenceExt;
    ///
    /// # fn main() -> ironseq::Result<()> {
    /// let words = ["fig", "pear", "kiwi", "plum"];
    /// assert_eq!(words.into_iter().maxima_by(|w| w.len()).first()?, "pear");
    /// assert_eq!(words.into_iter().maxima_by(|w| w.len()).last()?, "plum");
    /// assert_eq!(words.into_iter().minima_by(|w| w.len()).into_vec(), vec!["fig"]);
    /// # Ok(())
    /// # }
    /// ```
    fn maxima_by<K, F>(self, key: F) -> Extrema<Self, K, F, Natural>
    where
        K: Ord,
        F: FnMut(&Self::Item) -> K,
    {
        Extrema::new(self, key, Natural, Direction::Max)
    }

    /// Like [`maxima_by`](SequenceExt::maxima_by), ordering keys with `cmp`.
    fn maxima_by_with<K, F, C>(self, key: F, cmp: C) -> Extrema<Self, K, F, C>
    where
        F: FnMut(&Self::Item) -> K,
        C: Comparer<K>,
    {
        Extrema::new(self, key, cmp, Direction::Max)
    }

    /// The elements with the smallest key.
    fn minima_by<K, F>(self, key: F) -> Extrema<Self, K, F, Natural>
    where
        K: Ord,
        F: FnMut(&Self::Item) -> K,
    {
        Extrema::new(self, key, Natural, Direction::Min)
    }

    /// Like [`minima_by`](SequenceExt::minima_by), ordering keys with `cmp`.
    fn minima_by_with<K, F, C>(self, key: F, cmp: C) -> Extrema<Self, K, F, C>
    where
        F: FnMut(&Self::Item) -> K,
        C: Comparer<K>,
    {
        Extrema::new(self, key, cmp, Direction::Min)
    }

    /// The only element of the sequence.
    ///
    /// # Errors
    /// [`Error::EmptySequence`](crate::Error::EmptySequence) if the sequence is
    /// empty, [`Error::TooManyElements`](crate::Error::TooManyElements) as soon
    /// as a second element is read.
    fn single(self) -> Result<Self::Item> {
        extrema::single(self)
    }

    /// The only element of the sequence, or `None` if it is empty.
    ///
    /// # Errors
    /// [`Error::TooManyElements`](crate::Error::TooManyElements) as soon as a
    /// second element is read.
    fn single_or_none(self) -> Result<Option<Self::Item>> {
        extrema::single_or_none(self)
    }

    /// Walk the forest whose roots are this sequence.
    ///
    /// See [`traverse`] for the visiting orders.
    fn traverse_tree<C, CI, P, O>(
        self,
        children: C,
        order: TreeTraversalOrder,
        project: P,
    ) -> Traverse<Self, C, CI, P>
    where
        C: FnMut(&Self::Item) -> CI,
        CI: IntoIterator<Item = Self::Item>,
        P: FnMut(Self::Item, usize) -> O,
    {
        traverse(self, children, order, project)
    }
}

impl<I: Iterator> SequenceExt for I {}
