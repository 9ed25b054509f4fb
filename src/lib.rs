//! # ironseq
//!
//! Lazy **sequence operators** for Rust iterators, plus a few in-place list
//! helpers and tools to flatten and rebuild hierarchies.
//!
//! ## Key Features
//!
//! - **Lazy, single-pass operators** - every operator returns an adapter that
//!   reads its input only when pulled, and reads it once
//! - **Eager validation** - bad arguments are reported when the operator is
//!   called, never halfway through iteration
//! - **Pluggable comparers** - order or match keys with the key type's own
//!   `Ord`/`Eq`, or with composable [`Comparer`] and [`EqualityComparer`] values
//! - **Hierarchies** - depth-first and breadth-first traversal without
//!   recursion, and forest reconstruction from parent-id tagged rows
//! - **List helpers** - bounds-checked swap, Fisher–Yates shuffle, read-only
//!   views
//!
//! ## Quick Start
//!
//! ```
//! use ironseq::*;
//!
//! # fn main() -> Result<()> {
//! let temps = [12, 12, 14, 9, 9, 9, 15];
//!
//! // Collapse repeats, then number what is left.
//! let steps: Vec<(usize, i32)> = temps
//!     .into_iter()
//!     .distinct_until_changed()
//!     .index_from(1)
//!     .map(ItemWithIndex::into_parts)
//!     .collect();
//! assert_eq!(steps, vec![(1, 12), (2, 14), (3, 9), (4, 15)]);
//!
//! // Hottest reading, and where a cold snap starts.
//! assert_eq!(temps.into_iter().maxima_by(|t| *t).first()?, 15);
//! assert_eq!(temps.into_iter().index_of_sequence([9, 9]), Some(3));
//! # Ok(())
//! # }
//! ```
//!
//! ## Core Concepts
//!
//! ### Operators
//!
//! All sequence operators are methods of [`SequenceExt`], implemented for
//! every [`Iterator`]:
//! - **Shaping** - [`batch`](SequenceExt::batch), [`take_every`](SequenceExt::take_every),
//!   [`index`](SequenceExt::index)
//! - **Filtering** - [`distinct_by`](SequenceExt::distinct_by),
//!   [`distinct_until_changed`](SequenceExt::distinct_until_changed)
//! - **Grouping and ranking** - [`group_adjacent`](SequenceExt::group_adjacent),
//!   [`dense_rank_by`](SequenceExt::dense_rank_by), [`rank_by`](SequenceExt::rank_by)
//! - **Joins** - [`left_join`](SequenceExt::left_join),
//!   [`right_join`](SequenceExt::right_join), [`full_join`](SequenceExt::full_join)
//! - **Accessors** - [`index_of_sequence`](SequenceExt::index_of_sequence),
//!   [`maxima_by`](SequenceExt::maxima_by), [`single`](SequenceExt::single)
//!
//! ### Comparers
//!
//! The [`comparer`] module holds the [`Comparer`] and [`EqualityComparer`]
//! traits and their building blocks ([`KeyComparer`], [`Reversed`],
//! [`ThenBy`], [`KeyEqualityComparer`], ...). Every operator that orders or
//! matches keys has a `_with` variant taking one.
//!
//! ### Hierarchies
//!
//! - [`traverse`] / [`traverse_tree`](SequenceExt::traverse_tree) - walk any
//!   forest given a children function, in [`TreeTraversalOrder`]
//! - [`build_hierarchy`] / [`HierarchyBuilder`] - rebuild a forest of
//!   [`Node`]s from rows carrying an id and a parent id
//!
//! ### Lists
//!
//! [`ListExt`] adds [`swap_at`](ListExt::swap_at), `shuffle` and
//! [`read_only`](ListExt::read_only) to slices and vectors.
//!
//! ## Errors
//!
//! Every fallible call returns [`Result`] with the crate [`Error`]. Argument
//! errors name the offending parameter ([`Error::param`]).
//!
//! ## Feature Flags
//!
//! - `serde` (default) - `Serialize`/`Deserialize` for [`ItemWithIndex`],
//!   [`Grouping`], [`EitherOrBoth`] and [`TreeTraversalOrder`]
//! - `rand` (default) - `ListExt::shuffle` and `ListExt::shuffle_with`
//!
//! ## Testing
//!
//! The [`testing`] module has instrumented sequences to check laziness and
//! single-pass behavior of your own pipelines, and assertion helpers.

pub mod comparer;
pub mod error;
pub mod list;
pub mod ops;
pub mod sequence;
pub mod testing;
pub mod tree;
pub mod validation;

pub use comparer::{
    Comparer, DefaultEquality, EqualityComparer, FnComparer, FnEqualityComparer, KeyComparer,
    KeyEqualityComparer, Natural, Reversed, ThenBy, compare_by_key, equate_by_key,
};
pub use error::{Error, Result};
pub use list::{ListExt, ReadOnlyList};
pub use ops::{
    Batch, DistinctBy, DistinctUntilChanged, EitherOrBoth, Extrema, FullJoin, GroupAdjacent,
    Grouping, Index, ItemWithIndex, LeftJoin, Rank, RightJoin, TakeEvery,
};
pub use sequence::{Identity, SequenceExt};
pub use tree::{
    Descendants, Flatten, HierarchyBuilder, HierarchyRoots, Node, NodeChildren, Traverse,
    TreeTraversalOrder, build_hierarchy, flatten_hierarchy, traverse,
};
