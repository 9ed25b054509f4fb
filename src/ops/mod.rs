//! Lazy sequence operators.
//!
//! Every adapter in this module is produced by a [`SequenceExt`] method. The
//! method validates its arguments immediately and returns the adapter; the
//! adapter pulls from its inputs only once it is itself pulled.
//!
//! [`SequenceExt`]: crate::SequenceExt

pub(crate) mod batch;
pub(crate) mod distinct;
pub(crate) mod extrema;
pub(crate) mod group;
pub(crate) mod index;
pub(crate) mod join;
pub(crate) mod rank;
pub(crate) mod search;
pub(crate) mod take_every;

pub use batch::Batch;
pub use distinct::{DistinctBy, DistinctUntilChanged};
pub use extrema::Extrema;
pub use group::{GroupAdjacent, Grouping};
pub use index::{Index, ItemWithIndex};
pub use join::{EitherOrBoth, FullJoin, LeftJoin, RightJoin};
pub use rank::Rank;
pub use take_every::TakeEvery;
