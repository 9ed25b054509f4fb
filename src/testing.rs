//! Testing utilities for code built on ironseq operators.
//!
//! - **Instrumented inputs**: [`TestingSequence`] checks that an operator
//!   enumerates its input at most once; [`BreakingSequence`] checks that an
//!   operator reads nothing until it is pulled.
//! - **Assertions**: [`assert_sequence_eq`] (ordered),
//!   [`assert_same_elements`] (unordered, multiplicity-aware),
//!   [`assert_all_satisfy`].
//!
//! # Quick Start
//!
//! ```
//! use ironseq::*;
//! use ironseq::testing::*;
//!
//! // Building the operator must not touch the source.
//! assert_deferred(|source: BreakingSequence<i32>| source.distinct_by(|n| n % 3));
//!
//! // Running it must enumerate the source once.
//! let source = TestingSequence::new(vec![3, 4, 6, 7, 8]);
//! let probe = source.probe();
//! assert_sequence_eq(source.into_iter().distinct_by(|n| n % 3), [3, 4, 8]);
//! assert_eq!(probe.enumerations(), 1);
//! ```

pub mod assertions;
pub mod sequences;

pub use assertions::*;
pub use sequences::*;
