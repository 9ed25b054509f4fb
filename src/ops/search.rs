//! Search for a contiguous run of elements inside a sequence.
//!
//! The source is pulled one element at a time and never buffered. The
//! pattern is read once into a `Vec`.
//!
//! The scan keeps the start offsets of every partial match still alive
//! ("prospects"), in increasing order. The earliest one is the active match.
//! At each position:
//!
//! 1. prospects whose next expected pattern element differs from the current
//!    element are dropped; when the active match is dropped, the earliest
//!    survivor takes over, and when none survives the scan restarts;
//! 2. if the current element matches the first pattern element, the current
//!    position becomes a new prospect;
//! 3. if the active match now spans the whole pattern, its start is the
//!    answer.
//!
//! All matches have the pattern's length, so the first one to complete is the
//! one with the lowest start offset.

use std::collections::VecDeque;

/// Start offset of the first occurrence of `pattern` in `source`, using `eq`
/// to compare elements (`eq(source_element, pattern_element)`).
///
/// An empty pattern matches at offset 0 without pulling `source`.
pub(crate) fn index_of_sequence_by<I, P, F>(source: I, pattern: P, mut eq: F) -> Option<usize>
where
    I: Iterator,
    P: IntoIterator,
    F: FnMut(&I::Item, &P::Item) -> bool,
{
    let pattern: Vec<P::Item> = pattern.into_iter().collect();
    let len = pattern.len();
    if len == 0 {
        return Some(0);
    }

    let mut prospects: VecDeque<usize> = VecDeque::new();
    for (p, element) in source.enumerate() {
        prospects.retain(|&start| eq(&element, &pattern[p - start]));
        if eq(&element, &pattern[0]) {
            prospects.push_back(p);
        }
        if let Some(&start) = prospects.front()
            && p - start + 1 == len
        {
            return Some(start);
        }
    }
    None
}
