//! Assertions over the output of sequence operators.
//!
//! Each assertion takes anything iterable, so operator output can be passed
//! without collecting it first, and panics with both sequences in the message.

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// Assert that `actual` yields exactly `expected`, in order.
///
/// # Panics
/// At the first position where the sequences differ, or on a length mismatch.
///
/// # Example
/// ```
/// use ironseq::SequenceExt;
/// use ironseq::testing::assert_sequence_eq;
///
/// assert_sequence_eq([1, 2, 2, 3].into_iter().distinct_until_changed(), [1, 2, 3]);
/// ```
pub fn assert_sequence_eq<T, A, E>(actual: A, expected: E)
where
    T: Debug + PartialEq,
    A: IntoIterator<Item = T>,
    E: IntoIterator<Item = T>,
{
    let actual: Vec<T> = actual.into_iter().collect();
    let expected: Vec<T> = expected.into_iter().collect();

    if let Some(i) = actual.iter().zip(&expected).position(|(a, e)| a != e) {
        panic!(
            "Sequence mismatch at index {i}:\n  Expected: {:?}\n  Actual: {:?}\n  Full expected: {expected:?}\n  Full actual: {actual:?}",
            expected[i], actual[i]
        );
    }
    assert_eq!(
        actual.len(),
        expected.len(),
        "Sequence length mismatch:\n  Expected: {expected:?}\n  Actual: {actual:?}"
    );
}

/// Assert that `actual` yields the same elements as `expected`, with the same
/// multiplicities, in any order.
///
/// # Panics
/// If some element occurs a different number of times in the two sequences.
///
/// # Example
/// ```
/// use ironseq::testing::assert_same_elements;
///
/// assert_same_elements(vec![3, 1, 1, 2], vec![1, 2, 3, 1]);
/// ```
pub fn assert_same_elements<T, A, E>(actual: A, expected: E)
where
    T: Debug + Eq + Hash,
    A: IntoIterator<Item = T>,
    E: IntoIterator<Item = T>,
{
    let actual: Vec<T> = actual.into_iter().collect();
    let expected: Vec<T> = expected.into_iter().collect();

    let mut balance: HashMap<&T, isize> = HashMap::new();
    for a in &actual {
        *balance.entry(a).or_default() += 1;
    }
    for e in &expected {
        *balance.entry(e).or_default() -= 1;
    }

    let extra: Vec<_> = balance.iter().filter(|&(_, &n)| n > 0).map(|(t, _)| *t).collect();
    let missing: Vec<_> = balance.iter().filter(|&(_, &n)| n < 0).map(|(t, _)| *t).collect();
    assert!(
        extra.is_empty() && missing.is_empty(),
        "Sequence content mismatch:\n  Missing elements: {missing:?}\n  Extra elements: {extra:?}\n  Expected: {expected:?}\n  Actual: {actual:?}"
    );
}

/// Assert that every element of `actual` satisfies `predicate`.
///
/// # Panics
/// At the first element that does not.
pub fn assert_all_satisfy<T, A>(actual: A, predicate: impl Fn(&T) -> bool)
where
    T: Debug,
    A: IntoIterator<Item = T>,
{
    for (i, item) in actual.into_iter().enumerate() {
        assert!(
            predicate(&item),
            "Predicate failed for element at index {i}:\n  Element: {item:?}"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[should_panic(expected = "mismatch at index 1")]
    fn order_matters() {
        assert_sequence_eq([1, 2, 3], [1, 3, 2]);
    }

    #[test]
    #[should_panic(expected = "length mismatch")]
    fn prefix_is_not_enough() {
        assert_sequence_eq(vec![1, 2], vec![1, 2, 3]);
    }

    #[test]
    #[should_panic(expected = "content mismatch")]
    fn multiplicity_matters() {
        assert_same_elements([1, 1, 2], [1, 2, 2]);
    }
}
