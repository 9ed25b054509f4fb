// tests/search.rs
use ironseq::testing::TestingSequence;
use ironseq::*;
use proptest::{collection::vec, prelude::*};

/// Reference search: compare every window.
fn naive_index_of(source: &[u8], pattern: &[u8]) -> Option<usize> {
    if pattern.is_empty() {
        return Some(0);
    }
    source.windows(pattern.len()).position(|w| w == pattern)
}

#[test]
fn finds_contiguous_run() {
    let source = [4, 8, 15, 16, 23, 42];
    assert_eq!(source.into_iter().index_of_sequence([15, 16, 23]), Some(2));
}

#[test]
fn skips_incomplete_earlier_overlap() {
    let source = [4, 8, 15, 16, 15, 16, 23, 42];
    assert_eq!(source.into_iter().index_of_sequence([15, 16, 23]), Some(4));
}

#[test]
fn empty_pattern_matches_at_zero() {
    assert_eq!([1, 2, 3].into_iter().index_of_sequence(Vec::<i32>::new()), Some(0));
    assert_eq!(std::iter::empty::<i32>().index_of_sequence([0i32; 0]), Some(0));
}

#[test]
fn empty_source_has_no_match() {
    assert_eq!(std::iter::empty::<i32>().index_of_sequence([1]), None);
}

#[test]
fn match_at_the_very_end() {
    assert_eq!("abcab".chars().index_of_sequence("cab".chars()), Some(2));
}

#[test]
fn repeated_prefix_patterns() {
    assert_eq!("aaab".chars().index_of_sequence("aab".chars()), Some(1));
    assert_eq!("abababc".chars().index_of_sequence("ababc".chars()), Some(2));
    assert_eq!("aabaabaaab".chars().index_of_sequence("aaab".chars()), Some(6));
}

#[test]
fn pattern_compared_by_reference() {
    let words = ["to", "be", "or", "not", "to", "be"];
    let needle = vec!["not", "to"];
    assert_eq!(words.iter().index_of_sequence(&needle), Some(3));
}

#[test]
fn custom_equality() {
    let source = ["Foo", "BAR", "baz"];
    let folded = KeyEqualityComparer::new(|s: &&str| s.to_lowercase());
    assert_eq!(
        source.into_iter().index_of_sequence_with(["bar", "BAZ"], folded),
        Some(1)
    );
}

#[test]
fn source_and_pattern_enumerated_once() {
    let source = TestingSequence::new(vec![1, 2, 3, 1, 2, 4, 9]);
    let pattern = TestingSequence::new(vec![1, 2, 4]);
    let (source_probe, pattern_probe) = (source.probe(), pattern.probe());

    assert_eq!(source.into_iter().index_of_sequence(pattern), Some(3));
    assert_eq!(source_probe.enumerations(), 1);
    assert_eq!(pattern_probe.enumerations(), 1);
    // Reading stops right after the match completes.
    assert_eq!(source_probe.pulls(), 6);
    assert!(!source_probe.finished());
}

prop_compose! {
    fn small_alphabet()(source in vec(0u8..3, 0..64), pattern in vec(0u8..3, 0..6)) -> (Vec<u8>, Vec<u8>) {
        (source, pattern)
    }
}

proptest! {
    #[test]
    fn agrees_with_window_search((source, pattern) in small_alphabet()) {
        let found = source.iter().copied().index_of_sequence(pattern.iter().copied());
        prop_assert_eq!(found, naive_index_of(&source, &pattern));
    }

    #[test]
    fn finds_planted_pattern(prefix in vec(0u8..2, 0..32), pattern in vec(0u8..2, 1..6)) {
        let mut source = prefix.clone();
        source.extend_from_slice(&pattern);
        let found = source.iter().copied().index_of_sequence(pattern.iter().copied());
        prop_assert!(found.is_some_and(|at| at <= prefix.len()));
        prop_assert_eq!(found, naive_index_of(&source, &pattern));
    }
}
