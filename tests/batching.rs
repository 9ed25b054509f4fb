// tests/batching.rs
use anyhow::Result;
use ironseq::*;

#[test]
fn batch_splits_with_short_tail() -> Result<()> {
    let buckets: Vec<Vec<u32>> = (1..=7).batch(3)?.collect();
    assert_eq!(buckets, vec![vec![1, 2, 3], vec![4, 5, 6], vec![7]]);
    Ok(())
}

#[test]
fn batch_exact_multiple_has_no_empty_tail() -> Result<()> {
    let buckets: Vec<Vec<u32>> = (1..=6).batch(2)?.collect();
    assert_eq!(buckets.len(), 3);
    assert!(buckets.iter().all(|b| b.len() == 2));
    Ok(())
}

#[test]
fn batch_of_empty_source_is_empty() -> Result<()> {
    let mut batches = std::iter::empty::<u8>().batch(4)?;
    assert_eq!(batches.next(), None);
    assert_eq!(batches.next(), None);
    Ok(())
}

#[test]
fn batch_larger_than_source() -> Result<()> {
    let buckets: Vec<Vec<char>> = "abc".chars().batch(usize::MAX)?.collect();
    assert_eq!(buckets, vec![vec!['a', 'b', 'c']]);
    Ok(())
}

#[test]
fn batch_size_hint_counts_buckets() -> Result<()> {
    let batches = (0..10).batch(4)?;
    assert_eq!(batches.size_hint(), (3, Some(3)));
    assert_eq!(batches.size(), 4);
    Ok(())
}

#[test]
fn batch_zero_is_rejected() {
    let err = (0..3).batch(0).unwrap_err();
    assert_eq!(err.param(), Some("size"));
    assert!(matches!(err, Error::OutOfRange { .. }));
}

#[test]
fn batch_map_applies_to_each_bucket() -> Result<()> {
    let sums: Vec<u32> = (1u32..=5).batch_map(2, |b| b.iter().sum())?.collect();
    assert_eq!(sums, vec![3, 7, 5]);
    assert!((1..=5).batch_map(0, |b: Vec<u32>| b.len()).is_err());
    Ok(())
}

#[test]
fn take_every_keeps_first_and_each_step() -> Result<()> {
    let picked: Vec<u32> = (0..10).take_every(3)?.collect();
    assert_eq!(picked, vec![0, 3, 6, 9]);

    let all: Vec<u32> = (0..4).take_every(1)?.collect();
    assert_eq!(all, vec![0, 1, 2, 3]);
    Ok(())
}

#[test]
fn take_every_size_hint_is_exact_for_ranges() -> Result<()> {
    let mut it = (0..10).take_every(4)?;
    assert_eq!(it.size_hint(), (3, Some(3)));
    it.next();
    assert_eq!(it.size_hint(), (2, Some(2)));
    assert_eq!(it.count(), 2);
    Ok(())
}

#[test]
fn take_every_zero_is_rejected() {
    assert_eq!((0..3).take_every(0).unwrap_err().param(), Some("step"));
}

#[test]
fn index_counts_from_zero_or_offset() {
    let indexed: Vec<ItemWithIndex<char>> = "xyz".chars().index().collect();
    assert_eq!(
        indexed,
        vec![
            ItemWithIndex::new(0, 'x'),
            ItemWithIndex::new(1, 'y'),
            ItemWithIndex::new(2, 'z'),
        ]
    );

    let offset: Vec<(usize, char)> = "ab"
        .chars()
        .index_from(10)
        .map(ItemWithIndex::into_parts)
        .collect();
    assert_eq!(offset, vec![(10, 'a'), (11, 'b')]);
}

#[test]
fn index_is_exact_size() {
    let it = vec![1, 2, 3].into_iter().index();
    assert_eq!(it.len(), 3);
}

#[test]
fn index_from_stops_at_the_last_representable_index() {
    let near_end: Vec<(usize, u8)> = [10u8, 20, 30]
        .into_iter()
        .index_from(usize::MAX - 1)
        .map(ItemWithIndex::into_parts)
        .collect();
    assert_eq!(near_end, vec![(usize::MAX - 1, 10), (usize::MAX, 20)]);

    let mut at_end = [10u8, 20].into_iter().index_from(usize::MAX);
    assert_eq!(at_end.size_hint(), (1, Some(1)));
    assert_eq!(at_end.next(), Some(ItemWithIndex::new(usize::MAX, 10)));
    assert_eq!(at_end.size_hint(), (0, Some(0)));
    assert_eq!(at_end.next(), None);
    assert_eq!(at_end.next(), None);
}

#[test]
fn exhausted_index_leaves_the_source_alone() {
    let source = ironseq::testing::TestingSequence::new(vec!['a', 'b', 'c']);
    let probe = source.probe();
    let indexed: Vec<ItemWithIndex<char>> = source.into_iter().index_from(usize::MAX).collect();
    assert_eq!(indexed, vec![ItemWithIndex::new(usize::MAX, 'a')]);
    assert_eq!(probe.pulls(), 1);
}
