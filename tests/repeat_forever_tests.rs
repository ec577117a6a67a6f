//! Integration tests for `RepeatForever`.

use lazyseq::prelude::*;
use rstest::rstest;

#[rstest]
fn test_independent_cursors_over_one_two_three() {
    let cycle = RepeatForever::new(vec![1, 2, 3]);
    let mut g = cycle.create_producer();
    let mut h = cycle.create_producer();

    assert_eq!(g.next(), Some(1));
    assert_eq!(h.next(), Some(1));
    assert_eq!(g.next(), Some(2));
    assert_eq!(g.next(), Some(3));
    assert_eq!(g.next(), Some(1));
    assert_eq!(h.next(), Some(2));
    assert_eq!(h.next(), Some(3));
    assert_eq!(h.next(), Some(1));
    assert_eq!(g.next(), Some(2));
}

#[rstest]
#[case(vec!['a'])]
#[case(vec!['a', 'b', 'c'])]
#[case(vec!['x', 'y', 'x', 'z'])]
fn test_two_cycle_prefix(#[case] base: Vec<char>) {
    let length = base.len();
    let prefix = RepeatForever::new(base.clone())
        .take(2 * length)
        .collect_vec();
    assert_eq!(&prefix[..length], base.as_slice());
    assert_eq!(&prefix[length..], base.as_slice());
}

#[rstest]
fn test_empty_base_yields_none_without_looping() {
    let mut cycle = RepeatForever::new(EmptyCollection::<u8>::new());
    for _ in 0..5 {
        assert_eq!(cycle.next(), None);
    }
    assert_eq!(cycle.take(10).collect_vec(), Vec::<u8>::new());
}

#[rstest]
fn test_cycles_counts_restarts() {
    let mut cycle = RepeatForever::new([1, 2]);
    let _ = cycle.by_ref().take(5).collect_vec();
    assert_eq!(cycle.cycles(), 3);
}

#[rstest]
fn test_base_is_not_consumed() {
    let cycle = RepeatForever::new(from_iterable(0..3));
    let first = cycle.create_producer().take(4).collect_vec();
    let second = cycle.create_producer().take(4).collect_vec();
    assert_eq!(first, vec![0, 1, 2, 0]);
    assert_eq!(first, second);
    assert_eq!(cycle.base().materialize(), vec![0, 1, 2]);
}

#[rstest]
fn test_repeat_forever_from_sequence_method() {
    let cycle = vec![7, 8].repeat_forever();
    assert_eq!(cycle.take(3).collect_vec(), vec![7, 8, 7]);
}

#[rstest]
fn test_zip_with_naturals() {
    let labelled = RepeatForever::new(vec!["even", "odd"])
        .zip(Naturals::new())
        .take(4)
        .collect_vec();
    assert_eq!(
        labelled,
        vec![("even", 1), ("odd", 2), ("even", 3), ("odd", 4)]
    );
}

#[rstest]
fn test_clone_continues_from_same_position() {
    let mut original = RepeatForever::new(vec![1, 2, 3]);
    let _ = original.next();
    let _ = original.next();
    let copy = original.clone();
    assert_eq!(original.take(3).collect_vec(), vec![3, 1, 2]);
    assert_eq!(copy.take(3).collect_vec(), vec![3, 1, 2]);
}
