//! Integration tests for producers, sequences and their sources.

use lazyseq::prelude::*;
use rstest::rstest;

// =============================================================================
// Sticky Exhaustion
// =============================================================================

fn assert_stays_exhausted<P: Producer>(mut producer: P) {
    while producer.next().is_some() {}
    for _ in 0..3 {
        assert!(producer.next().is_none());
    }
}

#[rstest]
fn test_every_finite_producer_stays_exhausted() {
    assert_stays_exhausted(from_iterator(vec![1, 2, 3]));
    assert_stays_exhausted(Empty::<i32>::new());
    assert_stays_exhausted(Once::new(1));
    assert_stays_exhausted(Naturals::new().take(4));
    assert_stays_exhausted(from_iterator(vec![1, 2]).drop_first(5));
    assert_stays_exhausted(from_iterator(vec![1, 2]).zip(Naturals::new()));
    assert_stays_exhausted(from_iterator(vec![1, 2, 3]).filter(|n| n % 2 == 0));
    assert_stays_exhausted(from_iterator(vec![1, 2]).map(|n| n * 10).enumerate());
    assert_stays_exhausted(RepeatForever::new(Vec::<i32>::new()));
    assert_stays_exhausted(RandomProducer::new(3, 5, ScriptedSource::new(vec![1])).unwrap());
}

#[rstest]
fn test_from_fn_is_fused() {
    let mut state = 0;
    let mut producer = from_fn(|| {
        state += 1;
        (state != 2).then_some(state)
    });
    assert_eq!(producer.next(), Some(1));
    assert_eq!(producer.next(), None);
    assert_eq!(producer.next(), None);
}

// =============================================================================
// Round Trip
// =============================================================================

#[rstest]
#[case(vec![])]
#[case(vec![42])]
#[case(vec![3, 1, 4, 1, 5, 9, 2, 6])]
fn test_round_trip_through_producer(#[case] elements: Vec<i32>) {
    assert_eq!(from_iterator(elements.clone()).collect_vec(), elements);
    assert_eq!(elements.materialize(), elements);
    assert_eq!(elements.traverse().collect::<Vec<_>>(), elements);
}

// =============================================================================
// Independent Traversals
// =============================================================================

#[rstest]
fn test_iterable_producers_are_independent() {
    let squares = from_iterable((1..=4).map(|n| n * n));
    let mut first = squares.create_producer();
    let mut second = squares.create_producer();
    assert_eq!(first.next(), Some(1));
    assert_eq!(first.next(), Some(4));
    assert_eq!(second.next(), Some(1));
    assert_eq!(first.next(), Some(9));
    assert_eq!(second.next(), Some(4));
}

#[rstest]
fn test_factory_sequence_creates_fresh_producers() {
    let sequence = from_factory(|| Naturals::new().map(|n| n * 3));
    assert_eq!(sequence.create_producer().take(2).collect_vec(), vec![3, 6]);
    assert_eq!(sequence.create_producer().take(2).collect_vec(), vec![3, 6]);
}

// =============================================================================
// Composition
// =============================================================================

#[rstest]
fn test_pipeline_over_infinite_source() {
    let result = Naturals::new()
        .filter(|n| n % 3 == 0)
        .map(|n| n * 2)
        .drop_first(1)
        .take(3)
        .collect_vec();
    assert_eq!(result, vec![12, 18, 24]);
}

#[rstest]
fn test_by_ref_leaves_producer_usable() {
    let mut producer = from_iterator(vec!['a', 'b', 'c', 'd']);
    let first_two = producer.by_ref().take(2).collect_vec();
    assert_eq!(first_two, vec!['a', 'b']);
    assert_eq!(producer.collect_vec(), vec!['c', 'd']);
}

#[rstest]
fn test_boxed_producers_share_a_type() {
    let producers: Vec<BoxedProducer<'static, u64>> = vec![
        Naturals::new().take(2).boxed(),
        Empty::<u64>::new().boxed(),
        Once::new(9).boxed(),
    ];
    let flattened: Vec<u64> = producers
        .into_iter()
        .flat_map(|producer| producer.into_iterator())
        .collect();
    assert_eq!(flattened, vec![1, 2, 9]);
}

// =============================================================================
// Algorithms
// =============================================================================

#[rstest]
fn test_is_ordered_over_drop_first_sequence() {
    let sequence = vec![9, 1, 2, 3].dropping_first(1);
    assert!(is_ordered(&sequence));
    assert!(!is_ordered(&vec![9, 1, 2, 3]));
}

#[rstest]
fn test_without_min_max() {
    assert_eq!(without_min_max(&[4, 2, 8, 6]), vec![4, 6]);
    assert_eq!(without_min_max(&vec![5]), Vec::<i32>::new());
}

#[rstest]
fn test_element_count_and_all() {
    let evens = from_iterable((0..10).step_by(2));
    assert_eq!(evens.element_count(), 5);
    assert!(evens.all(|n| n % 2 == 0));
}

// =============================================================================
// Collections
// =============================================================================

#[rstest]
fn test_empty_collection_traverses_nothing() {
    let empty = EmptyCollection::<String>::new();
    assert_eq!(empty.element_count(), 0);
    assert!(empty.at(0).is_err());
}

#[rstest]
#[should_panic(expected = "EmptyCollection has no element at position 0")]
fn test_empty_collection_index_panics() {
    let empty = EmptyCollection::<String>::new();
    let _value = &empty[0];
}

#[rstest]
fn test_index_out_of_range_error_message() {
    let error = vec![1, 2].at(7).unwrap_err();
    assert_eq!(
        error.to_string(),
        "index 7 out of range for collection of length 2"
    );
}
