#![cfg(feature = "persistent")]

//! Integration tests for `ConsList` and `ListIndex`.

use lazyseq::persistent::{ConsList, ListIndex};
use lazyseq::sequence::{Collection, Naturals, Producer, Sequence};
use rstest::{fixture, rstest};
use std::collections::HashSet;

#[fixture]
fn one_two_three() -> ConsList<i32> {
    ConsList::cons(1, ConsList::cons(2, ConsList::cons(3, ConsList::nil())))
}

// =============================================================================
// Structure
// =============================================================================

#[rstest]
fn test_value_at_offset_one(one_two_three: ConsList<i32>) {
    assert_eq!(one_two_three.get(1), Some(&2));
    assert_eq!(one_two_three.nth(1).first(), Some(&2));
}

#[rstest]
fn test_rest_twice_reaches_three(one_two_three: ConsList<i32>) {
    assert_eq!(one_two_three.rest().rest().first(), Some(&3));
}

#[rstest]
fn test_single_value_rest_is_empty() {
    let single = ConsList::cons("only", ConsList::nil());
    assert_eq!(single.first(), Some(&"only"));
    assert!(single.rest().is_empty());
}

#[rstest]
fn test_empty_list_rest_is_empty() {
    let empty: ConsList<i32> = ConsList::nil();
    assert!(empty.rest().is_empty());
    assert_eq!(empty.first(), None);
    assert_eq!(empty.len(), 0);
}

#[rstest]
fn test_nth_past_end_keeps_yielding_empty(one_two_three: ConsList<i32>) {
    assert!(one_two_three.nth(3).is_empty());
    assert!(one_two_three.nth(usize::MAX).is_empty());
}

#[rstest]
fn test_pattern_matching_on_cells(one_two_three: ConsList<i32>) {
    match &one_two_three {
        ConsList::Cons(cell) => {
            assert_eq!(cell.value(), &1);
            assert_eq!(cell.rest().first(), Some(&2));
        }
        ConsList::Nil => panic!("expected a non-empty list"),
    }
}

// =============================================================================
// Construction
// =============================================================================

#[rstest]
fn test_from_producer_keeps_order() {
    let list = ConsList::from_producer(Naturals::new().map(|n| n * 10).take(3));
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![10, 20, 30]);
}

#[rstest]
fn test_from_sequence_leaves_sequence_usable() {
    let source = vec![4, 5];
    let list = ConsList::from_sequence(&source);
    assert_eq!(list.materialize(), source);
}

#[rstest]
fn test_round_trip_through_list() {
    let elements = vec![3, 1, 4, 1, 5];
    let list: ConsList<i32> = elements.iter().copied().collect();
    assert_eq!(list.materialize(), elements);
    assert_eq!(list.into_iter().collect::<Vec<_>>(), elements);
}

#[rstest]
fn test_very_long_list_builds_and_drops() {
    let list = ConsList::from_producer(Naturals::new().take(500_000));
    assert_eq!(list.get(499_999), Some(&500_000));
    drop(list);
}

// =============================================================================
// Sequence and Collection
// =============================================================================

#[rstest]
fn test_producers_are_independent(one_two_three: ConsList<i32>) {
    let mut first = one_two_three.create_producer();
    let mut second = one_two_three.create_producer();
    assert_eq!(first.next(), Some(1));
    assert_eq!(first.next(), Some(2));
    assert_eq!(second.next(), Some(1));
    assert_eq!(first.next(), Some(3));
    assert_eq!(first.next(), None);
    assert_eq!(first.next(), None);
}

#[rstest]
fn test_collection_errors_out_of_range(one_two_three: ConsList<i32>) {
    assert_eq!(one_two_three.at(2), Ok(&3));
    assert!(one_two_three.at(3).is_err());
}

// =============================================================================
// Equality and Hashing
// =============================================================================

#[rstest]
fn test_equal_lists_hash_equally(one_two_three: ConsList<i32>) {
    let rebuilt: ConsList<i32> = (1..=3).collect();
    assert_eq!(one_two_three, rebuilt);

    let mut set = HashSet::new();
    set.insert(one_two_three);
    assert!(set.contains(&rebuilt));
}

#[rstest]
fn test_display_and_debug(one_two_three: ConsList<i32>) {
    assert_eq!(one_two_three.to_string(), "[1, 2, 3]");
    assert_eq!(format!("{one_two_three:?}"), "[1, 2, 3]");
    assert_eq!(ConsList::<i32>::nil().to_string(), "[]");
}

// =============================================================================
// Positions
// =============================================================================

#[rstest]
fn test_indices_pair_with_values(one_two_three: ConsList<i32>) {
    let pairs: Vec<(usize, i32)> = one_two_three
        .indices()
        .map(|index| (index.offset().unwrap(), *one_two_three.at_index(&index)))
        .collect();
    assert_eq!(pairs, vec![(0, 1), (1, 2), (2, 3)]);
}

#[rstest]
fn test_start_index_display(one_two_three: ConsList<i32>) {
    assert_eq!(one_two_three.start_index().to_string(), "([1, 2, 3], 0)");
    assert_eq!(one_two_three.end_index().to_string(), "([], -1)");
}

#[rstest]
fn test_position_reads_from_its_own_node(one_two_three: ConsList<i32>) {
    let other: ConsList<i32> = vec![10, 20].into_iter().collect();
    let index = one_two_three.position(|value| *value == 2).unwrap();
    assert_eq!(other.at_index(&index), &2);
}

#[rstest]
fn test_end_index_equals_end(one_two_three: ConsList<i32>) {
    assert_eq!(one_two_three.end_index(), ListIndex::end());
    assert_eq!(one_two_three.index_at(2).successor(), ListIndex::end());
    assert!(ConsList::<i32>::nil().start_index().is_end());
}

#[rstest]
#[should_panic(expected = "end position")]
fn test_reading_end_index_panics(one_two_three: ConsList<i32>) {
    let _ = one_two_three.at_index(&ListIndex::end());
}
