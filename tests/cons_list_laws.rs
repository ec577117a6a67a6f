#![cfg(feature = "persistent")]

//! Property-based tests for `ConsList`, `ListIndex` and `ListSlice`.

use lazyseq::persistent::ConsList;
use lazyseq::sequence::{Producer, Sequence};
use proptest::prelude::*;

// =============================================================================
// Strategy for generating ConsList
// =============================================================================

/// Generates a `ConsList<i32>` with up to `max_size` elements.
fn cons_list_strategy(max_size: usize) -> impl Strategy<Value = ConsList<i32>> {
    prop::collection::vec(any::<i32>(), 0..max_size).prop_map(|vector| vector.into_iter().collect())
}

/// Generates a small `ConsList<i32>` for faster tests.
fn small_list() -> impl Strategy<Value = ConsList<i32>> {
    cons_list_strategy(24)
}

proptest! {
    // =========================================================================
    // Basic Properties
    // =========================================================================

    #[test]
    fn prop_len_matches_iter_count(list in small_list()) {
        prop_assert_eq!(list.len(), list.iter().count());
    }

    #[test]
    fn prop_is_empty_matches_len_zero(list in small_list()) {
        prop_assert_eq!(list.is_empty(), list.len() == 0);
    }

    #[test]
    fn prop_prepend_shares_rest(list in small_list(), value: i32) {
        let extended = list.prepend(value);
        prop_assert_eq!(extended.first(), Some(&value));
        prop_assert!(extended.rest().ptr_eq(&list));
        prop_assert_eq!(extended.len(), list.len() + 1);
    }

    #[test]
    fn prop_round_trip(elements in prop::collection::vec(any::<i32>(), 0..24)) {
        let list: ConsList<i32> = elements.iter().copied().collect();
        prop_assert_eq!(list.materialize(), elements.clone());
        let from_producer = ConsList::from_producer(elements.create_producer());
        prop_assert_eq!(from_producer, list);
    }

    #[test]
    fn prop_get_matches_vector(elements in prop::collection::vec(any::<i32>(), 0..24), offset in 0usize..30) {
        let list: ConsList<i32> = elements.iter().copied().collect();
        prop_assert_eq!(list.get(offset), elements.get(offset));
        let nth = list.nth(offset);
        prop_assert_eq!(nth.first(), elements.get(offset));
    }

    // =========================================================================
    // Positions
    // =========================================================================

    #[test]
    fn prop_indices_count_matches_len(list in small_list()) {
        prop_assert_eq!(list.indices().count(), list.len());
    }

    #[test]
    fn prop_index_at_matches_successor_walk(list in small_list(), offset in 0usize..30) {
        let mut walked = list.start_index();
        for _ in 0..offset {
            walked = walked.successor();
        }
        prop_assert_eq!(walked, list.index_at(offset));
    }

    // =========================================================================
    // Slices
    // =========================================================================

    #[test]
    fn prop_slice_matches_vector_range(
        elements in prop::collection::vec(any::<i32>(), 0..24),
        start in 0usize..30,
        width in 0usize..30,
    ) {
        let list: ConsList<i32> = elements.iter().copied().collect();
        let end = start + width;
        let slice = list.slice_offsets(start..end);
        let expected: Vec<i32> = elements.iter().copied().skip(start).take(width).collect();
        prop_assert_eq!(slice.materialize(), expected.clone());
        prop_assert_eq!(slice.iter().copied().collect::<Vec<_>>(), expected);
    }

    #[test]
    fn prop_slice_producer_is_sticky(list in small_list(), start in 0usize..30) {
        let slice = list.slice_offsets(start..start + 3);
        let mut producer = slice.create_producer();
        while producer.next().is_some() {}
        prop_assert!(producer.next().is_none());
        prop_assert!(producer.next().is_none());
    }
}
