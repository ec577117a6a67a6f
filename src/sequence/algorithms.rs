//! Ordering utilities written against the producer protocol.

use super::{Producer, Sequence};

/// Returns `true` if every element is less than or equal to its successor.
///
/// The check pairs a traversal with a second traversal that skips its first
/// element, so the sequence is never materialized.
///
/// # Examples
///
/// ```rust
/// use lazyseq::sequence::is_ordered;
///
/// assert!(is_ordered(&vec![1, 1, 2, 3]));
/// assert!(!is_ordered(&vec![1, 2, 1]));
/// assert!(is_ordered(&Vec::<i32>::new()));
/// ```
pub fn is_ordered<S>(sequence: &S) -> bool
where
    S: Sequence + ?Sized,
    S::Item: PartialOrd,
{
    let mut pairs = sequence
        .create_producer()
        .zip(sequence.create_producer().drop_first(1));
    while let Some((previous, next)) = pairs.next() {
        if previous > next {
            return false;
        }
    }
    true
}

/// Returns the elements that are neither the minimum nor the maximum.
///
/// Every occurrence of the extreme values is removed. An empty sequence gives
/// an empty result.
///
/// # Examples
///
/// ```rust
/// use lazyseq::sequence::without_min_max;
///
/// assert_eq!(without_min_max(&vec![3, 1, 4, 1, 5, 9, 2]), vec![3, 4, 5, 2]);
/// assert_eq!(without_min_max(&vec![7, 7]), Vec::<i32>::new());
/// ```
pub fn without_min_max<S>(sequence: &S) -> Vec<S::Item>
where
    S: Sequence + ?Sized,
    S::Item: PartialOrd + Clone,
{
    let mut producer = sequence.create_producer();
    let Some(first) = producer.next() else {
        return Vec::new();
    };

    let mut minimum = first.clone();
    let mut maximum = first;
    while let Some(element) = producer.next() {
        if element < minimum {
            minimum = element;
        } else if element > maximum {
            maximum = element;
        }
    }

    let mut result = Vec::with_capacity(sequence.underestimate_count());
    let mut producer = sequence.create_producer();
    while let Some(element) = producer.next() {
        if element != minimum && element != maximum {
            result.push(element);
        }
    }
    result
}
