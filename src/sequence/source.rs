//! Leaf producers: counters, empty and single-value producers, and wrappers
//! around closures and standard iterators.

use std::fmt;
use std::iter::Fuse;
use std::marker::PhantomData;

use super::{Producer, Sequence};

// =============================================================================
// IteratorProducer
// =============================================================================

/// A producer over a standard [`Iterator`].
///
/// The iterator is fused on construction, so exhaustion stays sticky even for
/// iterators that would resume after returning `None`.
#[derive(Debug, Clone)]
pub struct IteratorProducer<I> {
    iterator: Fuse<I>,
}

impl<I: Iterator> IteratorProducer<I> {
    /// Wraps an iterator.
    pub fn new(iterator: I) -> Self {
        Self {
            iterator: iterator.fuse(),
        }
    }
}

impl<I: Iterator> Producer for IteratorProducer<I> {
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.iterator.next()
    }

    fn minimum_remaining(&self) -> usize {
        self.iterator.size_hint().0
    }
}

/// Creates a producer from anything iterable.
///
/// # Examples
///
/// ```rust
/// use lazyseq::sequence::{Producer, from_iterator};
///
/// let mut producer = from_iterator(vec!["a", "b"]);
/// assert_eq!(producer.next(), Some("a"));
/// assert_eq!(producer.next(), Some("b"));
/// assert_eq!(producer.next(), None);
/// ```
pub fn from_iterator<I: IntoIterator>(iterable: I) -> IteratorProducer<I::IntoIter> {
    IteratorProducer::new(iterable.into_iter())
}

// =============================================================================
// FromFn
// =============================================================================

/// A producer that computes each value by calling a closure.
///
/// The first `None` returned by the closure ends the producer for good: the
/// closure is not called again afterwards.
pub struct FromFn<F> {
    function: F,
    exhausted: bool,
}

impl<F> fmt::Debug for FromFn<F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("FromFn")
            .field("exhausted", &self.exhausted)
            .finish_non_exhaustive()
    }
}

impl<T, F: FnMut() -> Option<T>> Producer for FromFn<F> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.exhausted {
            return None;
        }
        let element = (self.function)();
        if element.is_none() {
            self.exhausted = true;
        }
        element
    }
}

/// Creates a producer that calls `function` for every value.
///
/// # Examples
///
/// ```rust
/// use lazyseq::sequence::{Producer, from_fn};
///
/// let mut counter = 0;
/// let evens = from_fn(move || {
///     counter += 2;
///     (counter <= 6).then_some(counter)
/// });
/// assert_eq!(evens.collect_vec(), vec![2, 4, 6]);
/// ```
pub const fn from_fn<T, F: FnMut() -> Option<T>>(function: F) -> FromFn<F> {
    FromFn {
        function,
        exhausted: false,
    }
}

// =============================================================================
// Naturals
// =============================================================================

/// The natural numbers `1, 2, 3, ...`.
///
/// Used directly, `Naturals` is a producer. As a [`Sequence`], every producer
/// it creates starts again from `1`.
///
/// # Examples
///
/// ```rust
/// use lazyseq::sequence::{Naturals, Producer, Sequence};
///
/// let mut naturals = Naturals::new();
/// assert_eq!(naturals.next(), Some(1));
/// assert_eq!(naturals.next(), Some(2));
///
/// assert_eq!(naturals.create_producer().next(), Some(1));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Naturals {
    current: u64,
}

impl Naturals {
    /// Creates a producer whose first value is `1`.
    #[must_use]
    pub const fn new() -> Self {
        Self { current: 0 }
    }
}

impl Producer for Naturals {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        self.current = self.current.checked_add(1)?;
        Some(self.current)
    }

    fn minimum_remaining(&self) -> usize {
        usize::try_from(u64::MAX - self.current).unwrap_or(usize::MAX)
    }
}

impl Sequence for Naturals {
    type Item = u64;
    type Producer = Self;

    fn create_producer(&self) -> Self {
        Self::new()
    }

    fn underestimate_count(&self) -> usize {
        usize::MAX
    }
}

// =============================================================================
// Empty
// =============================================================================

/// A producer and sequence with no values.
pub struct Empty<T> {
    marker: PhantomData<fn() -> T>,
}

impl<T> Empty<T> {
    /// Creates an empty producer.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            marker: PhantomData,
        }
    }
}

impl<T> Default for Empty<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Empty<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Empty<T> {}

impl<T> fmt::Debug for Empty<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("Empty")
    }
}

impl<T> Producer for Empty<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        None
    }
}

impl<T> Sequence for Empty<T> {
    type Item = T;
    type Producer = Self;

    fn create_producer(&self) -> Self {
        Self::new()
    }
}

// =============================================================================
// Once
// =============================================================================

/// A producer that yields exactly one value.
///
/// # Examples
///
/// ```rust
/// use lazyseq::sequence::{Once, Producer};
///
/// let mut once = Once::new(1);
/// assert_eq!(once.next(), Some(1));
/// assert_eq!(once.next(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Once<T> {
    element: Option<T>,
}

impl<T> Once<T> {
    /// Creates a producer that yields `element` once.
    pub const fn new(element: T) -> Self {
        Self {
            element: Some(element),
        }
    }
}

impl<T> Producer for Once<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.element.take()
    }

    fn minimum_remaining(&self) -> usize {
        usize::from(self.element.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_naturals_start_at_one() {
        let first = Naturals::new().take(3).collect_vec();
        assert_eq!(first, vec![1, 2, 3]);
    }

    #[rstest]
    fn test_naturals_sequence_restarts() {
        let mut naturals = Naturals::new();
        let _ = naturals.next();
        let _ = naturals.next();
        assert_eq!(naturals.create_producer().next(), Some(1));
    }

    #[rstest]
    fn test_naturals_stop_at_maximum() {
        let mut naturals = Naturals {
            current: u64::MAX - 1,
        };
        assert_eq!(naturals.next(), Some(u64::MAX));
        assert_eq!(naturals.next(), None);
        assert_eq!(naturals.next(), None);
    }

    #[rstest]
    fn test_empty_is_always_exhausted() {
        let mut empty = Empty::<i32>::new();
        assert_eq!(empty.next(), None);
        assert_eq!(empty.next(), None);
    }

    #[rstest]
    fn test_once_lower_bound() {
        let mut once = Once::new("x");
        assert_eq!(once.minimum_remaining(), 1);
        let _ = once.next();
        assert_eq!(once.minimum_remaining(), 0);
    }

    #[rstest]
    fn test_from_fn_does_not_call_closure_after_exhaustion() {
        let mut calls = 0;
        let mut producer = from_fn(|| {
            calls += 1;
            None::<i32>
        });
        assert_eq!(producer.next(), None);
        assert_eq!(producer.next(), None);
        drop(producer);
        assert_eq!(calls, 1);
    }

    #[rstest]
    fn test_iterator_producer_is_sticky() {
        struct Flaky(u8);

        impl Iterator for Flaky {
            type Item = u8;

            fn next(&mut self) -> Option<u8> {
                self.0 += 1;
                (self.0 % 2 == 0).then_some(self.0)
            }
        }

        let mut producer = IteratorProducer::new(Flaky(0));
        assert_eq!(producer.next(), None);
        assert_eq!(producer.next(), None);
    }
}
