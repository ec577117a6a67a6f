//! Transforming, selecting and bounding adapters.

use std::fmt;

use crate::sequence::Producer;

// =============================================================================
// Map
// =============================================================================

/// A producer that applies a function to every value of another producer.
///
/// The function runs once per pulled value, at the moment it is pulled.
///
/// # Examples
///
/// ```rust
/// use lazyseq::sequence::{Naturals, Producer};
///
/// let squares = Naturals::new().map(|n| n * n).take(4).collect_vec();
/// assert_eq!(squares, vec![1, 4, 9, 16]);
/// ```
#[derive(Clone)]
pub struct Map<P, F> {
    producer: P,
    function: F,
}

impl<P, F> Map<P, F> {
    /// Wraps `producer`, transforming its values with `function`.
    pub const fn new(producer: P, function: F) -> Self {
        Self { producer, function }
    }
}

impl<P: fmt::Debug, F> fmt::Debug for Map<P, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Map")
            .field("producer", &self.producer)
            .finish_non_exhaustive()
    }
}

impl<B, P, F> Producer for Map<P, F>
where
    P: Producer,
    F: FnMut(P::Item) -> B,
{
    type Item = B;

    #[inline]
    fn next(&mut self) -> Option<B> {
        self.producer.next().map(&mut self.function)
    }

    fn minimum_remaining(&self) -> usize {
        self.producer.minimum_remaining()
    }
}

// =============================================================================
// Filter
// =============================================================================

/// A producer that keeps only the values satisfying a predicate.
///
/// # Examples
///
/// ```rust
/// use lazyseq::sequence::{Naturals, Producer};
///
/// let odds = Naturals::new().filter(|n| n % 2 == 1).take(3).collect_vec();
/// assert_eq!(odds, vec![1, 3, 5]);
/// ```
#[derive(Clone)]
pub struct Filter<P, F> {
    producer: P,
    predicate: F,
}

impl<P, F> Filter<P, F> {
    /// Wraps `producer`, keeping the values for which `predicate` holds.
    pub const fn new(producer: P, predicate: F) -> Self {
        Self {
            producer,
            predicate,
        }
    }
}

impl<P: fmt::Debug, F> fmt::Debug for Filter<P, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Filter")
            .field("producer", &self.producer)
            .finish_non_exhaustive()
    }
}

impl<P, F> Producer for Filter<P, F>
where
    P: Producer,
    F: FnMut(&P::Item) -> bool,
{
    type Item = P::Item;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(element) = self.producer.next() {
            if (self.predicate)(&element) {
                return Some(element);
            }
        }
        None
    }
}

// =============================================================================
// Take
// =============================================================================

/// A producer that yields at most `count` values of another producer.
///
/// After the last allowed value the wrapped producer is never pulled again,
/// which is what makes `take` safe on infinite producers.
///
/// # Examples
///
/// ```rust
/// use lazyseq::sequence::{Naturals, Producer};
///
/// let mut first = Naturals::new().take(2);
/// assert_eq!(first.next(), Some(1));
/// assert_eq!(first.next(), Some(2));
/// assert_eq!(first.next(), None);
/// ```
#[derive(Debug, Clone)]
pub struct Take<P> {
    producer: P,
    remaining: usize,
}

impl<P: Producer> Take<P> {
    /// Wraps `producer`, stopping after `count` values.
    pub const fn new(producer: P, count: usize) -> Self {
        Self {
            producer,
            remaining: count,
        }
    }
}

impl<P: Producer> Producer for Take<P> {
    type Item = P::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        match self.producer.next() {
            Some(element) => {
                self.remaining -= 1;
                Some(element)
            }
            None => {
                self.remaining = 0;
                None
            }
        }
    }

    fn minimum_remaining(&self) -> usize {
        self.producer.minimum_remaining().min(self.remaining)
    }
}
