//! Pairing adapters.

use crate::sequence::Producer;

/// A producer that pairs every value with its zero-based position.
///
/// # Examples
///
/// ```rust
/// use lazyseq::sequence::{Producer, from_iterator};
///
/// let pairs = from_iterator(vec!['x', 'y']).enumerate().collect_vec();
/// assert_eq!(pairs, vec![(0, 'x'), (1, 'y')]);
/// ```
#[derive(Debug, Clone)]
pub struct Enumerate<P> {
    producer: P,
    index: usize,
}

impl<P: Producer> Enumerate<P> {
    /// Wraps `producer`, counting from zero.
    pub const fn new(producer: P) -> Self {
        Self { producer, index: 0 }
    }
}

impl<P: Producer> Producer for Enumerate<P> {
    type Item = (usize, P::Item);

    fn next(&mut self) -> Option<Self::Item> {
        let element = self.producer.next()?;
        let index = self.index;
        self.index += 1;
        Some((index, element))
    }

    fn minimum_remaining(&self) -> usize {
        self.producer.minimum_remaining()
    }
}

/// A producer of pairs drawn from two producers in lockstep.
///
/// Stops as soon as either side is exhausted. Once stopped, neither side is
/// pulled again.
///
/// # Examples
///
/// ```rust
/// use lazyseq::sequence::{Naturals, Producer, from_iterator};
///
/// let pairs = from_iterator(vec!["a", "b", "c"]).zip(Naturals::new()).collect_vec();
/// assert_eq!(pairs, vec![("a", 1), ("b", 2), ("c", 3)]);
/// ```
#[derive(Debug, Clone)]
pub struct Zip<A, B> {
    first: A,
    second: B,
    exhausted: bool,
}

impl<A: Producer, B: Producer> Zip<A, B> {
    /// Pairs `first` with `second`.
    pub const fn new(first: A, second: B) -> Self {
        Self {
            first,
            second,
            exhausted: false,
        }
    }
}

impl<A: Producer, B: Producer> Producer for Zip<A, B> {
    type Item = (A::Item, B::Item);

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let pair = self
            .first
            .next()
            .and_then(|left| self.second.next().map(|right| (left, right)));
        if pair.is_none() {
            self.exhausted = true;
        }
        pair
    }

    fn minimum_remaining(&self) -> usize {
        if self.exhausted {
            0
        } else {
            self.first
                .minimum_remaining()
                .min(self.second.minimum_remaining())
        }
    }
}
