//! The producer capability: a single-pass, pull-based cursor.
//!
//! A [`Producer`] is asked, one call at a time, for its next value. It answers
//! with `Some(value)` or signals exhaustion with `None`. Exhaustion is sticky:
//! once a producer has returned `None`, every later call returns `None` too.
//!
//! Every producer in this crate upholds that rule, including the ones that wrap
//! closures or foreign iterators, so callers may keep pulling past the end.

use crate::adapter::{DropFirst, Enumerate, Filter, Map, Take, Zip};

use super::SequenceError;

/// A type-erased producer.
///
/// # Examples
///
/// ```rust
/// use lazyseq::sequence::{BoxedProducer, Naturals, Once, Producer};
///
/// let mut producers: Vec<BoxedProducer<'static, u64>> =
///     vec![Naturals::new().boxed(), Once::new(42).boxed()];
/// assert_eq!(producers[0].next(), Some(1));
/// assert_eq!(producers[1].next(), Some(42));
/// ```
pub type BoxedProducer<'a, T> = Box<dyn Producer<Item = T> + 'a>;

/// A single-pass cursor that yields values on demand.
///
/// # Laws
///
/// - **Sticky exhaustion**: after the first `None`, `next` keeps returning `None`.
/// - **Lower bound**: `minimum_remaining` never reports more elements than
///   `next` will actually produce.
///
/// # Examples
///
/// ```rust
/// use lazyseq::sequence::Producer;
///
/// struct Countdown(u32);
///
/// impl Producer for Countdown {
///     type Item = u32;
///
///     fn next(&mut self) -> Option<u32> {
///         if self.0 == 0 {
///             return None;
///         }
///         self.0 -= 1;
///         Some(self.0 + 1)
///     }
/// }
///
/// assert_eq!(Countdown(3).collect_vec(), vec![3, 2, 1]);
/// ```
pub trait Producer {
    /// The type of the values produced.
    type Item;

    /// Returns the next value, or `None` once the producer is exhausted.
    fn next(&mut self) -> Option<Self::Item>;

    /// Returns a lower bound on the number of values still to come.
    ///
    /// This is an advisory hint for pre-allocation and diagnostics. It never
    /// consumes anything and may under-report, but never over-reports.
    fn minimum_remaining(&self) -> usize {
        0
    }

    /// Borrows the producer, so that adapters can drive it without taking
    /// ownership.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::sequence::{Naturals, Producer};
    ///
    /// let mut naturals = Naturals::new();
    /// let first_two = naturals.by_ref().take(2).collect_vec();
    /// assert_eq!(first_two, vec![1, 2]);
    /// assert_eq!(naturals.next(), Some(3));
    /// ```
    fn by_ref(&mut self) -> &mut Self
    where
        Self: Sized,
    {
        self
    }

    /// Skips the first `count` values.
    ///
    /// Calling `drop_first` again on the result folds the counts into a single
    /// adapter instead of nesting.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::sequence::{Producer, from_iterator};
    ///
    /// let rest = from_iterator([1, 2, 3, 4]).drop_first(1).drop_first(1);
    /// assert_eq!(rest.limit(), 2);
    /// assert_eq!(rest.collect_vec(), vec![3, 4]);
    /// ```
    fn drop_first(self, count: usize) -> DropFirst<Self>
    where
        Self: Sized,
    {
        DropFirst::new(self, count)
    }

    /// Skips the first `count` values, rejecting negative counts.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::InvalidArgument`] if `count` is negative.
    fn try_drop_first(self, count: isize) -> Result<DropFirst<Self>, SequenceError>
    where
        Self: Sized,
    {
        DropFirst::try_new(self, count)
    }

    /// Pairs every value with its zero-based position.
    fn enumerate(self) -> Enumerate<Self>
    where
        Self: Sized,
    {
        Enumerate::new(self)
    }

    /// Pairs values from two producers until either is exhausted.
    fn zip<Other>(self, other: Other) -> Zip<Self, Other>
    where
        Self: Sized,
        Other: Producer,
    {
        Zip::new(self, other)
    }

    /// Transforms every value lazily.
    fn map<B, F>(self, function: F) -> Map<Self, F>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> B,
    {
        Map::new(self, function)
    }

    /// Keeps only the values that satisfy the predicate.
    fn filter<P>(self, predicate: P) -> Filter<Self, P>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        Filter::new(self, predicate)
    }

    /// Yields at most `count` values.
    ///
    /// This is the way to bound an infinite producer before materializing it.
    fn take(self, count: usize) -> Take<Self>
    where
        Self: Sized,
    {
        Take::new(self, count)
    }

    /// Erases the concrete producer type.
    fn boxed<'a>(self) -> BoxedProducer<'a, Self::Item>
    where
        Self: Sized + 'a,
    {
        Box::new(self)
    }

    /// Bridges the producer into a standard [`Iterator`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::sequence::{Naturals, Producer};
    ///
    /// let sum: u64 = Naturals::new().take(4).into_iterator().sum();
    /// assert_eq!(sum, 10);
    /// ```
    fn into_iterator(self) -> ProducerIterator<Self>
    where
        Self: Sized,
    {
        ProducerIterator { producer: self }
    }

    /// Pulls every remaining value into a `Vec`.
    ///
    /// This terminates only for finite producers; bound infinite ones with
    /// [`take`](Producer::take) first.
    fn collect_vec(mut self) -> Vec<Self::Item>
    where
        Self: Sized,
    {
        let mut elements = Vec::with_capacity(self.minimum_remaining());
        while let Some(element) = self.next() {
            elements.push(element);
        }
        elements
    }
}

impl<P: Producer + ?Sized> Producer for &mut P {
    type Item = P::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        (**self).next()
    }

    #[inline]
    fn minimum_remaining(&self) -> usize {
        (**self).minimum_remaining()
    }
}

impl<P: Producer + ?Sized> Producer for Box<P> {
    type Item = P::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        (**self).next()
    }

    #[inline]
    fn minimum_remaining(&self) -> usize {
        (**self).minimum_remaining()
    }
}

// =============================================================================
// Iterator Bridge
// =============================================================================

/// A standard [`Iterator`] over the values of a [`Producer`].
///
/// Created by [`Producer::into_iterator`]. The iterator is fused because the
/// producer's exhaustion is sticky.
#[derive(Debug, Clone)]
pub struct ProducerIterator<P> {
    producer: P,
}

impl<P> ProducerIterator<P> {
    /// Returns the wrapped producer.
    pub fn into_inner(self) -> P {
        self.producer
    }
}

impl<P: Producer> Iterator for ProducerIterator<P> {
    type Item = P::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.producer.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.producer.minimum_remaining(), None)
    }
}

impl<P: Producer> std::iter::FusedIterator for ProducerIterator<P> {}
