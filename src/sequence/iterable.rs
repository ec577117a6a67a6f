//! The sequence capability: a multi-pass source of independent producers.

use std::fmt;
use std::ops::Range;

use crate::adapter::{DropFirstSequence, RepeatForever};

use super::{IteratorProducer, Producer, ProducerIterator, SequenceError};

/// A value that can create any number of independent producers.
///
/// Creating a producer never disturbs producers created earlier from the same
/// sequence: each traversal has its own cursor.
///
/// Some types are deliberately both a `Sequence` and a [`Producer`]
/// (for example [`RepeatForever`] and [`Naturals`](super::Naturals)). Used as a
/// producer they are a single shared cursor; asked for producers they hand out
/// fresh ones.
///
/// # Examples
///
/// ```rust
/// use lazyseq::sequence::{Producer, Sequence};
///
/// let letters = vec!['a', 'b', 'c'];
/// assert_eq!(letters.materialize(), vec!['a', 'b', 'c']);
/// assert_eq!(letters.element_count(), 3);
///
/// let mut cursor = letters.create_producer();
/// assert_eq!(cursor.next(), Some('a'));
/// ```
pub trait Sequence {
    /// The type of the values produced.
    type Item;

    /// The producer type created for each traversal.
    type Producer: Producer<Item = Self::Item>;

    /// Creates a new producer positioned at the beginning of the sequence.
    fn create_producer(&self) -> Self::Producer;

    /// Returns a lower bound on the number of elements, without traversing.
    ///
    /// May under-report; never over-reports.
    fn underestimate_count(&self) -> usize {
        0
    }

    /// Returns a standard [`Iterator`] over a fresh traversal.
    fn traverse(&self) -> ProducerIterator<Self::Producer> {
        self.create_producer().into_iterator()
    }

    /// Collects a fresh traversal into a `Vec`.
    ///
    /// Terminates only for finite sequences.
    fn materialize(&self) -> Vec<Self::Item> {
        let mut elements = Vec::with_capacity(self.underestimate_count());
        let mut producer = self.create_producer();
        while let Some(element) = producer.next() {
            elements.push(element);
        }
        elements
    }

    /// Counts the elements by traversing the sequence.
    ///
    /// Terminates only for finite sequences.
    fn element_count(&self) -> usize {
        let mut producer = self.create_producer();
        let mut count = 0;
        while producer.next().is_some() {
            count += 1;
        }
        count
    }

    /// Returns `true` if every element satisfies the predicate.
    ///
    /// Stops at the first element that does not.
    fn all<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&Self::Item) -> bool,
    {
        let mut producer = self.create_producer();
        while let Some(element) = producer.next() {
            if !predicate(&element) {
                return false;
            }
        }
        true
    }

    /// Returns a sequence whose producers skip the first `count` elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::sequence::Sequence;
    ///
    /// let tail = vec![1, 2, 3].dropping_first(2);
    /// assert_eq!(tail.materialize(), vec![3]);
    /// assert_eq!(tail.materialize(), vec![3]);
    /// ```
    fn dropping_first(self, count: usize) -> DropFirstSequence<Self>
    where
        Self: Sized,
    {
        DropFirstSequence::new(self, count)
    }

    /// Returns a sequence whose producers skip the first `count` elements,
    /// rejecting negative counts.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::InvalidArgument`] if `count` is negative.
    fn try_dropping_first(self, count: isize) -> Result<DropFirstSequence<Self>, SequenceError>
    where
        Self: Sized,
    {
        DropFirstSequence::try_new(self, count)
    }

    /// Cycles through the sequence forever.
    fn repeat_forever(self) -> RepeatForever<Self>
    where
        Self: Sized,
    {
        RepeatForever::new(self)
    }
}

// =============================================================================
// Standard Collections
// =============================================================================

impl<T: Clone> Sequence for Vec<T> {
    type Item = T;
    type Producer = IteratorProducer<std::vec::IntoIter<T>>;

    fn create_producer(&self) -> Self::Producer {
        IteratorProducer::new(self.clone().into_iter())
    }

    fn underestimate_count(&self) -> usize {
        self.len()
    }
}

impl<T: Clone, const N: usize> Sequence for [T; N] {
    type Item = T;
    type Producer = IteratorProducer<std::array::IntoIter<T, N>>;

    fn create_producer(&self) -> Self::Producer {
        IteratorProducer::new(self.clone().into_iter())
    }

    fn underestimate_count(&self) -> usize {
        N
    }
}

impl Sequence for Range<usize> {
    type Item = usize;
    type Producer = IteratorProducer<Self>;

    fn create_producer(&self) -> Self::Producer {
        IteratorProducer::new(self.clone())
    }

    fn underestimate_count(&self) -> usize {
        self.len()
    }
}

// =============================================================================
// Iterable
// =============================================================================

/// A sequence over any cloneable iterable value.
///
/// Each producer traverses a fresh clone of the iterable, which makes this
/// the natural way to use iterator chains such as `(0..n).rev()` or
/// `(0..n).step_by(2)` as sequences.
#[derive(Debug, Clone)]
pub struct Iterable<I> {
    iterable: I,
}

impl<I> Sequence for Iterable<I>
where
    I: IntoIterator + Clone,
{
    type Item = I::Item;
    type Producer = IteratorProducer<I::IntoIter>;

    fn create_producer(&self) -> Self::Producer {
        IteratorProducer::new(self.iterable.clone().into_iter())
    }

    fn underestimate_count(&self) -> usize {
        self.iterable.clone().into_iter().size_hint().0
    }
}

/// Creates a sequence from a cloneable iterable value.
///
/// # Examples
///
/// ```rust
/// use lazyseq::sequence::{Sequence, from_iterable};
///
/// let evens = from_iterable((0..10).step_by(2));
/// assert_eq!(evens.materialize(), vec![0, 2, 4, 6, 8]);
/// ```
pub const fn from_iterable<I: IntoIterator + Clone>(iterable: I) -> Iterable<I> {
    Iterable { iterable }
}

// =============================================================================
// FromFactory
// =============================================================================

/// A sequence defined by a function that creates its producers.
pub struct FromFactory<F> {
    factory: F,
}

impl<F> fmt::Debug for FromFactory<F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("FromFactory").finish_non_exhaustive()
    }
}

impl<F, P> Sequence for FromFactory<F>
where
    F: Fn() -> P,
    P: Producer,
{
    type Item = P::Item;
    type Producer = P;

    fn create_producer(&self) -> P {
        (self.factory)()
    }
}

/// Creates a sequence that calls `factory` for every traversal.
///
/// # Examples
///
/// ```rust
/// use lazyseq::sequence::{Producer, Sequence, from_factory, from_fn};
///
/// let naturals = from_factory(|| {
///     let mut current = 0;
///     from_fn(move || {
///         current += 1;
///         Some(current)
///     })
/// });
/// assert_eq!(naturals.create_producer().take(3).collect_vec(), vec![1, 2, 3]);
/// assert_eq!(naturals.create_producer().next(), Some(1));
/// ```
pub const fn from_factory<F, P>(factory: F) -> FromFactory<F>
where
    F: Fn() -> P,
    P: Producer,
{
    FromFactory { factory }
}
