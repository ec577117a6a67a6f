//! Reordering a collection by a sequence of positions.

use std::fmt;

use crate::ReferenceCounter;
use crate::sequence::{Collection, Producer, Sequence, SequenceError};

// =============================================================================
// Permutation
// =============================================================================

/// A sequence that yields the elements of a collection in the order given by
/// a sequence of positions.
///
/// Positions may repeat and may come in any order. They are not validated up
/// front: an out-of-range position is detected by the collection when the
/// producer reaches it.
///
/// The collection is shared between all producers of the permutation, so
/// creating a producer never copies it.
///
/// # Examples
///
/// ```rust
/// use lazyseq::adapter::Permutation;
/// use lazyseq::sequence::{Sequence, from_iterable};
///
/// let digits = vec![3, 1, 4, 1, 5];
/// let evens = Permutation::new(digits, from_iterable((0..5).step_by(2)));
/// assert_eq!(evens.materialize(), vec![3, 4, 5]);
/// ```
pub struct Permutation<C, S> {
    elements: ReferenceCounter<C>,
    indices: S,
}

impl<C, S> Permutation<C, S>
where
    C: Collection,
    S: Sequence<Item = usize>,
{
    /// Creates a permutation of `elements` in the order of `indices`.
    pub fn new(elements: C, indices: S) -> Self {
        Self {
            elements: ReferenceCounter::new(elements),
            indices,
        }
    }

    /// Returns the permuted collection.
    pub fn elements(&self) -> &C {
        &self.elements
    }

    /// Returns the sequence of positions.
    pub const fn indices(&self) -> &S {
        &self.indices
    }
}

impl<C, S: Clone> Clone for Permutation<C, S> {
    fn clone(&self) -> Self {
        Self {
            elements: ReferenceCounter::clone(&self.elements),
            indices: self.indices.clone(),
        }
    }
}

impl<C: fmt::Debug, S: fmt::Debug> fmt::Debug for Permutation<C, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Permutation")
            .field("elements", &self.elements)
            .field("indices", &self.indices)
            .finish()
    }
}

impl<C, S> Sequence for Permutation<C, S>
where
    C: Collection,
    C::Element: Clone,
    S: Sequence<Item = usize>,
{
    type Item = C::Element;
    type Producer = PermutationProducer<C, S::Producer>;

    fn create_producer(&self) -> Self::Producer {
        PermutationProducer {
            elements: ReferenceCounter::clone(&self.elements),
            indices: self.indices.create_producer(),
        }
    }

    fn underestimate_count(&self) -> usize {
        self.indices.underestimate_count()
    }
}

// =============================================================================
// PermutationProducer
// =============================================================================

/// A producer that looks up each position pulled from an index producer.
///
/// Exhausting the index producer exhausts this producer.
///
/// # Examples
///
/// ```rust
/// use lazyseq::adapter::PermutationProducer;
/// use lazyseq::sequence::{Producer, from_iterator};
///
/// let mut producer = PermutationProducer::new(vec!['a', 'b'], from_iterator(vec![1, 1, 0]));
/// assert_eq!(producer.next(), Some('b'));
/// assert_eq!(producer.next(), Some('b'));
/// assert_eq!(producer.next(), Some('a'));
/// assert_eq!(producer.next(), None);
/// ```
pub struct PermutationProducer<C, I> {
    elements: ReferenceCounter<C>,
    indices: I,
}

impl<C, I> PermutationProducer<C, I>
where
    C: Collection,
    C::Element: Clone,
    I: Producer<Item = usize>,
{
    /// Creates a producer over `elements` in the order pulled from `indices`.
    pub fn new(elements: C, indices: I) -> Self {
        Self {
            elements: ReferenceCounter::new(elements),
            indices,
        }
    }

    /// Returns the next element, reporting an out-of-range position as an
    /// error instead of panicking.
    ///
    /// The offending position is consumed from the index producer, so a
    /// caller may keep pulling after an error.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::IndexOutOfRange`] if the next position is not
    /// a valid position of the collection.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::adapter::PermutationProducer;
    /// use lazyseq::sequence::{SequenceError, from_iterator};
    ///
    /// let mut producer = PermutationProducer::new(vec![10, 20], from_iterator(vec![1, 2]));
    /// assert_eq!(producer.try_next(), Ok(Some(20)));
    /// assert!(matches!(producer.try_next(), Err(SequenceError::IndexOutOfRange(_))));
    /// assert_eq!(producer.try_next(), Ok(None));
    /// ```
    pub fn try_next(&mut self) -> Result<Option<C::Element>, SequenceError> {
        self.indices
            .next()
            .map(|position| self.elements.at(position).cloned())
            .transpose()
    }
}

impl<C, I> Producer for PermutationProducer<C, I>
where
    C: Collection,
    C::Element: Clone,
    I: Producer<Item = usize>,
{
    type Item = C::Element;

    /// # Panics
    ///
    /// Panics if the next position is out of range for the collection.
    fn next(&mut self) -> Option<C::Element> {
        let position = self.indices.next()?;
        Some(self.elements.element(position).clone())
    }

    fn minimum_remaining(&self) -> usize {
        self.indices.minimum_remaining()
    }
}

impl<C, I: Clone> Clone for PermutationProducer<C, I> {
    fn clone(&self) -> Self {
        Self {
            elements: ReferenceCounter::clone(&self.elements),
            indices: self.indices.clone(),
        }
    }
}

impl<C: fmt::Debug, I: fmt::Debug> fmt::Debug for PermutationProducer<C, I> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("PermutationProducer")
            .field("elements", &self.elements)
            .field("indices", &self.indices)
            .finish()
    }
}
