//! Positional lookup over finite collections.

use std::fmt;
use std::marker::PhantomData;
use std::ops::Index;

use super::{Empty, Sequence, SequenceError};

/// A finite collection whose elements can be looked up by position.
///
/// Adapters such as [`Permutation`](crate::adapter::Permutation) forward
/// positions to a collection without validating them; the collection is where
/// an out-of-range position is detected.
///
/// # Examples
///
/// ```rust
/// use lazyseq::sequence::{Collection, SequenceError};
///
/// let numbers = vec![10, 20, 30];
/// assert_eq!(numbers.lookup(1), Some(&20));
/// assert!(matches!(numbers.at(3), Err(SequenceError::IndexOutOfRange(_))));
/// ```
pub trait Collection {
    /// The type of the stored elements.
    type Element;

    /// Returns the number of elements.
    fn len(&self) -> usize;

    /// Returns the element at `position`, or `None` if it is out of range.
    fn lookup(&self, position: usize) -> Option<&Self::Element>;

    /// Returns `true` if the collection has no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the element at `position`.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::IndexOutOfRange`] if `position >= len()`.
    fn at(&self, position: usize) -> Result<&Self::Element, SequenceError> {
        self.lookup(position)
            .ok_or_else(|| SequenceError::index_out_of_range(position, self.len()))
    }

    /// Returns the element at `position`, treating an out-of-range position as
    /// a broken caller contract.
    ///
    /// # Panics
    ///
    /// Panics with the [`IndexOutOfRangeError`](super::IndexOutOfRangeError)
    /// message if `position >= len()`.
    fn element(&self, position: usize) -> &Self::Element {
        match self.at(position) {
            Ok(element) => element,
            Err(error) => panic!("{error}"),
        }
    }
}

impl<T> Collection for [T] {
    type Element = T;

    #[inline]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    #[inline]
    fn lookup(&self, position: usize) -> Option<&T> {
        self.get(position)
    }
}

impl<T> Collection for Vec<T> {
    type Element = T;

    #[inline]
    fn len(&self) -> usize {
        Self::len(self)
    }

    #[inline]
    fn lookup(&self, position: usize) -> Option<&T> {
        self.as_slice().get(position)
    }
}

impl<T, const N: usize> Collection for [T; N] {
    type Element = T;

    #[inline]
    fn len(&self) -> usize {
        N
    }

    #[inline]
    fn lookup(&self, position: usize) -> Option<&T> {
        self.as_slice().get(position)
    }
}

// =============================================================================
// EmptyCollection
// =============================================================================

/// A collection that never has elements.
///
/// Traversing it yields nothing. Indexing it is a logic error, since there is
/// no position it could answer for.
///
/// # Examples
///
/// ```rust
/// use lazyseq::sequence::{Collection, EmptyCollection, Sequence};
///
/// let empty = EmptyCollection::<i32>::new();
/// assert!(empty.is_empty());
/// assert!(empty.materialize().is_empty());
/// ```
///
/// ```rust,should_panic
/// use lazyseq::sequence::EmptyCollection;
///
/// let empty = EmptyCollection::<i32>::new();
/// let _value = empty[0];
/// ```
pub struct EmptyCollection<T> {
    marker: PhantomData<fn() -> T>,
}

impl<T> EmptyCollection<T> {
    /// Creates an empty collection.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            marker: PhantomData,
        }
    }
}

impl<T> Default for EmptyCollection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for EmptyCollection<T> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for EmptyCollection<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("EmptyCollection")
    }
}

impl<T> Collection for EmptyCollection<T> {
    type Element = T;

    #[inline]
    fn len(&self) -> usize {
        0
    }

    #[inline]
    fn lookup(&self, _position: usize) -> Option<&T> {
        None
    }
}

impl<T> Sequence for EmptyCollection<T> {
    type Item = T;
    type Producer = Empty<T>;

    fn create_producer(&self) -> Empty<T> {
        Empty::new()
    }
}

impl<T> Index<usize> for EmptyCollection<T> {
    type Output = T;

    fn index(&self, position: usize) -> &T {
        panic!("EmptyCollection has no element at position {position}")
    }
}
