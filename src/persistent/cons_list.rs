//! Persistent (immutable) cons list.
//!
//! [`ConsList`] is the classic Lisp list: either empty (`Nil`) or a value in
//! front of another list (`Cons`). Cells are reference counted and never
//! mutated, so any number of lists may share a tail.
//!
//! - O(1) `cons`, `prepend`, `first` and `rest`
//! - O(n) `len`, `nth` and `get`
//! - O(1) creation of producers, indices and slices
//!
//! Dropping a list releases its cells in a loop, so even very long lists
//! never overflow the stack on drop.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::{FromIterator, FusedIterator};
use std::mem;
use std::ops::Range;

use crate::ReferenceCounter;
use crate::sequence::{Collection, Producer, ProducerIterator, Sequence};

use super::{ListIndex, ListIndices, ListSlice};

/// A persistent singly-linked list.
///
/// # Time Complexity
///
/// | Operation      | Complexity |
/// |----------------|------------|
/// | `nil`, `cons`  | O(1)       |
/// | `first`        | O(1)       |
/// | `rest`         | O(1)       |
/// | `nth`, `get`   | O(n)       |
/// | `len`          | O(n)       |
/// | `slice`        | O(1)       |
///
/// # Examples
///
/// ```rust
/// use lazyseq::persistent::ConsList;
///
/// let list = ConsList::nil().prepend(3).prepend(2).prepend(1);
/// assert_eq!(list.get(1), Some(&2));
///
/// let extended = list.prepend(0);
/// assert_eq!(list.len(), 3);
/// assert_eq!(extended.len(), 4);
/// assert!(extended.rest().ptr_eq(&list));
/// ```
pub enum ConsList<T> {
    /// A value in front of the rest of the list.
    Cons(ReferenceCounter<ConsCell<T>>),
    /// The empty list.
    Nil,
}

/// A cell of a [`ConsList`]: one value and the list that follows it.
pub struct ConsCell<T> {
    value: T,
    rest: ConsList<T>,
}

impl<T> ConsCell<T> {
    /// Returns the value stored in this cell.
    pub const fn value(&self) -> &T {
        &self.value
    }

    /// Returns the list that follows this cell.
    pub const fn rest(&self) -> &ConsList<T> {
        &self.rest
    }
}

impl<T> Drop for ConsCell<T> {
    fn drop(&mut self) {
        let mut rest = mem::replace(&mut self.rest, ConsList::Nil);
        while let ConsList::Cons(cell) = rest {
            match ReferenceCounter::try_unwrap(cell) {
                Ok(mut owned) => rest = mem::replace(&mut owned.rest, ConsList::Nil),
                Err(_) => break,
            }
        }
    }
}

impl<T> ConsList<T> {
    /// Returns the empty list.
    #[inline]
    #[must_use]
    pub const fn nil() -> Self {
        Self::Nil
    }

    /// Creates a list with `value` in front of `rest`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::persistent::ConsList;
    ///
    /// let single = ConsList::cons('a', ConsList::nil());
    /// assert_eq!(single.first(), Some(&'a'));
    /// assert!(single.rest().is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn cons(value: T, rest: Self) -> Self {
        Self::Cons(ReferenceCounter::new(ConsCell { value, rest }))
    }

    /// Returns a new list with `value` in front of this one, sharing all of
    /// this list's cells.
    #[inline]
    #[must_use]
    pub fn prepend(&self, value: T) -> Self {
        Self::cons(value, self.clone())
    }

    /// Returns the first value, or `None` for the empty list.
    #[inline]
    pub fn first(&self) -> Option<&T> {
        match self {
            Self::Cons(cell) => Some(&cell.value),
            Self::Nil => None,
        }
    }

    /// Returns everything after the first value.
    ///
    /// The rest of the empty list is the empty list.
    #[inline]
    #[must_use]
    pub fn rest(&self) -> Self {
        self.rest_ref().clone()
    }

    fn rest_ref(&self) -> &Self {
        match self {
            Self::Cons(cell) => &cell.rest,
            Self::Nil => self,
        }
    }

    fn nth_ref(&self, offset: usize) -> &Self {
        let mut node = self;
        for _ in 0..offset {
            if node.is_empty() {
                break;
            }
            node = node.rest_ref();
        }
        node
    }

    /// Returns the list that starts `offset` cells into this one.
    ///
    /// Walking past the end gives the empty list.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::persistent::ConsList;
    ///
    /// let list: ConsList<i32> = (1..=3).collect();
    /// assert_eq!(list.nth(1).first(), Some(&2));
    /// assert!(list.nth(10).is_empty());
    /// ```
    #[must_use]
    pub fn nth(&self, offset: usize) -> Self {
        self.nth_ref(offset).clone()
    }

    /// Returns the value at `offset`, or `None` if it is out of range.
    pub fn get(&self, offset: usize) -> Option<&T> {
        self.nth_ref(offset).first()
    }

    /// Returns the number of values. Walks the whole list.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Returns `true` for the empty list.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Nil)
    }

    /// Returns an iterator over references to the values.
    pub const fn iter(&self) -> ConsListIterator<'_, T> {
        ConsListIterator { current: self }
    }

    /// Returns `true` if both lists start at the same cell, or both are empty.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Cons(left), Self::Cons(right)) => ReferenceCounter::ptr_eq(left, right),
            (Self::Nil, Self::Nil) => true,
            _ => false,
        }
    }

    /// Builds a list from every remaining value of a producer.
    ///
    /// The values are gathered first and linked from the back, so the build
    /// is iterative and the producer must be finite.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::persistent::ConsList;
    /// use lazyseq::sequence::{Naturals, Producer};
    ///
    /// let list = ConsList::from_producer(Naturals::new().take(3));
    /// assert_eq!(list.to_string(), "[1, 2, 3]");
    /// ```
    pub fn from_producer<P: Producer<Item = T>>(producer: P) -> Self {
        Self::from_vec(producer.collect_vec())
    }

    /// Builds a list from a fresh traversal of a finite sequence.
    pub fn from_sequence<S: Sequence<Item = T> + ?Sized>(sequence: &S) -> Self {
        Self::from_producer(sequence.create_producer())
    }

    fn from_vec(elements: Vec<T>) -> Self {
        let length = elements.len();
        let list = elements
            .into_iter()
            .rev()
            .fold(Self::Nil, |rest, value| Self::cons(value, rest));
        tracing::trace!(length, "built cons list");
        list
    }

    // =========================================================================
    // Positions
    // =========================================================================

    /// Returns the position of the first value, or the end position if the
    /// list is empty.
    pub fn start_index(&self) -> ListIndex<T> {
        ListIndex::start(self)
    }

    /// Returns the past-the-end position.
    pub const fn end_index(&self) -> ListIndex<T> {
        ListIndex::end()
    }

    /// Returns the position `offset` values into the list, or the end
    /// position if `offset` is at or past the end.
    pub fn index_at(&self, offset: usize) -> ListIndex<T> {
        ListIndex::from_parts(self.nth_ref(offset).clone(), offset)
    }

    /// Returns an iterator over every position of the list, in order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::persistent::ConsList;
    ///
    /// let list: ConsList<char> = "ab".chars().collect();
    /// let offsets: Vec<_> = list.indices().map(|index| index.offset()).collect();
    /// assert_eq!(offsets, vec![Some(0), Some(1)]);
    /// ```
    pub fn indices(&self) -> ListIndices<T> {
        ListIndices::new(self.start_index())
    }

    /// Returns the position of the first value satisfying `predicate`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::persistent::ConsList;
    ///
    /// let list: ConsList<i32> = (1..=3).collect();
    /// let index = list.position(|value| *value == 2).unwrap();
    /// assert_eq!(index.offset(), Some(1));
    /// assert_eq!(list.at_index(&index), &2);
    /// ```
    pub fn position<P>(&self, mut predicate: P) -> Option<ListIndex<T>>
    where
        P: FnMut(&T) -> bool,
    {
        self.indices()
            .find(|index| index.element().is_some_and(&mut predicate))
    }

    /// Returns the value at `index`.
    ///
    /// The value is read from the cell the index refers to.
    ///
    /// # Panics
    ///
    /// Panics if `index` is the end position, which has no value.
    pub fn at_index<'a>(&self, index: &'a ListIndex<T>) -> &'a T {
        match index.element() {
            Some(value) => value,
            None => panic!("cannot read a value at the end position of a list"),
        }
    }

    /// Returns the values in `bounds` as a slice sharing this list's cells.
    pub fn slice(&self, bounds: Range<ListIndex<T>>) -> ListSlice<T> {
        ListSlice::new(self.clone(), bounds.start, bounds.end)
    }

    /// Returns the values between two offsets as a slice.
    ///
    /// Offsets at or past the end of the list map to the end position.
    pub fn slice_offsets(&self, bounds: Range<usize>) -> ListSlice<T> {
        self.slice(self.index_at(bounds.start)..self.index_at(bounds.end))
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// An iterator over references to the values of a [`ConsList`].
pub struct ConsListIterator<'a, T> {
    current: &'a ConsList<T>,
}

impl<'a, T> Iterator for ConsListIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        match self.current {
            ConsList::Cons(cell) => {
                self.current = &cell.rest;
                Some(&cell.value)
            }
            ConsList::Nil => None,
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::from(!self.current.is_empty()), None)
    }
}

impl<T> FusedIterator for ConsListIterator<'_, T> {}

impl<T> Clone for ConsListIterator<'_, T> {
    fn clone(&self) -> Self {
        Self {
            current: self.current,
        }
    }
}

/// A producer over the values of a [`ConsList`], created in O(1).
///
/// The producer holds its own reference to the remaining cells, so it stays
/// valid after the list it came from is dropped.
pub struct ConsListProducer<T> {
    current: ConsList<T>,
}

impl<T: Clone> Producer for ConsListProducer<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let (value, rest) = match &self.current {
            ConsList::Cons(cell) => (cell.value.clone(), cell.rest.clone()),
            ConsList::Nil => return None,
        };
        self.current = rest;
        Some(value)
    }

    fn minimum_remaining(&self) -> usize {
        usize::from(!self.current.is_empty())
    }
}

impl<T> Clone for ConsListProducer<T> {
    fn clone(&self) -> Self {
        Self {
            current: self.current.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for ConsListProducer<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("ConsListProducer")
            .field("current", &self.current)
            .finish()
    }
}

// =============================================================================
// Sequence and Collection
// =============================================================================

impl<T: Clone> Sequence for ConsList<T> {
    type Item = T;
    type Producer = ConsListProducer<T>;

    fn create_producer(&self) -> Self::Producer {
        ConsListProducer {
            current: self.clone(),
        }
    }

    fn underestimate_count(&self) -> usize {
        usize::from(!self.is_empty())
    }
}

impl<T> Collection for ConsList<T> {
    type Element = T;

    fn len(&self) -> usize {
        Self::len(self)
    }

    fn lookup(&self, position: usize) -> Option<&T> {
        self.get(position)
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Clone for ConsList<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Cons(cell) => Self::Cons(ReferenceCounter::clone(cell)),
            Self::Nil => Self::Nil,
        }
    }
}

impl<T> Default for ConsList<T> {
    #[inline]
    fn default() -> Self {
        Self::Nil
    }
}

impl<T> FromIterator<T> for ConsList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iterable: I) -> Self {
        Self::from_vec(iterable.into_iter().collect())
    }
}

impl<T: Clone> IntoIterator for ConsList<T> {
    type Item = T;
    type IntoIter = ProducerIterator<ConsListProducer<T>>;

    fn into_iter(self) -> Self::IntoIter {
        ConsListProducer { current: self }.into_iterator()
    }
}

impl<'a, T> IntoIterator for &'a ConsList<T> {
    type Item = &'a T;
    type IntoIter = ConsListIterator<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: PartialEq> PartialEq for ConsList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for ConsList<T> {}

impl<T: PartialOrd> PartialOrd for ConsList<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<T: Ord> Ord for ConsList<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

impl<T: Hash> Hash for ConsList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for value in self {
            value.hash(state);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for ConsList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for ConsList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[")?;
        let mut first = true;
        for value in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{value}")?;
        }
        write!(formatter, "]")
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for ConsList<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for value in self {
            seq.serialize_element(value)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
struct ConsListVisitor<T> {
    marker: std::marker::PhantomData<T>,
}

#[cfg(feature = "serde")]
impl<T> ConsListVisitor<T> {
    const fn new() -> Self {
        Self {
            marker: std::marker::PhantomData,
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::de::Visitor<'de> for ConsListVisitor<T>
where
    T: serde::Deserialize<'de>,
{
    type Value = ConsList<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        const MAX_PREALLOCATE: usize = 4096;
        let capacity = seq.size_hint().unwrap_or(0).min(MAX_PREALLOCATE);
        let mut elements = Vec::with_capacity(capacity);
        while let Some(element) = seq.next_element()? {
            elements.push(element);
        }
        Ok(ConsList::from_vec(elements))
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for ConsList<T>
where
    T: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(ConsListVisitor::new())
    }
}

// =============================================================================
// Tests
// =============================================================================
