//! Positions in a [`ConsList`].

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FusedIterator;

use super::ConsList;

/// An opaque position in a [`ConsList`].
///
/// A position pairs the list node it refers to with its offset from the
/// start. The past-the-end position has no node and no offset.
///
/// Two positions are equal when they have the same offset and refer to the
/// same node, so positions taken from different lists are never equal unless
/// both are the end position.
///
/// # Examples
///
/// ```rust
/// use lazyseq::persistent::{ConsList, ListIndex};
///
/// let list: ConsList<i32> = (1..=2).collect();
/// let start = ListIndex::start(&list);
/// assert_eq!(start.element(), Some(&1));
/// assert_eq!(start.successor().element(), Some(&2));
/// assert!(start.successor().successor().is_end());
/// assert_eq!(start.to_string(), "([1, 2], 0)");
/// assert_eq!(ListIndex::<i32>::end().to_string(), "([], -1)");
/// ```
pub struct ListIndex<T> {
    node: ConsList<T>,
    offset: Option<usize>,
}

impl<T> ListIndex<T> {
    /// Returns the position of the first value of `list`, or the end position
    /// if `list` is empty.
    pub fn start(list: &ConsList<T>) -> Self {
        Self::from_parts(list.clone(), 0)
    }

    /// Returns the past-the-end position.
    #[must_use]
    pub const fn end() -> Self {
        Self {
            node: ConsList::Nil,
            offset: None,
        }
    }

    pub(super) fn from_parts(node: ConsList<T>, offset: usize) -> Self {
        match node {
            ConsList::Nil => Self::end(),
            node @ ConsList::Cons(_) => Self {
                node,
                offset: Some(offset),
            },
        }
    }

    /// Returns the next position.
    ///
    /// The successor of the last value's position, and of the end position,
    /// is the end position.
    #[must_use]
    pub fn successor(&self) -> Self {
        match (&self.node, self.offset) {
            (ConsList::Cons(cell), Some(offset)) => {
                Self::from_parts(cell.rest().clone(), offset + 1)
            }
            _ => Self::end(),
        }
    }

    /// Returns `true` for the past-the-end position.
    pub const fn is_end(&self) -> bool {
        self.offset.is_none()
    }

    /// Returns the offset from the start of the list, or `None` for the end
    /// position.
    pub const fn offset(&self) -> Option<usize> {
        self.offset
    }

    /// Returns the list that starts at this position.
    pub const fn node(&self) -> &ConsList<T> {
        &self.node
    }

    /// Returns the value at this position, or `None` for the end position.
    pub fn element(&self) -> Option<&T> {
        self.node.first()
    }
}

impl<T> Clone for ListIndex<T> {
    fn clone(&self) -> Self {
        Self {
            node: self.node.clone(),
            offset: self.offset,
        }
    }
}

impl<T> PartialEq for ListIndex<T> {
    fn eq(&self, other: &Self) -> bool {
        self.offset == other.offset && self.node.ptr_eq(&other.node)
    }
}

impl<T> Eq for ListIndex<T> {}

/// Positions compare by offset, with the end position after every other.
///
/// Distinct positions at the same offset (taken from different lists) are
/// unordered.
impl<T> PartialOrd for ListIndex<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self.offset, other.offset) {
            (None, None) => Some(Ordering::Equal),
            (None, Some(_)) => Some(Ordering::Greater),
            (Some(_), None) => Some(Ordering::Less),
            (Some(left), Some(right)) if left != right => Some(left.cmp(&right)),
            (Some(_), Some(_)) => self.node.ptr_eq(&other.node).then_some(Ordering::Equal),
        }
    }
}

impl<T> Hash for ListIndex<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.offset.hash(state);
    }
}

impl<T: fmt::Debug> fmt::Debug for ListIndex<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("ListIndex")
            .field("node", &self.node)
            .field("offset", &self.offset)
            .finish()
    }
}

impl<T: fmt::Display> fmt::Display for ListIndex<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.offset {
            Some(offset) => write!(formatter, "({}, {offset})", self.node),
            None => write!(formatter, "({}, -1)", self.node),
        }
    }
}

// =============================================================================
// ListIndices
// =============================================================================

/// An iterator over the positions of a [`ConsList`], from the start up to
/// (but not including) the end position.
pub struct ListIndices<T> {
    current: ListIndex<T>,
}

impl<T> ListIndices<T> {
    pub(super) const fn new(start: ListIndex<T>) -> Self {
        Self { current: start }
    }
}

impl<T> Iterator for ListIndices<T> {
    type Item = ListIndex<T>;

    fn next(&mut self) -> Option<ListIndex<T>> {
        if self.current.is_end() {
            return None;
        }
        let next = self.current.successor();
        Some(std::mem::replace(&mut self.current, next))
    }
}

impl<T> FusedIterator for ListIndices<T> {}

impl<T> Clone for ListIndices<T> {
    fn clone(&self) -> Self {
        Self {
            current: self.current.clone(),
        }
    }
}
