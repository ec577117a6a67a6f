//! Copy-free ranges of a [`ConsList`].

use std::fmt;
use std::iter::FusedIterator;
use std::ops::Range;

use crate::sequence::{Producer, Sequence};

use super::{ConsList, ListIndex};

/// A half-open range of positions over a [`ConsList`].
///
/// A slice holds the backing list and its two bounds; no values are copied.
/// Slicing a slice narrows the bounds over the same backing list.
///
/// The bounds are expected to come from the backing list, with `start` not
/// after `end`. Traversal stops at `end` or at the end of the list, whichever
/// comes first.
///
/// # Examples
///
/// ```rust
/// use lazyseq::persistent::ConsList;
/// use lazyseq::sequence::Sequence;
///
/// let list: ConsList<i32> = (1..=4).collect();
/// let middle = list.slice(list.index_at(1)..list.index_at(3));
/// assert_eq!(middle.first(), Some(&2));
/// assert_eq!(middle.materialize(), vec![2, 3]);
/// assert_eq!(middle.to_string(), "[2, 3]");
/// ```
pub struct ListSlice<T> {
    list: ConsList<T>,
    start: ListIndex<T>,
    end: ListIndex<T>,
}

impl<T> ListSlice<T> {
    /// Creates a slice of `list` from `start` up to, but not including, `end`.
    pub const fn new(list: ConsList<T>, start: ListIndex<T>, end: ListIndex<T>) -> Self {
        Self { list, start, end }
    }

    /// Returns the value at the start position.
    ///
    /// This reads the cell at `start` without consulting `end`.
    pub fn first(&self) -> Option<&T> {
        self.start.element()
    }

    /// Returns the list that follows the start position.
    ///
    /// Like [`first`](Self::first), this ignores `end`: the result runs to the
    /// end of the backing list.
    #[must_use]
    pub fn rest(&self) -> ConsList<T> {
        self.start.node().rest()
    }

    /// Returns the first position of the slice.
    pub fn start_index(&self) -> ListIndex<T> {
        self.start.clone()
    }

    /// Returns the past-the-end position of the slice.
    pub fn end_index(&self) -> ListIndex<T> {
        self.end.clone()
    }

    /// Returns the backing list.
    pub const fn list(&self) -> &ConsList<T> {
        &self.list
    }

    /// Returns the value at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is the end position.
    pub fn at_index<'a>(&self, index: &'a ListIndex<T>) -> &'a T {
        match index.element() {
            Some(value) => value,
            None => panic!("cannot read a value at the end position of a list slice"),
        }
    }

    /// Returns a narrower slice over the same backing list.
    #[must_use]
    pub fn slice(&self, bounds: Range<ListIndex<T>>) -> Self {
        Self::new(self.list.clone(), bounds.start, bounds.end)
    }

    /// Returns an iterator over references to the values in the slice.
    pub fn iter(&self) -> ListSliceIterator<'_, T> {
        ListSliceIterator {
            node: self.start.node(),
            offset: self.start.offset().unwrap_or_default(),
            end: &self.end,
        }
    }

    /// Returns the number of values in the slice. Walks the slice.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Returns `true` if the slice has no values.
    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }
}

impl<T> Clone for ListSlice<T> {
    fn clone(&self) -> Self {
        Self {
            list: self.list.clone(),
            start: self.start.clone(),
            end: self.end.clone(),
        }
    }
}

impl<T: Clone> Sequence for ListSlice<T> {
    type Item = T;
    type Producer = ListSliceProducer<T>;

    fn create_producer(&self) -> Self::Producer {
        ListSliceProducer {
            cursor: self.start.clone(),
            end: self.end.clone(),
        }
    }
}

impl<'a, T> IntoIterator for &'a ListSlice<T> {
    type Item = &'a T;
    type IntoIter = ListSliceIterator<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for ListSlice<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for ListSlice<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[")?;
        for (position, value) in self.iter().enumerate() {
            if position > 0 {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{value}")?;
        }
        write!(formatter, "]")
    }
}

// =============================================================================
// Iterator and Producer
// =============================================================================

/// An iterator over references to the values of a [`ListSlice`].
pub struct ListSliceIterator<'a, T> {
    node: &'a ConsList<T>,
    offset: usize,
    end: &'a ListIndex<T>,
}

impl<T> ListSliceIterator<'_, T> {
    fn at_end(&self) -> bool {
        self.end.offset() == Some(self.offset) && self.node.ptr_eq(self.end.node())
    }
}

impl<'a, T> Iterator for ListSliceIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.at_end() {
            return None;
        }
        match self.node {
            ConsList::Cons(cell) => {
                self.node = cell.rest();
                self.offset += 1;
                Some(cell.value())
            }
            ConsList::Nil => None,
        }
    }
}

impl<T> FusedIterator for ListSliceIterator<'_, T> {}

/// A producer over the values of a [`ListSlice`].
pub struct ListSliceProducer<T> {
    cursor: ListIndex<T>,
    end: ListIndex<T>,
}

impl<T: Clone> Producer for ListSliceProducer<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.cursor.is_end() || self.cursor == self.end {
            return None;
        }
        let value = self.cursor.element().cloned()?;
        self.cursor = self.cursor.successor();
        Some(value)
    }
}

impl<T> Clone for ListSliceProducer<T> {
    fn clone(&self) -> Self {
        Self {
            cursor: self.cursor.clone(),
            end: self.end.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn one_to_four() -> ConsList<i32> {
        (1..=4).collect()
    }

    #[rstest]
    fn test_slice_drains_to_bounds() {
        let list = one_to_four();
        let slice = list.slice_offsets(1..3);
        let mut producer = slice.create_producer();
        assert_eq!(producer.next(), Some(2));
        assert_eq!(producer.next(), Some(3));
        assert_eq!(producer.next(), None);
        assert_eq!(producer.next(), None);
    }

    #[rstest]
    fn test_slice_to_end_position() {
        let list = one_to_four();
        let tail = list.slice(list.index_at(2)..list.end_index());
        assert_eq!(tail.iter().copied().collect::<Vec<_>>(), vec![3, 4]);
        assert_eq!(tail.len(), 2);
    }

    #[rstest]
    fn test_empty_slice() {
        let list = one_to_four();
        let empty = list.slice(list.index_at(2)..list.index_at(2));
        assert!(empty.is_empty());
        assert!(empty.materialize().is_empty());
        assert_eq!(empty.first(), Some(&3));
    }

    #[rstest]
    fn test_first_and_rest_follow_start() {
        let list = one_to_four();
        let slice = list.slice_offsets(1..2);
        assert_eq!(slice.first(), Some(&2));
        assert_eq!(slice.rest().to_string(), "[3, 4]");
    }

    #[rstest]
    fn test_slice_of_slice_shares_list() {
        let list = one_to_four();
        let outer = list.slice_offsets(0..4);
        let inner = outer.slice(list.index_at(1)..list.index_at(2));
        assert!(inner.list().ptr_eq(&list));
        assert_eq!(inner.to_string(), "[2]");
    }

    #[rstest]
    fn test_at_index_reads_the_cell() {
        let list = one_to_four();
        let slice = list.slice_offsets(0..2);
        assert_eq!(slice.at_index(&list.index_at(3)), &4);
    }

    #[rstest]
    #[should_panic(expected = "end position")]
    fn test_at_end_index_panics() {
        let slice = one_to_four().slice_offsets(0..1);
        let _ = slice.at_index(&slice.end_index());
    }
}
