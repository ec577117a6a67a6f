//! A random-access view that maps elements on lookup.

use std::fmt;
use std::iter::FusedIterator;

use crate::sequence::Collection;

/// A read-only view of a collection through a transformation.
///
/// Nothing is computed up front and nothing is cached: every lookup applies
/// the transformation to the underlying element again.
///
/// # Examples
///
/// ```rust
/// use lazyseq::adapter::LazyMap;
///
/// let lengths = LazyMap::new(vec!["one", "three"], |word: &&str| word.len());
/// assert_eq!(lengths.get(1), Some(5));
/// assert_eq!(lengths.get(2), None);
/// assert_eq!(lengths.iter().collect::<Vec<_>>(), vec![3, 5]);
/// ```
#[derive(Clone)]
pub struct LazyMap<C, F> {
    elements: C,
    transform: F,
}

impl<C, F, B> LazyMap<C, F>
where
    C: Collection,
    F: Fn(&C::Element) -> B,
{
    /// Creates a view of `elements` through `transform`.
    pub const fn new(elements: C, transform: F) -> Self {
        Self {
            elements,
            transform,
        }
    }

    /// Returns the transformed element at `position`, or `None` if it is out
    /// of range.
    pub fn get(&self, position: usize) -> Option<B> {
        self.elements.lookup(position).map(&self.transform)
    }

    /// Returns the number of elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the view has no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns an iterator that transforms each element as it is reached.
    pub fn iter(&self) -> LazyMapIterator<'_, C, F> {
        LazyMapIterator {
            view: self,
            position: 0,
        }
    }
}

impl<C: fmt::Debug, F> fmt::Debug for LazyMap<C, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("LazyMap")
            .field("elements", &self.elements)
            .finish_non_exhaustive()
    }
}

/// An iterator over a [`LazyMap`].
pub struct LazyMapIterator<'a, C, F> {
    view: &'a LazyMap<C, F>,
    position: usize,
}

impl<C, F, B> Iterator for LazyMapIterator<'_, C, F>
where
    C: Collection,
    F: Fn(&C::Element) -> B,
{
    type Item = B;

    fn next(&mut self) -> Option<B> {
        let element = self.view.get(self.position)?;
        self.position += 1;
        Some(element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.view.len().saturating_sub(self.position);
        (remaining, Some(remaining))
    }
}

impl<C, F, B> ExactSizeIterator for LazyMapIterator<'_, C, F>
where
    C: Collection,
    F: Fn(&C::Element) -> B,
{
}

impl<C, F, B> FusedIterator for LazyMapIterator<'_, C, F>
where
    C: Collection,
    F: Fn(&C::Element) -> B,
{
}

impl<'a, C, F, B> IntoIterator for &'a LazyMap<C, F>
where
    C: Collection,
    F: Fn(&C::Element) -> B,
{
    type Item = B;
    type IntoIter = LazyMapIterator<'a, C, F>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
