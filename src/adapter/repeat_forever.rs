//! Cycling a sequence endlessly.

use std::fmt;

use crate::ReferenceCounter;
use crate::sequence::{Producer, Sequence};

/// A producer that cycles through a base sequence forever.
///
/// When the current traversal of the base runs out, a fresh producer is
/// created from the base and asked once for a value. If the fresh producer is
/// immediately exhausted the base is empty, and `RepeatForever` yields `None`
/// instead of spinning.
///
/// `RepeatForever` is both a [`Producer`] and a [`Sequence`]. Used directly it
/// is a single cursor; `create_producer` hands out fresh cursors that start
/// at the beginning of the base and advance independently. Cloning copies the
/// current cursor position.
///
/// # Examples
///
/// ```rust
/// use lazyseq::adapter::RepeatForever;
/// use lazyseq::sequence::{Producer, Sequence};
///
/// let cycle = RepeatForever::new(vec![1, 2, 3]);
/// let mut first = cycle.create_producer();
/// let mut second = cycle.create_producer();
///
/// assert_eq!(first.next(), Some(1));
/// assert_eq!(first.next(), Some(2));
/// assert_eq!(second.next(), Some(1));
/// assert_eq!(first.next(), Some(3));
/// assert_eq!(first.next(), Some(1));
/// assert_eq!(second.next(), Some(2));
/// ```
pub struct RepeatForever<S: Sequence> {
    base: ReferenceCounter<S>,
    current: Option<S::Producer>,
    cycles: usize,
}

impl<S: Sequence> RepeatForever<S> {
    /// Cycles through `base`.
    pub fn new(base: S) -> Self {
        Self {
            base: ReferenceCounter::new(base),
            current: None,
            cycles: 0,
        }
    }

    /// Returns the number of traversals of the base started by this cursor.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::adapter::RepeatForever;
    /// use lazyseq::sequence::Producer;
    ///
    /// let mut cycle = RepeatForever::new(vec!['a', 'b']);
    /// assert_eq!(cycle.cycles(), 0);
    /// let _ = cycle.by_ref().take(3).collect_vec();
    /// assert_eq!(cycle.cycles(), 2);
    /// ```
    pub const fn cycles(&self) -> usize {
        self.cycles
    }

    /// Returns the base sequence.
    pub fn base(&self) -> &S {
        &self.base
    }
}

impl<S: Sequence> Producer for RepeatForever<S> {
    type Item = S::Item;

    fn next(&mut self) -> Option<S::Item> {
        if let Some(element) = self.current.as_mut().and_then(|producer| producer.next()) {
            return Some(element);
        }

        let mut fresh = self.base.create_producer();
        self.cycles += 1;
        tracing::trace!(cycles = self.cycles, "restarting base producer");
        let element = fresh.next();
        self.current = Some(fresh);
        element
    }

    fn minimum_remaining(&self) -> usize {
        if self.base.underestimate_count() > 0 {
            usize::MAX
        } else {
            self.current
                .as_ref()
                .map_or(0, |producer| producer.minimum_remaining())
        }
    }
}

impl<S: Sequence> Sequence for RepeatForever<S> {
    type Item = S::Item;
    type Producer = Self;

    fn create_producer(&self) -> Self {
        Self {
            base: ReferenceCounter::clone(&self.base),
            current: None,
            cycles: 0,
        }
    }

    fn underestimate_count(&self) -> usize {
        if self.base.underestimate_count() > 0 {
            usize::MAX
        } else {
            0
        }
    }
}

impl<S> Clone for RepeatForever<S>
where
    S: Sequence,
    S::Producer: Clone,
{
    fn clone(&self) -> Self {
        Self {
            base: ReferenceCounter::clone(&self.base),
            current: self.current.clone(),
            cycles: self.cycles,
        }
    }
}

impl<S> fmt::Debug for RepeatForever<S>
where
    S: Sequence + fmt::Debug,
    S::Producer: fmt::Debug,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("RepeatForever")
            .field("base", &self.base)
            .field("current", &self.current)
            .field("cycles", &self.cycles)
            .finish()
    }
}
