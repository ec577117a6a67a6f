//! Skipping a prefix of a producer or sequence.

use crate::sequence::{Producer, Sequence, SequenceError};

// =============================================================================
// DropFirst
// =============================================================================

/// A producer that discards the first `limit` values of another producer.
///
/// Values are skipped lazily, on the first call to [`next`](Producer::next).
/// If the wrapped producer runs out while skipping, the adapter is exhausted
/// and stays exhausted.
///
/// Calling [`drop_first`](DropFirst::drop_first) on a `DropFirst` folds the new
/// count into the existing limit, so repeated skips never stack adapters.
///
/// # Examples
///
/// ```rust
/// use lazyseq::sequence::{Producer, from_iterator};
///
/// let mut rest = from_iterator(vec![1, 2, 3, 4]).drop_first(2);
/// assert_eq!(rest.next(), Some(3));
/// assert_eq!(rest.next(), Some(4));
/// assert_eq!(rest.next(), None);
/// ```
#[derive(Debug, Clone)]
pub struct DropFirst<P> {
    producer: P,
    limit: usize,
    dropped: usize,
}

impl<P: Producer> DropFirst<P> {
    /// Wraps `producer`, skipping its first `count` values.
    pub const fn new(producer: P, count: usize) -> Self {
        Self {
            producer,
            limit: count,
            dropped: 0,
        }
    }

    /// Wraps `producer`, skipping its first `count` values.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::InvalidArgument`] if `count` is negative.
    pub fn try_new(producer: P, count: isize) -> Result<Self, SequenceError> {
        let count = usize::try_from(count)
            .map_err(|_| SequenceError::negative_count("DropFirst::try_new", count))?;
        Ok(Self::new(producer, count))
    }

    /// Skips `count` more values, folding into this adapter.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::sequence::{Naturals, Producer};
    ///
    /// let folded = Naturals::new().drop_first(1).drop_first(4);
    /// assert_eq!(folded.limit(), 5);
    /// ```
    #[must_use]
    pub fn drop_first(self, count: usize) -> Self {
        let limit = self.limit.saturating_add(count);
        tracing::trace!(previous = self.limit, added = count, limit, "folding drop_first");
        Self { limit, ..self }
    }

    /// Skips `count` more values, folding into this adapter.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::InvalidArgument`] if `count` is negative.
    pub fn try_drop_first(self, count: isize) -> Result<Self, SequenceError> {
        let count = usize::try_from(count)
            .map_err(|_| SequenceError::negative_count("DropFirst::try_drop_first", count))?;
        Ok(self.drop_first(count))
    }

    /// Returns the total number of values this adapter skips.
    pub const fn limit(&self) -> usize {
        self.limit
    }

    /// Returns how many values have been skipped so far.
    pub const fn dropped(&self) -> usize {
        self.dropped
    }

    /// Returns the wrapped producer.
    pub fn into_inner(self) -> P {
        self.producer
    }
}

impl<P: Producer> Producer for DropFirst<P> {
    type Item = P::Item;

    fn next(&mut self) -> Option<Self::Item> {
        while self.dropped < self.limit {
            if self.producer.next().is_none() {
                tracing::debug!(
                    limit = self.limit,
                    dropped = self.dropped,
                    "producer exhausted while skipping"
                );
                self.dropped = self.limit;
                return None;
            }
            self.dropped += 1;
        }
        self.producer.next()
    }

    fn minimum_remaining(&self) -> usize {
        self.producer
            .minimum_remaining()
            .saturating_sub(self.limit - self.dropped)
    }
}

// =============================================================================
// DropFirstSequence
// =============================================================================

/// A sequence whose producers skip the first `count` values of a base sequence.
///
/// Created by [`Sequence::dropping_first`]. Each call to `create_producer`
/// skips afresh; the base is never consumed.
///
/// # Examples
///
/// ```rust
/// use lazyseq::sequence::Sequence;
///
/// let tail = vec![1, 2, 3, 4].dropping_first(1).dropping_first(1);
/// assert_eq!(tail.count(), 2);
/// assert_eq!(tail.materialize(), vec![3, 4]);
/// ```
#[derive(Debug, Clone)]
pub struct DropFirstSequence<S> {
    base: S,
    count: usize,
}

impl<S: Sequence> DropFirstSequence<S> {
    /// Wraps `base`, skipping its first `count` values on every traversal.
    pub const fn new(base: S, count: usize) -> Self {
        Self { base, count }
    }

    /// Wraps `base`, skipping its first `count` values on every traversal.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::InvalidArgument`] if `count` is negative.
    pub fn try_new(base: S, count: isize) -> Result<Self, SequenceError> {
        let count = usize::try_from(count)
            .map_err(|_| SequenceError::negative_count("DropFirstSequence::try_new", count))?;
        Ok(Self::new(base, count))
    }

    /// Skips `count` more values, folding into this sequence.
    #[must_use]
    pub fn dropping_first(self, count: usize) -> Self {
        let folded = self.count.saturating_add(count);
        tracing::trace!(previous = self.count, added = count, count = folded, "folding dropping_first");
        Self {
            count: folded,
            ..self
        }
    }

    /// Returns the number of values skipped on every traversal.
    pub const fn count(&self) -> usize {
        self.count
    }

    /// Returns a reference to the base sequence.
    pub const fn base(&self) -> &S {
        &self.base
    }
}

impl<S: Sequence> Sequence for DropFirstSequence<S> {
    type Item = S::Item;
    type Producer = DropFirst<S::Producer>;

    fn create_producer(&self) -> Self::Producer {
        DropFirst::new(self.base.create_producer(), self.count)
    }

    fn underestimate_count(&self) -> usize {
        self.base.underestimate_count().saturating_sub(self.count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::{Naturals, from_iterator};
    use rstest::rstest;

    #[rstest]
    #[case(0, vec![1, 2, 3])]
    #[case(1, vec![2, 3])]
    #[case(3, vec![])]
    #[case(7, vec![])]
    fn test_drop_first(#[case] count: usize, #[case] expected: Vec<i32>) {
        let producer = DropFirst::new(from_iterator(vec![1, 2, 3]), count);
        assert_eq!(producer.collect_vec(), expected);
    }

    #[rstest]
    fn test_skipping_is_lazy() {
        let mut pulled = 0;
        let producer = crate::sequence::from_fn(|| {
            pulled += 1;
            Some(pulled)
        });
        let mut skipped = DropFirst::new(producer, 3);
        assert_eq!(skipped.dropped(), 0);
        assert_eq!(skipped.next(), Some(4));
        assert_eq!(skipped.dropped(), 3);
    }

    #[rstest]
    fn test_early_exhaustion_is_sticky() {
        let mut producer = DropFirst::new(from_iterator(vec![1]), 5);
        assert_eq!(producer.next(), None);
        assert_eq!(producer.dropped(), producer.limit());
        assert_eq!(producer.next(), None);
    }

    #[rstest]
    fn test_fold_keeps_single_adapter() {
        let folded: DropFirst<Naturals> = Naturals::new().drop_first(2).drop_first(3);
        assert_eq!(folded.limit(), 5);
        assert_eq!(folded.into_inner(), Naturals::new());
    }

    #[rstest]
    fn test_fold_after_partial_skip() {
        let mut producer = Naturals::new().drop_first(1);
        assert_eq!(producer.next(), Some(2));
        let mut folded = producer.drop_first(2);
        assert_eq!(folded.next(), Some(5));
    }

    #[rstest]
    #[case(-1)]
    #[case(isize::MIN)]
    fn test_try_new_rejects_negative(#[case] count: isize) {
        let result = DropFirst::try_new(Naturals::new(), count);
        assert!(matches!(result, Err(SequenceError::InvalidArgument(_))));
    }

    #[rstest]
    fn test_try_drop_first_folds() {
        let producer = DropFirst::try_new(Naturals::new(), 1)
            .and_then(|producer| producer.try_drop_first(2))
            .unwrap();
        assert_eq!(producer.limit(), 3);
        assert!(Naturals::new().drop_first(0).try_drop_first(-2).is_err());
    }

    #[rstest]
    fn test_minimum_remaining_subtracts_pending_skips() {
        let mut producer = DropFirst::new(from_iterator(vec![1, 2, 3, 4]), 1);
        assert_eq!(producer.minimum_remaining(), 3);
        let _ = producer.next();
        assert_eq!(producer.minimum_remaining(), 2);
    }

    #[rstest]
    fn test_sequence_restarts_each_traversal() {
        let tail = vec![1, 2, 3].dropping_first(1);
        assert_eq!(tail.materialize(), vec![2, 3]);
        assert_eq!(tail.materialize(), vec![2, 3]);
        assert_eq!(tail.underestimate_count(), 2);
    }

    #[rstest]
    fn test_sequence_fold() {
        let tail = DropFirstSequence::new(vec![1, 2, 3, 4], 1).dropping_first(2);
        assert_eq!(tail.count(), 3);
        assert_eq!(tail.materialize(), vec![4]);
    }

    #[rstest]
    fn test_sequence_try_new_rejects_negative() {
        assert!(DropFirstSequence::try_new(vec![1], -3).is_err());
        assert!(vec![1].try_dropping_first(-1).is_err());
    }
}
