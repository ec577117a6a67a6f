//! Error types for producers, sequences and collections.
//!
//! Exhaustion is not an error: a producer signals it by returning `None`.
//! The types here cover the conditions a caller can actually get wrong:
//! passing an argument outside its domain, and looking up a position that a
//! finite collection does not have.

/// Represents an argument rejected at the call that introduced it.
///
/// Arguments are never silently clamped: a negative drop count, for example,
/// fails immediately instead of being treated as zero.
///
/// # Examples
///
/// ```rust
/// use lazyseq::sequence::InvalidArgumentError;
///
/// let error = InvalidArgumentError {
///     operation: "DropFirst::try_new",
///     parameter: "count",
///     value: "-1".to_string(),
///     constraint: "must be non-negative",
/// };
/// assert_eq!(
///     format!("{}", error),
///     "DropFirst::try_new: invalid argument count = -1 (must be non-negative)"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidArgumentError {
    /// The operation that rejected the argument.
    pub operation: &'static str,
    /// The name of the rejected parameter.
    pub parameter: &'static str,
    /// The rejected value, rendered for display.
    pub value: String,
    /// The constraint the value violates.
    pub constraint: &'static str,
}

impl std::fmt::Display for InvalidArgumentError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "{}: invalid argument {} = {} ({})",
            self.operation, self.parameter, self.value, self.constraint
        )
    }
}

impl std::error::Error for InvalidArgumentError {}

/// Represents a positional lookup beyond the bounds of a finite collection.
///
/// # Examples
///
/// ```rust
/// use lazyseq::sequence::IndexOutOfRangeError;
///
/// let error = IndexOutOfRangeError { position: 5, length: 3 };
/// assert_eq!(
///     format!("{}", error),
///     "index 5 out of range for collection of length 3"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexOutOfRangeError {
    /// The requested position.
    pub position: usize,
    /// The length of the collection at the time of the lookup.
    pub length: usize,
}

impl std::fmt::Display for IndexOutOfRangeError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "index {} out of range for collection of length {}",
            self.position, self.length
        )
    }
}

impl std::error::Error for IndexOutOfRangeError {}

/// Represents errors that can occur when building or reading sequences.
///
/// # Examples
///
/// ```rust
/// use lazyseq::sequence::{IndexOutOfRangeError, SequenceError};
///
/// let error = SequenceError::from(IndexOutOfRangeError { position: 5, length: 3 });
/// assert!(matches!(error, SequenceError::IndexOutOfRange(_)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SequenceError {
    /// An argument was outside its domain.
    InvalidArgument(InvalidArgumentError),
    /// A position was beyond the bounds of a collection.
    IndexOutOfRange(IndexOutOfRangeError),
}

impl SequenceError {
    /// Creates an [`SequenceError::InvalidArgument`] for a negative count.
    pub(crate) fn negative_count(operation: &'static str, count: isize) -> Self {
        Self::InvalidArgument(InvalidArgumentError {
            operation,
            parameter: "count",
            value: count.to_string(),
            constraint: "must be non-negative",
        })
    }

    /// Creates an [`SequenceError::IndexOutOfRange`].
    pub(crate) const fn index_out_of_range(position: usize, length: usize) -> Self {
        Self::IndexOutOfRange(IndexOutOfRangeError { position, length })
    }
}

impl std::fmt::Display for SequenceError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidArgument(error) => write!(formatter, "{error}"),
            Self::IndexOutOfRange(error) => write!(formatter, "{error}"),
        }
    }
}

impl std::error::Error for SequenceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidArgument(error) => Some(error),
            Self::IndexOutOfRange(error) => Some(error),
        }
    }
}

impl From<InvalidArgumentError> for SequenceError {
    fn from(error: InvalidArgumentError) -> Self {
        Self::InvalidArgument(error)
    }
}

impl From<IndexOutOfRangeError> for SequenceError {
    fn from(error: IndexOutOfRangeError) -> Self {
        Self::IndexOutOfRange(error)
    }
}
