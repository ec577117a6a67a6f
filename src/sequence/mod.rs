//! Producers, sequences and the sources that create them.
//!
//! This module defines the two capabilities everything else is built on:
//!
//! - [`Producer`]: a single-pass cursor, asked repeatedly for its next value
//! - [`Sequence`]: a value that can create any number of independent producers
//!
//! It also provides the leaf sources of the library:
//!
//! - [`Naturals`], [`Empty`] and [`Once`]
//! - [`FromFn`] (closure-backed), [`IteratorProducer`] (iterator-backed)
//! - [`Iterable`] and [`FromFactory`] sequences
//! - [`RandomProducer`] over an injected [`RandomSource`]
//! - The [`Collection`] capability used for positional lookup
//!
//! # Examples
//!
//! ## Independent traversals
//!
//! ```rust
//! use lazyseq::sequence::{Producer, Sequence};
//!
//! let numbers = vec![1, 2, 3];
//! let mut first = numbers.create_producer();
//! let mut second = numbers.create_producer();
//!
//! assert_eq!(first.next(), Some(1));
//! assert_eq!(first.next(), Some(2));
//! assert_eq!(second.next(), Some(1));
//! ```
//!
//! ## Infinite sources
//!
//! ```rust
//! use lazyseq::sequence::{Naturals, Producer};
//!
//! let first_five = Naturals::new().take(5).collect_vec();
//! assert_eq!(first_five, vec![1, 2, 3, 4, 5]);
//! ```

mod algorithms;
mod collection;
mod error;
mod iterable;
mod producer;
mod random;
mod source;

pub use algorithms::{is_ordered, without_min_max};
pub use collection::{Collection, EmptyCollection};
pub use error::{IndexOutOfRangeError, InvalidArgumentError, SequenceError};
pub use iterable::{FromFactory, Iterable, Sequence, from_factory, from_iterable};
pub use producer::{BoxedProducer, Producer, ProducerIterator};
#[cfg(feature = "rand")]
pub use random::RngSource;
pub use random::{LinearCongruentialSource, RandomProducer, RandomSource, ScriptedSource};
pub use source::{Empty, FromFn, IteratorProducer, Naturals, Once, from_fn, from_iterator};
