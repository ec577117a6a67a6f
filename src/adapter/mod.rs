//! Adapters that compose producers and sequences without materializing.
//!
//! Every adapter here wraps one or more producers (or sequences) and pulls
//! from them only when it is itself asked for a value:
//!
//! - [`DropFirst`] / [`DropFirstSequence`]: skip a prefix, folding repeated skips
//! - [`Enumerate`] and [`Zip`]: pair values with positions or with another producer
//! - [`Map`], [`Filter`] and [`Take`]: transform, select and bound
//! - [`Permutation`] / [`PermutationProducer`]: reorder a collection by positions
//! - [`RepeatForever`]: cycle a sequence endlessly
//! - [`LazyMap`]: a random-access view that maps on every lookup
//!
//! # Examples
//!
//! ## Folding skips
//!
//! ```rust
//! use lazyseq::prelude::*;
//!
//! let skipped = Naturals::new().drop_first(2).drop_first(3);
//! assert_eq!(skipped.limit(), 5);
//! assert_eq!(skipped.take(2).collect_vec(), vec![6, 7]);
//! ```
//!
//! ## Reordering
//!
//! ```rust
//! use lazyseq::prelude::*;
//!
//! let reversed = Permutation::new(vec!['a', 'b', 'c'], from_iterable((0..3).rev()));
//! assert_eq!(reversed.materialize(), vec!['c', 'b', 'a']);
//! ```

mod drop_first;
mod enumerate;
mod lazy_map;
mod map;
mod permutation;
mod repeat_forever;

pub use drop_first::{DropFirst, DropFirstSequence};
pub use enumerate::{Enumerate, Zip};
pub use lazy_map::{LazyMap, LazyMapIterator};
pub use map::{Filter, Map, Take};
pub use permutation::{Permutation, PermutationProducer};
pub use repeat_forever::RepeatForever;
