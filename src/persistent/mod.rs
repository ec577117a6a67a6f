//! Persistent (immutable) cons list with positional indices and slices.
//!
//! This module provides:
//!
//! - [`ConsList`]: an immutable singly-linked list whose tails are shared
//! - [`ListIndex`]: an opaque position in a list, pairing a node with its offset
//! - [`ListSlice`]: a half-open range of positions over a list, without copying
//!
//! # Structural Sharing
//!
//! Prepending to a list creates one new cell and shares every existing cell:
//!
//! ```text
//! list1:                    1 -> 2 -> 3 -> nil
//! list2 = list1.prepend(0): 0 -> [1 -> 2 -> 3 -> nil]
//! ```
//!
//! Indices and slices hold shared references to cells as well, so slicing is
//! O(1) in space.
//!
//! # Examples
//!
//! ## `ConsList`
//!
//! ```rust
//! use lazyseq::persistent::ConsList;
//!
//! let list = ConsList::cons(1, ConsList::cons(2, ConsList::cons(3, ConsList::nil())));
//! assert_eq!(list.first(), Some(&1));
//! assert_eq!(list.rest().first(), Some(&2));
//! assert_eq!(list.to_string(), "[1, 2, 3]");
//! ```
//!
//! ## `ListSlice`
//!
//! ```rust
//! use lazyseq::persistent::ConsList;
//!
//! let list: ConsList<i32> = (1..=4).collect();
//! let middle = list.slice_offsets(1..3);
//! assert_eq!(middle.iter().copied().collect::<Vec<_>>(), vec![2, 3]);
//! ```

mod cons_list;
mod list_index;
mod list_slice;

pub use cons_list::{ConsCell, ConsList, ConsListIterator, ConsListProducer};
pub use list_index::{ListIndex, ListIndices};
pub use list_slice::{ListSlice, ListSliceIterator, ListSliceProducer};

#[cfg(not(feature = "arc"))]
static_assertions::assert_not_impl_any!(ConsList<i32>: Send, Sync);

#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(ConsList<i32>: Send, Sync);
