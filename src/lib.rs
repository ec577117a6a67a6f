//! # lazyseq
//!
//! Lazy pull-sequence primitives for Rust.
//!
//! ## Overview
//!
//! This library is built around a pull protocol: a [`Producer`](sequence::Producer)
//! is asked, one call at a time, for its next value until it signals exhaustion.
//! Everything else is layered on top of that protocol:
//!
//! - **Producers and Sequences**: single-pass cursors and the multi-pass values
//!   that create them
//! - **Adapters**: drop-first, enumerate, zip, map, filter, take, permutation and
//!   repeat-forever, composed without materializing intermediate results
//! - **Persistent List**: an immutable cons list with structural sharing, an opaque
//!   position type and copy-free slicing
//!
//! ## Feature Flags
//!
//! - `persistent`: The cons list, its indices and slices (enabled by default)
//! - `arc`: Use `Arc` instead of `Rc` for shared nodes
//! - `serde`: Serialization support for the cons list
//! - `rand`: A [`RandomSource`](sequence::RandomSource) backed by any `rand::Rng`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use lazyseq::prelude::*;
//!
//! let cycled: Vec<i32> = RepeatForever::new(vec![1, 2, 3])
//!     .drop_first(1)
//!     .take(5)
//!     .collect_vec();
//! assert_eq!(cycled, vec![2, 3, 1, 2, 3]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use lazyseq::prelude::*;
/// ```
pub mod prelude {
    pub use crate::adapter::*;
    pub use crate::sequence::*;

    #[cfg(feature = "persistent")]
    pub use crate::persistent::*;
}

/// Reference-counted smart pointer type used for shared, never-mutated data.
///
/// When the `arc` feature is enabled, this is `std::sync::Arc`,
/// which is thread-safe but has slightly higher overhead.
///
/// When the `arc` feature is disabled (default), this is `std::rc::Rc`.
#[cfg(feature = "arc")]
pub(crate) type ReferenceCounter<T> = std::sync::Arc<T>;

#[cfg(not(feature = "arc"))]
pub(crate) type ReferenceCounter<T> = std::rc::Rc<T>;

pub mod adapter;
pub mod sequence;

#[cfg(feature = "persistent")]
pub mod persistent;
