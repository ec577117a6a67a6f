//! Injected randomness and a producer of bounded random integers.
//!
//! The library never reaches for a global random number generator. Anything
//! that needs random values receives a [`RandomSource`], which tests replace
//! with a deterministic one.
//!
//! - [`LinearCongruentialSource`]: seeded, reproducible pseudo-random values
//! - [`ScriptedSource`]: replays a fixed script of values
//! - `RngSource`: any `rand::Rng` (requires the `rand` feature)

use super::{InvalidArgumentError, Producer, SequenceError};

/// A source of uniformly distributed integers.
pub trait RandomSource {
    /// Returns an integer in `[0, upper_bound)`.
    ///
    /// Callers guarantee `upper_bound > 0`.
    fn uniform(&mut self, upper_bound: u32) -> u32;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    #[inline]
    fn uniform(&mut self, upper_bound: u32) -> u32 {
        (**self).uniform(upper_bound)
    }
}

// =============================================================================
// LinearCongruentialSource
// =============================================================================

/// A seeded linear congruential generator.
///
/// The same seed always produces the same values, which makes this source
/// suitable for reproducible tests and demonstrations.
///
/// # Examples
///
/// ```rust
/// use lazyseq::sequence::{LinearCongruentialSource, RandomSource};
///
/// let mut first = LinearCongruentialSource::new(42);
/// let mut second = LinearCongruentialSource::new(42);
/// assert_eq!(first.uniform(100), second.uniform(100));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinearCongruentialSource {
    state: u64,
}

impl LinearCongruentialSource {
    const MULTIPLIER: u64 = 6_364_136_223_846_793_005;
    const INCREMENT: u64 = 1_442_695_040_888_963_407;

    /// Creates a source from a seed.
    #[must_use]
    pub const fn new(seed: u64) -> Self {
        Self { state: seed }
    }
}

impl RandomSource for LinearCongruentialSource {
    fn uniform(&mut self, upper_bound: u32) -> u32 {
        self.state = self
            .state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT);
        let high = u32::try_from(self.state >> 32).unwrap_or(u32::MAX);
        high % upper_bound.max(1)
    }
}

// =============================================================================
// ScriptedSource
// =============================================================================

/// A source that replays a fixed list of values, cycling when it runs out.
///
/// Each scripted value is reduced modulo the requested upper bound, so the
/// result always stays in range.
///
/// # Examples
///
/// ```rust
/// use lazyseq::sequence::{RandomSource, ScriptedSource};
///
/// let mut source = ScriptedSource::new(vec![3, 7]);
/// assert_eq!(source.uniform(10), 3);
/// assert_eq!(source.uniform(10), 7);
/// assert_eq!(source.uniform(5), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptedSource {
    values: Vec<u32>,
    position: usize,
}

impl ScriptedSource {
    /// Creates a source that replays `values`.
    ///
    /// An empty script always yields `0`.
    #[must_use]
    pub const fn new(values: Vec<u32>) -> Self {
        Self {
            values,
            position: 0,
        }
    }
}

impl RandomSource for ScriptedSource {
    fn uniform(&mut self, upper_bound: u32) -> u32 {
        let Some(value) = self.values.get(self.position).copied() else {
            return 0;
        };
        self.position = (self.position + 1) % self.values.len();
        value % upper_bound.max(1)
    }
}

// =============================================================================
// RngSource
// =============================================================================

/// A [`RandomSource`] backed by any `rand::Rng`.
///
/// # Examples
///
/// ```rust
/// use lazyseq::sequence::{RandomSource, RngSource};
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let mut source = RngSource::new(StdRng::seed_from_u64(7));
/// assert!(source.uniform(6) < 6);
/// ```
#[cfg(feature = "rand")]
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    rng: R,
}

#[cfg(feature = "rand")]
impl<R: rand::Rng> RngSource<R> {
    /// Wraps a random number generator.
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }
}

#[cfg(feature = "rand")]
impl<R: rand::Rng> RandomSource for RngSource<R> {
    fn uniform(&mut self, upper_bound: u32) -> u32 {
        self.rng.random_range(0..upper_bound.max(1))
    }
}

// =============================================================================
// RandomProducer
// =============================================================================

/// A producer of `count` random integers, each in `[0, limit)`.
///
/// # Examples
///
/// ```rust
/// use lazyseq::sequence::{Producer, RandomProducer, ScriptedSource};
///
/// let source = ScriptedSource::new(vec![12, 99, 5]);
/// let producer = RandomProducer::new(3, 10, source).unwrap();
/// assert_eq!(producer.collect_vec(), vec![2, 9, 5]);
/// ```
#[derive(Debug, Clone)]
pub struct RandomProducer<R> {
    remaining: usize,
    limit: u32,
    source: R,
}

impl<R: RandomSource> RandomProducer<R> {
    /// Creates a producer of `count` values below `limit`.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::InvalidArgument`] if `limit` is zero, since
    /// the range `[0, 0)` has no values to draw from.
    pub fn new(count: usize, limit: u32, source: R) -> Result<Self, SequenceError> {
        if limit == 0 {
            return Err(SequenceError::InvalidArgument(InvalidArgumentError {
                operation: "RandomProducer::new",
                parameter: "limit",
                value: limit.to_string(),
                constraint: "must be greater than zero",
            }));
        }
        Ok(Self {
            remaining: count,
            limit,
            source,
        })
    }

    /// Returns the exclusive upper bound of the produced values.
    pub const fn limit(&self) -> u32 {
        self.limit
    }
}

impl<R: RandomSource> Producer for RandomProducer<R> {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        Some(self.source.uniform(self.limit))
    }

    fn minimum_remaining(&self) -> usize {
        self.remaining
    }
}
