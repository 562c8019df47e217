//! Injectable randomness for lifeline effects.
//!
//! ## Key Features
//!
//! - **Substitutable**: The controller only sees the `RandomSource` trait,
//!   so tests can script every draw.
//! - **Deterministic**: `QuizRng` with the same seed produces identical draws.
//! - **Unbiased sampling**: `sample_k_of_n` picks a uniform k-subset.
//!
//! ## Example
//!
//! ```
//! use ladder_quiz::core::{sample_k_of_n, QuizRng};
//!
//! let mut rng = QuizRng::new(42);
//! let picked = sample_k_of_n(&mut rng, &["a1", "a2", "a4"], 2);
//! assert_eq!(picked.len(), 2);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use smallvec::SmallVec;

/// A source of uniform random indices.
pub trait RandomSource {
    /// Draw an index uniformly from `0..bound`.
    ///
    /// Callers never pass `bound == 0`.
    fn below(&mut self, bound: usize) -> usize;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn below(&mut self, bound: usize) -> usize {
        (**self).below(bound)
    }
}

/// Seeded RNG used for live sessions.
///
/// Uses ChaCha8 so a session seed reproduces every 50/50 draw.
#[derive(Clone, Debug)]
pub struct QuizRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl QuizRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from the thread-local generator.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for QuizRng {
    fn below(&mut self, bound: usize) -> usize {
        self.inner.gen_range(0..bound)
    }
}

/// Pick `k` of `items` uniformly at random without replacement.
///
/// Runs the first `k` steps of a Fisher-Yates shuffle, so every k-subset is
/// equally likely. `k` is clamped to `items.len()`. The result is returned in
/// draw order.
pub fn sample_k_of_n<T: Clone, R: RandomSource + ?Sized>(
    source: &mut R,
    items: &[T],
    k: usize,
) -> SmallVec<[T; 4]> {
    let mut pool: SmallVec<[T; 4]> = items.iter().cloned().collect();
    let k = k.min(pool.len());

    for i in 0..k {
        let j = i + source.below(pool.len() - i);
        pool.swap(i, j);
    }

    pool.truncate(k);
    pool
}
