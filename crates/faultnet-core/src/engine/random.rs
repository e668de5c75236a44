//! Injectable random sources.
//!
//! Every stochastic draw in the engine goes through [`RandomSource`], so an
//! evaluation is reproducible given the source it was handed.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A source of uniform draws in `[0, 1)`.
pub trait RandomSource {
    /// Returns the next uniform draw.
    fn next_unit(&mut self) -> f64;
}

impl<S: RandomSource + ?Sized> RandomSource for &mut S {
    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }
}

/// Deterministic ChaCha8-backed source.
#[derive(Debug, Clone)]
pub struct SeededSource {
    rng: ChaCha8Rng,
}

impl SeededSource {
    /// Source seeded from a `u64`; equal seeds yield equal draw sequences.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Source seeded from operating system entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: ChaCha8Rng::from_entropy(),
        }
    }
}

impl RandomSource for SeededSource {
    fn next_unit(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}

/// Fresh seed from operating system entropy, for callers that want to log or
/// reuse the seed of a non-reproducible run.
pub fn entropy_seed() -> u64 {
    rand::random::<u64>()
}

/// Source that returns the same value on every draw.
///
/// `ConstantSource(0.5)` produces zero noise; `0.0` and `1.0` pin the noise
/// to its lower and upper bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstantSource(pub f64);

impl RandomSource for ConstantSource {
    fn next_unit(&mut self) -> f64 {
        self.0
    }
}

/// Source that replays a fixed sequence, cycling when exhausted.
#[derive(Debug, Clone, PartialEq)]
pub struct SequenceSource {
    values: Vec<f64>,
    cursor: usize,
}

impl SequenceSource {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values, cursor: 0 }
    }

    /// Number of draws taken so far.
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for SequenceSource {
    fn next_unit(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.5;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }
}
