//! The randomness seam used by the quiz generator.

use rand::{Rng, RngCore};

/// Source of uniformly distributed indices.
pub trait RandomSource {
    /// A value in `0..bound`. Callers never pass a bound of 0.
    fn next_below(&mut self, bound: usize) -> usize;
}

impl<R: RngCore> RandomSource for R {
    fn next_below(&mut self, bound: usize) -> usize {
        self.gen_range(0..bound)
    }
}

/// Replays a fixed list of values, wrapping around, each reduced mod the
/// requested bound.
#[derive(Debug, Clone)]
pub struct FixedSequence {
    values: Vec<usize>,
    cursor: usize,
}

impl FixedSequence {
    pub fn new(values: Vec<usize>) -> Self {
        Self { values, cursor: 0 }
    }
}

impl RandomSource for FixedSequence {
    fn next_below(&mut self, bound: usize) -> usize {
        debug_assert!(bound > 0);
        if self.values.is_empty() {
            return 0;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value % bound
    }
}

/// In-place Fisher-Yates shuffle.
pub fn shuffle<T, R>(items: &mut [T], rng: &mut R)
where
    R: RandomSource + ?Sized,
{
    for i in (1..items.len()).rev() {
        let j = rng.next_below(i + 1);
        items.swap(i, j);
    }
}
