//! RNG module - random-index providers for the piece spawner
//!
//! The spawner only needs "give me an index below `bound`". That capability
//! is the [`PieceRng`] trait, with three providers:
//!
//! - [`ThreadRandom`]: unseeded, backed by `rand`'s thread-local generator
//! - [`SimpleRng`]: seeded LCG for reproducible games
//! - [`SequenceRng`]: a fixed cycle of indices for tests

use rand::Rng;

/// Source of uniformly distributed indices
pub trait PieceRng {
    /// Next index in `[0, bound)`. `bound` is never zero.
    fn next_index(&mut self, bound: usize) -> usize;
}

impl<T: PieceRng + ?Sized> PieceRng for Box<T> {
    fn next_index(&mut self, bound: usize) -> usize {
        (**self).next_index(bound)
    }
}

/// Production source: `rand::rng()`
#[derive(Debug, Default)]
pub struct ThreadRandom;

impl ThreadRandom {
    pub fn new() -> Self {
        Self
    }
}

impl PieceRng for ThreadRandom {
    fn next_index(&mut self, bound: usize) -> usize {
        rand::rng().random_range(0..bound)
    }
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        // High bits: the low bits of a power-of-two LCG cycle with short periods.
        (self.next_u32() >> 16) % max.max(1)
    }

    pub fn state(&self) -> u32 {
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

impl PieceRng for SimpleRng {
    fn next_index(&mut self, bound: usize) -> usize {
        self.next_range(bound as u32) as usize
    }
}

/// Replays a fixed list of indices, wrapping around at the end.
///
/// Each value is reduced modulo the requested bound. An empty list always
/// yields 0.
#[derive(Debug, Clone)]
pub struct SequenceRng {
    seq: Vec<usize>,
    pos: usize,
}

impl SequenceRng {
    pub fn new(seq: impl Into<Vec<usize>>) -> Self {
        Self {
            seq: seq.into(),
            pos: 0,
        }
    }

    /// Always the same index
    pub fn constant(index: usize) -> Self {
        Self::new(vec![index])
    }
}

impl PieceRng for SequenceRng {
    fn next_index(&mut self, bound: usize) -> usize {
        if self.seq.is_empty() {
            return 0;
        }
        let v = self.seq[self.pos % self.seq.len()];
        self.pos = self.pos.wrapping_add(1);
        v % bound.max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_different_seeds() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(54321);
        assert_ne!(rng1.next_u32(), rng2.next_u32());
    }

    #[test]
    fn test_zero_seed_is_remapped() {
        assert_eq!(SimpleRng::new(0).state(), 1);
    }

    #[test]
    fn test_simple_rng_covers_all_indices() {
        let mut rng = SimpleRng::new(7);
        let mut seen = [false; 4];
        for _ in 0..200 {
            seen[rng.next_index(4)] = true;
        }
        assert!(seen.iter().all(|&s| s), "seen: {:?}", seen);
    }

    #[test]
    fn test_thread_random_in_range() {
        let mut rng = ThreadRandom::new();
        for _ in 0..100 {
            assert!(rng.next_index(4) < 4);
        }
    }

    #[test]
    fn test_sequence_wraps_and_reduces() {
        let mut rng = SequenceRng::new(vec![1, 6]);
        assert_eq!(rng.next_index(4), 1);
        assert_eq!(rng.next_index(4), 2);
        assert_eq!(rng.next_index(4), 1);
        assert_eq!(SequenceRng::new(Vec::new()).next_index(4), 0);
    }

    #[test]
    fn test_boxed_provider() {
        let mut rng: Box<dyn PieceRng> = Box::new(SequenceRng::constant(3));
        assert_eq!(rng.next_index(4), 3);
    }
}
