//! RNG module - seeded random shape selection
//!
//! Pieces are drawn uniformly from the seven shapes, one independent draw per
//! generated piece. A small LCG keeps the sequence reproducible from a seed,
//! which the tests and the `--seed` flag rely on.

use crate::types::ShapeKind;

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
        // High bits of an LCG are far better distributed than the low ones.
        (self.next_u32() >> 16) % max
    }

    /// Pick one of the seven shapes uniformly.
    pub fn next_shape(&mut self) -> ShapeKind {
        ShapeKind::ALL[self.next_range(ShapeKind::ALL.len() as u32) as usize]
    }

    /// Current internal state, usable as a seed to continue the sequence.
    pub fn state(&self) -> u32 {
        self.state
    }
}
