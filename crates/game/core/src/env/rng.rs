//! Deterministic random rolls for bloom and perk rolling.
//!
//! Every roll is a pure function of a seed, so a weapon replays identically
//! from the same seed and event sequence.

/// Seeded random source.
///
/// Implementations must return the same value for the same seed.
pub trait RngOracle: Send + Sync {
    fn next_u32(&self, seed: u64) -> u32;

    /// Uniform value in `[min, max]` inclusive.
    fn range(&self, seed: u64, min: u32, max: u32) -> u32 {
        if min >= max {
            return min;
        }
        let span = max - min + 1;
        min + (self.next_u32(seed) % span)
    }

    /// Uniform index into a collection of `len` items. `len` must be non-zero.
    fn index(&self, seed: u64, len: usize) -> usize {
        self.range(seed, 0, len.saturating_sub(1) as u32) as usize
    }

    /// Uniform value in `[-1, 1]`.
    fn signed_unit(&self, seed: u64) -> f32 {
        let unit = self.next_u32(seed) as f64 / u32::MAX as f64;
        (unit * 2.0 - 1.0) as f32
    }
}

/// PCG-XSH-RR: 64-bit LCG state permuted into a 32-bit output.
#[derive(Clone, Copy, Debug, Default)]
pub struct PcgRng;

impl PcgRng {
    const MULTIPLIER: u64 = 6364136223846793005;
    const INCREMENT: u64 = 1442695040888963407;

    #[inline]
    fn step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    #[inline]
    fn output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RngOracle for PcgRng {
    fn next_u32(&self, seed: u64) -> u32 {
        Self::output(Self::step(seed))
    }
}

/// Roll purposes, mixed into the seed so independent rolls of the same shot
/// never correlate.
pub mod context {
    pub const BLOOM: u32 = 0;
    pub const PERK_ROLL: u32 = 1;
}

/// Derives the seed for one roll.
///
/// * `weapon_seed` - fixed per weapon instance
/// * `sequence` - shot number or perk slot index
/// * `context` - one of [`context`]
pub fn compute_seed(weapon_seed: u64, sequence: u64, context: u32) -> u64 {
    let mut hash = weapon_seed;
    hash ^= sequence.wrapping_mul(0x9e3779b97f4a7c15);
    hash ^= (context as u64).wrapping_mul(0x517cc1b727220a95);

    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;
    hash
}
