//! Seedable randomness.
//!
//! A run owns exactly one generator. Every random draw goes through it, so two
//! runs built from the same seed make identical choices.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha12Rng;

/// Generator type used by every simulation.
pub type SimRng = ChaCha12Rng;

/// Create a deterministic generator from a seed.
pub fn create_rng(seed: u64) -> SimRng {
    ChaCha12Rng::seed_from_u64(seed)
}

/// Draw a fresh seed from the operating system's entropy.
pub fn fresh_seed() -> u64 {
    rand::thread_rng().gen()
}
