//! Random number generation for the algorithm engines.
//!
//! Every randomized operation in the crate is generic over [`rand::Rng`],
//! so any generator can drive the engines. Two are bundled:
//!
//! - the platform generator created by [`create_rng`], a fast seeded PRNG;
//! - [`BlumBlumShub`], a bit-stream generator built from two Blum primes.
//!
//! The engines never inspect which implementation is in use. Generators are
//! not thread-safe; they are passed as `&mut R` into each operation.

mod bbs;

pub use bbs::BlumBlumShub;

use rand::rngs::SmallRng;
use rand::SeedableRng;

/// Creates the default platform generator from a seed.
///
/// Two generators created from the same seed produce identical sequences,
/// which is what makes engine runs reproducible.
pub fn create_rng(seed: u64) -> SmallRng {
    SmallRng::seed_from_u64(seed)
}
