//! RKGA — Random-Key Genetic Algorithm.
//!
//! The population is partitioned per generation into `n_mutant` fresh
//! mutants in `[0, n_mutant)` and crossover children in
//! `[n_mutant, pop_size)`. Parents are drawn uniformly from the whole
//! previous generation (see
//! [`UniformSelection`](crate::ga::UniformSelection)), which distinguishes
//! RKGA from its biased successor in [`crate::brkga`].
//!
//! # References
//!
//! - Bean (1994), "Genetic algorithms and random keys for sequencing and
//!   optimization", *ORSA Journal on Computing* 6(2), 154–160

mod config;
mod engine;

pub use config::RkgaConfig;
pub use engine::{Rkga, RkgaPerformance};
