//! BRKGA — Biased Random-Key Genetic Algorithm.
//!
//! The population is partitioned per generation into three index ranges:
//! the `n_elite` best individuals copied unchanged into `[0, n_elite)`,
//! fresh mutants in `[n_elite, n_elite + n_mutant)`, and biased crossover
//! children in the remainder. Each child takes one parent uniformly from
//! the elite set and one from the non-elite rest, inheriting the elite
//! parent's gene with probability `inherit_prob` (see
//! [`BiasedSelection`](crate::ga::BiasedSelection)).
//!
//! Copying the elites unchanged makes the best fitness non-decreasing
//! across generations.
//!
//! # References
//!
//! - Gonçalves & Resende (2011), "Biased random-key genetic algorithms for
//!   combinatorial optimization", *Journal of Heuristics* 17(5), 487–525

mod config;
mod engine;

pub use config::BrkgaConfig;
pub use engine::{Brkga, BrkgaPerformance};
