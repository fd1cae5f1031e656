//! Genetic algorithm base shared by the RKGA and BRKGA engines.
//!
//! Random-key genetic algorithms represent solutions as chromosomes of
//! `f64` genes in `[0, 1)`; a problem's
//! [`decode`](crate::problem::Problem::decode) maps a chromosome to a
//! feasible solution and its fitness. This module holds the pieces both
//! engines are built from: the [`Chromosome`]/[`Individual`] data model,
//! the [`ParentSelection`] strategy seam, and the population operations
//! (initialization, mutant generation, crossover, evaluation).
//!
//! # References
//!
//! - Bean (1994), "Genetic algorithms and random keys for sequencing and
//!   optimization", *ORSA Journal on Computing* 6(2), 154–160

pub mod population;
mod types;

pub use types::{BiasedSelection, Chromosome, Individual, ParentSelection, UniformSelection};
