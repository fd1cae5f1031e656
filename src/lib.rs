//! Domain-agnostic heuristic and metaheuristic optimization framework.
//!
//! Provides generic implementations of four search algorithms, all driven
//! through the shared [`problem::Problem`] contract:
//!
//! - **Local Search**: neighbourhood-ascent loop with First/Best improvement
//!   policies.
//! - **GRASP**: Greedy Randomized Adaptive Search Procedure — restricted
//!   candidate list construction followed by local search, repeated.
//! - **RKGA**: Random-Key Genetic Algorithm — random-key chromosomes with
//!   uniform parent selection.
//! - **BRKGA**: Biased Random-Key Genetic Algorithm — elite preservation,
//!   mutant injection and biased crossover.
//!
//! # Architecture
//!
//! The caller owns the problem instance and the random number generator;
//! an engine owns its population, elite set and timing counters for the
//! duration of a run. `execute` drives the problem through its
//! construction/decoding/neighbourhood operations, mutates it in place into
//! the best solution found, and reports that solution's fitness.
//!
//! Fitness is a real value and **larger is better** throughout the crate.
//! Minimization problems return negated cost from
//! [`problem::Problem::evaluate`].
//!
//! Engines are single-threaded; a caller wanting to bound a run does so via
//! the `max_iter`/`n_generations` knobs on each engine's config.

pub mod brkga;
pub mod error;
pub mod ga;
pub mod grasp;
pub mod local_search;
pub mod problem;
pub mod random;
pub mod rkga;
