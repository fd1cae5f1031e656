//! Local Search.
//!
//! Neighbourhood ascent: starting from a feasible solution, repeatedly move
//! to an improving neighbour — the best one under
//! [`Policy::BestImprovement`](crate::problem::Policy::BestImprovement), the
//! first strictly improving one under
//! [`Policy::FirstImprovement`](crate::problem::Policy::FirstImprovement) —
//! until no neighbour improves or the iteration budget runs out. The result
//! is a local optimum of the problem's neighbourhood relation.

mod config;
mod engine;

pub use config::LocalSearchConfig;
pub use engine::{LocalSearch, LocalSearchPerformance};
