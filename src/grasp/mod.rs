//! GRASP — Greedy Randomized Adaptive Search Procedure.
//!
//! Each iteration builds a solution with the problem's restricted candidate
//! list construction ([`Problem::random_construct`]) and polishes it with
//! [`LocalSearch`](crate::local_search::LocalSearch); the best solution over
//! all iterations wins. Iterations whose construction turns out infeasible
//! are skipped, which makes GRASP the one engine that recovers from the
//! `Infeasible` signal.
//!
//! [`Problem::random_construct`]: crate::problem::Problem::random_construct
//!
//! # References
//!
//! - Feo, T. & Resende, M. (1995). "Greedy randomized adaptive search
//!   procedures", *Journal of Global Optimization* 6, 109–133

mod config;
mod engine;

pub use config::GraspConfig;
pub use engine::{Grasp, GraspPerformance};
