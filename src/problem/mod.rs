//! The problem contract every algorithm engine drives.
//!
//! A [`Problem`] value is a solution under construction: the input data of
//! an instance plus whatever solution state has been built so far. Engines
//! only ever see problems through this trait — constructing them, decoding
//! chromosomes into them, exploring their neighbourhoods and reading their
//! fitness.

use rand::Rng;

use crate::error::Result;
use crate::ga::Chromosome;

/// Neighbourhood exploration policy for local search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    /// Scan the full neighbourhood and keep the highest-fitness neighbour.
    /// Ties are broken by the first neighbour seen.
    BestImprovement,

    /// Stop at the first neighbour strictly better than the current
    /// solution; when none exists, keep the best neighbour seen.
    FirstImprovement,
}

/// An optimization problem, exposed to the engines as a set of
/// construction, decoding and neighbourhood operations.
///
/// # Fitness convention
///
/// All fitness values returned by this trait are real numbers where
/// **larger is better**. A minimization problem returns its cost negated
/// from [`evaluate`](Problem::evaluate) and the constructive methods; the
/// engines never invert signs on their own.
///
/// # Solution lifecycle
///
/// An instance starts empty, transitions to a feasible solution through
/// [`greedy_construct`](Problem::greedy_construct),
/// [`random_construct`](Problem::random_construct) or
/// [`decode`](Problem::decode), is improved through
/// [`best_neighbour`](Problem::best_neighbour), and returns to the empty
/// state through [`clear`](Problem::clear).
///
/// `Clone` must deep-copy the full solution state; engines rely on it to
/// snapshot the best solution found so far.
pub trait Problem: Clone {
    /// Returns a fresh instance carrying the input data of this one but no
    /// solution state.
    ///
    /// Engines use this to allocate working copies: neighbour candidates in
    /// local search and scratch instances for chromosome decoding.
    fn empty(&self) -> Self;

    /// Overwrites this instance's solution state with `other`'s.
    fn copy_from(&mut self, other: &Self) {
        *self = other.clone();
    }

    /// Resets the solution state so that any constructive method may be
    /// run again.
    fn clear(&mut self);

    /// Builds a solution deterministically.
    ///
    /// Returns the fitness of the constructed solution, or
    /// [`Error::Infeasible`](crate::error::Error::Infeasible) when no
    /// feasible solution exists.
    fn greedy_construct(&mut self) -> Result<f64>;

    /// Builds a randomized solution using a restricted candidate list.
    ///
    /// At every step the RCL must contain exactly the candidates whose
    /// cost satisfies `cost <= min_cost + alpha * (max_cost - min_cost)`,
    /// with the minimum and maximum taken over the full current candidate
    /// list, and the next candidate is drawn uniformly from the RCL.
    /// `alpha = 0` degenerates to a greedy choice among minimum-cost
    /// candidates; `alpha = 1` admits every candidate.
    ///
    /// Dead ends — including an emptied candidate list — are reported as
    /// [`Error::Infeasible`](crate::error::Error::Infeasible).
    fn random_construct<R: Rng>(&mut self, rng: &mut R, alpha: f64) -> Result<f64>;

    /// Builds the solution encoded by `chromosome`.
    ///
    /// Must be deterministic: the same chromosome always decodes to the
    /// same solution and fitness.
    fn decode(&mut self, chromosome: &Chromosome) -> Result<f64>;

    /// Returns the fitness of the current solution. Pure read.
    fn evaluate(&self) -> f64;

    /// Explores this solution's neighbourhood and writes the selected
    /// neighbour into `candidate`.
    ///
    /// `candidate` is an empty instance obtained from
    /// [`empty`](Problem::empty). The return value is the selected
    /// neighbour's fitness, or `f64::NEG_INFINITY` when the neighbourhood
    /// is empty (in which case `candidate` is left untouched). The
    /// selection depends on `policy`; see [`Policy`].
    ///
    /// Implementations must add the number of neighbours materialized
    /// during the scan to the counter reported by
    /// [`neighbours_explored`](Problem::neighbours_explored).
    fn best_neighbour(&mut self, candidate: &mut Self, policy: Policy) -> Result<f64>;

    /// Number of neighbours materialized by all
    /// [`best_neighbour`](Problem::best_neighbour) calls so far.
    ///
    /// Problems without a neighbourhood structure keep the default of 0.
    fn neighbours_explored(&self) -> usize {
        0
    }

    /// Feasibility self-test for the current solution.
    fn sanity_check(&self) -> bool;
}
