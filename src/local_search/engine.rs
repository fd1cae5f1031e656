//! Local Search ascent loop.

use std::fmt;
use std::time::{Duration, Instant};

use super::config::LocalSearchConfig;
use crate::error::Result;
use crate::problem::Problem;

/// Timing and iteration totals accumulated across `execute` calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalSearchPerformance {
    /// Ascent steps taken.
    pub iterations: usize,
    /// Wall-clock total of `execute`.
    pub total_time: Duration,
    /// Wall-clock total spent exploring neighbourhoods.
    pub neighbourhood_time: Duration,
}

impl fmt::Display for LocalSearchPerformance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let iters = self.iterations.max(1) as f64;
        writeln!(f, "Local Search performance:")?;
        writeln!(f, "    iterations:                      {}", self.iterations)?;
        writeln!(
            f,
            "    total time:                      {:.6} s",
            self.total_time.as_secs_f64()
        )?;
        writeln!(
            f,
            "    average iteration time:          {:.6} s",
            self.total_time.as_secs_f64() / iters
        )?;
        writeln!(
            f,
            "    neighbourhood exploration time:  {:.6} s",
            self.neighbourhood_time.as_secs_f64()
        )?;
        write!(
            f,
            "    average exploration time:        {:.6} s",
            self.neighbourhood_time.as_secs_f64() / iters
        )
    }
}

/// Local Search engine.
///
/// # Usage
///
/// ```ignore
/// let mut engine = LocalSearch::new(LocalSearchConfig::new().with_max_iter(100))?;
/// let mut fitness = problem.greedy_construct()?;
/// let improved = engine.execute(&mut problem, &mut fitness)?;
/// ```
pub struct LocalSearch {
    config: LocalSearchConfig,
    perf: LocalSearchPerformance,
}

impl LocalSearch {
    /// Creates the engine, validating the configuration.
    pub fn new(config: LocalSearchConfig) -> Result<Self> {
        config.validate()?;
        Ok(LocalSearch {
            config,
            perf: LocalSearchPerformance::default(),
        })
    }

    /// The engine's configuration.
    pub fn config(&self) -> &LocalSearchConfig {
        &self.config
    }

    /// Zeroes the timing counters; parameters are kept.
    pub fn reset(&mut self) {
        self.perf = LocalSearchPerformance::default();
    }

    /// Improves `problem` until a local optimum or the iteration budget.
    ///
    /// On entry `problem` must hold a feasible solution whose fitness is
    /// `*current`. On return `problem` holds the best solution reached and
    /// `*current` its fitness. Returns `Ok(true)` iff at least one
    /// improving step was taken.
    ///
    /// A neighbourhood with no improving candidate is not an error — the
    /// loop simply stops. Errors from problem operations propagate; the
    /// problem keeps the best solution reached before the failure.
    pub fn execute<P: Problem>(&mut self, problem: &mut P, current: &mut f64) -> Result<bool> {
        let run = Instant::now();
        let outcome = self.ascend(problem, current);
        self.perf.total_time += run.elapsed();
        outcome
    }

    fn ascend<P: Problem>(&mut self, problem: &mut P, current: &mut f64) -> Result<bool> {
        let mut improved = false;
        for _ in 0..self.config.max_iter {
            let mut candidate = problem.empty();

            let explore = Instant::now();
            let found = problem.best_neighbour(&mut candidate, self.config.policy);
            self.perf.neighbourhood_time += explore.elapsed();
            let neighbour_fitness = found?;

            if neighbour_fitness <= *current {
                break;
            }

            problem.copy_from(&candidate);
            *current = neighbour_fitness;
            improved = true;
            self.perf.iterations += 1;
        }
        Ok(improved)
    }

    /// The accumulated performance counters.
    pub fn performance(&self) -> LocalSearchPerformance {
        self.perf
    }

    /// Prints the performance summary to standard output.
    pub fn print_performance(&self) {
        println!("{}", self.perf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::ga::Chromosome;
    use crate::problem::Policy;
    use rand::Rng;

    // A finite state graph: each state has a fitness and a list of
    // neighbouring states, enumerated in a fixed order.
    #[derive(Debug, Clone)]
    struct StateGraph {
        values: Vec<f64>,
        neighbours: Vec<Vec<usize>>,
        state: usize,
        explored: usize,
    }

    impl StateGraph {
        fn new(values: Vec<f64>, neighbours: Vec<Vec<usize>>) -> Self {
            StateGraph {
                values,
                neighbours,
                state: 0,
                explored: 0,
            }
        }
    }

    impl Problem for StateGraph {
        fn empty(&self) -> Self {
            StateGraph {
                values: self.values.clone(),
                neighbours: self.neighbours.clone(),
                state: 0,
                explored: 0,
            }
        }

        fn copy_from(&mut self, other: &Self) {
            self.state = other.state;
        }

        fn clear(&mut self) {
            self.state = 0;
        }

        fn greedy_construct(&mut self) -> Result<f64> {
            self.state = 0;
            Ok(self.values[0])
        }

        fn random_construct<R: Rng>(&mut self, _rng: &mut R, _alpha: f64) -> Result<f64> {
            Err(Error::infeasible("no randomized construction"))
        }

        fn decode(&mut self, _chromosome: &Chromosome) -> Result<f64> {
            Err(Error::infeasible("no decoding"))
        }

        fn evaluate(&self) -> f64 {
            self.values[self.state]
        }

        fn best_neighbour(&mut self, candidate: &mut Self, policy: Policy) -> Result<f64> {
            let current = self.evaluate();
            let mut best = f64::NEG_INFINITY;
            let mut best_state = None;
            for &next in &self.neighbours[self.state] {
                self.explored += 1;
                let fitness = self.values[next];
                if fitness > best {
                    best = fitness;
                    best_state = Some(next);
                }
                if policy == Policy::FirstImprovement && fitness > current {
                    break;
                }
            }
            match best_state {
                Some(state) => {
                    candidate.state = state;
                    Ok(best)
                }
                None => Ok(f64::NEG_INFINITY),
            }
        }

        fn neighbours_explored(&self) -> usize {
            self.explored
        }

        fn sanity_check(&self) -> bool {
            self.state < self.values.len()
        }
    }

    // State 0 (fitness -10) has three neighbours enumerated in order:
    // fitness -10, -8, -5. The other states are local optima.
    fn three_rung_graph() -> StateGraph {
        StateGraph::new(
            vec![-10.0, -10.0, -8.0, -5.0],
            vec![vec![1, 2, 3], vec![], vec![], vec![]],
        )
    }

    #[test]
    fn test_best_improvement_takes_highest_neighbour() {
        let mut problem = three_rung_graph();
        let mut fitness = problem.greedy_construct().unwrap();
        let config = LocalSearchConfig::new()
            .with_max_iter(1)
            .with_policy(Policy::BestImprovement);
        let mut engine = LocalSearch::new(config).unwrap();

        let improved = engine.execute(&mut problem, &mut fitness).unwrap();

        assert!(improved);
        assert_eq!(fitness, -5.0);
        assert_eq!(problem.state, 3);
    }

    #[test]
    fn test_first_improvement_takes_first_strictly_better() {
        let mut problem = three_rung_graph();
        let mut fitness = problem.greedy_construct().unwrap();
        let config = LocalSearchConfig::new()
            .with_max_iter(1)
            .with_policy(Policy::FirstImprovement);
        let mut engine = LocalSearch::new(config).unwrap();

        engine.execute(&mut problem, &mut fitness).unwrap();

        assert_eq!(fitness, -8.0);
        assert_eq!(problem.state, 2);
    }

    #[test]
    fn test_stops_without_improvement() {
        // All neighbours are worse than the start.
        let mut problem = StateGraph::new(vec![-1.0, -4.0, -3.0], vec![vec![1, 2], vec![], vec![]]);
        let mut fitness = problem.greedy_construct().unwrap();
        let mut engine = LocalSearch::new(LocalSearchConfig::new()).unwrap();

        let improved = engine.execute(&mut problem, &mut fitness).unwrap();

        assert!(!improved);
        assert_eq!(fitness, -1.0);
        assert_eq!(problem.state, 0);
    }

    #[test]
    fn test_ascends_chain_to_local_optimum() {
        // 0 -> 1 -> 2 -> 3, strictly improving along the chain.
        let mut problem = StateGraph::new(
            vec![-9.0, -7.0, -4.0, -2.0],
            vec![vec![1], vec![2], vec![3], vec![]],
        );
        let mut fitness = problem.greedy_construct().unwrap();
        let mut engine = LocalSearch::new(LocalSearchConfig::new()).unwrap();

        let improved = engine.execute(&mut problem, &mut fitness).unwrap();

        assert!(improved);
        assert_eq!(fitness, -2.0);
        assert_eq!(problem.state, 3);
        assert_eq!(engine.performance().iterations, 3);
    }

    #[test]
    fn test_iteration_budget_bounds_ascent() {
        let mut problem = StateGraph::new(
            vec![-9.0, -7.0, -4.0, -2.0],
            vec![vec![1], vec![2], vec![3], vec![]],
        );
        let mut fitness = problem.greedy_construct().unwrap();
        let mut engine =
            LocalSearch::new(LocalSearchConfig::new().with_max_iter(2)).unwrap();

        engine.execute(&mut problem, &mut fitness).unwrap();

        assert_eq!(fitness, -4.0);
        assert_eq!(problem.state, 2);
    }

    #[test]
    fn test_neighbour_counter_reflects_materialized_candidates() {
        let mut problem = three_rung_graph();
        let mut fitness = problem.greedy_construct().unwrap();
        let mut engine = LocalSearch::new(
            LocalSearchConfig::new().with_policy(Policy::BestImprovement),
        )
        .unwrap();

        engine.execute(&mut problem, &mut fitness).unwrap();

        // Full scan of state 0's three neighbours.
        assert!(problem.neighbours_explored() >= 3);
    }

    #[test]
    fn test_problem_errors_propagate() {
        #[derive(Debug, Clone)]
        struct Broken;

        impl Problem for Broken {
            fn empty(&self) -> Self {
                Broken
            }
            fn clear(&mut self) {}
            fn greedy_construct(&mut self) -> Result<f64> {
                Ok(0.0)
            }
            fn random_construct<R: Rng>(&mut self, _rng: &mut R, _alpha: f64) -> Result<f64> {
                Err(Error::infeasible("unsupported"))
            }
            fn decode(&mut self, _chromosome: &Chromosome) -> Result<f64> {
                Err(Error::infeasible("unsupported"))
            }
            fn evaluate(&self) -> f64 {
                0.0
            }
            fn best_neighbour(&mut self, _candidate: &mut Self, _policy: Policy) -> Result<f64> {
                Err(Error::infeasible("neighbourhood enumeration failed"))
            }
            fn sanity_check(&self) -> bool {
                true
            }
        }

        let mut problem = Broken;
        let mut fitness = 0.0;
        let mut engine = LocalSearch::new(LocalSearchConfig::new()).unwrap();

        let err = engine.execute(&mut problem, &mut fitness).unwrap_err();
        assert!(err.is_infeasible());
    }

    #[test]
    fn test_reset_zeroes_counters() {
        let mut problem = three_rung_graph();
        let mut fitness = problem.greedy_construct().unwrap();
        let mut engine = LocalSearch::new(LocalSearchConfig::new()).unwrap();
        engine.execute(&mut problem, &mut fitness).unwrap();
        assert!(engine.performance().iterations > 0);

        engine.reset();
        assert_eq!(engine.performance().iterations, 0);
        assert_eq!(engine.performance().total_time, Duration::ZERO);
    }
}
