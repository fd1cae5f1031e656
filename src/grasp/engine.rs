//! GRASP iteration loop.

use std::fmt;
use std::time::{Duration, Instant};

use rand::Rng;

use super::config::GraspConfig;
use crate::error::Result;
use crate::local_search::{LocalSearch, LocalSearchConfig};
use crate::problem::Problem;

/// Timing totals accumulated across `execute` calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct GraspPerformance {
    /// Construct-then-improve iterations executed, feasible or not.
    pub iterations: usize,
    /// Wall-clock total of `execute`.
    pub total_time: Duration,
    /// Wall-clock total of randomized construction.
    pub construct_time: Duration,
    /// Wall-clock total of the inner local search.
    pub local_search_time: Duration,
}

impl fmt::Display for GraspPerformance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let iters = self.iterations.max(1) as f64;
        writeln!(f, "GRASP performance ({} iterations):", self.iterations)?;
        writeln!(
            f,
            "    total time:                {:.6} s",
            self.total_time.as_secs_f64()
        )?;
        writeln!(
            f,
            "    average iteration time:    {:.6} s",
            self.total_time.as_secs_f64() / iters
        )?;
        writeln!(
            f,
            "    total construction time:   {:.6} s",
            self.construct_time.as_secs_f64()
        )?;
        writeln!(
            f,
            "    average construction time: {:.6} s",
            self.construct_time.as_secs_f64() / iters
        )?;
        writeln!(
            f,
            "    total local search time:   {:.6} s",
            self.local_search_time.as_secs_f64()
        )?;
        write!(
            f,
            "    average local search time: {:.6} s",
            self.local_search_time.as_secs_f64() / iters
        )
    }
}

/// GRASP engine.
///
/// # Usage
///
/// ```ignore
/// let mut engine = Grasp::new(GraspConfig::new().with_alpha(0.25))?;
/// let mut rng = create_rng(42);
/// let mut fitness = f64::NEG_INFINITY;
/// if engine.execute(&mut problem, &mut rng, &mut fitness)? {
///     // problem now holds the best solution found
/// }
/// ```
#[derive(Debug)]
pub struct Grasp {
    config: GraspConfig,
    perf: GraspPerformance,
}

impl Grasp {
    /// Creates the engine, validating the configuration.
    pub fn new(config: GraspConfig) -> Result<Self> {
        config.validate()?;
        Ok(Grasp {
            config,
            perf: GraspPerformance::default(),
        })
    }

    /// The engine's configuration.
    pub fn config(&self) -> &GraspConfig {
        &self.config
    }

    /// Zeroes the timing counters; parameters are kept.
    pub fn reset(&mut self) {
        self.perf = GraspPerformance::default();
    }

    /// Runs the construct-then-improve loop.
    ///
    /// On `Ok(true)`, `problem` holds the best feasible solution discovered
    /// and `*fitness` its fitness. When every construction attempt was
    /// infeasible, returns `Ok(false)` and leaves `problem` untouched.
    /// Errors other than construction infeasibility propagate unchanged.
    pub fn execute<P: Problem, R: Rng>(
        &mut self,
        problem: &mut P,
        rng: &mut R,
        fitness: &mut f64,
    ) -> Result<bool> {
        let run = Instant::now();
        let outcome = self.search(problem, rng, fitness);
        self.perf.total_time += run.elapsed();
        outcome
    }

    fn search<P: Problem, R: Rng>(
        &mut self,
        problem: &mut P,
        rng: &mut R,
        fitness: &mut f64,
    ) -> Result<bool> {
        let mut local = LocalSearch::new(
            LocalSearchConfig::new()
                .with_max_iter(self.config.max_iter_local)
                .with_policy(self.config.policy),
        )?;

        // Construction and improvement run on a working copy so the
        // caller's problem is untouched when nothing feasible turns up.
        let mut work = problem.empty();
        let mut best: Option<P> = None;
        let mut best_fitness = f64::NEG_INFINITY;

        for _ in 0..self.config.max_iter_grasp {
            self.perf.iterations += 1;
            work.clear();

            let construct = Instant::now();
            let constructed = work.random_construct(rng, self.config.alpha);
            self.perf.construct_time += construct.elapsed();

            let mut current = match constructed {
                Ok(f) => f,
                Err(err) if err.is_infeasible() => continue,
                Err(err) => return Err(err),
            };

            let improve = Instant::now();
            let improved = local.execute(&mut work, &mut current);
            self.perf.local_search_time += improve.elapsed();
            improved?;

            if current > best_fitness {
                best_fitness = current;
                match best.as_mut() {
                    Some(b) => b.copy_from(&work),
                    None => best = Some(work.clone()),
                }
            }
        }

        match best {
            Some(b) => {
                problem.copy_from(&b);
                *fitness = best_fitness;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// The accumulated performance counters.
    pub fn performance(&self) -> GraspPerformance {
        self.perf
    }

    /// Prints the performance summary to standard output.
    pub fn print_performance(&self) {
        println!("{}", self.perf);
    }
}
