//! RKGA evolutionary loop.

use std::fmt;
use std::time::{Duration, Instant};

use rand::Rng;

use super::config::RkgaConfig;
use crate::error::Result;
use crate::ga::{population, Individual, ParentSelection, UniformSelection};
use crate::problem::Problem;

/// Timing totals accumulated across `execute` calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct RkgaPerformance {
    /// Generations evolved.
    pub generations: usize,
    /// Wall-clock total of `execute`.
    pub total_time: Duration,
    /// Wall-clock total of population initialization.
    pub initial_time: Duration,
    /// Wall-clock total of mutant generation.
    pub mutant_time: Duration,
    /// Wall-clock total of crossover generation.
    pub crossover_time: Duration,
}

impl fmt::Display for RkgaPerformance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let gens = self.generations.max(1) as f64;
        writeln!(f, "RKGA performance ({} generations):", self.generations)?;
        writeln!(
            f,
            "    total time:                {:.6} s",
            self.total_time.as_secs_f64()
        )?;
        writeln!(
            f,
            "    initialization time:       {:.6} s",
            self.initial_time.as_secs_f64()
        )?;
        writeln!(
            f,
            "    total mutant time:         {:.6} s",
            self.mutant_time.as_secs_f64()
        )?;
        writeln!(
            f,
            "    average mutant time:       {:.6} s",
            self.mutant_time.as_secs_f64() / gens
        )?;
        writeln!(
            f,
            "    total crossover time:      {:.6} s",
            self.crossover_time.as_secs_f64()
        )?;
        write!(
            f,
            "    average crossover time:    {:.6} s",
            self.crossover_time.as_secs_f64() / gens
        )
    }
}

/// RKGA engine.
pub struct Rkga {
    config: RkgaConfig,
    population: Vec<Individual>,
    fitness_history: Vec<f64>,
    perf: RkgaPerformance,
}

impl Rkga {
    /// Creates the engine, validating the configuration.
    pub fn new(config: RkgaConfig) -> Result<Self> {
        config.validate()?;
        Ok(Rkga {
            config,
            population: Vec::new(),
            fitness_history: Vec::new(),
            perf: RkgaPerformance::default(),
        })
    }

    /// The engine's configuration.
    pub fn config(&self) -> &RkgaConfig {
        &self.config
    }

    /// Zeroes the timing counters and drops the last run's population;
    /// parameters are kept.
    pub fn reset(&mut self) {
        self.population.clear();
        self.fitness_history.clear();
        self.perf = RkgaPerformance::default();
    }

    /// Evolves a population of random-key chromosomes and decodes the best
    /// one into `problem`.
    ///
    /// On entry `problem` is an empty instance; on `Ok(true)` it holds the
    /// decoded best solution and `*fitness` that solution's fitness. An
    /// infeasible decode anywhere in the run is fatal and propagates.
    pub fn execute<P: Problem, R: Rng>(
        &mut self,
        problem: &mut P,
        rng: &mut R,
        fitness: &mut f64,
    ) -> Result<bool> {
        let run = Instant::now();
        let outcome = self.evolve(problem, rng, fitness);
        self.perf.total_time += run.elapsed();
        outcome
    }

    fn evolve<P: Problem, R: Rng>(
        &mut self,
        problem: &mut P,
        rng: &mut R,
        fitness: &mut f64,
    ) -> Result<bool> {
        let RkgaConfig {
            chrom_size,
            pop_size,
            n_mutant,
            n_generations,
            inherit_prob,
        } = self.config.clone();

        let init = Instant::now();
        let initial = population::initialize_population(problem, rng, pop_size, chrom_size);
        self.perf.initial_time += init.elapsed();
        self.population = initial?;

        self.fitness_history =
            vec![population::best_individual(&self.population).fitness()];

        let select = UniformSelection { pop_size };

        for _ in 0..n_generations {
            let mut next_gen = Vec::with_capacity(pop_size);

            // Mutants fill [0, n_mutant).
            for _ in 0..n_mutant {
                let spawn = Instant::now();
                let mutant = population::generate_mutant(problem, rng, chrom_size);
                self.perf.mutant_time += spawn.elapsed();
                next_gen.push(mutant?);
            }

            // Crossovers fill [n_mutant, pop_size).
            for _ in n_mutant..pop_size {
                let (p1, p2) = select.pick(rng);
                let cross = Instant::now();
                let child = population::crossover_child(
                    problem,
                    rng,
                    &self.population[p1],
                    &self.population[p2],
                    inherit_prob,
                );
                self.perf.crossover_time += cross.elapsed();
                next_gen.push(child?);
            }

            self.population = next_gen;
            self.perf.generations += 1;
            self.fitness_history
                .push(population::best_individual(&self.population).fitness());
        }

        let best = population::best_individual(&self.population);
        problem.clear();
        *fitness = problem.decode(best.chromosome())?;
        Ok(true)
    }

    /// The most recent run's population.
    pub fn population(&self) -> &[Individual] {
        &self.population
    }

    /// Best individual of the most recent run, if any.
    pub fn best_individual(&self) -> Option<&Individual> {
        if self.population.is_empty() {
            None
        } else {
            Some(population::best_individual(&self.population))
        }
    }

    /// Best fitness recorded after initialization and after each
    /// generation of the most recent run.
    pub fn fitness_history(&self) -> &[f64] {
        &self.fitness_history
    }

    /// The accumulated performance counters.
    pub fn performance(&self) -> RkgaPerformance {
        self.perf
    }

    /// Prints the performance summary to standard output.
    pub fn print_performance(&self) {
        println!("{}", self.perf);
    }
}
