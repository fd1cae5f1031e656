//! BRKGA evolutionary loop.

use std::fmt;
use std::time::{Duration, Instant};

use rand::Rng;

use super::config::BrkgaConfig;
use crate::error::Result;
use crate::ga::{population, BiasedSelection, Individual, ParentSelection};
use crate::problem::Problem;

/// Timing totals accumulated across `execute` calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrkgaPerformance {
    /// Generations evolved.
    pub generations: usize,
    /// Wall-clock total of `execute`.
    pub total_time: Duration,
    /// Wall-clock total of population initialization.
    pub initial_time: Duration,
    /// Wall-clock total of copying elite individuals.
    pub elite_copy_time: Duration,
    /// Wall-clock total of mutant generation.
    pub mutant_time: Duration,
    /// Wall-clock total of crossover generation.
    pub crossover_time: Duration,
}

impl fmt::Display for BrkgaPerformance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let gens = self.generations.max(1) as f64;
        writeln!(f, "BRKGA performance ({} generations):", self.generations)?;
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
            "    total elite copy time:     {:.6} s",
            self.elite_copy_time.as_secs_f64()
        )?;
        writeln!(
            f,
            "    average elite copy time:   {:.6} s",
            self.elite_copy_time.as_secs_f64() / gens
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

/// BRKGA engine.
#[derive(Debug)]
pub struct Brkga {
    config: BrkgaConfig,
    population: Vec<Individual>,
    /// `(fitness, index)` pairs of the current elites, best first.
    elite_set: Vec<(f64, usize)>,
    fitness_history: Vec<f64>,
    perf: BrkgaPerformance,
}

impl Brkga {
    /// Creates the engine, validating the configuration.
    pub fn new(config: BrkgaConfig) -> Result<Self> {
        config.validate()?;
        Ok(Brkga {
            config,
            population: Vec::new(),
            elite_set: Vec::new(),
            fitness_history: Vec::new(),
            perf: BrkgaPerformance::default(),
        })
    }

    /// The engine's configuration.
    pub fn config(&self) -> &BrkgaConfig {
        &self.config
    }

    /// Zeroes the timing counters and drops the last run's population;
    /// parameters are kept.
    pub fn reset(&mut self) {
        self.population.clear();
        self.elite_set.clear();
        self.fitness_history.clear();
        self.perf = BrkgaPerformance::default();
    }

    /// Evolves the population and decodes the best-ever individual into
    /// `problem`.
    ///
    /// On entry `problem` is an empty instance; on `Ok(true)` it holds the
    /// decoded best solution and `*fitness` that solution's fitness. The
    /// best-ever individual always sits in the most recent elite set. An
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
        let BrkgaConfig {
            chrom_size,
            pop_size,
            n_elite,
            n_mutant,
            n_generations,
            inherit_prob,
        } = self.config.clone();

        let init = Instant::now();
        let initial = population::initialize_population(problem, rng, pop_size, chrom_size);
        self.perf.initial_time += init.elapsed();
        self.population = initial?;

        self.track_elite();
        self.fitness_history = vec![self.elite_set[0].0];

        for _ in 0..n_generations {
            let mut next_gen = Vec::with_capacity(pop_size);

            // Elites are copied unchanged into [0, n_elite).
            let copy = Instant::now();
            for &(_, index) in &self.elite_set {
                next_gen.push(self.population[index].clone());
            }
            self.perf.elite_copy_time += copy.elapsed();

            // Mutants fill [n_elite, n_elite + n_mutant).
            for _ in 0..n_mutant {
                let spawn = Instant::now();
                let mutant = population::generate_mutant(problem, rng, chrom_size);
                self.perf.mutant_time += spawn.elapsed();
                next_gen.push(mutant?);
            }

            // Biased crossovers fill the remainder. The second parent is
            // drawn from the materialized non-elite index list, the
            // equivalent of drawing from [n_elite, pop_size) once the
            // population is viewed with the elites repositioned in front.
            let elite_indices: Vec<usize> =
                self.elite_set.iter().map(|&(_, index)| index).collect();
            let non_elite_indices = self.non_elite_indices();
            let select = BiasedSelection {
                elite: &elite_indices,
                non_elite: &non_elite_indices,
            };

            for _ in (n_elite + n_mutant)..pop_size {
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
            self.track_elite();
            self.perf.generations += 1;
            self.fitness_history.push(self.elite_set[0].0);
        }

        let (_, best_index) = self.elite_set[0];
        problem.clear();
        *fitness = problem.decode(self.population[best_index].chromosome())?;
        Ok(true)
    }

    /// Rebuilds the elite set from the current population: sort
    /// `(fitness, index)` pairs by descending fitness, ties by ascending
    /// index, keep the top `n_elite`.
    fn track_elite(&mut self) {
        let mut ranked: Vec<(f64, usize)> = self
            .population
            .iter()
            .enumerate()
            .map(|(index, ind)| (ind.fitness(), index))
            .collect();
        ranked.sort_by(|a, b| {
            b.0.partial_cmp(&a.0)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(a.1.cmp(&b.1))
        });
        ranked.truncate(self.config.n_elite);
        self.elite_set = ranked;
    }

    /// Population indices outside the current elite set, in ascending
    /// order.
    fn non_elite_indices(&self) -> Vec<usize> {
        let mut is_elite = vec![false; self.population.len()];
        for &(_, index) in &self.elite_set {
            is_elite[index] = true;
        }
        (0..self.population.len())
            .filter(|&index| !is_elite[index])
            .collect()
    }

    /// The most recent run's population.
    pub fn population(&self) -> &[Individual] {
        &self.population
    }

    /// `(fitness, index)` pairs of the most recent elite set, best first.
    pub fn elite_set(&self) -> &[(f64, usize)] {
        &self.elite_set
    }

    /// Best individual of the most recent run, if any.
    pub fn best_individual(&self) -> Option<&Individual> {
        self.elite_set
            .first()
            .map(|&(_, index)| &self.population[index])
    }

    /// Best fitness recorded after initialization and after each
    /// generation of the most recent run.
    pub fn fitness_history(&self) -> &[f64] {
        &self.fitness_history
    }

    /// The accumulated performance counters.
    pub fn performance(&self) -> BrkgaPerformance {
        self.perf
    }

    /// Prints the performance summary to standard output.
    pub fn print_performance(&self) {
        println!("{}", self.perf);
    }
}
