//! Population lifecycle operations shared by the RKGA and BRKGA engines.
//!
//! Every operation that produces an individual also decodes it, so a
//! population never holds an unevaluated member at a generation boundary.
//! An infeasible decode is fatal here: the error propagates out of the
//! engine's `execute` unchanged.

use rand::Rng;

use super::{Chromosome, Individual};
use crate::error::Result;
use crate::problem::Problem;

/// Fills a population with `pop_size` freshly decoded mutants.
pub fn initialize_population<P: Problem, R: Rng>(
    problem: &P,
    rng: &mut R,
    pop_size: usize,
    chrom_size: usize,
) -> Result<Vec<Individual>> {
    let mut population = Vec::with_capacity(pop_size);
    for _ in 0..pop_size {
        population.push(generate_mutant(problem, rng, chrom_size)?);
    }
    Ok(population)
}

/// Creates one mutant: a fresh random chromosome, decoded.
pub fn generate_mutant<P: Problem, R: Rng>(
    problem: &P,
    rng: &mut R,
    chrom_size: usize,
) -> Result<Individual> {
    let mut individual = Individual::from_chromosome(Chromosome::random(rng, chrom_size));
    evaluate_individual(problem, &mut individual)?;
    Ok(individual)
}

/// Creates one crossover child of `p1` and `p2`, decoded.
///
/// Gene `i` is inherited from `p1` with probability `inherit_prob` and from
/// `p2` otherwise.
pub fn crossover_child<P: Problem, R: Rng>(
    problem: &P,
    rng: &mut R,
    p1: &Individual,
    p2: &Individual,
    inherit_prob: f64,
) -> Result<Individual> {
    debug_assert_eq!(p1.chromosome().len(), p2.chromosome().len());
    let genes = p1
        .chromosome()
        .genes()
        .iter()
        .zip(p2.chromosome().genes())
        .map(|(&a, &b)| {
            if rng.random_range(0.0..1.0) < inherit_prob {
                a
            } else {
                b
            }
        })
        .collect();
    let mut child = Individual::from_chromosome(Chromosome::from_genes(genes));
    evaluate_individual(problem, &mut child)?;
    Ok(child)
}

/// Decodes the individual's chromosome on a scratch instance and caches the
/// resulting fitness.
pub fn evaluate_individual<P: Problem>(problem: &P, individual: &mut Individual) -> Result<()> {
    let mut scratch = problem.empty();
    let fitness = scratch.decode(individual.chromosome())?;
    individual.set_fitness(fitness);
    Ok(())
}

/// The individual of maximum fitness; the earliest index wins ties.
///
/// # Panics
///
/// Panics when the population is empty.
pub fn best_individual(population: &[Individual]) -> &Individual {
    let (first, rest) = population
        .split_first()
        .expect("population must not be empty");
    rest.iter().fold(
        first,
        |best, ind| if ind.fitness() > best.fitness() { ind } else { best },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::problem::Policy;
    use crate::random::create_rng;

    // Decoder-only problem: fitness is the sum of the genes.
    #[derive(Debug, Clone, Default)]
    struct SumProblem {
        total: Option<f64>,
    }

    impl Problem for SumProblem {
        fn empty(&self) -> Self {
            SumProblem::default()
        }

        fn clear(&mut self) {
            self.total = None;
        }

        fn greedy_construct(&mut self) -> Result<f64> {
            Err(Error::infeasible("no constructive algorithm"))
        }

        fn random_construct<R: Rng>(&mut self, _rng: &mut R, _alpha: f64) -> Result<f64> {
            Err(Error::infeasible("no constructive algorithm"))
        }

        fn decode(&mut self, chromosome: &Chromosome) -> Result<f64> {
            let total = chromosome.genes().iter().sum();
            self.total = Some(total);
            Ok(total)
        }

        fn evaluate(&self) -> f64 {
            self.total.unwrap_or(f64::NEG_INFINITY)
        }

        fn best_neighbour(&mut self, _candidate: &mut Self, _policy: Policy) -> Result<f64> {
            Ok(f64::NEG_INFINITY)
        }

        fn sanity_check(&self) -> bool {
            self.total.is_some()
        }
    }

    #[test]
    fn test_initialize_population_decodes_everyone() {
        let problem = SumProblem::default();
        let mut rng = create_rng(42);
        let population = initialize_population(&problem, &mut rng, 20, 5).unwrap();
        assert_eq!(population.len(), 20);
        for ind in &population {
            assert_eq!(ind.chromosome().len(), 5);
            let expected: f64 = ind.chromosome().genes().iter().sum();
            assert_eq!(ind.fitness(), expected);
        }
    }

    #[test]
    fn test_crossover_genes_come_from_parents() {
        let problem = SumProblem::default();
        let mut rng = create_rng(42);
        let p1 = Individual::from_chromosome(Chromosome::from_genes(vec![0.25; 10]));
        let p2 = Individual::from_chromosome(Chromosome::from_genes(vec![0.75; 10]));
        let child = crossover_child(&problem, &mut rng, &p1, &p2, 0.5).unwrap();
        assert!(child
            .chromosome()
            .genes()
            .iter()
            .all(|&g| g == 0.25 || g == 0.75));
    }

    #[test]
    fn test_crossover_extreme_probabilities() {
        let problem = SumProblem::default();
        let mut rng = create_rng(42);
        let p1 = Individual::from_chromosome(Chromosome::from_genes(vec![0.25; 8]));
        let p2 = Individual::from_chromosome(Chromosome::from_genes(vec![0.75; 8]));

        let all_first = crossover_child(&problem, &mut rng, &p1, &p2, 1.0).unwrap();
        assert!(all_first.chromosome().genes().iter().all(|&g| g == 0.25));

        let all_second = crossover_child(&problem, &mut rng, &p1, &p2, 0.0).unwrap();
        assert!(all_second.chromosome().genes().iter().all(|&g| g == 0.75));
    }

    #[test]
    fn test_inheritance_fraction_tracks_probability() {
        let problem = SumProblem::default();
        let mut rng = create_rng(42);
        let n = 20_000;
        let p1 = Individual::from_chromosome(Chromosome::from_genes(vec![0.25; 1]));
        let p2 = Individual::from_chromosome(Chromosome::from_genes(vec![0.75; 1]));

        for inherit_prob in [0.1, 0.5, 0.7, 0.9] {
            let mut from_first = 0usize;
            for _ in 0..n {
                let child =
                    crossover_child(&problem, &mut rng, &p1, &p2, inherit_prob).unwrap();
                if child.chromosome()[0] == 0.25 {
                    from_first += 1;
                }
            }
            let fraction = from_first as f64 / n as f64;
            assert!(
                (fraction - inherit_prob).abs() < 0.02,
                "inherit_prob {} produced fraction {}",
                inherit_prob,
                fraction
            );
        }
    }

    #[test]
    fn test_evaluate_individual_sets_fitness() {
        let problem = SumProblem::default();
        let mut ind =
            Individual::from_chromosome(Chromosome::from_genes(vec![0.1, 0.2, 0.3]));
        evaluate_individual(&problem, &mut ind).unwrap();
        assert!((ind.fitness() - 0.6).abs() < 1e-12);
    }

    #[test]
    fn test_infeasible_decode_propagates() {
        #[derive(Debug, Clone)]
        struct NeverDecodes;

        impl Problem for NeverDecodes {
            fn empty(&self) -> Self {
                NeverDecodes
            }
            fn clear(&mut self) {}
            fn greedy_construct(&mut self) -> Result<f64> {
                Err(Error::infeasible("unsupported"))
            }
            fn random_construct<R: Rng>(&mut self, _rng: &mut R, _alpha: f64) -> Result<f64> {
                Err(Error::infeasible("unsupported"))
            }
            fn decode(&mut self, _chromosome: &Chromosome) -> Result<f64> {
                Err(Error::infeasible("no valid decoding"))
            }
            fn evaluate(&self) -> f64 {
                f64::NEG_INFINITY
            }
            fn best_neighbour(&mut self, _candidate: &mut Self, _policy: Policy) -> Result<f64> {
                Ok(f64::NEG_INFINITY)
            }
            fn sanity_check(&self) -> bool {
                false
            }
        }

        let problem = NeverDecodes;
        let mut rng = create_rng(42);
        let err = generate_mutant(&problem, &mut rng, 4).unwrap_err();
        assert!(err.is_infeasible());
    }

    #[test]
    fn test_best_individual_first_wins_ties() {
        let mk = |genes: Vec<f64>, fitness: f64| {
            let mut ind = Individual::from_chromosome(Chromosome::from_genes(genes));
            ind.set_fitness(fitness);
            ind
        };
        let population = vec![
            mk(vec![0.1], -5.0),
            mk(vec![0.2], -2.0),
            mk(vec![0.3], -2.0),
            mk(vec![0.4], -9.0),
        ];
        let best = best_individual(&population);
        assert_eq!(best.chromosome()[0], 0.2);
    }
}
