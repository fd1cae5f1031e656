//! Chromosome, individual and parent selection types.

use rand::Rng;

/// A fixed-length sequence of random keys, each in `[0, 1)`.
///
/// The length is fixed when an engine is constructed (`chrom_size`); the
/// framework imposes no structure beyond the value range. Problems give the
/// genes meaning in [`decode`](crate::problem::Problem::decode).
#[derive(Debug, Clone, PartialEq)]
pub struct Chromosome {
    genes: Vec<f64>,
}

impl Chromosome {
    /// Creates a chromosome from explicit gene values.
    pub fn from_genes(genes: Vec<f64>) -> Self {
        Chromosome { genes }
    }

    /// Creates a chromosome of `len` genes drawn independently from `[0, 1)`.
    pub fn random<R: Rng>(rng: &mut R, len: usize) -> Self {
        let genes = (0..len).map(|_| rng.random_range(0.0..1.0)).collect();
        Chromosome { genes }
    }

    /// The gene values.
    pub fn genes(&self) -> &[f64] {
        &self.genes
    }

    /// Number of genes.
    pub fn len(&self) -> usize {
        self.genes.len()
    }

    /// True when the chromosome has no genes.
    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }
}

impl std::ops::Index<usize> for Chromosome {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.genes[index]
    }
}

/// A chromosome paired with its decoded fitness.
///
/// Fitness follows the crate-wide convention: larger is better. A freshly
/// created individual carries `f64::NEG_INFINITY` until it is decoded.
#[derive(Debug, Clone, PartialEq)]
pub struct Individual {
    chromosome: Chromosome,
    fitness: f64,
}

impl Individual {
    /// Wraps a chromosome with an undefined (worst possible) fitness.
    pub fn from_chromosome(chromosome: Chromosome) -> Self {
        Individual {
            chromosome,
            fitness: f64::NEG_INFINITY,
        }
    }

    /// The individual's chromosome.
    pub fn chromosome(&self) -> &Chromosome {
        &self.chromosome
    }

    /// The cached fitness set by the last evaluation.
    pub fn fitness(&self) -> f64 {
        self.fitness
    }

    /// Records the fitness produced by decoding the chromosome.
    pub fn set_fitness(&mut self, fitness: f64) {
        self.fitness = fitness;
    }
}

/// Strategy for picking the two parents of one crossover child.
///
/// The first parent's genes are inherited with the engine's
/// `inherit_prob`; the second parent supplies the rest. The two engines
/// differ only in this choice, so it is a strategy value rather than a
/// subclass hook.
pub trait ParentSelection {
    /// Returns the population indices of the two parents.
    fn pick<R: Rng>(&self, rng: &mut R) -> (usize, usize);
}

/// RKGA parent selection: two independent uniform draws over the whole
/// population. The parents may coincide.
#[derive(Debug, Clone, Copy)]
pub struct UniformSelection {
    /// Size of the population being drawn from.
    pub pop_size: usize,
}

impl ParentSelection for UniformSelection {
    fn pick<R: Rng>(&self, rng: &mut R) -> (usize, usize) {
        let p1 = rng.random_range(0..self.pop_size);
        let p2 = rng.random_range(0..self.pop_size);
        (p1, p2)
    }
}

/// BRKGA parent selection: the first parent comes uniformly from the elite
/// indices, the second uniformly from the non-elite remainder.
#[derive(Debug, Clone, Copy)]
pub struct BiasedSelection<'a> {
    /// Population indices of the elite individuals.
    pub elite: &'a [usize],
    /// Population indices of everyone else.
    pub non_elite: &'a [usize],
}

impl ParentSelection for BiasedSelection<'_> {
    fn pick<R: Rng>(&self, rng: &mut R) -> (usize, usize) {
        let p1 = self.elite[rng.random_range(0..self.elite.len())];
        let p2 = self.non_elite[rng.random_range(0..self.non_elite.len())];
        (p1, p2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    #[test]
    fn test_random_chromosome_genes_in_unit_interval() {
        let mut rng = create_rng(42);
        let c = Chromosome::random(&mut rng, 100);
        assert_eq!(c.len(), 100);
        assert!(c.genes().iter().all(|g| (0.0..1.0).contains(g)));
    }

    #[test]
    fn test_chromosome_indexing() {
        let c = Chromosome::from_genes(vec![0.1, 0.2, 0.3]);
        assert_eq!(c[1], 0.2);
        assert!(!c.is_empty());
    }

    #[test]
    fn test_new_individual_has_worst_fitness() {
        let ind = Individual::from_chromosome(Chromosome::from_genes(vec![0.5]));
        assert_eq!(ind.fitness(), f64::NEG_INFINITY);
    }

    #[test]
    fn test_uniform_selection_stays_in_range() {
        let mut rng = create_rng(1);
        let select = UniformSelection { pop_size: 7 };
        for _ in 0..500 {
            let (p1, p2) = select.pick(&mut rng);
            assert!(p1 < 7 && p2 < 7);
        }
    }

    #[test]
    fn test_biased_selection_respects_partition() {
        let mut rng = create_rng(1);
        let elite = [4, 9];
        let non_elite = [0, 1, 2, 3, 5, 6, 7, 8];
        let select = BiasedSelection {
            elite: &elite,
            non_elite: &non_elite,
        };
        for _ in 0..500 {
            let (p1, p2) = select.pick(&mut rng);
            assert!(elite.contains(&p1));
            assert!(non_elite.contains(&p2));
        }
    }
}
