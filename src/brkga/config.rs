//! BRKGA configuration.

use crate::error::{Error, Result};

/// Configuration for the BRKGA engine.
///
/// The three population groups must satisfy
/// `n_elite + n_mutant < pop_size`; the remaining slots are filled by
/// biased crossover children.
///
/// # Examples
///
/// ```
/// use u_heurkit::brkga::BrkgaConfig;
///
/// let config = BrkgaConfig::new(50) // 50 random keys per chromosome
///     .with_pop_size(200)
///     .with_n_elite(40)
///     .with_n_mutant(30)
///     .with_inherit_prob(0.7);
/// ```
#[derive(Debug, Clone)]
pub struct BrkgaConfig {
    /// Number of random keys per chromosome.
    pub chrom_size: usize,

    /// Total population size.
    pub pop_size: usize,

    /// Individuals preserved unchanged each generation.
    pub n_elite: usize,

    /// Individuals regenerated as mutants each generation.
    pub n_mutant: usize,

    /// Number of generations.
    pub n_generations: usize,

    /// Probability that a crossover child inherits the elite parent's gene.
    pub inherit_prob: f64,
}

impl BrkgaConfig {
    /// Creates a configuration with the given chromosome length.
    pub fn new(chrom_size: usize) -> Self {
        BrkgaConfig {
            chrom_size,
            pop_size: 100,
            n_elite: 20,
            n_mutant: 15,
            n_generations: 500,
            inherit_prob: 0.7,
        }
    }

    pub fn with_pop_size(mut self, pop_size: usize) -> Self {
        self.pop_size = pop_size;
        self
    }

    pub fn with_n_elite(mut self, n_elite: usize) -> Self {
        self.n_elite = n_elite;
        self
    }

    pub fn with_n_mutant(mut self, n_mutant: usize) -> Self {
        self.n_mutant = n_mutant;
        self
    }

    pub fn with_n_generations(mut self, n_generations: usize) -> Self {
        self.n_generations = n_generations;
        self
    }

    pub fn with_inherit_prob(mut self, inherit_prob: f64) -> Self {
        self.inherit_prob = inherit_prob;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.chrom_size == 0 {
            return Err(Error::config("chrom_size must be at least 1"));
        }
        if self.n_elite == 0 {
            return Err(Error::config("n_elite must be at least 1"));
        }
        if self.n_mutant == 0 {
            return Err(Error::config("n_mutant must be at least 1"));
        }
        if self.n_elite + self.n_mutant >= self.pop_size {
            return Err(Error::config(format!(
                "n_elite ({}) + n_mutant ({}) must be smaller than pop_size ({})",
                self.n_elite, self.n_mutant, self.pop_size
            )));
        }
        if !(0.0..=1.0).contains(&self.inherit_prob) {
            return Err(Error::config(format!(
                "inherit_prob must be within [0, 1], got {}",
                self.inherit_prob
            )));
        }
        Ok(())
    }
}
