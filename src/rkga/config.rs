//! RKGA configuration.

use crate::error::{Error, Result};

/// Configuration for the RKGA engine.
///
/// # Examples
///
/// ```
/// use u_heurkit::rkga::RkgaConfig;
///
/// let config = RkgaConfig::new(30) // 30 random keys per chromosome
///     .with_pop_size(80)
///     .with_n_mutant(10)
///     .with_n_generations(200);
/// ```
#[derive(Debug, Clone)]
pub struct RkgaConfig {
    /// Number of random keys per chromosome.
    pub chrom_size: usize,

    /// Total population size.
    pub pop_size: usize,

    /// Individuals regenerated as mutants each generation.
    pub n_mutant: usize,

    /// Number of generations.
    pub n_generations: usize,

    /// Probability that a crossover child inherits the first parent's gene.
    pub inherit_prob: f64,
}

impl RkgaConfig {
    /// Creates a configuration with the given chromosome length.
    pub fn new(chrom_size: usize) -> Self {
        RkgaConfig {
            chrom_size,
            pop_size: 100,
            n_mutant: 20,
            n_generations: 500,
            inherit_prob: 0.5,
        }
    }

    pub fn with_pop_size(mut self, pop_size: usize) -> Self {
        self.pop_size = pop_size;
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
        if self.n_mutant == 0 {
            return Err(Error::config("n_mutant must be at least 1"));
        }
        if self.n_mutant >= self.pop_size {
            return Err(Error::config(format!(
                "n_mutant ({}) must be smaller than pop_size ({})",
                self.n_mutant, self.pop_size
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
