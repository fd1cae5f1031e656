//! GRASP configuration.

use crate::error::{Error, Result};
use crate::problem::Policy;

/// Configuration for the GRASP engine.
///
/// # Examples
///
/// ```
/// use u_heurkit::grasp::GraspConfig;
/// use u_heurkit::problem::Policy;
///
/// let config = GraspConfig::new()
///     .with_max_iter_grasp(50)
///     .with_max_iter_local(200)
///     .with_alpha(0.3)
///     .with_policy(Policy::FirstImprovement);
/// ```
#[derive(Debug, Clone)]
pub struct GraspConfig {
    /// Number of construct-then-improve iterations.
    pub max_iter_grasp: usize,

    /// Iteration budget handed to the inner local search.
    pub max_iter_local: usize,

    /// Restricted candidate list width in `[0, 1]`.
    ///
    /// `0.0` keeps only minimum-cost candidates (pure greedy);
    /// `1.0` admits the full candidate list.
    pub alpha: f64,

    /// Policy for the inner local search.
    pub policy: Policy,
}

impl GraspConfig {
    /// Creates a configuration with moderate defaults and the full-width
    /// candidate list.
    pub fn new() -> Self {
        GraspConfig {
            max_iter_grasp: 100,
            max_iter_local: 100,
            alpha: 1.0,
            policy: Policy::BestImprovement,
        }
    }

    pub fn with_max_iter_grasp(mut self, max_iter: usize) -> Self {
        self.max_iter_grasp = max_iter;
        self
    }

    pub fn with_max_iter_local(mut self, max_iter: usize) -> Self {
        self.max_iter_local = max_iter;
        self
    }

    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn with_policy(mut self, policy: Policy) -> Self {
        self.policy = policy;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.max_iter_grasp == 0 {
            return Err(Error::config("max_iter_grasp must be at least 1"));
        }
        if self.max_iter_local == 0 {
            return Err(Error::config("max_iter_local must be at least 1"));
        }
        if !(0.0..=1.0).contains(&self.alpha) {
            return Err(Error::config(format!(
                "alpha must be within [0, 1], got {}",
                self.alpha
            )));
        }
        Ok(())
    }
}

impl Default for GraspConfig {
    fn default() -> Self {
        GraspConfig::new()
    }
}
