//! Error types shared by the algorithm engines.

use thiserror::Error;

/// Errors produced by problem operations and engine construction.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A construction or decoding step could not produce a feasible
    /// solution.
    ///
    /// This is a recoverable signal: engines with a retry loop (GRASP)
    /// catch it and move on to the next attempt; everywhere else it
    /// surfaces to the caller unchanged.
    #[error("infeasible solution: {0}")]
    Infeasible(String),

    /// An engine was constructed with parameters that violate its
    /// invariants (e.g. `n_mutant >= pop_size`).
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl Error {
    /// Shorthand for building an [`Error::Infeasible`] from any message.
    pub fn infeasible(message: impl Into<String>) -> Self {
        Error::Infeasible(message.into())
    }

    /// Shorthand for building an [`Error::Config`] from any message.
    pub fn config(message: impl Into<String>) -> Self {
        Error::Config(message.into())
    }

    /// Returns true if this is the recoverable [`Error::Infeasible`] signal.
    pub fn is_infeasible(&self) -> bool {
        matches!(self, Error::Infeasible(_))
    }
}

/// Result type alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
