//! Fatal error types.
//!
//! Only unrecoverable conditions surface here: malformed configuration,
//! malformed input sequences, and a bounded initial-walk retry running
//! out of attempts. An invalid *proposed* conformation during the search
//! is an expected outcome, not an error: the trial is discarded and the
//! loop moves on.

use thiserror::Error;

/// Errors reported by sequence construction and the annealing runner.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FoldError {
    /// Configuration validation failed before any search work began.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// A sequence must contain at least one residue.
    #[error("sequence must contain at least one residue")]
    EmptySequence,

    /// The input string contained a character outside the {H, P} alphabet.
    #[error("unrecognized residue symbol '{symbol}' at position {position}")]
    Symbol { symbol: char, position: usize },

    /// The greedy self-avoiding walk failed to produce an initial
    /// conformation within the configured attempt bound.
    #[error("failed to generate an initial conformation after {attempts} attempts")]
    InitialConformation { attempts: usize },
}
