//! Simulated-annealing search for 2D lattice HP protein folding.
//!
//! Implements the Hydrophobic-Polar (HP) abstraction of protein folding
//! on the two-dimensional square lattice:
//!
//! - **Model**: residues are classed Hydrophobic (H) or Polar (P); a
//!   conformation places the chain on integer lattice coordinates as a
//!   self-avoiding walk.
//! - **Energy**: −1 per non-bonded H-H contact, i.e. two hydrophobic
//!   residues on adjacent lattice cells that are not consecutive in the
//!   chain. Lower is better.
//! - **Search**: simulated annealing over pivot-rotation moves with
//!   geometric cooling and Metropolis acceptance, tracking the best
//!   conformation found and a per-cooling-step (temperature, energy)
//!   trace.
//!
//! The search is anytime: the best conformation found so far is always
//! valid to report, and cancellation simply stops iterating. All
//! randomness flows through a single seedable generator, so runs are
//! reproducible given a seed.
//!
//! # Example
//!
//! ```
//! use hpfold::anneal::{AnnealConfig, AnnealRunner};
//! use hpfold::model::HpSequence;
//!
//! let sequence: HpSequence = "HPHPPHHPHPPHPHHPPHPH".parse().unwrap();
//! let config = AnnealConfig::default()
//!     .with_initial_temperature(1.0)
//!     .with_final_temperature(0.01)
//!     .with_cooling_factor(0.97)
//!     .with_trials_per_temperature(200)
//!     .with_seed(42);
//!
//! let result = AnnealRunner::run(&sequence, &config).unwrap();
//! assert!(result.best_energy <= 0);
//! assert_eq!(result.best.len(), sequence.len());
//! ```
//!
//! # References
//!
//! - Dill (1985), "Theory for the folding and stability of globular proteins"
//! - Lau & Dill (1989), "A lattice statistical mechanics model of the
//!   conformational and sequence spaces of proteins"
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"

pub mod anneal;
pub mod energy;
pub mod error;
pub mod lattice;
pub mod model;
pub mod render;
