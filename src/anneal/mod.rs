//! Simulated annealing over lattice conformations.
//!
//! Single-solution trajectory search: starting from a random
//! self-avoiding walk, repeatedly propose a pivot-rotation move, accept
//! or reject it with the Metropolis criterion, and cool the temperature
//! geometrically until it reaches the configured floor. Worsening moves
//! are accepted with probability `exp(-delta / T)`, letting the search
//! escape local minima while the temperature is high.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Metropolis et al. (1953), "Equation of State Calculations by Fast
//!   Computing Machines"
//! - Lal (1969), "Monte Carlo computer simulation of chain molecules" (pivot move)

mod config;
mod moves;
mod runner;
mod walk;

pub use config::AnnealConfig;
pub use moves::propose;
pub use runner::{AnnealRunner, FoldResult, TracePoint};
pub use walk::random_walk;
