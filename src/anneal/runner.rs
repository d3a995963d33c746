//! Annealing execution loop.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::config::AnnealConfig;
use super::moves::propose;
use super::walk::random_walk;
use crate::energy::energy;
use crate::error::FoldError;
use crate::lattice::{is_valid, Coord};
use crate::model::HpSequence;

/// One trace sample, appended after the trials at a temperature level.
///
/// `energy` is the *current* energy at the end of the level, not the
/// best seen: the trace shows the trajectory, while the result carries
/// the best.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TracePoint {
    pub temperature: f64,
    pub energy: i32,
}

/// Result of an annealing run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FoldResult {
    /// The best conformation found, same length as the input sequence.
    pub best: Vec<Coord>,

    /// Energy of the best conformation.
    pub best_energy: i32,

    /// Total trial slots spent, including discarded invalid proposals.
    pub iterations: usize,

    /// Temperature when the loop stopped.
    pub final_temperature: f64,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of strictly improving moves.
    pub improving_moves: usize,

    /// Trials discarded because the proposed conformation was invalid.
    pub discarded_moves: usize,

    /// Whether cancelled externally.
    pub cancelled: bool,

    /// One `(temperature, current energy)` sample per completed
    /// cooling step, in cooling order.
    pub trace: Vec<TracePoint>,
}

/// Executes the annealing search.
pub struct AnnealRunner;

impl AnnealRunner {
    /// Runs the search to completion.
    pub fn run(sequence: &HpSequence, config: &AnnealConfig) -> Result<FoldResult, FoldError> {
        Self::run_with_cancel(sequence, config, None)
    }

    /// Runs the search with an optional cancellation token.
    ///
    /// The flag is checked once per cooling step. The search is anytime:
    /// on cancellation the best conformation found so far is returned
    /// with `cancelled = true`.
    pub fn run_with_cancel(
        sequence: &HpSequence,
        config: &AnnealConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<FoldResult, FoldError> {
        config.validate()?;

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        // Initial conformation: the greedy walk may get stuck, so retry
        // until it succeeds or the configured bound runs out.
        let mut attempts = 0usize;
        let mut current = loop {
            attempts += 1;
            if let Some(path) = random_walk(sequence.len(), &mut rng) {
                break path;
            }
            if config.max_walk_attempts > 0 && attempts >= config.max_walk_attempts {
                return Err(FoldError::InitialConformation { attempts });
            }
        };
        let mut current_energy = energy(sequence, &current);
        let mut best = current.clone();
        let mut best_energy = current_energy;

        let mut temperature = config.initial_temperature;
        let mut iterations = 0usize;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;
        let mut discarded_moves = 0usize;
        let mut cancelled = false;
        let mut trace = Vec::new();

        while temperature > config.final_temperature {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }

            for _ in 0..config.trials_per_temperature {
                iterations += 1;

                let candidate = propose(&current, &mut rng);
                if !is_valid(&candidate) {
                    // The trial slot is spent; no resampling.
                    discarded_moves += 1;
                    continue;
                }
                let candidate_energy = energy(sequence, &candidate);
                let delta = candidate_energy - current_energy;

                // Metropolis acceptance criterion
                let accept = if delta < 0 {
                    improving_moves += 1;
                    true
                } else if temperature > 0.0 {
                    let probability = (-f64::from(delta) / temperature).exp();
                    rng.random_range(0.0..1.0) < probability
                } else {
                    false
                };

                if accept {
                    current = candidate;
                    current_energy = candidate_energy;
                    accepted_moves += 1;

                    if current_energy < best_energy {
                        best = current.clone();
                        best_energy = current_energy;
                    }
                }
            }

            trace.push(TracePoint {
                temperature,
                energy: current_energy,
            });

            // Geometric cooling
            temperature *= config.cooling_factor;
        }

        Ok(FoldResult {
            best,
            best_energy,
            iterations,
            final_temperature: temperature,
            accepted_moves,
            improving_moves,
            discarded_moves,
            cancelled,
            trace,
        })
    }

    /// Runs `runs` independent searches in parallel and returns the one
    /// with the lowest best energy.
    ///
    /// Each run derives its own seed from the configured base seed, so
    /// the fan-out is reproducible as a whole. The runs share no state.
    #[cfg(feature = "parallel")]
    pub fn run_multistart(
        sequence: &HpSequence,
        config: &AnnealConfig,
        runs: usize,
    ) -> Result<FoldResult, FoldError> {
        use rayon::prelude::*;

        config.validate()?;
        if runs == 0 {
            return Err(FoldError::Config("runs must be positive".into()));
        }

        let base_seed = config.seed.unwrap_or_else(rand::random);
        let results: Result<Vec<FoldResult>, FoldError> = (0..runs as u64)
            .into_par_iter()
            .map(|i| {
                let run_config = config.clone().with_seed(base_seed.wrapping_add(i));
                Self::run(sequence, &run_config)
            })
            .collect();

        let best = results?
            .into_iter()
            .min_by_key(|result| result.best_energy)
            .expect("runs is positive");
        Ok(best)
    }
}
