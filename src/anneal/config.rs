//! Annealing schedule configuration.

use crate::error::FoldError;

/// Configuration for the annealing search.
///
/// # Examples
///
/// ```
/// use hpfold::anneal::AnnealConfig;
///
/// let config = AnnealConfig::default()
///     .with_initial_temperature(2.0)
///     .with_final_temperature(0.001)
///     .with_cooling_factor(0.995)
///     .with_trials_per_temperature(100)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnnealConfig {
    /// Starting temperature. Higher values allow more exploration.
    pub initial_temperature: f64,

    /// Temperature floor. The cooling loop stops once the temperature
    /// drops to or below this value. May be 0.0, in which case the loop
    /// runs until the temperature underflows to zero (legal but slow).
    pub final_temperature: f64,

    /// Geometric cooling factor in (0, 1): `T_{k+1} = factor * T_k`.
    /// Higher = slower cooling.
    pub cooling_factor: f64,

    /// Number of proposed moves at each temperature level. A proposal
    /// that turns out invalid still spends its trial slot.
    pub trials_per_temperature: usize,

    /// Random seed for reproducibility. `None` draws from OS entropy.
    pub seed: Option<u64>,

    /// Retry bound for generating the initial self-avoiding walk.
    /// 0 retries without bound; a positive bound fails the run with
    /// [`FoldError::InitialConformation`] once exhausted.
    pub max_walk_attempts: usize,
}

impl Default for AnnealConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 1.0,
            final_temperature: 1e-3,
            cooling_factor: 0.99,
            trials_per_temperature: 50,
            seed: None,
            max_walk_attempts: 0,
        }
    }
}

impl AnnealConfig {
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_final_temperature(mut self, t: f64) -> Self {
        self.final_temperature = t;
        self
    }

    pub fn with_cooling_factor(mut self, factor: f64) -> Self {
        self.cooling_factor = factor;
        self
    }

    pub fn with_trials_per_temperature(mut self, n: usize) -> Self {
        self.trials_per_temperature = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_max_walk_attempts(mut self, n: usize) -> Self {
        self.max_walk_attempts = n;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), FoldError> {
        if self.initial_temperature.is_nan()
            || self.final_temperature.is_nan()
            || self.cooling_factor.is_nan()
        {
            return Err(FoldError::Config(
                "temperature parameters must not be NaN".into(),
            ));
        }
        if self.initial_temperature <= 0.0 {
            return Err(FoldError::Config(
                "initial_temperature must be positive".into(),
            ));
        }
        if self.final_temperature < 0.0 {
            return Err(FoldError::Config(
                "final_temperature must be non-negative".into(),
            ));
        }
        if self.final_temperature >= self.initial_temperature {
            return Err(FoldError::Config(
                "final_temperature must be less than initial_temperature".into(),
            ));
        }
        if self.cooling_factor <= 0.0 || self.cooling_factor >= 1.0 {
            return Err(FoldError::Config(format!(
                "cooling_factor must be in (0, 1), got {}",
                self.cooling_factor
            )));
        }
        if self.trials_per_temperature == 0 {
            return Err(FoldError::Config(
                "trials_per_temperature must be positive".into(),
            ));
        }
        Ok(())
    }
}
