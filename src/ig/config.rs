//! IG configuration.

use std::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::selection::RemovalSelection;
use crate::construct::NehOrder;
use crate::instance::ProcessingTimes;

/// Configuration for the Iterated Greedy algorithm.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use u_flowshop::ig::{IgConfig, RemovalSelection};
///
/// let config = IgConfig::default()
///     .with_num_jobs_remove(3)
///     .with_selection(RemovalSelection::Tournament)
///     .with_time_limit(Duration::from_millis(200))
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct IgConfig {
    /// Scales the constant acceptance temperature.
    ///
    /// `T = temperature_param * total_processing / (n * m * 10)`.
    pub temperature_param: f64,

    /// Jobs removed per destruction (capped at the number of jobs).
    pub num_jobs_remove: usize,

    /// Job ordering for the initial NEH solution.
    pub neh_order: NehOrder,

    /// Refine insertion ties with TBFF.
    pub tie_breaking: bool,

    /// Repeat local search passes until no improvement.
    pub local_optimum: bool,

    /// Also run local search on the partial sequence after destruction.
    pub local_search_partial: bool,

    /// How destruction picks the jobs to remove.
    pub selection: RemovalSelection,

    /// Aspirants per round of [`RemovalSelection::Tournament`].
    pub tournament_size: usize,

    /// Maximum number of iterations. 0 = no limit.
    pub max_iterations: usize,

    /// Wall-clock budget measured from the start of the run.
    pub time_limit: Option<Duration>,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for IgConfig {
    fn default() -> Self {
        Self {
            temperature_param: 0.4,
            num_jobs_remove: 4,
            neh_order: NehOrder::default(),
            tie_breaking: false,
            local_optimum: true,
            local_search_partial: false,
            selection: RemovalSelection::default(),
            tournament_size: 5,
            max_iterations: 1000,
            time_limit: None,
            seed: None,
        }
    }
}

impl IgConfig {
    pub fn with_temperature_param(mut self, t: f64) -> Self {
        self.temperature_param = t;
        self
    }

    pub fn with_num_jobs_remove(mut self, d: usize) -> Self {
        self.num_jobs_remove = d;
        self
    }

    pub fn with_neh_order(mut self, order: NehOrder) -> Self {
        self.neh_order = order;
        self
    }

    pub fn with_tie_breaking(mut self, on: bool) -> Self {
        self.tie_breaking = on;
        self
    }

    pub fn with_local_optimum(mut self, on: bool) -> Self {
        self.local_optimum = on;
        self
    }

    pub fn with_local_search_partial(mut self, on: bool) -> Self {
        self.local_search_partial = on;
        self
    }

    pub fn with_selection(mut self, selection: RemovalSelection) -> Self {
        self.selection = selection;
        self
    }

    pub fn with_tournament_size(mut self, k: usize) -> Self {
        self.tournament_size = k;
        self
    }

    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = Some(limit);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if !self.temperature_param.is_finite() || self.temperature_param < 0.0 {
            return Err(format!(
                "temperature_param must be finite and non-negative, got {}",
                self.temperature_param
            ));
        }
        if self.num_jobs_remove == 0 {
            return Err("num_jobs_remove must be at least 1".into());
        }
        if self.tournament_size == 0 {
            return Err("tournament_size must be at least 1".into());
        }
        if self.max_iterations == 0 && self.time_limit.is_none() {
            return Err("either max_iterations or time_limit must bound the run".into());
        }
        Ok(())
    }

    /// Constant acceptance temperature for instance `p`.
    pub fn temperature(&self, p: &ProcessingTimes) -> f64 {
        let cells = (p.num_jobs() * p.num_machines() * 10) as f64;
        self.temperature_param * p.total() as f64 / cells
    }

    /// Time limit customary in the PFSP literature:
    /// `n * (m / 2) * rho` milliseconds, with `rho` usually 30, 60, 90 or 120.
    pub fn computational_time(num_jobs: usize, num_machines: usize, rho: f64) -> Duration {
        let millis = num_jobs as f64 * (num_machines as f64 / 2.0) * rho;
        Duration::try_from_secs_f64(millis.max(0.0) / 1000.0).unwrap_or(Duration::MAX)
    }
}
