//! IG execution loop.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use rand::Rng;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::config::IgConfig;
use super::selection::select_jobs;
use crate::construct::{neh_from_order, neh_order};
use crate::error::{FlowshopError, Result};
use crate::eval::InsertionEvaluator;
use crate::instance::{ProcessingTimes, Time};
use crate::random::create_rng;
use crate::search::run_insertion_search;
use crate::solution::Solution;

/// Result of an Iterated Greedy run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct IgResult {
    /// The best solution found.
    pub best: Solution,

    /// Number of destruction/construction iterations.
    pub iterations: usize,

    /// Number of accepted candidates (including improvements).
    pub accepted_moves: usize,

    /// Number of candidates better than the current solution.
    pub improving_moves: usize,

    /// Whether cancelled externally.
    pub cancelled: bool,

    /// Best makespan after the initial solution and after every new best.
    pub makespan_history: Vec<Time>,

    /// Wall-clock time of the run.
    pub elapsed: Duration,
}

/// Executes the Iterated Greedy algorithm.
pub struct IgRunner;

impl IgRunner {
    /// Runs IG on `p`.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_flowshop::ig::{IgConfig, IgRunner};
    /// use u_flowshop::ProcessingTimes;
    ///
    /// let p = ProcessingTimes::new(vec![
    ///     vec![5, 9, 8],
    ///     vec![9, 3, 10],
    ///     vec![9, 4, 5],
    ///     vec![4, 8, 8],
    /// ])
    /// .unwrap();
    /// let config = IgConfig::default().with_max_iterations(50).with_seed(42);
    /// let result = IgRunner::run(&p, &config).unwrap();
    /// assert_eq!(result.best.sequence.len(), 4);
    /// assert_eq!(result.iterations, 50);
    /// ```
    pub fn run(p: &ProcessingTimes, config: &IgConfig) -> Result<IgResult> {
        Self::run_with_cancel(p, config, None)
    }

    /// Runs IG with an optional cancellation token.
    ///
    /// The token is polled once per iteration; a cancelled run still
    /// returns the best solution found so far.
    ///
    /// # Errors
    ///
    /// [`FlowshopError::InvalidConfig`] when `config` fails validation.
    pub fn run_with_cancel(
        p: &ProcessingTimes,
        config: &IgConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<IgResult> {
        config.validate().map_err(FlowshopError::InvalidConfig)?;

        let started = Instant::now();
        let mut rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };
        let mut evaluator = InsertionEvaluator::new();
        let temperature = config.temperature(p);
        let tie = config.tie_breaking;

        // Initial solution: NEH + local search
        let order = neh_order(p, config.neh_order, &mut rng);
        let mut current = neh_from_order(&mut evaluator, p, &order, tie)?;
        run_insertion_search(
            &mut evaluator,
            &mut current,
            p,
            config.local_optimum,
            tie,
            &mut rng,
        )?;
        let mut best = current.clone();
        debug!(makespan = best.makespan, "initial solution");

        let mut iterations = 0usize;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;
        let mut cancelled = false;
        let mut makespan_history = vec![best.makespan];

        loop {
            if config.max_iterations > 0 && iterations >= config.max_iterations {
                break;
            }
            if config
                .time_limit
                .is_some_and(|limit| started.elapsed() >= limit)
            {
                break;
            }
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }

            // Destruction
            let removed = select_jobs(
                config.selection,
                config.tournament_size,
                &current,
                p,
                config.num_jobs_remove,
                &mut rng,
            )?;
            let mut candidate = current.clone();
            candidate.remove_jobs(p, &removed)?;

            if config.local_search_partial {
                run_insertion_search(
                    &mut evaluator,
                    &mut candidate,
                    p,
                    config.local_optimum,
                    tie,
                    &mut rng,
                )?;
            }

            // Construction
            for &job in &removed {
                candidate.insert_best_with(&mut evaluator, p, job, tie)?;
            }

            run_insertion_search(
                &mut evaluator,
                &mut candidate,
                p,
                config.local_optimum,
                tie,
                &mut rng,
            )?;

            // Acceptance
            let delta = candidate.makespan - current.makespan;
            let accept = if delta < 0 {
                improving_moves += 1;
                true
            } else {
                accepts_worse(delta, temperature, &mut rng)
            };

            if accept {
                current = candidate;
                accepted_moves += 1;

                if current.makespan < best.makespan {
                    best = current.clone();
                    makespan_history.push(best.makespan);
                    debug!(iteration = iterations, makespan = best.makespan, "new best");
                }
            }

            iterations += 1;
        }

        let elapsed = started.elapsed();
        info!(
            iterations,
            best_makespan = best.makespan,
            elapsed_ms = elapsed.as_millis() as u64,
            cancelled,
            "iterated greedy finished"
        );

        Ok(IgResult {
            best,
            iterations,
            accepted_moves,
            improving_moves,
            cancelled,
            makespan_history,
            elapsed,
        })
    }
}

/// Metropolis criterion with a constant temperature.
///
/// An equal makespan is always accepted; at zero temperature nothing
/// worse is.
fn accepts_worse<R: Rng>(delta: Time, temperature: f64, rng: &mut R) -> bool {
    if delta == 0 {
        return true;
    }
    if temperature <= 0.0 {
        return false;
    }
    let probability = (-(delta as f64) / temperature).exp();
    rng.random::<f64>() < probability
}
