//! NEH insertion heuristic.
//!
//! # Algorithm
//!
//! 1. Order the jobs by a priority rule
//! 2. Sequence the first two jobs in the better of their two orders
//! 3. Insert every remaining job, in priority order, at its best position

use rand::seq::SliceRandom;
use rand::Rng;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{FlowshopError, Result};
use crate::eval::{check_sequence, makespan_unchecked, InsertionEvaluator};
use crate::instance::{JobId, ProcessingTimes, Time};
use crate::solution::Solution;

/// Initial job ordering for NEH.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NehOrder {
    /// Non-increasing total processing time (the original NEH rule).
    #[default]
    SumDescending,
    /// Non-increasing mean plus standard deviation of processing times.
    MeanDeviationDescending,
    /// Uniformly random order.
    Random,
}

/// Job priority list for `order`. Equal keys keep job-id order.
pub fn neh_order<R: Rng>(p: &ProcessingTimes, order: NehOrder, rng: &mut R) -> Vec<JobId> {
    let mut jobs: Vec<JobId> = (1..=p.num_jobs()).collect();
    match order {
        NehOrder::SumDescending => {
            let totals: Vec<Time> = jobs.iter().map(|&j| p.total_processing_time(j)).collect();
            jobs.sort_by(|&a, &b| totals[b - 1].cmp(&totals[a - 1]));
        }
        NehOrder::MeanDeviationDescending => {
            let keys: Vec<f64> = jobs.iter().map(|&j| mean_plus_deviation(p.job(j))).collect();
            jobs.sort_by(|&a, &b| keys[b - 1].total_cmp(&keys[a - 1]));
        }
        NehOrder::Random => jobs.shuffle(rng),
    }
    jobs
}

/// Runs NEH over all jobs of `p`.
///
/// # Examples
///
/// ```
/// use u_flowshop::construct::{neh, NehOrder};
/// use u_flowshop::ProcessingTimes;
///
/// let p = ProcessingTimes::new(vec![vec![3, 2], vec![2, 4], vec![1, 1]]).unwrap();
/// let mut rng = u_flowshop::random::create_rng(1);
/// let s = neh(&p, NehOrder::SumDescending, false, &mut rng).unwrap();
/// assert_eq!(s.sequence.len(), 3);
/// assert_eq!(s.makespan, 9);
/// ```
pub fn neh<R: Rng>(
    p: &ProcessingTimes,
    order: NehOrder,
    tie_breaking: bool,
    rng: &mut R,
) -> Result<Solution> {
    let jobs = neh_order(p, order, rng);
    neh_from_order(&mut InsertionEvaluator::new(), p, &jobs, tie_breaking)
}

/// Runs NEH over `jobs`, taken as the priority list.
///
/// `jobs` may be any non-empty subset of the instance's jobs.
pub fn neh_from_order(
    evaluator: &mut InsertionEvaluator,
    p: &ProcessingTimes,
    jobs: &[JobId],
    tie_breaking: bool,
) -> Result<Solution> {
    check_sequence(jobs, p)?;
    let (first, second, rest) = match jobs {
        [] => return Err(FlowshopError::InvalidDimension("no jobs to sequence")),
        [only] => {
            return Ok(Solution {
                sequence: vec![*only],
                makespan: makespan_unchecked(&[*only], p),
            })
        }
        [a, b, rest @ ..] => (*a, *b, rest),
    };

    let forward = makespan_unchecked(&[first, second], p);
    let backward = makespan_unchecked(&[second, first], p);
    let mut solution = if forward < backward {
        Solution {
            sequence: vec![first, second],
            makespan: forward,
        }
    } else {
        Solution {
            sequence: vec![second, first],
            makespan: backward,
        }
    };

    for &job in rest {
        solution.insert_best_with(evaluator, p, job, tie_breaking)?;
    }

    debug!(jobs = jobs.len(), makespan = solution.makespan, "neh finished");
    Ok(solution)
}

fn mean_plus_deviation(times: &[Time]) -> f64 {
    let n = times.len() as f64;
    let mean = times.iter().map(|&t| t as f64).sum::<f64>() / n;
    let variance = times
        .iter()
        .map(|&t| {
            let d = t as f64 - mean;
            d * d
        })
        .sum::<f64>()
        / n;
    mean + variance.sqrt()
}
