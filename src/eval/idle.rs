//! Idle-time calculator.

use super::completion::fill_forward;
use super::table::TimeTable;
use super::validate::check_non_empty;
use crate::error::Result;
use crate::instance::{JobId, ProcessingTimes, Time};

/// Idle time attributable to each job of `sequence`.
///
/// For the job at 1-based position `i`:
///
/// ```text
/// idle[job] = Σ_j ( E[i][j] - p[job][j] - E[i-1][j] )
/// ```
///
/// i.e. the time machine `j` waits between finishing the previous job
/// and starting this one. The returned vector has one entry per job of
/// the instance (index `job - 1`); jobs absent from `sequence` report 0.
///
/// # Examples
///
/// ```
/// use u_flowshop::{eval, ProcessingTimes};
///
/// let p = ProcessingTimes::new(vec![vec![3, 2], vec![2, 4]]).unwrap();
/// assert_eq!(eval::idle_times(&[1, 2], &p).unwrap(), vec![3, 0]);
/// ```
pub fn idle_times(sequence: &[JobId], p: &ProcessingTimes) -> Result<Vec<Time>> {
    check_non_empty(sequence, p)?;

    let m = p.num_machines();
    let mut e = TimeTable::zeros(sequence.len() + 1, m + 1);
    fill_forward(&mut e, sequence, p);

    let mut idle = vec![0; p.num_jobs()];
    for (k, &job) in sequence.iter().enumerate() {
        let i = k + 1;
        let times = p.job(job);
        idle[job - 1] = (1..=m)
            .map(|j| e[(i, j)] - times[j - 1] - e[(i - 1, j)])
            .sum();
    }
    Ok(idle)
}
