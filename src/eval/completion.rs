//! Completion-time engine.
//!
//! # Recurrence
//!
//! ```text
//! E[0][j] = E[i][0] = 0
//! E[i][j] = max(E[i-1][j], E[i][j-1]) + p[seq[i-1]][j]
//! ```
//!
//! A job starts on machine `j` once it has left machine `j-1` and the
//! previous job of the sequence has left machine `j`.

use super::table::TimeTable;
use super::validate::check_non_empty;
use crate::error::Result;
use crate::instance::{JobId, ProcessingTimes, Time};

/// Full completion-time table of `sequence`.
///
/// The result has `sequence.len() + 1` rows and `num_machines + 1`
/// columns; row 0 and column 0 are zero. Entry `(i, j)` is the
/// completion time of the `i`-th job of the sequence on machine `j`.
///
/// # Errors
///
/// Fails if `sequence` is empty, holds an unknown job id, or repeats one.
///
/// # Examples
///
/// ```
/// use u_flowshop::{eval, ProcessingTimes};
///
/// let p = ProcessingTimes::new(vec![vec![3, 2], vec![2, 4]]).unwrap();
/// let table = eval::completion_times(&[1, 2], &p).unwrap();
/// assert_eq!(table.row(1), &[0, 3, 5]);
/// assert_eq!(table.row(2), &[0, 5, 9]);
/// ```
pub fn completion_times(sequence: &[JobId], p: &ProcessingTimes) -> Result<TimeTable> {
    check_non_empty(sequence, p)?;
    let mut table = TimeTable::zeros(sequence.len() + 1, p.num_machines() + 1);
    fill_forward(&mut table, sequence, p);
    Ok(table)
}

/// Makespan of `sequence`: completion of its last job on the last machine.
///
/// Equal to `completion_times(sequence, p)?.last()` but keeps only one
/// row of the table alive.
pub fn makespan(sequence: &[JobId], p: &ProcessingTimes) -> Result<Time> {
    check_non_empty(sequence, p)?;
    Ok(makespan_unchecked(sequence, p))
}

/// Makespan without validation, for sequences already known to be valid.
/// Returns 0 for an empty sequence.
pub(crate) fn makespan_unchecked(sequence: &[JobId], p: &ProcessingTimes) -> Time {
    let mut front = vec![0 as Time; p.num_machines()];
    for &job in sequence {
        let mut prev = 0;
        for (done, &pt) in front.iter_mut().zip(p.job(job)) {
            prev = prev.max(*done) + pt;
            *done = prev;
        }
    }
    front.last().copied().unwrap_or(0)
}

/// Writes the forward table of `sequence` into rows `1..=n`, columns
/// `1..=m` of `table`. Row 0 and column 0 must already be zero.
pub(crate) fn fill_forward(table: &mut TimeTable, sequence: &[JobId], p: &ProcessingTimes) {
    let m = p.num_machines();
    for (k, &job) in sequence.iter().enumerate() {
        let i = k + 1;
        let times = p.job(job);
        for j in 1..=m {
            table[(i, j)] = table[(i - 1, j)].max(table[(i, j - 1)]) + times[j - 1];
        }
    }
}
