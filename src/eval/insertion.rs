//! Insertion evaluation with Taillard's acceleration.
//!
//! Evaluating all `n + 1` insertion positions of a job naively costs
//! `O(n² m)`: one full completion-time pass per position. Taillard's
//! acceleration gets the same answer in `O(n m)` from three tables over
//! the existing sequence:
//!
//! ```text
//! E[i][j] = max(E[i-1][j], E[i][j-1]) + p[seq[i-1]][j]    (heads)
//! Q[i][j] = max(Q[i][j+1], Q[i+1][j]) + p[seq[i-1]][j]    (tails)
//! F[i][j] = max(F[i][j-1], E[i-1][j]) + p[k][j]           (inserted job)
//! MS[i]   = max_j ( F[i][j] + Q[i][j] )
//! ```
//!
//! `F[i][j]` is the completion of job `k` on machine `j` when placed at
//! position `i`; `Q[i][j]` is the time the jobs from position `i` onward
//! still need on machines `j..=m`. Boundaries `E[0][*]`, `E[*][0]`,
//! `F[*][0]`, `Q[n+1][*]`, `Q[*][m+1]` are zero.
//!
//! # Reference
//!
//! Taillard, E. (1990), "Some efficient heuristic methods for the flow
//! shop sequencing problem", *European Journal of Operational Research*
//! 47(1), 65-74.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::completion::fill_forward;
use super::table::TimeTable;
use super::tie_break::break_tie;
use super::validate::check_insertion;
use crate::error::Result;
use crate::instance::{JobId, ProcessingTimes, Time};

/// Best place to insert a job into a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Insertion {
    /// 1-based slot in `1..=n+1`: the job goes before the existing job at
    /// this slot, `n + 1` appends.
    pub position: usize,
    /// Makespan of the sequence after inserting the job there.
    pub makespan: Time,
}

impl Insertion {
    /// 0-based index for `Vec::insert`.
    #[inline]
    pub fn index(&self) -> usize {
        self.position - 1
    }
}

/// Reusable scratch tables for insertion evaluation.
///
/// Each call resizes the tables to `(n + 2) × (m + 2)` for the sequence
/// at hand, so one evaluator serves sequences of any length. Holding one
/// per search loop avoids re-allocating on every insertion; the free
/// function [`best_insertion`] builds a fresh one per call instead.
///
/// After an evaluation the tables of that call stay readable through
/// the accessors until the next one.
#[derive(Debug, Clone, Default)]
pub struct InsertionEvaluator {
    e: TimeTable,
    q: TimeTable,
    f: TimeTable,
    makespans: Vec<Time>,
}

impl InsertionEvaluator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Finds the insertion position of `job` into `sequence` with the
    /// smallest makespan.
    ///
    /// Without tie-breaking the smallest such position wins. With
    /// `tie_breaking`, makespan-equal positions are ranked by their
    /// estimated idle time (TBFF) and the least idle one wins.
    ///
    /// # Errors
    ///
    /// Fails if `sequence` holds an unknown or repeated id, or if `job`
    /// is unknown or already in `sequence`. An empty `sequence` is valid.
    pub fn best_insertion(
        &mut self,
        sequence: &[JobId],
        p: &ProcessingTimes,
        job: JobId,
        tie_breaking: bool,
    ) -> Result<Insertion> {
        check_insertion(sequence, p, job)?;
        Ok(self.evaluate(sequence, p, job, tie_breaking))
    }

    /// Evaluation without input validation.
    pub(crate) fn evaluate(
        &mut self,
        sequence: &[JobId],
        p: &ProcessingTimes,
        job: JobId,
        tie_breaking: bool,
    ) -> Insertion {
        let n = sequence.len();
        let m = p.num_machines();

        self.e.reset(n + 2, m + 2);
        self.q.reset(n + 2, m + 2);
        self.f.reset(n + 2, m + 2);
        fill_forward(&mut self.e, sequence, p);
        fill_tail(&mut self.q, sequence, p);

        let times = p.job(job);
        self.makespans.clear();
        for i in 1..=n + 1 {
            let mut worst = 0;
            for j in 1..=m {
                let done = self.f[(i, j - 1)].max(self.e[(i - 1, j)]) + times[j - 1];
                self.f[(i, j)] = done;
                worst = worst.max(done + self.q[(i, j)]);
            }
            self.makespans.push(worst);
        }

        let (first, &makespan) = self
            .makespans
            .iter()
            .enumerate()
            .min_by_key(|&(_, &ms)| ms)
            .unwrap_or((0, &0));
        let mut position = first + 1;

        if tie_breaking && self.makespans.iter().filter(|&&ms| ms == makespan).count() > 1 {
            position = break_tie(
                p,
                sequence,
                &self.e,
                &self.f,
                &self.makespans,
                job,
                position,
            );
        }

        Insertion { position, makespan }
    }

    /// Makespan for every position of the last evaluation; index `i - 1`
    /// holds position `i`.
    pub fn makespans(&self) -> &[Time] {
        &self.makespans
    }

    /// Head table `E` of the last evaluation.
    pub fn forward_table(&self) -> &TimeTable {
        &self.e
    }

    /// Tail table `Q` of the last evaluation.
    pub fn tail_table(&self) -> &TimeTable {
        &self.q
    }

    /// Inserted-job table `F` of the last evaluation.
    pub fn insertion_table(&self) -> &TimeTable {
        &self.f
    }
}

/// Finds the best insertion position of `job` into `sequence`.
///
/// Convenience wrapper that allocates a fresh [`InsertionEvaluator`].
///
/// # Examples
///
/// ```
/// use u_flowshop::{eval, ProcessingTimes};
///
/// let p = ProcessingTimes::new(vec![vec![3, 2], vec![2, 4], vec![1, 1]]).unwrap();
/// let best = eval::best_insertion(&[1, 2], &p, 3, false).unwrap();
/// assert_eq!((best.position, best.makespan), (1, 10));
/// ```
pub fn best_insertion(
    sequence: &[JobId],
    p: &ProcessingTimes,
    job: JobId,
    tie_breaking: bool,
) -> Result<Insertion> {
    InsertionEvaluator::new().best_insertion(sequence, p, job, tie_breaking)
}

/// Writes the tail table of `sequence` into rows `1..=n`, columns
/// `1..=m` of `table`. Row `n + 1` and column `m + 1` must be zero.
fn fill_tail(table: &mut TimeTable, sequence: &[JobId], p: &ProcessingTimes) {
    let m = p.num_machines();
    for i in (1..=sequence.len()).rev() {
        let times = p.job(sequence[i - 1]);
        for j in (1..=m).rev() {
            table[(i, j)] = table[(i, j + 1)].max(table[(i + 1, j)]) + times[j - 1];
        }
    }
}
