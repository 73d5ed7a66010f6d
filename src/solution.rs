//! Permutation solutions.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::eval::{self, check_sequence, makespan_unchecked, Insertion, InsertionEvaluator};
use crate::instance::{JobId, ProcessingTimes, Time};

/// A (possibly partial) job sequence and its makespan.
///
/// Methods keep `makespan` in sync with `sequence`. Editing the public
/// fields directly leaves `makespan` stale until [`Solution::evaluate`]
/// is called.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Solution {
    /// Job ids in processing order.
    pub sequence: Vec<JobId>,
    /// Makespan of `sequence`; 0 when it is empty.
    pub makespan: Time,
}

impl Solution {
    /// Validates `sequence` and computes its makespan.
    ///
    /// An empty sequence is accepted and has makespan 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_flowshop::{ProcessingTimes, Solution};
    ///
    /// let p = ProcessingTimes::new(vec![vec![3, 2], vec![2, 4]]).unwrap();
    /// let s = Solution::new(vec![1, 2], &p).unwrap();
    /// assert_eq!(s.makespan, 9);
    /// ```
    pub fn new(sequence: Vec<JobId>, p: &ProcessingTimes) -> Result<Self> {
        let mut solution = Self {
            sequence,
            makespan: 0,
        };
        solution.evaluate(p)?;
        Ok(solution)
    }

    /// Number of sequenced jobs.
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// Whether every job of `p` is sequenced.
    pub fn is_complete(&self, p: &ProcessingTimes) -> bool {
        self.sequence.len() == p.num_jobs()
    }

    /// Recomputes `makespan` from `sequence`.
    pub fn evaluate(&mut self, p: &ProcessingTimes) -> Result<Time> {
        check_sequence(&self.sequence, p)?;
        self.makespan = makespan_unchecked(&self.sequence, p);
        Ok(self.makespan)
    }

    /// Inserts `job` at its best position and updates `makespan`.
    pub fn insert_best(
        &mut self,
        p: &ProcessingTimes,
        job: JobId,
        tie_breaking: bool,
    ) -> Result<Insertion> {
        self.insert_best_with(&mut InsertionEvaluator::new(), p, job, tie_breaking)
    }

    /// [`Solution::insert_best`] reusing the caller's scratch tables.
    pub fn insert_best_with(
        &mut self,
        evaluator: &mut InsertionEvaluator,
        p: &ProcessingTimes,
        job: JobId,
        tie_breaking: bool,
    ) -> Result<Insertion> {
        let best = evaluator.best_insertion(&self.sequence, p, job, tie_breaking)?;
        self.sequence.insert(best.index(), job);
        self.makespan = best.makespan;
        Ok(best)
    }

    /// Removes `jobs` from the sequence (ids not present are ignored) and
    /// returns the updated `makespan`.
    ///
    /// # Errors
    ///
    /// Fails like [`Solution::evaluate`] if the remaining sequence was
    /// edited into an invalid state.
    pub fn remove_jobs(&mut self, p: &ProcessingTimes, jobs: &[JobId]) -> Result<Time> {
        self.sequence.retain(|job| !jobs.contains(job));
        self.evaluate(p)
    }

    /// Completion-time table of the current sequence.
    pub fn completion_times(&self, p: &ProcessingTimes) -> Result<eval::TimeTable> {
        eval::completion_times(&self.sequence, p)
    }

    /// Per-job idle time of the current sequence.
    pub fn idle_times(&self, p: &ProcessingTimes) -> Result<Vec<Time>> {
        eval::idle_times(&self.sequence, p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FlowshopError;

    fn instance() -> ProcessingTimes {
        ProcessingTimes::new(vec![vec![3, 2], vec![2, 4], vec![1, 1]]).unwrap()
    }

    #[test]
    fn test_new_and_evaluate() {
        let p = instance();
        let s = Solution::new(vec![2, 1], &p).unwrap();
        assert_eq!(s.makespan, 8);
        assert!(!s.is_complete(&p));

        let empty = Solution::new(vec![], &p).unwrap();
        assert_eq!(empty.makespan, 0);
        assert!(empty.is_empty());
    }

    #[test]
    fn test_new_rejects_invalid() {
        let p = instance();
        assert!(matches!(
            Solution::new(vec![1, 4], &p),
            Err(FlowshopError::JobOutOfRange { job: 4, .. })
        ));
    }

    #[test]
    fn test_insert_best() {
        let p = instance();
        let mut s = Solution::new(vec![1, 2], &p).unwrap();
        let ins = s.insert_best(&p, 3, false).unwrap();
        assert_eq!(ins.position, 1);
        assert_eq!(s.sequence, vec![3, 1, 2]);
        assert_eq!(s.makespan, 10);
        assert!(s.is_complete(&p));
        assert_eq!(s.clone().evaluate(&p).unwrap(), s.makespan);
    }

    #[test]
    fn test_remove_jobs() {
        let p = instance();
        let mut s = Solution::new(vec![3, 1, 2], &p).unwrap();
        assert_eq!(s.remove_jobs(&p, &[3, 2]).unwrap(), 5);
        assert_eq!(s.sequence, vec![1]);
        assert_eq!(s.makespan, 5);
        assert_eq!(s.remove_jobs(&p, &[1]).unwrap(), 0);
        assert_eq!(s.makespan, 0);
    }

    #[test]
    fn test_remove_jobs_reports_edited_sequence() {
        let p = instance();
        let mut s = Solution {
            sequence: vec![1, 9, 2],
            makespan: 0,
        };
        assert!(matches!(
            s.remove_jobs(&p, &[2]),
            Err(FlowshopError::JobOutOfRange { job: 9, .. })
        ));

        s.sequence = vec![3, 1, 3];
        assert!(matches!(
            s.remove_jobs(&p, &[2]),
            Err(FlowshopError::DuplicateJob(3))
        ));
    }

    #[test]
    fn test_tables() {
        let p = instance();
        let s = Solution::new(vec![1, 2], &p).unwrap();
        assert_eq!(s.completion_times(&p).unwrap().last(), 9);
        assert_eq!(s.idle_times(&p).unwrap(), vec![3, 0, 0]);
    }
}
