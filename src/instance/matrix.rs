//! Processing-time matrix.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{JobId, Time};
use crate::error::{FlowshopError, Result};

/// Processing times of every job on every machine.
///
/// Stored row-major: row `job - 1` holds the times of job `job` on
/// machines `1..=num_machines`. The matrix is rectangular, has at least
/// one job and one machine, and every entry is non-negative; these
/// invariants are checked once here so the evaluation kernels can index
/// without further checks.
///
/// # Examples
///
/// ```
/// use u_flowshop::ProcessingTimes;
///
/// let p = ProcessingTimes::new(vec![vec![3, 2], vec![2, 4]]).unwrap();
/// assert_eq!(p.num_jobs(), 2);
/// assert_eq!(p.num_machines(), 2);
/// assert_eq!(p.job(2), &[2, 4]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "Vec<Vec<Time>>", into = "Vec<Vec<Time>>")
)]
pub struct ProcessingTimes {
    num_jobs: usize,
    num_machines: usize,
    data: Vec<Time>,
}

impl ProcessingTimes {
    /// Builds a matrix from one row per job.
    ///
    /// # Errors
    ///
    /// - [`FlowshopError::InvalidDimension`] if there are no rows or the
    ///   first row is empty.
    /// - [`FlowshopError::RaggedMatrix`] if rows differ in length.
    /// - [`FlowshopError::NegativeProcessingTime`] for any entry below zero.
    /// - [`FlowshopError::TimeOverflow`] if the total processing time,
    ///   scaled by `3 * (num_machines + 1)`, does not fit in [`Time`].
    ///   Every completion time is bounded by the total, and the per-job
    ///   idle and tie-breaking sums by the scaled total, so the kernels
    ///   never overflow on an accepted matrix.
    pub fn new(rows: Vec<Vec<Time>>) -> Result<Self> {
        let num_jobs = rows.len();
        if num_jobs == 0 {
            return Err(FlowshopError::InvalidDimension("instance has no jobs"));
        }
        let num_machines = rows[0].len();
        if num_machines == 0 {
            return Err(FlowshopError::InvalidDimension("instance has no machines"));
        }

        let mut data = Vec::with_capacity(num_jobs * num_machines);
        for (r, row) in rows.into_iter().enumerate() {
            if row.len() != num_machines {
                return Err(FlowshopError::RaggedMatrix {
                    row: r + 1,
                    expected: num_machines,
                    found: row.len(),
                });
            }
            if let Some((machine, &value)) = row.iter().enumerate().find(|&(_, &v)| v < 0) {
                return Err(FlowshopError::NegativeProcessingTime {
                    job: r + 1,
                    machine: machine + 1,
                    value,
                });
            }
            data.extend(row);
        }
        check_time_range(&data, num_machines)?;

        Ok(Self {
            num_jobs,
            num_machines,
            data,
        })
    }

    /// Number of jobs (rows).
    #[inline]
    pub fn num_jobs(&self) -> usize {
        self.num_jobs
    }

    /// Number of machines (columns).
    #[inline]
    pub fn num_machines(&self) -> usize {
        self.num_machines
    }

    /// Processing times of `job` on every machine, in machine order.
    ///
    /// # Panics
    ///
    /// Panics if `job` is not in `1..=num_jobs`. Public evaluation entry
    /// points validate job ids before reaching this accessor.
    #[inline]
    pub fn job(&self, job: JobId) -> &[Time] {
        let start = (job - 1) * self.num_machines;
        &self.data[start..start + self.num_machines]
    }

    /// Processing time of `job` on the 1-based `machine`.
    #[inline]
    pub fn get(&self, job: JobId, machine: usize) -> Time {
        self.job(job)[machine - 1]
    }

    /// Sum of the processing times of `job` across all machines.
    pub fn total_processing_time(&self, job: JobId) -> Time {
        self.job(job).iter().sum()
    }

    /// Sum of every entry in the matrix.
    pub fn total(&self) -> Time {
        self.data.iter().sum()
    }

    /// Whether `job` is a valid id for this instance.
    #[inline]
    pub fn contains_job(&self, job: JobId) -> bool {
        (1..=self.num_jobs).contains(&job)
    }

    /// Iterates over the rows in job order.
    pub fn rows(&self) -> impl Iterator<Item = &[Time]> {
        self.data.chunks_exact(self.num_machines)
    }
}

fn check_time_range(data: &[Time], num_machines: usize) -> Result<()> {
    let total = data.iter().try_fold(0 as Time, |acc, &v| acc.checked_add(v));
    let scale = Time::try_from(num_machines)
        .ok()
        .and_then(|m| m.checked_add(1))
        .and_then(|m| m.checked_mul(3));
    match (total, scale) {
        (Some(t), Some(k)) if t.checked_mul(k).is_some() => Ok(()),
        _ => Err(FlowshopError::TimeOverflow {
            total: data.iter().map(|&v| i128::from(v)).sum(),
        }),
    }
}

impl TryFrom<Vec<Vec<Time>>> for ProcessingTimes {
    type Error = FlowshopError;

    fn try_from(rows: Vec<Vec<Time>>) -> Result<Self> {
        Self::new(rows)
    }
}

impl From<ProcessingTimes> for Vec<Vec<Time>> {
    fn from(p: ProcessingTimes) -> Self {
        p.rows().map(<[Time]>::to_vec).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_valid() {
        let p = ProcessingTimes::new(vec![vec![3, 2, 1], vec![2, 4, 0]]).unwrap();
        assert_eq!(p.num_jobs(), 2);
        assert_eq!(p.num_machines(), 3);
        assert_eq!(p.job(1), &[3, 2, 1]);
        assert_eq!(p.get(2, 2), 4);
        assert_eq!(p.total_processing_time(2), 6);
        assert_eq!(p.total(), 12);
    }

    #[test]
    fn test_empty_rejected() {
        assert!(matches!(
            ProcessingTimes::new(vec![]),
            Err(FlowshopError::InvalidDimension(_))
        ));
        assert!(matches!(
            ProcessingTimes::new(vec![vec![]]),
            Err(FlowshopError::InvalidDimension(_))
        ));
    }

    #[test]
    fn test_ragged_rejected() {
        let err = ProcessingTimes::new(vec![vec![1, 2], vec![3]]).unwrap_err();
        match err {
            FlowshopError::RaggedMatrix {
                row,
                expected,
                found,
            } => {
                assert_eq!((row, expected, found), (2, 2, 1));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_negative_rejected() {
        let err = ProcessingTimes::new(vec![vec![1, 2], vec![3, -1]]).unwrap_err();
        assert!(matches!(
            err,
            FlowshopError::NegativeProcessingTime {
                job: 2,
                machine: 2,
                value: -1
            }
        ));
    }

    #[test]
    fn test_total_past_time_range_rejected() {
        let big = Time::MAX / 2 + 1;
        let err = ProcessingTimes::new(vec![vec![big], vec![big]]).unwrap_err();
        assert!(matches!(err, FlowshopError::TimeOverflow { .. }));
        assert!(err.to_string().contains(&(2 * i128::from(big)).to_string()));

        // sum fits, but the idle sums over machines would not
        assert!(matches!(
            ProcessingTimes::new(vec![vec![1 << 60, 1 << 60], vec![1, 1]]),
            Err(FlowshopError::TimeOverflow { .. })
        ));
    }

    #[test]
    fn test_large_times_within_range() {
        let t = 1i64 << 40;
        let p = ProcessingTimes::new(vec![vec![t, 1], vec![t, 1]]).unwrap();
        assert_eq!(crate::eval::makespan(&[1, 2], &p).unwrap(), 2 * t + 1);
    }

    #[test]
    fn test_contains_job() {
        let p = ProcessingTimes::new(vec![vec![1], vec![2]]).unwrap();
        assert!(!p.contains_job(0));
        assert!(p.contains_job(1));
        assert!(p.contains_job(2));
        assert!(!p.contains_job(3));
    }

    #[test]
    fn test_rows_back_to_vec() {
        let rows = vec![vec![5, 6], vec![7, 8]];
        let p = ProcessingTimes::new(rows.clone()).unwrap();
        let back: Vec<Vec<Time>> = p.into();
        assert_eq!(back, rows);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_validates_on_deserialize() {
        let p: ProcessingTimes = serde_json::from_str("[[1,2],[3,4]]").unwrap();
        assert_eq!(p.get(2, 1), 3);
        assert_eq!(serde_json::to_string(&p).unwrap(), "[[1,2],[3,4]]");
        assert!(serde_json::from_str::<ProcessingTimes>("[[1,2],[3]]").is_err());
    }
}
