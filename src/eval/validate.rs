//! Boundary checks shared by the evaluation entry points.

use crate::error::{FlowshopError, Result};
use crate::instance::{JobId, ProcessingTimes};

/// Checks that every id is in range and appears at most once.
///
/// Returns the membership mask (index `job - 1`) so callers can run
/// further membership checks without a second pass.
pub(crate) fn check_sequence(sequence: &[JobId], p: &ProcessingTimes) -> Result<Vec<bool>> {
    let mut seen = vec![false; p.num_jobs()];
    for &job in sequence {
        if !p.contains_job(job) {
            return Err(FlowshopError::JobOutOfRange {
                job,
                num_jobs: p.num_jobs(),
            });
        }
        if std::mem::replace(&mut seen[job - 1], true) {
            return Err(FlowshopError::DuplicateJob(job));
        }
    }
    Ok(seen)
}

/// Like [`check_sequence`] but rejects an empty sequence.
pub(crate) fn check_non_empty(sequence: &[JobId], p: &ProcessingTimes) -> Result<()> {
    if sequence.is_empty() {
        return Err(FlowshopError::InvalidDimension("sequence is empty"));
    }
    check_sequence(sequence, p).map(|_| ())
}

/// Validates `sequence` plus a job to be inserted into it.
pub(crate) fn check_insertion(
    sequence: &[JobId],
    p: &ProcessingTimes,
    job: JobId,
) -> Result<()> {
    let seen = check_sequence(sequence, p)?;
    if !p.contains_job(job) {
        return Err(FlowshopError::JobOutOfRange {
            job,
            num_jobs: p.num_jobs(),
        });
    }
    if seen[job - 1] {
        return Err(FlowshopError::JobAlreadySequenced(job));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instance() -> ProcessingTimes {
        ProcessingTimes::new(vec![vec![1, 1]; 4]).unwrap()
    }

    #[test]
    fn test_valid_sequence() {
        let seen = check_sequence(&[3, 1], &instance()).unwrap();
        assert_eq!(seen, vec![true, false, true, false]);
    }

    #[test]
    fn test_out_of_range() {
        assert!(matches!(
            check_sequence(&[0], &instance()),
            Err(FlowshopError::JobOutOfRange { job: 0, .. })
        ));
        assert!(matches!(
            check_sequence(&[1, 5], &instance()),
            Err(FlowshopError::JobOutOfRange { job: 5, num_jobs: 4 })
        ));
    }

    #[test]
    fn test_duplicate() {
        assert!(matches!(
            check_sequence(&[2, 3, 2], &instance()),
            Err(FlowshopError::DuplicateJob(2))
        ));
    }

    #[test]
    fn test_empty() {
        assert!(check_sequence(&[], &instance()).is_ok());
        assert!(matches!(
            check_non_empty(&[], &instance()),
            Err(FlowshopError::InvalidDimension(_))
        ));
    }

    #[test]
    fn test_insertion_checks() {
        let p = instance();
        assert!(check_insertion(&[1, 2], &p, 3).is_ok());
        assert!(check_insertion(&[], &p, 4).is_ok());
        assert!(matches!(
            check_insertion(&[1, 2], &p, 2),
            Err(FlowshopError::JobAlreadySequenced(2))
        ));
        assert!(matches!(
            check_insertion(&[1, 2], &p, 9),
            Err(FlowshopError::JobOutOfRange { job: 9, .. })
        ));
    }
}
