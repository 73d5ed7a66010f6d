//! Insertion evaluation for many candidate jobs at once.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::insertion::{Insertion, InsertionEvaluator};
use super::validate::check_insertion;
use crate::error::Result;
use crate::instance::{JobId, ProcessingTimes};

/// Best insertion of each job in `jobs` into the same `sequence`.
///
/// Results are in the order of `jobs`. Every candidate is evaluated
/// independently against the unchanged `sequence`; with the `parallel`
/// feature the candidates are spread over the rayon pool, each worker
/// holding its own [`InsertionEvaluator`].
///
/// # Errors
///
/// Fails on the first invalid candidate (same rules as
/// [`best_insertion`](super::best_insertion)) before any evaluation.
///
/// # Examples
///
/// ```
/// use u_flowshop::{eval, ProcessingTimes};
///
/// let p = ProcessingTimes::new(vec![vec![3, 2], vec![2, 4], vec![1, 1]]).unwrap();
/// let all = eval::best_insertions(&[1], &p, &[2, 3], false).unwrap();
/// assert_eq!(all.len(), 2);
/// assert_eq!(all[1].makespan, 6);
/// ```
pub fn best_insertions(
    sequence: &[JobId],
    p: &ProcessingTimes,
    jobs: &[JobId],
    tie_breaking: bool,
) -> Result<Vec<Insertion>> {
    for &job in jobs {
        check_insertion(sequence, p, job)?;
    }

    #[cfg(feature = "parallel")]
    let results = jobs
        .par_iter()
        .map_init(InsertionEvaluator::new, |eval, &job| {
            eval.evaluate(sequence, p, job, tie_breaking)
        })
        .collect();

    #[cfg(not(feature = "parallel"))]
    let results = {
        let mut eval = InsertionEvaluator::new();
        jobs.iter()
            .map(|&job| eval.evaluate(sequence, p, job, tie_breaking))
            .collect()
    };

    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FlowshopError;
    use crate::eval::best_insertion;

    fn instance() -> ProcessingTimes {
        ProcessingTimes::new(vec![
            vec![5, 9, 8, 10],
            vec![9, 3, 10, 1],
            vec![9, 4, 5, 8],
            vec![4, 8, 8, 7],
            vec![3, 5, 6, 3],
            vec![7, 2, 3, 9],
        ])
        .unwrap()
    }

    #[test]
    fn test_matches_single_calls() {
        let p = instance();
        let seq = [2, 5, 1];
        let jobs = [3, 4, 6];
        for tie in [false, true] {
            let batch = best_insertions(&seq, &p, &jobs, tie).unwrap();
            let single: Vec<Insertion> = jobs
                .iter()
                .map(|&job| best_insertion(&seq, &p, job, tie).unwrap())
                .collect();
            assert_eq!(batch, single);
        }
    }

    #[test]
    fn test_empty_candidates() {
        let batch = best_insertions(&[1, 2], &instance(), &[], false).unwrap();
        assert!(batch.is_empty());
    }

    #[test]
    fn test_invalid_candidate_fails_whole_batch() {
        let err = best_insertions(&[1, 2], &instance(), &[3, 2], false).unwrap_err();
        assert!(matches!(err, FlowshopError::JobAlreadySequenced(2)));
    }
}
