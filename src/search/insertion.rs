//! Insertion-neighborhood local search.
//!
//! # Algorithm
//!
//! 1. Visit every job of the sequence once, in random order
//! 2. Remove it and reinsert it at its best position
//! 3. If the pass improved the makespan and a local optimum is requested,
//!    run another pass

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::Result;
use crate::eval::InsertionEvaluator;
use crate::instance::ProcessingTimes;
use crate::solution::Solution;

/// Improves `solution` in place with the insertion neighborhood.
///
/// Reinserting a job at its best position never increases the makespan,
/// so the result is never worse than the input. With `local_optimum`
/// passes repeat until one brings no improvement; otherwise a single
/// pass is made. Works on partial sequences too.
///
/// Returns whether the makespan improved.
///
/// # Examples
///
/// ```
/// use u_flowshop::search::insertion_local_search;
/// use u_flowshop::{ProcessingTimes, Solution};
///
/// let p = ProcessingTimes::new(vec![vec![3, 2], vec![2, 4]]).unwrap();
/// let mut s = Solution::new(vec![1, 2], &p).unwrap();
/// let mut rng = u_flowshop::random::create_rng(0);
/// insertion_local_search(&mut s, &p, true, false, &mut rng).unwrap();
/// assert_eq!(s.makespan, 8);
/// ```
pub fn insertion_local_search<R: Rng>(
    solution: &mut Solution,
    p: &ProcessingTimes,
    local_optimum: bool,
    tie_breaking: bool,
    rng: &mut R,
) -> Result<bool> {
    run_insertion_search(
        &mut InsertionEvaluator::new(),
        solution,
        p,
        local_optimum,
        tie_breaking,
        rng,
    )
}

/// [`insertion_local_search`] with caller-owned scratch tables.
pub(crate) fn run_insertion_search<R: Rng>(
    evaluator: &mut InsertionEvaluator,
    solution: &mut Solution,
    p: &ProcessingTimes,
    local_optimum: bool,
    tie_breaking: bool,
    rng: &mut R,
) -> Result<bool> {
    let initial = solution.evaluate(p)?;
    if solution.len() < 2 {
        return Ok(false);
    }

    let mut current = initial;
    loop {
        let mut improved = false;
        let mut visit = solution.sequence.clone();
        visit.shuffle(rng);

        for job in visit {
            if let Some(at) = solution.sequence.iter().position(|&j| j == job) {
                solution.sequence.remove(at);
            }
            let best = solution.insert_best_with(evaluator, p, job, tie_breaking)?;
            if best.makespan < current {
                current = best.makespan;
                improved = true;
            }
        }

        if !improved || !local_optimum {
            break;
        }
    }

    Ok(current < initial)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::makespan;
    use crate::random::create_rng;
    use crate::testing::{instance_and_permutation, is_permutation};
    use proptest::prelude::*;

    #[test]
    fn test_fixes_bad_order() {
        // Johnson's rule puts job 3 first and job 1 last
        let p = ProcessingTimes::new(vec![vec![5, 1], vec![3, 3], vec![1, 5]]).unwrap();
        let mut s = Solution::new(vec![1, 2, 3], &p).unwrap();
        assert_eq!(s.makespan, 16);

        let improved = insertion_local_search(&mut s, &p, true, false, &mut create_rng(4)).unwrap();
        assert!(improved);
        assert_eq!(s.sequence, vec![3, 2, 1]);
        assert_eq!(s.makespan, 10);
        assert_eq!(s.makespan, makespan(&s.sequence, &p).unwrap());
    }

    #[test]
    fn test_single_job_untouched() {
        let p = ProcessingTimes::new(vec![vec![2, 3], vec![1, 1]]).unwrap();
        let mut s = Solution::new(vec![2], &p).unwrap();
        assert!(!insertion_local_search(&mut s, &p, true, true, &mut create_rng(0)).unwrap());
        assert_eq!(s.sequence, vec![2]);
        assert_eq!(s.makespan, 2);
    }

    #[test]
    fn test_stale_makespan_is_refreshed() {
        let p = ProcessingTimes::new(vec![vec![3, 2], vec![2, 4]]).unwrap();
        let mut s = Solution {
            sequence: vec![2, 1],
            makespan: 0,
        };
        let improved = insertion_local_search(&mut s, &p, true, false, &mut create_rng(0)).unwrap();
        assert!(!improved);
        assert_eq!(s.makespan, 8);
    }

    proptest! {
        #[test]
        fn prop_never_worse(
            (p, seq) in instance_and_permutation(10, 4),
            local_optimum in any::<bool>(),
            tie in any::<bool>(),
            seed in any::<u64>()
        ) {
            let before = makespan(&seq, &p).unwrap();
            let mut s = Solution::new(seq, &p).unwrap();
            insertion_local_search(&mut s, &p, local_optimum, tie, &mut create_rng(seed)).unwrap();

            prop_assert!(s.makespan <= before);
            prop_assert!(is_permutation(&s.sequence, p.num_jobs()));
            prop_assert_eq!(s.makespan, makespan(&s.sequence, &p).unwrap());
        }
    }
}
