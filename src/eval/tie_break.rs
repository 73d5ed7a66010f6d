//! Tie-breaking among makespan-equal insertion positions (TBFF).
//!
//! When several positions give the same minimal makespan, the one that
//! leaves machines idle the least tends to make later insertions
//! cheaper. The estimate reuses the `E` and `F` tables of the insertion
//! pass, so ranking the ties costs `O(m)` per tied position.
//!
//! # Reference
//!
//! Fernandez-Viagas, V. & Framinan, J. M. (2014), "On insertion
//! tie-breaking rules in heuristics for the permutation flowshop
//! scheduling problem", *Computers & Operations Research* 45, 60-67.

use super::table::TimeTable;
use crate::instance::{JobId, ProcessingTimes, Time};

/// Picks, among the positions sharing the minimal makespan, the one with
/// the smallest estimated idle time.
///
/// `e` and `f` are the head and inserted-job tables of the insertion pass
/// for `job` into `sequence`, and `makespans[i - 1]` is the makespan of
/// position `i`. `candidate` is a position holding the minimal makespan.
///
/// For a tied position `i` the idle estimate is:
///
/// - appending (`i = n + 1`): `Σ_j (F[i][j] - E[i-1][j] - p[k][j])`, the
///   gap the new last job opens behind the previous last job;
/// - otherwise, with `d = sequence[i-1]` the job pushed back one slot and
///   `FL` its completion behind the inserted job (`FL[1] = F[i][1] + p[d][1]`),
///   the sum over `j = 2..=m` of
///   `F[i][j] - E[i][j] + p[d][j] - p[k][j] + max(FL[j-1] - F[i][j], 0)`
///   with `FL[j] = max(FL[j-1], F[i][j]) + p[d][j]`.
///
/// Ties in the estimate keep the smallest position.
///
/// Inputs are not validated: the tables must come from the insertion
/// pass that produced `makespans`.
pub(crate) fn break_tie(
    p: &ProcessingTimes,
    sequence: &[JobId],
    e: &TimeTable,
    f: &TimeTable,
    makespans: &[Time],
    job: JobId,
    candidate: usize,
) -> usize {
    let n = sequence.len();
    let m = p.num_machines();
    debug_assert_eq!(makespans.len(), n + 1);
    debug_assert!((1..=n + 1).contains(&candidate));
    let target = makespans[candidate - 1];
    let inserted = p.job(job);

    let mut chosen = candidate;
    let mut least_idle = Time::MAX;

    for (idx, _) in makespans
        .iter()
        .enumerate()
        .filter(|&(_, &ms)| ms == target)
    {
        let i = idx + 1;
        let idle: Time = if i == n + 1 {
            (1..=m)
                .map(|j| f[(i, j)] - e[(i - 1, j)] - inserted[j - 1])
                .sum()
        } else {
            let displaced = p.job(sequence[i - 1]);
            let mut behind = f[(i, 1)] + displaced[0];
            let mut idle = 0;
            for j in 2..=m {
                let done = f[(i, j)];
                idle += done - e[(i, j)] + displaced[j - 1] - inserted[j - 1]
                    + (behind - done).max(0);
                behind = behind.max(done) + displaced[j - 1];
            }
            idle
        };

        if idle < least_idle {
            least_idle = idle;
            chosen = i;
        }
    }

    chosen
}
