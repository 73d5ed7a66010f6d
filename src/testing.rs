//! Shared proptest strategies and reference implementations for tests.

use proptest::prelude::*;

use crate::eval::makespan;
use crate::instance::{JobId, ProcessingTimes, Time};

/// Random instance with up to `max_jobs` jobs and `max_machines` machines,
/// plus a random permutation of all its jobs.
pub(crate) fn instance_and_permutation(
    max_jobs: usize,
    max_machines: usize,
) -> impl Strategy<Value = (ProcessingTimes, Vec<JobId>)> {
    (1..=max_jobs, 1..=max_machines)
        .prop_flat_map(|(n, m)| {
            (
                prop::collection::vec(prop::collection::vec(0i64..50, m), n),
                Just((1..=n).collect::<Vec<JobId>>()).prop_shuffle(),
            )
        })
        .prop_map(|(rows, seq)| (ProcessingTimes::new(rows).unwrap(), seq))
}

/// Random insertion case: an instance, a partial sequence of `0..=8` jobs,
/// and a job outside that sequence.
///
/// Processing times are drawn from a small range so that makespan ties
/// across positions are frequent.
pub(crate) fn insertion_case(
) -> impl Strategy<Value = (ProcessingTimes, Vec<JobId>, JobId)> {
    (1usize..=9, 1usize..=4)
        .prop_flat_map(|(n, m)| {
            (
                prop::collection::vec(prop::collection::vec(0i64..8, m), n),
                Just((1..=n).collect::<Vec<JobId>>()).prop_shuffle(),
                0..n,
            )
        })
        .prop_map(|(rows, mut perm, keep)| {
            let job = perm.pop().unwrap();
            perm.truncate(keep);
            (ProcessingTimes::new(rows).unwrap(), perm, job)
        })
}

/// Makespan of every insertion position, by rebuilding each candidate
/// sequence and evaluating it from scratch.
pub(crate) fn brute_force_insertions(
    sequence: &[JobId],
    p: &ProcessingTimes,
    job: JobId,
) -> Vec<Time> {
    (0..=sequence.len())
        .map(|at| {
            let mut candidate = sequence.to_vec();
            candidate.insert(at, job);
            makespan(&candidate, p).unwrap()
        })
        .collect()
}

/// Checks that `sequence` is a permutation of `1..=n`.
pub(crate) fn is_permutation(sequence: &[JobId], n: usize) -> bool {
    let mut sorted = sequence.to_vec();
    sorted.sort_unstable();
    sorted == (1..=n).collect::<Vec<_>>()
}
