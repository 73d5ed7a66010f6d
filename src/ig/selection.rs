//! Destruction: choosing the jobs to remove.
//!
//! The weighted methods favour jobs that cause idle time. The first
//! sequenced job always gets weight 0, since its "idle time" is only the
//! pipeline filling up. Every method returns distinct jobs.
//!
//! # References
//!
//! - Ruiz & Stützle (2007), "A simple and effective iterated greedy
//!   algorithm for the permutation flowshop scheduling problem"
//! - Baker (1987), "Reducing Bias and Inefficiency in the Selection
//!   Algorithm" (stochastic universal sampling)

use rand::seq::index;
use rand::Rng;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::eval::idle_times;
use crate::instance::{JobId, ProcessingTimes};
use crate::solution::Solution;

/// How the destruction phase picks jobs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RemovalSelection {
    /// Uniformly random jobs.
    #[default]
    Random,
    /// Repeated tournaments won by the job with the most idle time.
    Tournament,
    /// Fitness-proportionate selection on `(Σp + idle) / Σp`.
    RouletteWheel,
    /// Evenly spaced pointers over the same weights as `RouletteWheel`.
    StochasticUniversalSampling,
}

/// Picks `min(count, solution.len())` distinct jobs of `solution`.
pub(crate) fn select_jobs<R: Rng>(
    method: RemovalSelection,
    tournament_size: usize,
    solution: &Solution,
    p: &ProcessingTimes,
    count: usize,
    rng: &mut R,
) -> Result<Vec<JobId>> {
    let jobs = &solution.sequence;
    let count = count.min(jobs.len());
    if count == 0 {
        return Ok(Vec::new());
    }

    let picked = match method {
        RemovalSelection::Random => index::sample(rng, jobs.len(), count).into_vec(),
        RemovalSelection::Tournament => {
            let idle = idle_times(jobs, p)?;
            let mut weights: Vec<f64> = jobs.iter().map(|&j| idle[j - 1] as f64).collect();
            weights[0] = 0.0;
            tournament(&weights, tournament_size, count, rng)
        }
        RemovalSelection::RouletteWheel | RemovalSelection::StochasticUniversalSampling => {
            let idle = idle_times(jobs, p)?;
            let mut weights: Vec<f64> = jobs
                .iter()
                .map(|&j| {
                    let total = p.total_processing_time(j) as f64;
                    if total > 0.0 {
                        (total + idle[j - 1] as f64) / total
                    } else {
                        1.0
                    }
                })
                .collect();
            weights[0] = 0.0;
            if method == RemovalSelection::RouletteWheel {
                roulette(&weights, count, rng)
            } else {
                universal_sampling(&weights, count, rng)
            }
        }
    };

    Ok(picked.into_iter().map(|i| jobs[i]).collect())
}

/// Returns `count` distinct indices; each round samples `size` aspirants
/// from the remaining pool and keeps the heaviest one.
fn tournament<R: Rng>(weights: &[f64], size: usize, count: usize, rng: &mut R) -> Vec<usize> {
    let mut pool: Vec<usize> = (0..weights.len()).collect();
    let mut chosen = Vec::with_capacity(count);

    while chosen.len() < count {
        let aspirants = index::sample(rng, pool.len(), size.clamp(1, pool.len())).into_vec();

        let mut winner = None;
        let mut best = 0.0;
        for &a in &aspirants {
            if weights[pool[a]] > best {
                best = weights[pool[a]];
                winner = Some(a);
            }
        }
        // all aspirants idle-free: any of them
        let at = winner.unwrap_or_else(|| aspirants[rng.random_range(0..aspirants.len())]);
        chosen.push(pool.swap_remove(at));
    }
    chosen
}

/// Repeated roulette spins, each over the indices not yet taken.
fn roulette<R: Rng>(weights: &[f64], count: usize, rng: &mut R) -> Vec<usize> {
    let mut taken = vec![false; weights.len()];
    let mut chosen = Vec::with_capacity(count);
    fill_by_roulette(weights, &mut taken, &mut chosen, count, rng);
    chosen
}

/// One random offset, `count` equally spaced pointers. Pointers landing
/// on an already chosen index are made up for with roulette spins.
fn universal_sampling<R: Rng>(weights: &[f64], count: usize, rng: &mut R) -> Vec<usize> {
    let mut taken = vec![false; weights.len()];
    let mut chosen = Vec::with_capacity(count);

    let total: f64 = weights.iter().sum();
    if total > 0.0 {
        let step = total / count as f64;
        let start = rng.random::<f64>() * step;

        let mut idx = 0;
        let mut cumulative = 0.0;
        for k in 0..count {
            let pointer = start + k as f64 * step;
            while idx < weights.len() && cumulative + weights[idx] <= pointer {
                cumulative += weights[idx];
                idx += 1;
            }
            if idx == weights.len() {
                break;
            }
            if !std::mem::replace(&mut taken[idx], true) {
                chosen.push(idx);
            }
        }
    }

    fill_by_roulette(weights, &mut taken, &mut chosen, count, rng);
    chosen
}

/// Spins until `chosen` holds `count` indices. Falls back to a uniform
/// pick when every remaining weight is zero.
fn fill_by_roulette<R: Rng>(
    weights: &[f64],
    taken: &mut [bool],
    chosen: &mut Vec<usize>,
    count: usize,
    rng: &mut R,
) {
    while chosen.len() < count {
        let remaining: Vec<usize> = (0..weights.len()).filter(|&i| !taken[i]).collect();
        if remaining.is_empty() {
            return;
        }

        let total: f64 = remaining.iter().map(|&i| weights[i]).sum();
        let pick = if total > 0.0 {
            let mut r = rng.random::<f64>() * total;
            let mut pick = None;
            for &i in &remaining {
                if r < weights[i] {
                    pick = Some(i);
                    break;
                }
                r -= weights[i];
            }
            // rounding: last positive weight
            pick.or_else(|| remaining.iter().rev().copied().find(|&i| weights[i] > 0.0))
        } else {
            None
        };

        let i = pick.unwrap_or_else(|| remaining[rng.random_range(0..remaining.len())]);
        taken[i] = true;
        chosen.push(i);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;
    use crate::testing::instance_and_permutation;
    use proptest::prelude::*;

    const METHODS: [RemovalSelection; 4] = [
        RemovalSelection::Random,
        RemovalSelection::Tournament,
        RemovalSelection::RouletteWheel,
        RemovalSelection::StochasticUniversalSampling,
    ];

    /// idle = [1, 0, 5] for the sequence [1, 2, 3]
    fn idle_heavy_last() -> (ProcessingTimes, Solution) {
        let p = ProcessingTimes::new(vec![vec![1, 1], vec![1, 1], vec![6, 1]]).unwrap();
        let s = Solution::new(vec![1, 2, 3], &p).unwrap();
        (p, s)
    }

    #[test]
    fn test_tournament_prefers_idle_job() {
        let (p, s) = idle_heavy_last();
        for seed in 0..20 {
            let picked = select_jobs(
                RemovalSelection::Tournament,
                3,
                &s,
                &p,
                1,
                &mut create_rng(seed),
            )
            .unwrap();
            assert_eq!(picked, vec![3]);
        }
    }

    #[test]
    fn test_weighted_skip_first_job() {
        let (p, s) = idle_heavy_last();
        for method in [
            RemovalSelection::RouletteWheel,
            RemovalSelection::StochasticUniversalSampling,
        ] {
            for seed in 0..20 {
                let mut picked =
                    select_jobs(method, 5, &s, &p, 2, &mut create_rng(seed)).unwrap();
                picked.sort_unstable();
                assert_eq!(picked, vec![2, 3], "{method:?} seed {seed}");
            }
        }
    }

    #[test]
    fn test_count_capped_at_sequence_length() {
        let (p, s) = idle_heavy_last();
        for method in METHODS {
            let mut picked = select_jobs(method, 2, &s, &p, 10, &mut create_rng(1)).unwrap();
            picked.sort_unstable();
            assert_eq!(picked, vec![1, 2, 3]);
        }
    }

    #[test]
    fn test_zero_processing_times() {
        let p = ProcessingTimes::new(vec![vec![0, 0]; 4]).unwrap();
        let s = Solution::new(vec![4, 3, 2, 1], &p).unwrap();
        for method in METHODS {
            let picked = select_jobs(method, 2, &s, &p, 3, &mut create_rng(5)).unwrap();
            assert_eq!(picked.len(), 3);
        }
    }

    #[test]
    fn test_same_seed_same_pick() {
        let (p, s) = idle_heavy_last();
        for method in METHODS {
            let a = select_jobs(method, 2, &s, &p, 2, &mut create_rng(11)).unwrap();
            let b = select_jobs(method, 2, &s, &p, 2, &mut create_rng(11)).unwrap();
            assert_eq!(a, b);
        }
    }

    proptest! {
        #[test]
        fn prop_distinct_jobs_from_sequence(
            (p, seq) in instance_and_permutation(12, 4),
            count in 1usize..8,
            method in 0usize..4,
            seed in any::<u64>()
        ) {
            let s = Solution::new(seq, &p).unwrap();
            let method = METHODS[method];
            let picked = select_jobs(method, 3, &s, &p, count, &mut create_rng(seed)).unwrap();

            prop_assert_eq!(picked.len(), count.min(s.len()));
            let mut sorted = picked.clone();
            sorted.sort_unstable();
            sorted.dedup();
            prop_assert_eq!(sorted.len(), picked.len());
            prop_assert!(picked.iter().all(|j| s.sequence.contains(j)));

            if count < s.len() && matches!(
                method,
                RemovalSelection::RouletteWheel | RemovalSelection::StochasticUniversalSampling
            ) {
                prop_assert!(!picked.contains(&s.sequence[0]));
            }
        }
    }
}
