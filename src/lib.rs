//! Permutation flowshop scheduling (PFSP) with makespan objective.
//!
//! Provides the evaluation kernels and heuristics of an Iterated Greedy
//! solver:
//!
//! - **Instances**: [`ProcessingTimes`] matrices, built in memory or
//!   loaded from Taillard / VRF benchmark files.
//! - **Evaluation** ([`eval`]): completion times, makespan, per-job idle
//!   time, and best-insertion search in `O(n m)` via Taillard's
//!   acceleration, with optional Fernandez-Viagas & Framinan tie-breaking.
//! - **Construction** ([`construct`]): the NEH heuristic with several
//!   initial job orders.
//! - **Local search** ([`search`]): the insertion neighborhood.
//! - **Iterated Greedy** ([`ig`]): destruction, greedy reconstruction,
//!   local search and Metropolis acceptance, with pluggable removal
//!   selection.
//!
//! Job ids are 1-based throughout; machines are visited in column order.
//!
//! # Example
//!
//! ```
//! use u_flowshop::ig::{IgConfig, IgRunner};
//! use u_flowshop::{eval, ProcessingTimes};
//!
//! let p = ProcessingTimes::new(vec![vec![3, 2], vec![2, 4], vec![1, 1]]).unwrap();
//!
//! let best = eval::best_insertion(&[1, 2], &p, 3, false).unwrap();
//! assert_eq!((best.position, best.makespan), (1, 10));
//!
//! let config = IgConfig::default().with_max_iterations(20).with_seed(1);
//! let result = IgRunner::run(&p, &config).unwrap();
//! assert_eq!(result.best.makespan, 9);
//! ```
//!
//! # Features
//!
//! - `parallel`: evaluates batches of candidate insertions on the rayon
//!   thread pool ([`eval::best_insertions`]).
//! - `serde`: `Serialize`/`Deserialize` for instances, solutions,
//!   configurations and results.

pub mod construct;
pub mod error;
pub mod eval;
pub mod ig;
pub mod instance;
pub mod random;
pub mod search;
pub mod solution;

#[cfg(test)]
mod testing;

pub use error::{FlowshopError, Result};
pub use eval::Insertion;
pub use instance::{JobId, ProcessingTimes, Time};
pub use solution::Solution;
