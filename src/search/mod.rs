//! Local search over permutations.
//!
//! # Reference
//!
//! Ruiz, R. & Stützle, T. (2007), "A simple and effective iterated greedy
//! algorithm for the permutation flowshop scheduling problem",
//! *European Journal of Operational Research* 177(3), 2033-2049.

mod insertion;

pub use insertion::insertion_local_search;

pub(crate) use insertion::run_insertion_search;
