//! Problem instances.
//!
//! A permutation flowshop instance is fully described by its
//! processing-time matrix: one row per job, one column per machine.
//! Jobs are identified by 1-based ids, machines are visited in column
//! order by every job.
//!
//! # Reference
//!
//! Taillard, E. (1993), "Benchmarks for basic scheduling problems",
//! *European Journal of Operational Research* 64(2), 278-285.

mod matrix;
mod taillard;

pub use matrix::ProcessingTimes;

/// 1-based job identifier.
pub type JobId = usize;

/// Integral time unit for processing and completion times.
pub type Time = i64;
