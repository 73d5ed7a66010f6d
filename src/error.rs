//! Error types.
//!
//! Every public operation validates its inputs at the boundary and
//! reports contract violations as a [`FlowshopError`] before any
//! dynamic-programming work starts. No partial results are returned.

use thiserror::Error;

use crate::instance::{JobId, Time};

/// Errors raised by instance construction, evaluation, and search.
#[derive(Error, Debug)]
pub enum FlowshopError {
    /// A required dimension is zero (empty sequence, no jobs, no machines).
    #[error("invalid dimension: {0}")]
    InvalidDimension(&'static str),

    /// A job id outside `[1, num_jobs]`.
    #[error("job id {job} out of range (instance has {num_jobs} jobs)")]
    JobOutOfRange { job: JobId, num_jobs: usize },

    /// A job id appears more than once in a sequence.
    #[error("job {0} appears more than once in the sequence")]
    DuplicateJob(JobId),

    /// The job being inserted is already part of the sequence.
    #[error("job {0} is already sequenced")]
    JobAlreadySequenced(JobId),

    /// A processing-time row has a different length than the first row.
    #[error("row {row} has {found} machines, expected {expected}")]
    RaggedMatrix {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A processing time below zero.
    #[error("negative processing time {value} for job {job} on machine {machine}")]
    NegativeProcessingTime {
        job: JobId,
        machine: usize,
        value: Time,
    },

    /// Processing times so large that completion-time sums could exceed
    /// the range of [`Time`].
    #[error("processing times total {total} exceeds the representable time range")]
    TimeOverflow { total: i128 },

    /// An instance file could not be parsed.
    #[error("parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    /// An instance file could not be read.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// A search configuration was rejected by its `validate()`.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, FlowshopError>;
