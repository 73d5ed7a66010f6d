//! Makespan evaluation kernels.
//!
//! Pure functions over a [`ProcessingTimes`](crate::ProcessingTimes)
//! matrix and a job sequence:
//!
//! - [`completion_times`] / [`makespan`]: forward completion-time DP.
//! - [`idle_times`]: per-job machine idle time.
//! - [`best_insertion`]: best slot for one job, `O(n m)` via Taillard's
//!   acceleration, with optional Fernandez-Viagas & Framinan tie-breaking.
//! - [`best_insertions`]: the same for many candidate jobs.
//!
//! Every entry point validates its inputs first and allocates its own
//! scratch tables (or uses an [`InsertionEvaluator`] owned by the
//! caller), so all of them can be called concurrently.

mod batch;
mod completion;
mod idle;
mod insertion;
mod table;
mod tie_break;
mod validate;

pub use batch::best_insertions;
pub use completion::{completion_times, makespan};
pub use idle::idle_times;
pub use insertion::{best_insertion, Insertion, InsertionEvaluator};
pub use table::TimeTable;

pub(crate) use completion::makespan_unchecked;
pub(crate) use validate::check_sequence;
