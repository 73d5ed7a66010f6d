//! Constructive heuristics.
//!
//! # References
//!
//! - Nawaz, M., Enscore, E. E. & Ham, I. (1983), "A heuristic algorithm
//!   for the m-machine, n-job flow-shop sequencing problem", *Omega* 11(1), 91-95.
//! - Huang, K.-L. & Chen, C.-Y. (2008), ordering by mean plus deviation of
//!   processing times.

mod neh;

pub use neh::{neh, neh_from_order, neh_order, NehOrder};
