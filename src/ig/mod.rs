//! Iterated Greedy (IG) for the permutation flowshop.
//!
//! Starting from NEH plus local search, each iteration removes a few
//! jobs (destruction), reinserts them greedily at their best positions
//! (construction), polishes the result with insertion local search and
//! accepts it with a constant-temperature Metropolis criterion.
//!
//! # References
//!
//! - Ruiz & Stützle (2007), "A simple and effective iterated greedy
//!   algorithm for the permutation flowshop scheduling problem"
//! - Osman & Potts (1989), "Simulated annealing for permutation
//!   flow-shop scheduling"
//! - Fernandez-Viagas & Framinan (2014), "On insertion tie-breaking rules
//!   in heuristics for the permutation flowshop scheduling problem"

mod config;
mod runner;
mod selection;

pub use config::IgConfig;
pub use runner::{IgResult, IgRunner};
pub use selection::RemovalSelection;
