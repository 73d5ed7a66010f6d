//! Taillard / VRF benchmark file format.
//!
//! ```text
//! 20 5
//! 0 54 1 79 2 16 3 66 4 58
//! 0 83 1  3 2 89 3 58 4 56
//! ...
//! ```
//!
//! The first line is a dimensions header and is skipped. Every following
//! line describes one job as `machine_index processing_time` pairs; only
//! the processing times are kept, in the order they appear.

use std::path::Path;

use super::{ProcessingTimes, Time};
use crate::error::{FlowshopError, Result};

impl ProcessingTimes {
    /// Parses an instance in Taillard / VRF text format.
    ///
    /// Blank lines are ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_flowshop::ProcessingTimes;
    ///
    /// let text = "2 3\n0 5 1 6 2 7\n0 1 1 2 2 3\n";
    /// let p = ProcessingTimes::from_taillard_str(text).unwrap();
    /// assert_eq!(p.num_jobs(), 2);
    /// assert_eq!(p.job(1), &[5, 6, 7]);
    /// ```
    pub fn from_taillard_str(text: &str) -> Result<Self> {
        let mut rows = Vec::new();

        for (idx, line) in text.lines().enumerate().skip(1) {
            let line_no = idx + 1;
            let tokens: Vec<&str> = line.split_whitespace().collect();
            if tokens.is_empty() {
                continue;
            }
            if tokens.len() % 2 != 0 {
                return Err(FlowshopError::Parse {
                    line: line_no,
                    message: format!(
                        "expected machine/time pairs, found {} tokens",
                        tokens.len()
                    ),
                });
            }

            let row = tokens
                .chunks_exact(2)
                .map(|pair| {
                    pair[1].parse::<Time>().map_err(|e| FlowshopError::Parse {
                        line: line_no,
                        message: format!("invalid processing time '{}': {e}", pair[1]),
                    })
                })
                .collect::<Result<Vec<Time>>>()?;
            rows.push(row);
        }

        Self::new(rows)
    }

    /// Reads and parses a Taillard / VRF instance file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_taillard_str(&text)
    }
}
