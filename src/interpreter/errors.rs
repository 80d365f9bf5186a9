//! History navigation errors
//!
//! Executing a Befunge-93 program never fails: every edge case degrades to
//! a documented default. The only fallible operations are the time-travel
//! controls layered on top of a recorded run, and [`HistoryError`] covers
//! those.

use std::fmt;

/// Errors from stepping through recorded execution history
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryError {
    /// Stepping backward from the first snapshot
    AtStart,

    /// Stepping forward from the last snapshot
    AtEnd { position: usize },

    /// History was not recorded for this run
    NoSnapshots,

    /// Snapshot index that should exist was not found
    SnapshotMissing { index: usize },

    /// Recorded snapshots would exceed the configured memory budget
    SnapshotLimitExceeded { current: usize, limit: usize },
}

impl fmt::Display for HistoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HistoryError::AtStart => write!(f, "Already at the beginning of execution"),
            HistoryError::AtEnd { position } => {
                write!(
                    f,
                    "No more snapshots available after step {} (execution finished)",
                    position
                )
            }
            HistoryError::NoSnapshots => write!(f, "No snapshots available"),
            HistoryError::SnapshotMissing { index } => {
                write!(f, "Snapshot {} not found in history", index)
            }
            HistoryError::SnapshotLimitExceeded { current, limit } => {
                write!(
                    f,
                    "Snapshot memory limit exceeded: {} bytes used, limit is {}",
                    current, limit
                )
            }
        }
    }
}

impl std::error::Error for HistoryError {}
