//! Interpreter configuration

use super::constants::{DEFAULT_SNAPSHOT_MEMORY_LIMIT, DEFAULT_STEP_LIMIT};

/// Tunables for a single run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InterpreterConfig {
    /// Maximum number of cycles before the run is stopped
    pub step_limit: u64,
    /// Capture a snapshot after every cycle for time-travel navigation
    pub record_history: bool,
    /// Upper bound on the estimated size of recorded snapshots, in bytes
    pub snapshot_memory_limit: usize,
}

impl InterpreterConfig {
    pub fn with_step_limit(mut self, step_limit: u64) -> Self {
        self.step_limit = step_limit;
        self
    }

    pub fn with_history(mut self, record_history: bool) -> Self {
        self.record_history = record_history;
        self
    }

    pub fn with_snapshot_memory_limit(mut self, limit: usize) -> Self {
        self.snapshot_memory_limit = limit;
        self
    }
}

impl Default for InterpreterConfig {
    fn default() -> Self {
        InterpreterConfig {
            step_limit: DEFAULT_STEP_LIMIT,
            record_history: false,
            snapshot_memory_limit: DEFAULT_SNAPSHOT_MEMORY_LIMIT,
        }
    }
}
