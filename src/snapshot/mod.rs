// Snapshot management for reverse execution

use crate::interpreter::engine::Halt;
use crate::interpreter::errors::HistoryError;
use crate::interpreter::pointer::InstructionPointer;
use crate::memory::{grid::Grid, stack::OperandStack};
use std::sync::Arc;

/// Mock terminal capturing `.` and `,` output
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MockTerminal {
    text: String,
}

impl MockTerminal {
    pub fn new() -> Self {
        MockTerminal {
            text: String::new(),
        }
    }

    /// Append text without a newline
    pub fn print(&mut self, text: &str) {
        self.text.push_str(text);
    }

    pub fn print_char(&mut self, c: char) {
        self.text.push(c);
    }

    /// Everything written so far
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Get all lines as a vector of strings
    pub fn get_output(&self) -> Vec<String> {
        let mut result: Vec<String> = self.text.split('\n').map(|s| s.to_string()).collect();
        // Remove trailing empty string if text ended with newline
        if result.last().is_some_and(|s| s.is_empty()) {
            result.pop();
        }
        result
    }
}

/// Snapshot of execution state
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub pointer: InstructionPointer,
    pub stack: OperandStack,
    pub string_mode: bool,
    pub terminal: MockTerminal,
    /// Shared with neighbouring snapshots until a `p` rewrites a cell
    pub grid: Arc<Grid>,
    pub steps: u64,
    pub halt: Option<Halt>,
}

impl Snapshot {
    /// Estimate the memory usage of this snapshot in bytes, excluding the
    /// shared grid
    pub fn estimated_size(&self) -> usize {
        let stack_size = self.stack.depth() * std::mem::size_of::<i64>();
        let terminal_size = self.terminal.as_str().len();

        std::mem::size_of::<Snapshot>() + stack_size + terminal_size
    }
}

/// Manages execution history for reverse execution
#[derive(Debug)]
pub struct SnapshotManager {
    snapshots: Vec<Snapshot>,
    max_memory: usize,
    current_memory: usize,
}

impl SnapshotManager {
    pub fn new(max_memory: usize) -> Self {
        SnapshotManager {
            snapshots: Vec::new(),
            max_memory,
            current_memory: 0,
        }
    }

    /// Bytes `snapshot` costs when appended after `prev`.
    ///
    /// A grid is only charged against the budget the first time it appears.
    fn charge(prev: Option<&Snapshot>, snapshot: &Snapshot) -> usize {
        let shares_grid = prev.is_some_and(|prev| Arc::ptr_eq(&prev.grid, &snapshot.grid));
        let grid_size = if shares_grid {
            0
        } else {
            snapshot.grid.estimated_size()
        };
        snapshot.estimated_size() + grid_size
    }

    /// Add a snapshot to history
    pub fn push(&mut self, snapshot: Snapshot) -> Result<(), HistoryError> {
        let snapshot_size = Self::charge(self.snapshots.last(), &snapshot);

        if self.current_memory + snapshot_size > self.max_memory {
            return Err(HistoryError::SnapshotLimitExceeded {
                current: self.current_memory,
                limit: self.max_memory,
            });
        }

        self.current_memory += snapshot_size;
        self.snapshots.push(snapshot);
        Ok(())
    }

    /// Drop every snapshot from index `len` onward, releasing its budget
    pub fn truncate(&mut self, len: usize) {
        while self.snapshots.len() > len {
            if let Some(snapshot) = self.snapshots.pop() {
                let freed = Self::charge(self.snapshots.last(), &snapshot);
                self.current_memory = self.current_memory.saturating_sub(freed);
            }
        }
    }

    /// Get a snapshot by index
    pub fn get(&self, index: usize) -> Option<&Snapshot> {
        self.snapshots.get(index)
    }

    /// Get the number of snapshots
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Get current memory usage
    pub fn memory_usage(&self) -> usize {
        self.current_memory
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot_with(grid: Arc<Grid>, steps: u64) -> Snapshot {
        Snapshot {
            pointer: InstructionPointer::new(),
            stack: OperandStack::new(),
            string_mode: false,
            terminal: MockTerminal::new(),
            grid,
            steps,
            halt: None,
        }
    }

    #[test]
    fn test_terminal_lines() {
        let mut terminal = MockTerminal::new();
        terminal.print("12");
        terminal.print_char('\n');
        terminal.print("ab\n");

        assert_eq!(terminal.as_str(), "12\nab\n");
        assert_eq!(terminal.get_output(), vec!["12".to_string(), "ab".to_string()]);
    }

    #[test]
    fn test_shared_grid_charged_once() {
        let grid = Arc::new(Grid::build("0123456789\n0123456789"));
        let mut manager = SnapshotManager::new(1024 * 1024);

        manager.push(snapshot_with(Arc::clone(&grid), 0)).unwrap();
        let after_first = manager.memory_usage();
        manager.push(snapshot_with(Arc::clone(&grid), 1)).unwrap();
        let second_cost = manager.memory_usage() - after_first;

        assert!(after_first > second_cost);
        assert_eq!(second_cost, snapshot_with(grid, 1).estimated_size());
        assert_eq!(manager.len(), 2);
    }

    #[test]
    fn test_push_past_budget_fails() {
        let grid = Arc::new(Grid::build("@"));
        let mut manager = SnapshotManager::new(1);

        let result = manager.push(snapshot_with(grid, 0));

        assert!(result.is_err());
        assert!(manager.is_empty());
        assert_eq!(manager.memory_usage(), 0);
    }

    #[test]
    fn test_truncate_releases_budget() {
        let grid = Arc::new(Grid::build("0123456789"));
        let mut manager = SnapshotManager::new(1024 * 1024);

        manager.push(snapshot_with(Arc::clone(&grid), 0)).unwrap();
        let after_first = manager.memory_usage();
        manager.push(snapshot_with(Arc::clone(&grid), 1)).unwrap();
        manager
            .push(snapshot_with(Arc::new(Grid::build("9876543210")), 2))
            .unwrap();

        manager.truncate(1);
        assert_eq!(manager.len(), 1);
        assert_eq!(manager.memory_usage(), after_first);

        manager.truncate(5);
        assert_eq!(manager.len(), 1);
    }
}
