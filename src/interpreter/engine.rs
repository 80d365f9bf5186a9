// Execution engine for the Befunge-93 interpreter

use crate::interpreter::config::InterpreterConfig;
use crate::interpreter::constants::TERMINATOR;
use crate::interpreter::errors::HistoryError;
use crate::interpreter::instruction::Instruction;
use crate::interpreter::pointer::{Direction, InstructionPointer};
use crate::interpreter::random::{DirectionSource, RngDirections};
use crate::memory::{grid::Grid, stack::OperandStack, stack::Value};
use crate::snapshot::{MockTerminal, Snapshot, SnapshotManager};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, trace, warn};

/// Why a run stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Halt {
    /// Reached `@` outside string mode
    Terminated,
    /// Ran the configured number of cycles without terminating
    StepLimit,
    /// The grid has no cells
    EmptyProgram,
}

impl fmt::Display for Halt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Halt::Terminated => write!(f, "terminated"),
            Halt::StepLimit => write!(f, "step limit reached"),
            Halt::EmptyProgram => write!(f, "empty program"),
        }
    }
}

/// The main interpreter that executes a Befunge-93 program
pub struct Interpreter {
    /// Playfield, rewritten in place by `p`
    grid: Grid,

    /// Current cell and heading
    pointer: InstructionPointer,

    /// Operand stack
    stack: OperandStack,

    /// Whether `"` has opened string-collection mode
    string_mode: bool,

    /// Mock terminal for `.` and `,` output
    terminal: MockTerminal,

    /// Completed fetch-dispatch-advance cycles
    steps: u64,

    /// Set once execution has stopped
    halt: Option<Halt>,

    config: InterpreterConfig,

    /// Heading provider for `?`
    directions: Box<dyn DirectionSource + Send>,

    /// Snapshot manager for reverse execution
    snapshot_manager: SnapshotManager,

    /// Index of the snapshot the current state was taken from / restored to
    history_position: usize,

    /// Set when the snapshot budget ran out and recording stopped
    history_truncated: bool,

    /// Whether the live state is the snapshot at `history_position`; false
    /// once cycles run past the last snapshot the budget allowed
    at_snapshot: bool,

    /// Grid as captured by the latest snapshot; cleared when `p` lands so the
    /// next snapshot captures a fresh copy
    shared_grid: Option<Arc<Grid>>,
}

impl Interpreter {
    /// Create an interpreter whose `?` draws from an entropy-seeded RNG
    pub fn new(source: &str, config: InterpreterConfig) -> Self {
        Self::with_direction_source(source, config, RngDirections::from_entropy())
    }

    /// Create an interpreter with an explicit heading provider for `?`
    pub fn with_direction_source<D>(source: &str, config: InterpreterConfig, directions: D) -> Self
    where
        D: DirectionSource + Send + 'static,
    {
        let mut interpreter = Interpreter {
            grid: Grid::build(source),
            pointer: InstructionPointer::new(),
            stack: OperandStack::new(),
            string_mode: false,
            terminal: MockTerminal::new(),
            steps: 0,
            halt: None,
            config,
            directions: Box::new(directions),
            snapshot_manager: SnapshotManager::new(config.snapshot_memory_limit),
            history_position: 0,
            history_truncated: false,
            at_snapshot: false,
            shared_grid: None,
        };

        // Initial state, before any cycle
        interpreter.take_snapshot();
        interpreter
    }

    /// Run the program until it halts and return its output
    pub fn run(&mut self) -> String {
        while self.step().is_none() {}
        self.terminal.as_str().to_string()
    }

    /// Execute one fetch-dispatch-advance cycle.
    ///
    /// Returns the halt reason once execution has stopped; further calls are
    /// no-ops that return the same reason. Stepping from a restored snapshot
    /// that is not the last one discards the later history and records the
    /// new timeline from there.
    pub fn step(&mut self) -> Option<Halt> {
        if self.halt.is_some() {
            return self.halt;
        }

        if self.at_snapshot && self.history_position + 1 < self.snapshot_manager.len() {
            let discarded = self.snapshot_manager.len() - self.history_position - 1;
            self.snapshot_manager.truncate(self.history_position + 1);
            self.history_truncated = false;
            debug!(
                position = self.history_position,
                discarded, "resuming execution from restored snapshot"
            );
        }

        self.halt = self.cycle();

        if let Some(halt) = self.halt {
            match halt {
                Halt::StepLimit => warn!(
                    steps = self.steps,
                    "step limit reached before the program terminated"
                ),
                _ => debug!(reason = %halt, steps = self.steps, "program halted"),
            }
        }

        self.take_snapshot();
        self.halt
    }

    fn cycle(&mut self) -> Option<Halt> {
        if self.grid.is_empty() {
            return Some(Halt::EmptyProgram);
        }

        let c = self.current_char();
        if !self.string_mode && c == TERMINATOR {
            return Some(Halt::Terminated);
        }
        if self.steps >= self.config.step_limit {
            return Some(Halt::StepLimit);
        }

        self.dispatch(c);
        self.pointer.advance(self.grid.width(), self.grid.height());
        self.steps += 1;
        None
    }

    /// Execute the instruction in cell `c`
    fn dispatch(&mut self, c: char) {
        if self.string_mode && c != '"' {
            self.stack.push(Value::from(u32::from(c)));
            return;
        }

        match Instruction::decode(c) {
            Instruction::Digit(d) => self.stack.push(Value::from(d)),

            Instruction::Arith(op) => {
                let (b, a) = self.stack.pop_pair();
                self.stack.push(op.apply(b, a));
            }

            Instruction::Not => {
                let value = self.stack.pop();
                self.stack.push(Value::from(value == 0));
            }

            Instruction::Greater => {
                let (b, a) = self.stack.pop_pair();
                self.stack.push(Value::from(b > a));
            }

            Instruction::Go(direction) => self.pointer.direction = direction,

            Instruction::Random => self.pointer.direction = self.directions.next_direction(),

            Instruction::HorizontalIf => {
                self.pointer.direction = if self.stack.pop() == 0 {
                    Direction::Right
                } else {
                    Direction::Left
                };
            }

            Instruction::VerticalIf => {
                self.pointer.direction = if self.stack.pop() == 0 {
                    Direction::Down
                } else {
                    Direction::Up
                };
            }

            Instruction::StringMode => self.string_mode = !self.string_mode,

            Instruction::Duplicate => self.stack.duplicate(),

            Instruction::Swap => self.stack.swap(),

            Instruction::Discard => {
                self.stack.pop();
            }

            Instruction::OutputInt => {
                let value = self.stack.pop();
                self.terminal.print(&value.to_string());
            }

            Instruction::OutputChar => {
                let value = self.stack.pop();
                self.terminal
                    .print_char(code_to_char(value).unwrap_or(char::REPLACEMENT_CHARACTER));
            }

            Instruction::Trampoline => {
                self.pointer.advance(self.grid.width(), self.grid.height());
            }

            Instruction::Put => {
                let y = self.stack.pop();
                let x = self.stack.pop();
                let value = self.stack.pop();
                if let Some(c) = code_to_char(value) {
                    if self.grid.write(x, y, c) {
                        self.shared_grid = None;
                    }
                }
            }

            Instruction::Get => {
                let y = self.stack.pop();
                let x = self.stack.pop();
                let value = if self.grid.in_bounds(x, y) {
                    Value::from(u32::from(self.grid.read(x, y)))
                } else {
                    0
                };
                self.stack.push(value);
            }

            // `@` only reaches dispatch through string mode, which is handled above
            Instruction::Halt | Instruction::Nop => {}
        }
    }

    /// Take a snapshot of the current execution state.
    ///
    /// Only records when history is enabled and the budget still has room.
    fn take_snapshot(&mut self) {
        if !self.config.record_history || self.history_truncated {
            self.at_snapshot = false;
            return;
        }

        let grid = match &self.shared_grid {
            Some(grid) => Arc::clone(grid),
            None => {
                let grid = Arc::new(self.grid.clone());
                self.shared_grid = Some(Arc::clone(&grid));
                grid
            }
        };

        let snapshot = Snapshot {
            pointer: self.pointer,
            stack: self.stack.clone(),
            string_mode: self.string_mode,
            terminal: self.terminal.clone(),
            grid,
            steps: self.steps,
            halt: self.halt,
        };

        match self.snapshot_manager.push(snapshot) {
            Ok(()) => {
                self.history_position = self.snapshot_manager.len() - 1;
                self.at_snapshot = true;
            }
            Err(e) => {
                warn!(error = %e, steps = self.steps, "history recording stopped");
                self.history_truncated = true;
                self.at_snapshot = false;
            }
        }
    }

    /// Restore execution state from a snapshot
    fn restore_snapshot(&mut self, snapshot: &Snapshot) {
        self.pointer = snapshot.pointer;
        self.stack = snapshot.stack.clone();
        self.string_mode = snapshot.string_mode;
        self.terminal = snapshot.terminal.clone();
        self.steps = snapshot.steps;
        self.halt = snapshot.halt;
        if !self
            .shared_grid
            .as_ref()
            .is_some_and(|grid| Arc::ptr_eq(grid, &snapshot.grid))
        {
            self.grid = Grid::clone(&snapshot.grid);
            self.shared_grid = Some(Arc::clone(&snapshot.grid));
        }
    }

    fn restore_index(&mut self, index: usize) -> Result<(), HistoryError> {
        let snapshot = self
            .snapshot_manager
            .get(index)
            .cloned()
            .ok_or(HistoryError::SnapshotMissing { index })?;

        self.restore_snapshot(&snapshot);
        self.history_position = index;
        self.at_snapshot = true;
        trace!(index, steps = self.steps, "restored snapshot");
        Ok(())
    }

    /// Step backward in execution (restore previous snapshot)
    pub fn step_backward(&mut self) -> Result<(), HistoryError> {
        if self.snapshot_manager.is_empty() {
            return Err(HistoryError::NoSnapshots);
        }
        // Live state ran past the last recorded snapshot; go back to it
        if !self.at_snapshot {
            return self.restore_index(self.history_position);
        }
        if self.history_position == 0 {
            return Err(HistoryError::AtStart);
        }

        self.restore_index(self.history_position - 1)
    }

    /// Step forward in execution (restore next snapshot)
    pub fn step_forward(&mut self) -> Result<(), HistoryError> {
        if self.snapshot_manager.is_empty() {
            return Err(HistoryError::NoSnapshots);
        }
        if !self.at_snapshot || self.history_position + 1 >= self.snapshot_manager.len() {
            return Err(HistoryError::AtEnd {
                position: self.history_position,
            });
        }

        self.restore_index(self.history_position + 1)
    }

    /// Rewind to the beginning of execution history
    pub fn rewind_to_start(&mut self) -> Result<(), HistoryError> {
        if self.snapshot_manager.is_empty() {
            return Err(HistoryError::NoSnapshots);
        }

        self.restore_index(0)
    }

    /// Jump to the last recorded snapshot
    pub fn jump_to_end(&mut self) -> Result<(), HistoryError> {
        if self.snapshot_manager.is_empty() {
            return Err(HistoryError::NoSnapshots);
        }

        self.restore_index(self.snapshot_manager.len() - 1)
    }

    // ========== Getter methods for UI ==========

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn stack(&self) -> &OperandStack {
        &self.stack
    }

    pub fn pointer(&self) -> InstructionPointer {
        self.pointer
    }

    /// Override the heading before the next cycle
    pub fn set_direction(&mut self, direction: Direction) {
        self.pointer.direction = direction;
    }

    pub fn string_mode(&self) -> bool {
        self.string_mode
    }

    /// Output produced so far
    pub fn output(&self) -> &str {
        self.terminal.as_str()
    }

    pub fn terminal(&self) -> &MockTerminal {
        &self.terminal
    }

    /// Completed cycles
    pub fn steps(&self) -> u64 {
        self.steps
    }

    pub fn halt(&self) -> Option<Halt> {
        self.halt
    }

    /// Character under the instruction pointer
    pub fn current_char(&self) -> char {
        self.grid.read(self.pointer.x, self.pointer.y)
    }

    /// Get the current history position
    pub fn history_position(&self) -> usize {
        self.history_position
    }

    /// Get the total number of snapshots
    pub fn total_snapshots(&self) -> usize {
        self.snapshot_manager.len()
    }

    /// True when recording stopped early because the budget ran out
    pub fn history_truncated(&self) -> bool {
        self.history_truncated
    }

    pub fn snapshot_memory_usage(&self) -> usize {
        self.snapshot_manager.memory_usage()
    }
}

/// Character with code point `value`, if there is one
fn code_to_char(value: Value) -> Option<char> {
    u32::try_from(value).ok().and_then(char::from_u32)
}
