//! # Introduction
//!
//! fungetty executes Befunge-93 programs, optionally capturing a snapshot of
//! the full interpreter state after each cycle. The snapshot history can then
//! be navigated forward and backward through a terminal UI built with
//! [ratatui](https://docs.rs/ratatui).
//!
//! ## Execution pipeline
//!
//! ```text
//! Source → Grid → Interpreter → Output (+ Snapshots → TUI)
//! ```
//!
//! 1. [`memory`]: the [`memory::grid::Grid`] playfield built from the source
//!    text and the [`memory::stack::OperandStack`].
//! 2. [`interpreter`]: fetches, decodes and executes one cell per cycle,
//!    moving the instruction pointer across the torus.
//! 3. [`snapshot`]: snapshot history with a memory budget and the
//!    [`snapshot::MockTerminal`] that collects `.` and `,` output.
//! 4. [`ui`]: ratatui-based TUI; not part of the stable library API.
//!
//! ## Quick start
//!
//! ```
//! assert_eq!(fungetty::run("\"iH\",,@"), "Hi");
//! ```

pub mod interpreter;
pub mod memory;
pub mod snapshot;
pub mod ui;

use interpreter::config::InterpreterConfig;
use interpreter::engine::Interpreter;

/// Run `source` to completion with the default configuration and return
/// everything it printed
pub fn run(source: &str) -> String {
    run_with_config(source, InterpreterConfig::default())
}

/// Run `source` to completion and return everything it printed
pub fn run_with_config(source: &str, config: InterpreterConfig) -> String {
    Interpreter::new(source, config).run()
}
