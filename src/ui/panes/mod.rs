//! TUI pane rendering modules
//!
//! This module provides the rendering logic for all visual panes in the TUI,
//! organized by responsibility for maintainability.
//!
//! # Pane Modules
//!
//! - [`grid`]: The playfield with instruction highlighting and pointer indicator
//! - [`stack`]: Operand stack, top first, with character hints
//! - [`terminal`]: Output from `.` and `,`
//! - [`status`]: Status bar with keybindings and execution state
//! - `utils`: Shared helpers for borders, scrolling, and value formatting
//!
//! # Architecture
//!
//! Each pane module exports:
//! - A primary `render_*_pane()` function
//! - Associated state types (e.g., `GridScrollState`, `StatusRenderData`)

mod utils;

pub mod grid;
pub mod stack;
pub mod status;
pub mod terminal;

// Re-export render functions for convenience
pub use grid::{render_grid_pane, GridRenderData, GridScrollState};
pub use stack::{render_stack_pane, StackScrollState};
pub use status::{render_status_bar, StatusRenderData};
pub use terminal::render_terminal_pane;
