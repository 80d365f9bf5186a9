//! Memory model for the Befunge-93 interpreter
//!
//! This module provides the two stores a program can touch:
//! - [`grid`]: the playfield, a fixed-size character buffer that doubles as
//!   program text and as the only addressable memory (`p` / `g`)
//! - [`stack`]: the operand stack of signed integers
//!
//! # Defaulting Accessors
//!
//! Neither store ever fails. Popping an empty stack yields `0`, reading
//! outside the grid yields a space, and writing outside the grid is a no-op.
//! These rules live on the accessors themselves so every instruction gets
//! them uniformly.

pub mod grid;
pub mod stack;

pub use grid::Grid;
pub use stack::{OperandStack, Value};
