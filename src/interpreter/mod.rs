//! Befunge-93 execution engine
//!
//! This module provides the core execution logic:
//! - [`engine`]: the [`Interpreter`](engine::Interpreter) and its
//!   fetch-dispatch-advance loop
//! - [`instruction`]: decoding grid characters into instructions
//! - [`pointer`]: the instruction pointer and toroidal wrap-around
//! - [`random`]: injectable heading providers for `?`
//! - [`config`]: step ceiling and history settings
//! - [`errors`]: history navigation errors
//!
//! # Execution Model
//!
//! Each cycle reads the cell under the pointer, stops on `@` (outside
//! string mode) or when the step ceiling is reached, dispatches the
//! instruction, then advances the pointer with wrap-around. When history
//! recording is enabled a snapshot is taken after every cycle to support
//! time-travel debugging.

pub mod config;
pub mod constants;
pub mod engine;
pub mod errors;
pub mod instruction;
pub mod pointer;
pub mod random;
