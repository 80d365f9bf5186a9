//! Direction sources for the `?` instruction
//!
//! The engine asks a [`DirectionSource`] for a heading every time `?`
//! executes. Production runs draw from a seeded-from-entropy RNG; tests
//! swap in a [`ScriptedDirections`] to make runs reproducible.

use super::pointer::Direction;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Provider of headings for `?`
pub trait DirectionSource {
    fn next_direction(&mut self) -> Direction;
}

/// Uniform choice among the four cardinal directions, one independent draw
/// per call
#[derive(Debug, Clone)]
pub struct RngDirections<R: Rng = StdRng> {
    rng: R,
}

impl RngDirections<StdRng> {
    pub fn from_entropy() -> Self {
        RngDirections {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        RngDirections {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> RngDirections<R> {
    pub fn new(rng: R) -> Self {
        RngDirections { rng }
    }
}

impl<R: Rng> DirectionSource for RngDirections<R> {
    fn next_direction(&mut self) -> Direction {
        Direction::ALL[self.rng.gen_range(0..Direction::ALL.len())]
    }
}

/// Replays a fixed sequence of directions, cycling when exhausted
#[derive(Debug, Clone)]
pub struct ScriptedDirections {
    script: Vec<Direction>,
    next: usize,
}

impl ScriptedDirections {
    /// An empty script always answers [`Direction::Right`]
    pub fn new(script: Vec<Direction>) -> Self {
        ScriptedDirections { script, next: 0 }
    }
}

impl DirectionSource for ScriptedDirections {
    fn next_direction(&mut self) -> Direction {
        if self.script.is_empty() {
            return Direction::Right;
        }
        let direction = self.script[self.next % self.script.len()];
        self.next += 1;
        direction
    }
}
