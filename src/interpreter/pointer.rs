//! Instruction pointer: position, direction, and toroidal movement

use std::fmt;

/// One of the four cardinal directions the pointer can travel in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Right,
    Left,
    Up,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Right,
        Direction::Left,
        Direction::Up,
        Direction::Down,
    ];

    /// Movement vector `(dx, dy)`; `y` grows downward
    pub fn delta(self) -> (i64, i64) {
        match self {
            Direction::Right => (1, 0),
            Direction::Left => (-1, 0),
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
        }
    }

    /// Arrow glyph for display
    pub fn arrow(self) -> char {
        match self {
            Direction::Right => '→',
            Direction::Left => '←',
            Direction::Up => '↑',
            Direction::Down => '↓',
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Right => "right",
            Direction::Left => "left",
            Direction::Up => "up",
            Direction::Down => "down",
        };
        f.write_str(name)
    }
}

/// Current cell and heading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InstructionPointer {
    pub x: i64,
    pub y: i64,
    pub direction: Direction,
}

impl InstructionPointer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move one cell along the current direction, wrapping at the edges of
    /// a `width` x `height` grid.
    ///
    /// Each axis is corrected on both sides explicitly instead of using `%`,
    /// so the result never depends on the sign of a remainder.
    pub fn advance(&mut self, width: usize, height: usize) {
        let (dx, dy) = self.direction.delta();
        self.x = wrap(self.x + dx, width);
        self.y = wrap(self.y + dy, height);
    }
}

fn wrap(coord: i64, dimension: usize) -> i64 {
    let dimension = dimension as i64;
    if dimension == 0 {
        return 0;
    }
    if coord < 0 {
        dimension - 1
    } else if coord >= dimension {
        0
    } else {
        coord
    }
}
