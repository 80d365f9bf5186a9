//! Program grid (the Befunge playfield)
//!
//! The grid is a fixed-size rectangle of characters built once from the
//! source text. Its size never changes during a run; only the `p`
//! instruction rewrites cells.
//!
//! # Bounds
//!
//! All access goes through [`Grid::read`] and [`Grid::write`], which treat
//! coordinates outside `[0, width) x [0, height)` as boundary cases:
//! reads yield a space and writes are dropped. Callers never index the
//! buffer directly.

use rustc_hash::FxHashSet;

/// The character every cell starts as
pub const BLANK: char = ' ';

/// Fixed-size, mutable-content character buffer
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Vec<char>>,
    modified: FxHashSet<(usize, usize)>,
}

impl Grid {
    /// Build a grid from source text, one row per line.
    ///
    /// Rows shorter than the longest line are padded with spaces. A final
    /// line break ends the last row rather than starting an empty one.
    pub fn build(source: &str) -> Self {
        let lines: Vec<Vec<char>> = source.lines().map(|line| line.chars().collect()).collect();
        let height = lines.len();
        let width = lines.iter().map(Vec::len).max().unwrap_or(0);

        let mut cells = vec![vec![BLANK; width]; height];
        for (row, line) in cells.iter_mut().zip(&lines) {
            row[..line.len()].copy_from_slice(line);
        }

        Grid {
            width,
            height,
            cells,
            modified: FxHashSet::default(),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// True when the grid has no cells at all (zero width or zero height)
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Check whether a signed coordinate addresses a real cell
    pub fn in_bounds(&self, x: i64, y: i64) -> bool {
        self.index(x, y).is_some()
    }

    fn index(&self, x: i64, y: i64) -> Option<(usize, usize)> {
        let col = usize::try_from(x).ok().filter(|&c| c < self.width)?;
        let row = usize::try_from(y).ok().filter(|&r| r < self.height)?;
        Some((col, row))
    }

    /// Read a cell, yielding a space outside the grid
    pub fn read(&self, x: i64, y: i64) -> char {
        match self.index(x, y) {
            Some((col, row)) => self.cells[row][col],
            None => BLANK,
        }
    }

    /// Overwrite a cell. Out-of-bounds writes are ignored.
    ///
    /// Returns `true` if the write landed.
    pub fn write(&mut self, x: i64, y: i64, value: char) -> bool {
        match self.index(x, y) {
            Some((col, row)) => {
                self.cells[row][col] = value;
                self.modified.insert((col, row));
                true
            }
            None => false,
        }
    }

    /// All rows, top to bottom (for UI display)
    pub fn rows(&self) -> &[Vec<char>] {
        &self.cells
    }

    /// Coordinates `(x, y)` rewritten since the grid was built
    pub fn modified_cells(&self) -> &FxHashSet<(usize, usize)> {
        &self.modified
    }

    /// Approximate heap footprint in bytes
    pub fn estimated_size(&self) -> usize {
        self.width * self.height * std::mem::size_of::<char>()
            + self.modified.len() * std::mem::size_of::<(usize, usize)>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_pads_short_lines() {
        let grid = Grid::build("abc\nd\nef");

        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 3);
        assert_eq!(grid.read(0, 1), 'd');
        assert_eq!(grid.read(1, 1), ' ');
        assert_eq!(grid.read(2, 1), ' ');
        assert_eq!(grid.read(1, 2), 'f');
    }

    #[test]
    fn test_build_empty_source() {
        let grid = Grid::build("");

        assert_eq!(grid.width(), 0);
        assert_eq!(grid.height(), 0);
        assert!(grid.is_empty());
    }

    #[test]
    fn test_build_blank_lines_have_zero_width() {
        let grid = Grid::build("\n\n");

        assert_eq!(grid.height(), 2);
        assert_eq!(grid.width(), 0);
        assert!(grid.is_empty());
    }

    #[test]
    fn test_build_trailing_line_break_ends_last_row() {
        assert_eq!(Grid::build("v\n@\n").height(), 2);
        assert_eq!(Grid::build("v\n@\n\n").height(), 3);
    }

    #[test]
    fn test_build_strips_carriage_returns() {
        let grid = Grid::build("12\r\n3\r\n");

        assert_eq!(grid.height(), 2);
        assert_eq!(grid.width(), 2);
        assert_eq!(grid.read(1, 0), '2');
    }

    #[test]
    fn test_read_out_of_bounds_is_blank() {
        let grid = Grid::build("@");

        assert_eq!(grid.read(-1, 0), BLANK);
        assert_eq!(grid.read(0, -1), BLANK);
        assert_eq!(grid.read(1, 0), BLANK);
        assert_eq!(grid.read(0, 1), BLANK);
        assert_eq!(grid.read(i64::MAX, i64::MIN), BLANK);
    }

    #[test]
    fn test_write_in_bounds() {
        let mut grid = Grid::build("...\n...");

        assert!(grid.write(2, 1, 'X'));
        assert_eq!(grid.read(2, 1), 'X');
        assert!(grid.modified_cells().contains(&(2, 1)));
    }

    #[test]
    fn test_write_out_of_bounds_is_ignored() {
        let mut grid = Grid::build("ab");
        let before = grid.clone();

        assert!(!grid.write(5, 0, 'X'));
        assert!(!grid.write(-1, 0, 'X'));
        assert!(!grid.write(0, 3, 'X'));
        assert_eq!(grid, before);
        assert!(grid.modified_cells().is_empty());
    }

    #[test]
    fn test_wide_characters_count_once() {
        let grid = Grid::build("é@");

        assert_eq!(grid.width(), 2);
        assert_eq!(grid.read(1, 0), '@');
    }
}
