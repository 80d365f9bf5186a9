//! Grid pane rendering with instruction highlighting
//!
//! This module renders the playfield, the two-dimensional Befunge program
//! being executed, with a per-cell instruction highlighter.
//!
//! # Features
//!
//! - Colors by instruction class (digits, directions, output, grid access)
//! - Instruction pointer cell shown in reverse video
//! - Cells rewritten at runtime by `p` shown in their own color
//! - Scrolling in both axes that follows the instruction pointer

use super::utils::border_style;
use crate::interpreter::instruction::Instruction;
use crate::interpreter::pointer::InstructionPointer;
use crate::memory::grid::Grid;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Width reserved for the row number gutter
const GUTTER_WIDTH: usize = 5;

fn cell_style(c: char) -> Style {
    match Instruction::decode(c) {
        Instruction::Digit(_) => Style::default().fg(DEFAULT_THEME.number),
        Instruction::Go(_)
        | Instruction::Random
        | Instruction::HorizontalIf
        | Instruction::VerticalIf
        | Instruction::Trampoline => Style::default()
            .fg(DEFAULT_THEME.keyword)
            .add_modifier(Modifier::BOLD),
        Instruction::OutputInt | Instruction::OutputChar => {
            Style::default().fg(DEFAULT_THEME.function)
        }
        Instruction::Put | Instruction::Get => Style::default().fg(DEFAULT_THEME.type_name),
        Instruction::StringMode => Style::default().fg(DEFAULT_THEME.string),
        Instruction::Halt => Style::default()
            .fg(DEFAULT_THEME.error)
            .add_modifier(Modifier::BOLD),
        Instruction::Nop if c != ' ' => Style::default().fg(DEFAULT_THEME.comment),
        _ => Style::default().fg(DEFAULT_THEME.fg),
    }
}

/// Scroll state for the grid pane
#[derive(Debug, Default)]
pub struct GridScrollState {
    pub row_offset: usize,
    pub col_offset: usize,
}

impl GridScrollState {
    /// Shift the viewport just enough to keep `(x, y)` visible
    fn follow(&mut self, x: usize, y: usize, visible_cols: usize, visible_rows: usize) {
        if y < self.row_offset {
            self.row_offset = y;
        } else if y >= self.row_offset + visible_rows {
            self.row_offset = y + 1 - visible_rows;
        }
        if x < self.col_offset {
            self.col_offset = x;
        } else if x >= self.col_offset + visible_cols {
            self.col_offset = x + 1 - visible_cols;
        }
    }
}

/// Data needed to render the grid pane
pub struct GridRenderData<'a> {
    pub grid: &'a Grid,
    pub pointer: InstructionPointer,
    pub string_mode: bool,
    pub is_halted: bool,
}

/// Render the grid pane
pub fn render_grid_pane(
    frame: &mut Frame,
    area: Rect,
    data: GridRenderData,
    is_focused: bool,
    scroll_state: &mut GridScrollState,
) {
    let block = Block::default()
        .title(format!(
            " Grid {}x{} ",
            data.grid.width(),
            data.grid.height()
        ))
        .borders(Borders::ALL)
        .border_style(border_style(is_focused));

    if data.grid.is_empty() {
        let paragraph = Paragraph::new("(empty program)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    // Account for borders (2), min 1
    let visible_rows = area.height.saturating_sub(2).max(1) as usize;
    let visible_cols = (area.width.saturating_sub(2) as usize)
        .saturating_sub(GUTTER_WIDTH)
        .max(1);

    let pointer_x = data.pointer.x as usize;
    let pointer_y = data.pointer.y as usize;
    scroll_state.follow(pointer_x, pointer_y, visible_cols, visible_rows);

    let modified = data.grid.modified_cells();

    let visible_lines: Vec<Line> = data
        .grid
        .rows()
        .iter()
        .enumerate()
        .skip(scroll_state.row_offset)
        .take(visible_rows)
        .map(|(y, row)| {
            let is_current = y == pointer_y;
            let num_style = if is_current {
                Style::default()
                    .fg(DEFAULT_THEME.secondary)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(DEFAULT_THEME.comment)
            };

            let mut spans = vec![Span::styled(format!("{:4} ", y), num_style)];

            for (x, &c) in row
                .iter()
                .enumerate()
                .skip(scroll_state.col_offset)
                .take(visible_cols)
            {
                let mut style = cell_style(c);
                if modified.contains(&(x, y)) {
                    style = style.fg(DEFAULT_THEME.modified).add_modifier(Modifier::UNDERLINED);
                }
                if is_current {
                    style = style.bg(DEFAULT_THEME.current_line_bg);
                }
                if is_current && x == pointer_x {
                    let bg = if data.is_halted {
                        DEFAULT_THEME.error
                    } else if data.string_mode {
                        DEFAULT_THEME.string
                    } else {
                        DEFAULT_THEME.secondary
                    };
                    style = Style::default()
                        .bg(bg)
                        .fg(Color::Black)
                        .add_modifier(Modifier::BOLD);
                }
                let shown = if c.is_control() { '·' } else { c };
                spans.push(Span::styled(shown.to_string(), style));
            }

            Line::from(spans)
        })
        .collect();

    let paragraph = Paragraph::new(visible_lines).block(block);
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_follow_scrolls_down_and_right() {
        let mut state = GridScrollState::default();
        state.follow(12, 7, 10, 5);
        assert_eq!(state.row_offset, 3);
        assert_eq!(state.col_offset, 3);
    }

    #[test]
    fn test_follow_scrolls_back() {
        let mut state = GridScrollState {
            row_offset: 4,
            col_offset: 4,
        };
        state.follow(0, 1, 10, 5);
        assert_eq!(state.row_offset, 1);
        assert_eq!(state.col_offset, 0);
    }

    #[test]
    fn test_follow_keeps_visible_pointer() {
        let mut state = GridScrollState::default();
        state.follow(3, 2, 10, 5);
        assert_eq!(state.row_offset, 0);
        assert_eq!(state.col_offset, 0);
    }

    #[test]
    fn test_cell_style_by_class() {
        assert_eq!(cell_style('7'), Style::default().fg(DEFAULT_THEME.number));
        assert_eq!(cell_style('p'), cell_style('g'));
        assert_eq!(cell_style(' '), Style::default().fg(DEFAULT_THEME.fg));
        assert_eq!(cell_style('x'), Style::default().fg(DEFAULT_THEME.comment));
    }
}
