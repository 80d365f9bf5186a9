//! Stack pane rendering
//!
//! Shows the operand stack top-first. Each entry carries its depth index and,
//! when the value is a printable code point, the character it encodes, which
//! makes strings pushed in string mode readable.

use super::utils::{border_style, char_hint, clamp_scroll};
use crate::memory::stack::OperandStack;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// Scroll state for the stack pane
#[derive(Debug, Default)]
pub struct StackScrollState {
    pub offset: usize,
    pub prev_item_count: usize,
}

/// Render the stack pane
pub fn render_stack_pane(
    frame: &mut Frame,
    area: Rect,
    stack: &OperandStack,
    is_focused: bool,
    scroll_state: &mut StackScrollState,
) {
    let block = Block::default()
        .title(format!(" Stack ({}) ", stack.depth()))
        .borders(Borders::ALL)
        .border_style(border_style(is_focused));

    let values = stack.values();
    let mut all_items = Vec::new();

    if values.is_empty() {
        all_items.push(ListItem::new("(empty)").style(Style::default().fg(DEFAULT_THEME.comment)));
    } else {
        let index_width = values.len().to_string().len();
        for (index, &value) in values.iter().enumerate().rev() {
            let is_top = index + 1 == values.len();
            let marker = if is_top { "▸ " } else { "  " };

            let mut spans = vec![
                Span::styled(marker, Style::default().fg(DEFAULT_THEME.secondary)),
                Span::styled(
                    format!("[{:>width$}] ", index, width = index_width),
                    Style::default().fg(DEFAULT_THEME.comment),
                ),
                Span::styled(
                    value.to_string(),
                    if is_top {
                        Style::default()
                            .fg(DEFAULT_THEME.number)
                            .add_modifier(Modifier::BOLD)
                    } else {
                        Style::default().fg(DEFAULT_THEME.number)
                    },
                ),
            ];
            if let Some(hint) = char_hint(value) {
                spans.push(Span::raw(" "));
                spans.push(Span::styled(hint, Style::default().fg(DEFAULT_THEME.string)));
            }

            all_items.push(ListItem::new(Line::from(spans)));
        }
    }

    let total_items = all_items.len();
    let visible_height = area.height.saturating_sub(2).max(1) as usize;

    // New pushes land at the top; snap back so they stay in view
    if total_items > scroll_state.prev_item_count {
        scroll_state.offset = 0;
    }
    scroll_state.prev_item_count = total_items;
    scroll_state.offset = clamp_scroll(scroll_state.offset, total_items, visible_height);

    let visible_items: Vec<ListItem> = all_items
        .into_iter()
        .skip(scroll_state.offset)
        .take(visible_height)
        .collect();

    let list = List::new(visible_items).block(block);
    frame.render_widget(list, area);
}
