//! Helpers shared by several panes

use crate::ui::theme::DEFAULT_THEME;
use ratatui::style::{Modifier, Style};

/// Border style for a pane, highlighted when focused
pub(crate) fn border_style(is_focused: bool) -> Style {
    if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    }
}

/// Quoted character for a value that is a printable code point
pub(crate) fn char_hint(value: i64) -> Option<String> {
    let c = u32::try_from(value).ok().and_then(char::from_u32)?;
    if c == ' ' || (!c.is_control() && !c.is_whitespace()) {
        Some(format!("'{}'", c))
    } else {
        None
    }
}

/// Replace control characters with their escaped form so raw output cannot
/// drive the host terminal
pub(crate) fn escape_controls(line: &str) -> String {
    line.chars()
        .map(|c| {
            if c.is_control() {
                c.escape_default().to_string()
            } else {
                c.to_string()
            }
        })
        .collect()
}

/// Clamp a scroll offset so the last page stays full
pub(crate) fn clamp_scroll(offset: usize, total: usize, visible: usize) -> usize {
    if total > visible {
        offset.min(total - visible)
    } else {
        0
    }
}
