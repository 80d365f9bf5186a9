//! Status bar rendering with keybindings and state indicators

use crate::interpreter::engine::Halt;
use crate::interpreter::instruction::Instruction;
use crate::interpreter::pointer::InstructionPointer;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Data needed to render the status bar
pub struct StatusRenderData<'a> {
    pub message: &'a str,
    pub current_step: usize,
    pub total_steps: usize,
    pub pointer: InstructionPointer,
    pub current_char: char,
    pub string_mode: bool,
    pub halt: Option<Halt>,
    pub history_truncated: bool,
    pub is_playing: bool,
}

/// Render the status bar at the bottom.
pub fn render_status_bar(frame: &mut Frame, area: Rect, data: StatusRenderData) {
    // Split status bar into left and right
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    // Left side: step info, pointer, and status
    let step_text = if data.history_truncated {
        format!(" Step {}/{}+ ", data.current_step + 1, data.total_steps)
    } else {
        format!(" Step {}/{} ", data.current_step + 1, data.total_steps)
    };

    let instruction = if data.string_mode && data.current_char != '"' {
        "push char"
    } else {
        Instruction::decode(data.current_char).mnemonic()
    };

    let bar_style = Style::default().bg(DEFAULT_THEME.current_line_bg);

    let left_spans = vec![
        Span::styled(
            step_text,
            Style::default()
                .bg(if data.halt == Some(Halt::StepLimit) {
                    DEFAULT_THEME.error
                } else {
                    DEFAULT_THEME.primary
                })
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(
                " ({},{}) {} {} '{}' {} ",
                data.pointer.x,
                data.pointer.y,
                data.pointer.direction.arrow(),
                data.pointer.direction,
                data.current_char,
                instruction
            ),
            bar_style.fg(DEFAULT_THEME.fg),
        ),
        Span::styled(" | ", bar_style.fg(DEFAULT_THEME.comment)),
        Span::styled(format!(" {} ", data.message), bar_style.fg(DEFAULT_THEME.fg)),
    ];

    let left_paragraph = Paragraph::new(Line::from(left_spans))
        .style(bar_style)
        .alignment(Alignment::Left);

    frame.render_widget(left_paragraph, layout[0]);

    // Right side: Keybinds with visual grouping
    let key_style = Style::default().bg(DEFAULT_THEME.comment).fg(Color::Black);
    let desc_style = bar_style.fg(DEFAULT_THEME.fg);
    let sep_style = bar_style.fg(DEFAULT_THEME.comment);

    let mut right_spans = vec![
        Span::styled(" ←/→ ", key_style),
        Span::styled(" step ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ", desc_style),
        Span::styled(" ⎵ ", key_style),
        Span::styled(" play ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ", desc_style),
        Span::styled(" ↵ / ⌫ ", key_style),
        Span::styled(" end/start ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ", desc_style),
        Span::styled("q", key_style),
        Span::styled(" quit ", desc_style),
    ];

    let badge = |text: String, color: Color| {
        Span::styled(
            text,
            Style::default()
                .bg(color)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        )
    };

    if data.string_mode {
        right_spans.push(Span::styled("│", sep_style));
        right_spans.push(badge(" \" STRING ".to_string(), DEFAULT_THEME.string));
    }

    // Show status indicators based on position and state
    if data.is_playing {
        right_spans.push(Span::styled("│", sep_style));
        right_spans.push(badge(" ▶ PLAYING ".to_string(), DEFAULT_THEME.secondary));
    } else if let Some(halt) = data.halt {
        right_spans.push(Span::styled("│", sep_style));
        right_spans.push(badge(
            format!(" END: {} ", halt),
            if halt == Halt::StepLimit {
                DEFAULT_THEME.error
            } else {
                DEFAULT_THEME.success
            },
        ));
    } else if data.current_step == 0 {
        right_spans.push(Span::styled("│", sep_style));
        right_spans.push(badge(" START ".to_string(), DEFAULT_THEME.success));
    }

    let right_paragraph = Paragraph::new(Line::from(right_spans))
        .style(bar_style)
        .alignment(Alignment::Right);

    frame.render_widget(right_paragraph, layout[1]);
}
