//! Status bar rendering with keybindings and state indicators

use crate::playback::PlaybackState;
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
    pub position: usize,
    pub total_steps: usize,
    pub state: PlaybackState,
    pub is_error: bool,
    pub is_editing: bool,
}

/// Render the status bar at the bottom
pub fn render_status_bar(frame: &mut Frame, area: Rect, data: StatusRenderData) {
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    // Left side: step counter and message
    let step_text = if data.total_steps == 0 {
        " Step -/- ".to_string()
    } else {
        format!(" Step {}/{} ", data.position, data.total_steps)
    };

    let left_spans = vec![
        Span::styled(
            step_text,
            Style::default()
                .bg(if data.is_error {
                    DEFAULT_THEME.error
                } else if data.is_editing {
                    DEFAULT_THEME.secondary
                } else {
                    DEFAULT_THEME.primary
                })
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            " | ",
            Style::default()
                .bg(DEFAULT_THEME.status_bg)
                .fg(DEFAULT_THEME.comment),
        ),
        Span::styled(
            format!(" {} ", data.message),
            Style::default()
                .bg(DEFAULT_THEME.status_bg)
                .fg(if data.is_error {
                    DEFAULT_THEME.error
                } else {
                    DEFAULT_THEME.fg
                }),
        ),
    ];

    let left_paragraph = Paragraph::new(Line::from(left_spans))
        .style(Style::default().bg(DEFAULT_THEME.status_bg))
        .alignment(Alignment::Left);

    frame.render_widget(left_paragraph, layout[0]);

    // Right side: keybinds with visual grouping
    let key_style = Style::default().bg(DEFAULT_THEME.comment).fg(Color::Black);
    let desc_style = Style::default()
        .bg(DEFAULT_THEME.status_bg)
        .fg(DEFAULT_THEME.fg);
    let sep_style = Style::default()
        .bg(DEFAULT_THEME.status_bg)
        .fg(DEFAULT_THEME.comment);

    let bindings: &[(&str, &str)] = if data.is_editing {
        &[(" ↵ ", " set array "), (" esc ", " cancel ")]
    } else {
        &[
            (" ⎵ ", " start/pause "),
            (" r ", " reset "),
            (" a/A ", " algorithm "),
            (" +/- ", " speed "),
            (" e ", " edit "),
            ("q", " quit "),
        ]
    };

    let mut right_spans = Vec::new();
    for (i, (key, desc)) in bindings.iter().enumerate() {
        if i > 0 {
            right_spans.push(Span::styled("│", sep_style));
            right_spans.push(Span::styled(" ", desc_style));
        }
        right_spans.push(Span::styled(*key, key_style));
        right_spans.push(Span::styled(*desc, desc_style));
    }

    let badge = if data.is_editing {
        Some((" ⌨ INPUT ", DEFAULT_THEME.secondary))
    } else {
        match data.state {
            PlaybackState::Running => Some((" ▶ PLAYING ", DEFAULT_THEME.secondary)),
            PlaybackState::Finished => Some((" END ", DEFAULT_THEME.success)),
            PlaybackState::Idle if data.total_steps > 0 => {
                Some((" ⏸ STOPPED ", DEFAULT_THEME.error))
            }
            PlaybackState::Idle => None,
        }
    };

    if let Some((text, color)) = badge {
        right_spans.push(Span::styled("│", sep_style));
        right_spans.push(Span::styled(
            text,
            Style::default()
                .bg(color)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ));
    }

    let right_paragraph = Paragraph::new(Line::from(right_spans))
        .style(Style::default().bg(DEFAULT_THEME.status_bg))
        .alignment(Alignment::Right);

    frame.render_widget(right_paragraph, layout[1]);
}
