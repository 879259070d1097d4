//! Header pane: selected algorithm, array input, speed, and color legend

use crate::algorithms::Algorithm;
use crate::playback::Cadence;
use crate::ui::palette::legend;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Data needed to render the controls pane
pub struct ControlsRenderData<'a> {
    pub selected: Algorithm,
    /// Algorithm of the active trace, if one has been started
    pub running: Option<Algorithm>,
    pub array_text: &'a str,
    pub is_editing: bool,
    pub cadence: Cadence,
    pub is_playing: bool,
}

pub fn render_controls_pane(frame: &mut Frame, area: Rect, data: ControlsRenderData) {
    let border_style = if data.is_editing {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let block = Block::default()
        .title(" Sorting Algorithm Visualizer ")
        .borders(Borders::ALL)
        .border_style(border_style);

    let label = Style::default().fg(DEFAULT_THEME.comment);
    // Controls are locked while playing, like the disabled form fields
    let value = if data.is_playing {
        Style::default().fg(DEFAULT_THEME.comment)
    } else {
        Style::default().fg(DEFAULT_THEME.fg)
    };

    let array_spans = if data.is_editing {
        vec![
            Span::styled("Array Input: ", label),
            Span::styled(
                format!("{}▏", data.array_text),
                Style::default().fg(DEFAULT_THEME.border_focused),
            ),
        ]
    } else {
        vec![
            Span::styled("Array Input: ", label),
            Span::styled(data.array_text.to_string(), value),
        ]
    };

    let mut lines = vec![
        Line::from(vec![
            Span::styled("Algorithm: ", label),
            Span::styled(
                data.selected.display_name(),
                value.add_modifier(Modifier::BOLD),
            ),
            Span::styled("    Speed: ", label),
            Span::styled(format!("{}ms", data.cadence.display_speed()), value),
        ]),
        Line::from(array_spans),
    ];

    if let Some(running) = data.running {
        let mut legend_spans = vec![Span::styled(
            format!("Currently Running: {}  ", running.display_name()),
            Style::default()
                .fg(DEFAULT_THEME.primary)
                .add_modifier(Modifier::BOLD),
        )];
        for role in legend(running) {
            legend_spans.push(Span::styled("  ", Style::default().bg(role.color())));
            legend_spans.push(Span::styled(
                format!(" {}  ", role.label()),
                Style::default().fg(Color::Reset),
            ));
        }
        lines.push(Line::from(legend_spans));
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
