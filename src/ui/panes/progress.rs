//! Progress gauge

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Gauge},
    Frame,
};

/// Render `position / total` steps
pub fn render_progress_pane(frame: &mut Frame, area: Rect, position: usize, total: usize) {
    let ratio = if total == 0 {
        0.0
    } else {
        (position as f64 / total as f64).clamp(0.0, 1.0)
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Progress ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(DEFAULT_THEME.border_normal)),
        )
        .gauge_style(
            Style::default()
                .fg(DEFAULT_THEME.primary)
                .bg(DEFAULT_THEME.status_bg),
        )
        .ratio(ratio)
        .label(format!("{} / {} steps", position, total));

    frame.render_widget(gauge, area);
}
