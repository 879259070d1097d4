//! Bar chart of the displayed array

use crate::algorithms::Algorithm;
use crate::playback::DisplayState;
use crate::ui::palette::bar_role;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Bar, BarChart, BarGroup, Block, Borders},
    Frame,
};

const BAR_GAP: u16 = 1;
const MAX_BAR_WIDTH: u16 = 7;

/// Render one bar per element, colored by its role in the current step.
///
/// Negative values draw as empty bars but keep their numeric label.
pub fn render_bars_pane(
    frame: &mut Frame,
    area: Rect,
    display: &DisplayState,
    algorithm: Option<Algorithm>,
) {
    let block = Block::default()
        .title(" Array ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));

    let count = display.array.len().clamp(1, usize::from(u16::MAX)) as u16;
    let inner_width = area.width.saturating_sub(2);
    let gaps = BAR_GAP.saturating_mul(count - 1);
    let bar_width = (inner_width.saturating_sub(gaps) / count).clamp(1, MAX_BAR_WIDTH);

    let bars: Vec<Bar> = display
        .array
        .iter()
        .enumerate()
        .map(|(index, &value)| {
            let color = bar_role(index, display, algorithm).color();
            Bar::default()
                .value(value.max(0) as u64)
                .text_value(value.to_string())
                .label(Line::from(index.to_string()))
                .style(Style::default().fg(color))
                .value_style(Style::default().fg(Color::Black).bg(color))
        })
        .collect();

    let max = display
        .array
        .iter()
        .copied()
        .max()
        .unwrap_or(0)
        .max(1) as u64;

    let chart = BarChart::default()
        .block(block)
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(BAR_GAP)
        .max(max);

    frame.render_widget(chart, area);
}
