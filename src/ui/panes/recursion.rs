//! Recursion tree pane for Merge Sort and Quick Sort
//!
//! Shows the recursion level, the current operation message, a one-line tree
//! node indented by level, the divide/conquer phase, and algorithm-specific
//! details (subarray ranges for Merge Sort, range and pivot for Quick Sort).

use crate::algorithms::Algorithm;
use crate::step::{IndexRange, RecursionInfo, RecursionKind};
use crate::ui::palette::BarRole;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Render the recursion pane for `info` taken from the current step
pub fn render_recursion_pane(
    frame: &mut Frame,
    area: Rect,
    info: &RecursionInfo,
    algorithm: Algorithm,
    array: &[i64],
) {
    let block = Block::default()
        .title(format!(" {} - Recursion Tree ", algorithm.display_name()))
        .title_bottom(Line::from(format!(" Recursion Level: {} ", info.level)).right_aligned())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));

    let label = Style::default().fg(DEFAULT_THEME.comment);
    let mut lines = vec![
        Line::from(vec![
            Span::styled("Current Operation: ", label),
            Span::styled(
                info.message.clone(),
                Style::default()
                    .fg(DEFAULT_THEME.fg)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        tree_line(info),
        Line::from(vec![
            Span::styled("Phase: ", label),
            Span::styled(info.phase().to_string(), Style::default().fg(DEFAULT_THEME.fg)),
        ]),
    ];

    match algorithm {
        Algorithm::Merge => lines.push(Line::from(vec![
            Span::styled("Left Subarray: ", Style::default().fg(BarRole::LeftHalf.color())),
            Span::raw(range_or_na(info.left_range())),
            Span::styled("   Right Subarray: ", Style::default().fg(BarRole::RightHalf.color())),
            Span::raw(range_or_na(info.right_range())),
        ])),
        Algorithm::Quick => {
            let pivot_value = info
                .pivot()
                .and_then(|p| array.get(p))
                .map_or_else(|| "N/A".to_string(), |v| v.to_string());
            lines.push(Line::from(vec![
                Span::styled("Current Range: ", Style::default().fg(BarRole::Range.color())),
                Span::raw(range_or_na(info.range())),
                Span::styled("   Pivot Index: ", Style::default().fg(BarRole::Pivot.color())),
                Span::raw(
                    info.pivot()
                        .map_or_else(|| "N/A".to_string(), |p| p.to_string()),
                ),
                Span::styled("   Pivot Value: ", Style::default().fg(BarRole::Comparing.color())),
                Span::raw(pivot_value),
            ]));
        }
        _ => {}
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

/// One tree node, indented two columns per level
fn tree_line(info: &RecursionInfo) -> Line<'static> {
    let mut spans = vec![
        Span::raw("  ".repeat(info.level)),
        Span::styled(
            format!("Level {}: ", info.level),
            Style::default().fg(DEFAULT_THEME.comment),
        ),
    ];
    let arrow = |text: &str| Span::styled(text.to_string(), Style::default().fg(DEFAULT_THEME.fg));

    match &info.kind {
        RecursionKind::Divide { range, .. } => {
            spans.push(badge(range.to_string(), DEFAULT_THEME.primary));
            spans.push(arrow(" → "));
            if let Some(left) = info.left_range() {
                spans.push(badge(left.to_string(), BarRole::LeftHalf.color()));
            }
            if let Some(right) = info.right_range() {
                spans.push(arrow(" + "));
                spans.push(badge(right.to_string(), BarRole::RightHalf.color()));
            }
        }
        RecursionKind::MergeStart {
            left_range,
            right_range,
        } => {
            spans.push(badge(left_range.to_string(), BarRole::LeftHalf.color()));
            spans.push(arrow(" + "));
            spans.push(badge(right_range.to_string(), BarRole::RightHalf.color()));
            spans.push(arrow(" → MERGE"));
        }
        RecursionKind::PartitionStart { range, pivot } => {
            spans.push(badge(range.to_string(), BarRole::Range.color()));
            spans.push(arrow(" → PARTITION "));
            spans.push(badge(format!("Pivot: {}", pivot), BarRole::Pivot.color()));
        }
        RecursionKind::BaseCase { .. } => {
            spans.push(badge("BASE CASE".to_string(), DEFAULT_THEME.success));
        }
        RecursionKind::Complete => {
            spans.push(badge("COMPLETE".to_string(), DEFAULT_THEME.success));
        }
        _ => {}
    }

    Line::from(spans)
}

fn badge(text: String, bg: Color) -> Span<'static> {
    Span::styled(format!(" {} ", text), Style::default().bg(bg).fg(Color::Black))
}

fn range_or_na(range: Option<IndexRange>) -> String {
    range.map_or_else(|| "N/A".to_string(), |r| r.to_string())
}
