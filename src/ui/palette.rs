//! Maps the controller's display state to per-bar roles
//!
//! This is the only place that interprets highlight sets and recursion ranges
//! for drawing. It reads the [`DisplayState`] and never modifies it.
//!
//! Precedence, highest first:
//!
//! 1. sorted, swapping, comparing
//! 2. Merge Sort: left half, right half (from the current step's ranges)
//! 3. Quick Sort: pivot, then the active range
//! 4. unsorted

use crate::algorithms::Algorithm;
use crate::playback::DisplayState;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::style::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarRole {
    Unsorted,
    Comparing,
    Swapping,
    Sorted,
    LeftHalf,
    RightHalf,
    Pivot,
    Range,
}

impl BarRole {
    pub fn label(self) -> &'static str {
        match self {
            BarRole::Unsorted => "Unsorted",
            BarRole::Comparing => "Comparing",
            BarRole::Swapping => "Swapping",
            BarRole::Sorted => "Sorted",
            BarRole::LeftHalf => "Left Half",
            BarRole::RightHalf => "Right Half",
            BarRole::Pivot => "Pivot",
            BarRole::Range => "Current Range",
        }
    }

    pub fn color(self) -> Color {
        match self {
            BarRole::Unsorted => DEFAULT_THEME.bar_unsorted,
            BarRole::Comparing => DEFAULT_THEME.bar_comparing,
            BarRole::Swapping => DEFAULT_THEME.bar_swapping,
            BarRole::Sorted => DEFAULT_THEME.bar_sorted,
            BarRole::LeftHalf => DEFAULT_THEME.bar_left_half,
            BarRole::RightHalf => DEFAULT_THEME.bar_right_half,
            BarRole::Pivot => DEFAULT_THEME.bar_pivot,
            BarRole::Range => DEFAULT_THEME.bar_range,
        }
    }
}

/// Role of the bar at `index` for the given display and running algorithm
pub fn bar_role(index: usize, display: &DisplayState, algorithm: Option<Algorithm>) -> BarRole {
    if display.sorted.contains(index) {
        return BarRole::Sorted;
    }
    if display.swapping.contains(index) {
        return BarRole::Swapping;
    }
    if display.comparing.contains(index) {
        return BarRole::Comparing;
    }

    let Some(info) = display.recursion.as_ref() else {
        return BarRole::Unsorted;
    };

    match algorithm {
        Some(Algorithm::Merge) => {
            if info.left_range().is_some_and(|r| r.contains(index)) {
                return BarRole::LeftHalf;
            }
            if info.right_range().is_some_and(|r| r.contains(index)) {
                return BarRole::RightHalf;
            }
        }
        Some(Algorithm::Quick) => {
            if info.pivot() == Some(index) {
                return BarRole::Pivot;
            }
            if info.range().is_some_and(|r| r.contains(index)) {
                return BarRole::Range;
            }
        }
        _ => {}
    }

    BarRole::Unsorted
}

/// Legend entries shown for an algorithm
pub fn legend(algorithm: Algorithm) -> Vec<BarRole> {
    let mut roles = vec![
        BarRole::Unsorted,
        BarRole::Comparing,
        BarRole::Swapping,
        BarRole::Sorted,
    ];
    match algorithm {
        Algorithm::Merge => roles.extend([BarRole::LeftHalf, BarRole::RightHalf]),
        Algorithm::Quick => roles.extend([BarRole::Pivot, BarRole::Range]),
        _ => {}
    }
    roles
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::step::{IndexRange, IndexSet, RecursionInfo, RecursionKind};

    fn display_with(kind: RecursionKind) -> DisplayState {
        DisplayState {
            recursion: Some(RecursionInfo::new(kind, 0, String::new())),
            ..DisplayState::idle(vec![5, 4, 3, 2, 1])
        }
    }

    #[test]
    fn sorted_wins_over_everything() {
        let mut display = DisplayState::idle(vec![1, 2]);
        display.sorted = IndexSet::single(0);
        display.swapping = IndexSet::single(0);
        display.comparing = IndexSet::pair(0, 1);
        assert_eq!(bar_role(0, &display, None), BarRole::Sorted);
        assert_eq!(bar_role(1, &display, None), BarRole::Comparing);
    }

    #[test]
    fn merge_halves_follow_ranges() {
        let display = display_with(RecursionKind::MergeStart {
            left_range: IndexRange(0, 1),
            right_range: IndexRange(2, 3),
        });
        let merge = Some(Algorithm::Merge);
        assert_eq!(bar_role(1, &display, merge), BarRole::LeftHalf);
        assert_eq!(bar_role(3, &display, merge), BarRole::RightHalf);
        assert_eq!(bar_role(4, &display, merge), BarRole::Unsorted);
    }

    #[test]
    fn quick_pivot_precedes_range() {
        let display = display_with(RecursionKind::PartitionStart {
            range: IndexRange(1, 4),
            pivot: 4,
        });
        let quick = Some(Algorithm::Quick);
        assert_eq!(bar_role(4, &display, quick), BarRole::Pivot);
        assert_eq!(bar_role(2, &display, quick), BarRole::Range);
        assert_eq!(bar_role(0, &display, quick), BarRole::Unsorted);
    }

    #[test]
    fn recursion_ranges_ignored_for_other_algorithms() {
        let display = display_with(RecursionKind::PartitionStart {
            range: IndexRange(0, 4),
            pivot: 4,
        });
        assert_eq!(
            bar_role(4, &display, Some(Algorithm::Bubble)),
            BarRole::Unsorted
        );
    }

    #[test]
    fn legend_extends_for_recursive_algorithms() {
        assert_eq!(legend(Algorithm::Bubble).len(), 4);
        assert!(legend(Algorithm::Merge).contains(&BarRole::LeftHalf));
        assert!(legend(Algorithm::Quick).contains(&BarRole::Pivot));
    }
}
