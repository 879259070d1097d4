use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub border_focused: Color,
    pub border_normal: Color,
    pub status_bg: Color,
    pub bar_unsorted: Color,
    pub bar_comparing: Color,
    pub bar_swapping: Color,
    pub bar_sorted: Color,
    pub bar_left_half: Color,  // Merge Sort left subarray
    pub bar_right_half: Color, // Merge Sort right subarray
    pub bar_pivot: Color,      // Quick Sort pivot
    pub bar_range: Color,      // Quick Sort active range
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),
    secondary: Color::Rgb(250, 179, 135),
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    border_focused: Color::Rgb(249, 226, 175), // Yellow border for the edited field
    border_normal: Color::Rgb(108, 112, 134),
    status_bg: Color::Rgb(50, 50, 70),
    bar_unsorted: Color::Rgb(137, 180, 250),
    bar_comparing: Color::Rgb(249, 226, 175),
    bar_swapping: Color::Rgb(243, 139, 168),
    bar_sorted: Color::Rgb(166, 227, 161),
    bar_left_half: Color::Rgb(203, 166, 247),
    bar_right_half: Color::Rgb(250, 179, 135),
    bar_pivot: Color::Rgb(245, 194, 231),
    bar_range: Color::Rgb(148, 226, 213),
};
