//! TUI pane rendering modules
//!
//! Each pane is a stateless `render_*` function over borrowed data:
//!
//! - [`controls`]: selected algorithm, array input, speed, and color legend
//! - [`bars`]: the array as a bar chart, colored through [`crate::ui::palette`]
//! - [`recursion`]: recursion tree details for Merge Sort and Quick Sort
//! - [`progress`]: steps applied out of the trace length
//! - [`status`]: status bar with keybindings and playback state

pub mod bars;
pub mod controls;
pub mod progress;
pub mod recursion;
pub mod status;

pub use bars::render_bars_pane;
pub use controls::{render_controls_pane, ControlsRenderData};
pub use progress::render_progress_pane;
pub use recursion::render_recursion_pane;
pub use status::{render_status_bar, StatusRenderData};
