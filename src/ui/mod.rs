//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into four layers:
//!
//! - **[`app`]**: application state, keyboard event loop, array input mode
//! - **[`panes`]**: stateless render functions for each visible pane (controls,
//!   bars, recursion tree, progress, status bar)
//! - **[`palette`]**: maps a display state to bar roles and legend entries
//! - **[`theme`]**: centralized color palette used by all panes
//!
//! The entry point for consumers is [`App`]: construct it with a
//! [`PlaybackController`] and call [`App::run`] to start the event loop.
//!
//! [`PlaybackController`]: crate::playback::PlaybackController
//! [`App::run`]: app::App::run

pub mod app;
pub mod palette;
pub mod panes;
pub mod theme;

pub use app::App;
