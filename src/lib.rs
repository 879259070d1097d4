//! # Introduction
//!
//! sortty precomputes the full execution trace of a sorting algorithm as a
//! sequence of immutable steps (comparisons, swaps, settled regions, and the
//! divide/conquer structure of recursive sorts), then replays that trace on a
//! fixed cadence in a terminal UI built with [ratatui](https://docs.rs/ratatui).
//!
//! ## Pipeline
//!
//! ```text
//! Array → Algorithm → StepSequence → PlaybackController → DisplayState → TUI
//! ```
//!
//! 1. [`input`]: parses comma-separated integers into an array.
//! 2. [`algorithms`]: six instrumented generators (Bubble, Selection,
//!    Insertion, Merge, Quick, Counting) that return a [`step::StepSequence`].
//! 3. [`step`]: the [`step::Step`] snapshot and the tagged
//!    [`step::RecursionInfo`] attached to Merge Sort and Quick Sort steps.
//! 4. [`playback`]: the timer-driven [`playback::PlaybackController`] that
//!    applies one step per tick.
//! 5. [`config`]: startup settings from defaults, TOML, and CLI flags.
//!    [`logging`] picks where log records go so they never draw over the TUI.
//! 6. [`ui`]: ratatui-based TUI; not part of the stable library API.
//!
//! ## Example
//!
//! ```
//! use sortty::algorithms::Algorithm;
//!
//! let trace = Algorithm::Merge.generate(&[5, 3, 8, 1]).unwrap();
//! let last = trace.last().unwrap();
//! assert_eq!(last.array, vec![1, 3, 5, 8]);
//! assert!(last.sorted.covers(4));
//! ```

pub mod algorithms;
pub mod config;
pub mod input;
pub mod logging;
pub mod playback;
pub mod step;
pub mod ui;
