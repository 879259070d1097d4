//! Instrumented sorting algorithms
//!
//! Each submodule exposes a pure `generate(&[i64]) -> Result<StepSequence, TraceError>`
//! that sorts a private copy of its input and records a [`Step`] for every
//! operation worth showing:
//!
//! - [`bubble`], [`selection`], [`insertion`]: comparison sorts, no recursion metadata
//! - [`merge`], [`quick`]: divide and conquer, every step carries [`RecursionInfo`]
//! - [`counting`]: non-negative integers only, no recursion metadata
//!
//! [`Algorithm`] is the key registry the controller and the front end dispatch through.
//!
//! # Guarantees
//!
//! For every accepted input of length `n`, the returned trace is non-empty,
//! every step's array has length `n`, and the last step holds the sorted
//! array with all of `0..n` marked sorted. Generation is deterministic.
//!
//! [`Step`]: crate::step::Step
//! [`RecursionInfo`]: crate::step::RecursionInfo

pub mod bubble;
pub mod counting;
pub mod errors;
pub mod insertion;
pub mod merge;
pub mod quick;
pub mod selection;
mod tracer;

pub use errors::{TraceError, UnknownAlgorithm, COUNTING_VALUE_LIMIT};

use crate::step::StepSequence;
use std::fmt;
use std::str::FromStr;

/// The six registered sorting algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Algorithm {
    #[default]
    Bubble,
    Selection,
    Insertion,
    Merge,
    Quick,
    Counting,
}

impl Algorithm {
    /// Registry order, also the order the front end cycles through
    pub const ALL: [Algorithm; 6] = [
        Algorithm::Bubble,
        Algorithm::Selection,
        Algorithm::Insertion,
        Algorithm::Merge,
        Algorithm::Quick,
        Algorithm::Counting,
    ];

    /// Stable lookup key
    pub fn key(self) -> &'static str {
        match self {
            Algorithm::Bubble => "bubble",
            Algorithm::Selection => "selection",
            Algorithm::Insertion => "insertion",
            Algorithm::Merge => "merge",
            Algorithm::Quick => "quick",
            Algorithm::Counting => "counting",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Algorithm::Bubble => "Bubble Sort",
            Algorithm::Selection => "Selection Sort",
            Algorithm::Insertion => "Insertion Sort",
            Algorithm::Merge => "Merge Sort",
            Algorithm::Quick => "Quick Sort",
            Algorithm::Counting => "Counting Sort",
        }
    }

    /// Whether steps carry recursion metadata
    pub fn is_recursive(self) -> bool {
        matches!(self, Algorithm::Merge | Algorithm::Quick)
    }

    /// Produce the full step trace for `input`
    pub fn generate(self, input: &[i64]) -> Result<StepSequence, TraceError> {
        let trace = match self {
            Algorithm::Bubble => bubble::generate(input),
            Algorithm::Selection => selection::generate(input),
            Algorithm::Insertion => insertion::generate(input),
            Algorithm::Merge => merge::generate(input),
            Algorithm::Quick => quick::generate(input),
            Algorithm::Counting => counting::generate(input),
        }?;
        log::debug!(
            "{}: generated {} steps for {} elements",
            self.display_name(),
            trace.len(),
            input.len()
        );
        Ok(trace)
    }

    pub fn next(self) -> Self {
        let idx = self.position();
        Algorithm::ALL[(idx + 1) % Algorithm::ALL.len()]
    }

    pub fn prev(self) -> Self {
        let idx = self.position();
        Algorithm::ALL[(idx + Algorithm::ALL.len() - 1) % Algorithm::ALL.len()]
    }

    fn position(self) -> usize {
        Algorithm::ALL
            .iter()
            .position(|&a| a == self)
            .unwrap_or(0)
    }
}

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        Algorithm::ALL
            .into_iter()
            .find(|a| a.key() == key)
            .ok_or_else(|| UnknownAlgorithm(key.to_string()))
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Shared guard: every generator rejects an empty array before recording anything
pub(crate) fn ensure_non_empty(input: &[i64]) -> Result<(), TraceError> {
    if input.is_empty() {
        Err(TraceError::EmptyInput)
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_round_trip_through_from_str() {
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.key().parse::<Algorithm>(), Ok(algorithm));
        }
    }

    #[test]
    fn unknown_key_is_rejected() {
        assert_eq!(
            "bogo".parse::<Algorithm>(),
            Err(UnknownAlgorithm("bogo".to_string()))
        );
    }

    #[test]
    fn next_and_prev_wrap() {
        assert_eq!(Algorithm::Counting.next(), Algorithm::Bubble);
        assert_eq!(Algorithm::Bubble.prev(), Algorithm::Counting);
        assert_eq!(Algorithm::Merge.next().prev(), Algorithm::Merge);
    }

    #[test]
    fn empty_input_fails_for_every_algorithm() {
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.generate(&[]), Err(TraceError::EmptyInput));
        }
    }

    #[test]
    fn only_merge_and_quick_carry_recursion_info() {
        let input = [4, 1, 3, 2];
        for algorithm in Algorithm::ALL {
            let trace = algorithm.generate(&input).unwrap();
            let annotated = trace.iter().all(|s| s.recursion.is_some());
            let bare = trace.iter().all(|s| s.recursion.is_none());
            if algorithm.is_recursive() {
                assert!(annotated, "{} should annotate every step", algorithm);
            } else {
                assert!(bare, "{} should not annotate steps", algorithm);
            }
        }
    }
}
