//! Trace generation error types
//!
//! Every variant of [`TraceError`] is an invalid-input failure: it is raised
//! synchronously, before a single step is recorded, and the caller can recover
//! by supplying a different array.

use thiserror::Error;

/// Largest value Counting Sort accepts (its frequency table is sized `max + 1`)
pub const COUNTING_VALUE_LIMIT: i64 = 1_000_000;

/// Input rejected by a step generator
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TraceError {
    #[error("cannot sort an empty array")]
    EmptyInput,

    /// Counting Sort indexes its frequency table by value
    #[error("counting sort requires non-negative values, found {value} at index {index}")]
    NegativeValue { index: usize, value: i64 },

    #[error("counting sort value {value} exceeds the limit of {limit}")]
    ValueTooLarge { value: i64, limit: i64 },
}

impl TraceError {
    /// All trace errors belong to the invalid-input family
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            TraceError::EmptyInput
                | TraceError::NegativeValue { .. }
                | TraceError::ValueTooLarge { .. }
        )
    }
}

/// Algorithm key outside the registered set
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown algorithm '{0}' (expected one of: bubble, selection, insertion, merge, quick, counting)")]
pub struct UnknownAlgorithm(pub String);
