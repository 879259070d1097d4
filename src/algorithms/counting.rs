//! Counting Sort step generator
//!
//! Counting Sort never compares elements, so its trace has two phases: one
//! `comparing` step per input element while frequencies are tallied, then one
//! step per placement while the output is assembled right to left.
//!
//! Placement steps put the decremented running count in `swapping`. That count
//! is where the element just landed in the output.

use super::errors::{TraceError, COUNTING_VALUE_LIMIT};
use super::tracer::{Marks, Tracer};
use super::ensure_non_empty;
use crate::step::{IndexSet, StepSequence};

/// Trace Counting Sort over `input` (non-negative values only)
pub fn generate(input: &[i64]) -> Result<StepSequence, TraceError> {
    ensure_non_empty(input)?;
    let values = validate(input)?;
    let max = values.iter().copied().max().unwrap_or(0);

    let mut tracer = Tracer::new(input);
    let n = tracer.len();
    let mut count = vec![0usize; max + 1];

    for (i, &value) in values.iter().enumerate() {
        count[value] += 1;
        tracer.mark(Marks::comparing(IndexSet::single(i)));
    }

    for v in 1..=max {
        count[v] += count[v - 1];
    }

    let mut output: Vec<Option<i64>> = vec![None; n];
    for (i, &value) in values.iter().enumerate().rev() {
        output[count[value] - 1] = Some(input[i]);
        count[value] -= 1;

        for (slot, placed) in output.iter().enumerate() {
            if let Some(placed) = placed {
                tracer.set(slot, *placed);
            }
        }

        tracer.mark(Marks::swapping(IndexSet::single(count[value])));
    }

    tracer.mark(Marks::sorted(IndexSet::span(0, n)));
    Ok(tracer.finish())
}

/// Convert every value to a frequency-table index
fn validate(input: &[i64]) -> Result<Vec<usize>, TraceError> {
    input
        .iter()
        .enumerate()
        .map(|(index, &value)| {
            if value < 0 {
                Err(TraceError::NegativeValue { index, value })
            } else if value > COUNTING_VALUE_LIMIT {
                Err(TraceError::ValueTooLarge {
                    value,
                    limit: COUNTING_VALUE_LIMIT,
                })
            } else {
                Ok(value as usize)
            }
        })
        .collect()
}
