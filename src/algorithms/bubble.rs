//! Bubble Sort step generator

use super::errors::TraceError;
use super::tracer::{Marks, Tracer};
use super::ensure_non_empty;
use crate::step::{IndexSet, StepSequence};

/// Trace Bubble Sort over `input`.
///
/// Each pass `i` compares adjacent pairs in `0..n-i-1`, swapping out-of-order
/// pairs, and then marks the trailing `i + 1` positions as settled.
pub fn generate(input: &[i64]) -> Result<StepSequence, TraceError> {
    ensure_non_empty(input)?;
    let mut tracer = Tracer::new(input);
    let n = tracer.len();

    for i in 0..n - 1 {
        for j in 0..n - i - 1 {
            tracer.mark(Marks::comparing(IndexSet::pair(j, j + 1)));

            if tracer.get(j) > tracer.get(j + 1) {
                tracer.swap(j, j + 1);
                tracer.mark(Marks::swapping(IndexSet::pair(j, j + 1)));
            }
        }
        tracer.mark(Marks::sorted(IndexSet::suffix(n, i + 1)));
    }

    tracer.mark(Marks::sorted(IndexSet::span(0, n)));
    Ok(tracer.finish())
}
