//! Insertion Sort step generator

use super::errors::TraceError;
use super::tracer::{Marks, Tracer};
use super::ensure_non_empty;
use crate::step::{IndexSet, StepSequence};

/// Trace Insertion Sort over `input`.
///
/// A single-element input records one step settling index 0; larger inputs
/// end on the step that settles the whole prefix `0..n`.
pub fn generate(input: &[i64]) -> Result<StepSequence, TraceError> {
    ensure_non_empty(input)?;
    let mut tracer = Tracer::new(input);
    let n = tracer.len();

    if n == 1 {
        tracer.mark(Marks::sorted(IndexSet::single(0)));
        return Ok(tracer.finish());
    }

    for i in 1..n {
        let key = tracer.get(i);
        tracer.mark(Marks::comparing(IndexSet::single(i)).with_sorted(IndexSet::span(0, i)));

        // `j` is one past the slot being tested, so it never underflows
        let mut j = i;
        while j > 0 && tracer.get(j - 1) > key {
            tracer.mark(Marks::comparing(IndexSet::pair(j - 1, j)));

            let shifted = tracer.get(j - 1);
            tracer.set(j, shifted);
            j -= 1;

            tracer.mark(Marks::swapping(IndexSet::pair(j, j + 1)));
        }

        tracer.set(j, key);
        tracer.mark(Marks::sorted(IndexSet::span(0, i + 1)));
    }

    Ok(tracer.finish())
}
