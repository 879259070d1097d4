//! Selection Sort step generator

use super::errors::TraceError;
use super::tracer::{Marks, Tracer};
use super::ensure_non_empty;
use crate::step::{IndexSet, StepSequence};

/// Trace Selection Sort over `input`.
///
/// Ties keep the earlier minimum (strict `<`), so equal values are never
/// swapped past each other by the scan itself.
pub fn generate(input: &[i64]) -> Result<StepSequence, TraceError> {
    ensure_non_empty(input)?;
    let mut tracer = Tracer::new(input);
    let n = tracer.len();

    for i in 0..n - 1 {
        let mut min_idx = i;

        for j in i + 1..n {
            tracer.mark(
                Marks::comparing(IndexSet::pair(min_idx, j)).with_sorted(IndexSet::span(0, i)),
            );

            if tracer.get(j) < tracer.get(min_idx) {
                min_idx = j;
            }
        }

        if min_idx != i {
            tracer.swap(i, min_idx);
            tracer.mark(
                Marks::swapping(IndexSet::pair(i, min_idx)).with_sorted(IndexSet::span(0, i)),
            );
        }

        tracer.mark(Marks::sorted(IndexSet::span(0, i + 1)));
    }

    tracer.mark(Marks::sorted(IndexSet::span(0, n)));
    Ok(tracer.finish())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_and_settles_every_index() {
        let trace = generate(&[64, 25, 12, 22, 11]).unwrap();
        let last = trace.last().unwrap();
        assert_eq!(last.array, vec![11, 12, 22, 25, 64]);
        assert!(last.sorted.covers(5));
    }

    #[test]
    fn every_outer_iteration_settles_a_prefix() {
        let input = [3, 1, 2, 5, 4];
        let trace = generate(&input).unwrap();
        for i in 0..input.len() - 1 {
            let expected = IndexSet::span(0, i + 1);
            assert!(
                trace.iter().any(|s| s.sorted == expected),
                "no step settles prefix 0..={}",
                i
            );
        }
    }

    #[test]
    fn ties_do_not_move_the_minimum() {
        // Both 1s are equal; the first stays the minimum so no swap at i = 0
        let trace = generate(&[1, 3, 1]).unwrap();
        let first_swap = trace.iter().find(|s| !s.swapping.is_empty()).unwrap();
        assert_eq!(first_swap.swapping, IndexSet::pair(1, 2));
    }

    #[test]
    fn comparisons_carry_settled_prefix() {
        let trace = generate(&[2, 1, 3]).unwrap();
        let compares: Vec<_> = trace.iter().filter(|s| !s.comparing.is_empty()).collect();
        assert!(compares[0].sorted.is_empty());
        assert_eq!(compares.last().unwrap().sorted, IndexSet::span(0, 1));
    }
}
