//! Merge Sort step generator
//!
//! Top-down Merge Sort with an explicit recursion `level` threaded through
//! every call. Every step carries a [`RecursionInfo`] so the front end can
//! draw the divide/merge structure:
//!
//! ```text
//! divide → recurse_left → (left subtree) → recurse_right → (right subtree)
//!        → merge_start → (merge_compare → merge_place)* → merge_remaining*
//!        → merge_complete
//! ```
//!
//! Single-element ranges emit `base_case` instead of dividing. The trace ends
//! with a `complete` step settling every index.

use super::errors::TraceError;
use super::tracer::{Marks, Tracer};
use super::ensure_non_empty;
use crate::step::{IndexRange, IndexSet, RecursionInfo, RecursionKind, Split, StepSequence};

/// Trace Merge Sort over `input`
pub fn generate(input: &[i64]) -> Result<StepSequence, TraceError> {
    ensure_non_empty(input)?;
    let mut tracer = Tracer::new(input);
    let n = tracer.len();

    sort_range(&mut tracer, 0, n - 1, 0);

    tracer.annotate(
        Marks::sorted(IndexSet::span(0, n)),
        RecursionInfo::new(
            RecursionKind::Complete,
            0,
            "Merge Sort Complete!".to_string(),
        ),
    );
    Ok(tracer.finish())
}

fn sort_range(tracer: &mut Tracer, left: usize, right: usize, level: usize) {
    if left >= right {
        tracer.annotate(
            Marks::sorted(IndexSet::single(left)),
            RecursionInfo::new(
                RecursionKind::BaseCase {
                    range: IndexRange(left, right),
                },
                level,
                format!(
                    "Level {}: Base case - single element at index {} is sorted",
                    level, left
                ),
            ),
        );
        return;
    }

    let mid = left + (right - left) / 2;
    let left_range = IndexRange(left, mid);
    let right_range = IndexRange(mid + 1, right);

    tracer.annotate(
        Marks::none(),
        RecursionInfo::new(
            RecursionKind::Divide {
                range: IndexRange(left, right),
                split: Some(Split {
                    mid,
                    left_range,
                    right_range,
                }),
            },
            level,
            format!(
                "Level {}: Dividing {} into {} and {}",
                level,
                IndexRange(left, right),
                left_range,
                right_range
            ),
        ),
    );

    tracer.annotate(
        Marks::none(),
        RecursionInfo::new(
            RecursionKind::RecurseLeft { range: left_range },
            level + 1,
            format!("Level {}: Sorting left half {}", level + 1, left_range),
        ),
    );
    sort_range(tracer, left, mid, level + 1);

    tracer.annotate(
        Marks::none(),
        RecursionInfo::new(
            RecursionKind::RecurseRight { range: right_range },
            level + 1,
            format!("Level {}: Sorting right half {}", level + 1, right_range),
        ),
    );
    sort_range(tracer, mid + 1, right, level + 1);

    merge(tracer, left, mid, right, level);
}

fn merge(tracer: &mut Tracer, left: usize, mid: usize, right: usize, level: usize) {
    let left_half: Vec<i64> = (left..=mid).map(|i| tracer.get(i)).collect();
    let right_half: Vec<i64> = (mid + 1..=right).map(|i| tracer.get(i)).collect();
    let left_range = IndexRange(left, mid);
    let right_range = IndexRange(mid + 1, right);

    tracer.annotate(
        Marks::none(),
        RecursionInfo::new(
            RecursionKind::MergeStart {
                left_range,
                right_range,
            },
            level,
            format!(
                "Level {}: Merging {} and {}",
                level, left_range, right_range
            ),
        ),
    );

    let (mut i, mut j, mut k) = (0, 0, left);

    while i < left_half.len() && j < right_half.len() {
        let left_val = left_half[i];
        let right_val = right_half[j];

        tracer.annotate(
            Marks::comparing(IndexSet::pair(left + i, mid + 1 + j)),
            RecursionInfo::new(
                RecursionKind::MergeCompare {
                    left_range,
                    right_range,
                },
                level,
                format!("Comparing {} and {}", left_val, right_val),
            ),
        );

        // `<=` keeps equal elements from the left half first
        if left_val <= right_val {
            tracer.set(k, left_val);
            i += 1;
        } else {
            tracer.set(k, right_val);
            j += 1;
        }

        let placed = tracer.get(k);
        tracer.annotate(
            Marks::swapping(IndexSet::single(k)),
            RecursionInfo::new(
                RecursionKind::MergePlace {
                    left_range,
                    right_range,
                },
                level,
                format!("Placing {} at position {}", placed, k),
            ),
        );
        k += 1;
    }

    for (&value, side) in left_half[i..]
        .iter()
        .map(|v| (v, "left"))
        .chain(right_half[j..].iter().map(|v| (v, "right")))
    {
        tracer.set(k, value);
        tracer.annotate(
            Marks::swapping(IndexSet::single(k)),
            RecursionInfo::new(
                RecursionKind::MergeRemaining,
                level,
                format!("Copying remaining element {} from {} array", value, side),
            ),
        );
        k += 1;
    }

    tracer.annotate(
        Marks::sorted(IndexSet::span(left, right + 1)),
        RecursionInfo::new(
            RecursionKind::MergeComplete {
                range: IndexRange(left, right),
            },
            level,
            format!(
                "Level {}: Merge complete for range {}",
                level,
                IndexRange(left, right)
            ),
        ),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_divide_splits_at_midpoint() {
        let trace = generate(&[5, 3, 8, 1]).unwrap();
        let divide = trace
            .with_tag("divide")
            .find_map(|s| s.recursion.as_ref().filter(|info| info.level == 0))
            .unwrap();
        assert_eq!(divide.left_range(), Some(IndexRange(0, 1)));
        assert_eq!(divide.right_range(), Some(IndexRange(2, 3)));
        assert_eq!(
            divide.message,
            "Level 0: Dividing [0...3] into [0...1] and [2...3]"
        );
        assert_eq!(trace.last().unwrap().array, vec![1, 3, 5, 8]);
    }

    #[test]
    fn recurse_markers_are_one_level_deeper() {
        let trace = generate(&[2, 1]).unwrap();
        let tags: Vec<_> = trace
            .iter()
            .map(|s| {
                let info = s.recursion.as_ref().unwrap();
                (info.tag(), info.level)
            })
            .collect();
        assert_eq!(
            tags,
            vec![
                ("divide", 0),
                ("recurse_left", 1),
                ("base_case", 1),
                ("recurse_right", 1),
                ("base_case", 1),
                ("merge_start", 0),
                ("merge_compare", 0),
                ("merge_place", 0),
                ("merge_remaining", 0),
                ("merge_complete", 0),
                ("complete", 0),
            ]
        );
    }

    #[test]
    fn compare_is_followed_by_place() {
        let trace = generate(&[4, 3, 2, 1]).unwrap();
        let steps: Vec<_> = trace.iter().collect();
        for (idx, step) in steps.iter().enumerate() {
            if step.recursion.as_ref().unwrap().tag() == "merge_compare" {
                let next = steps[idx + 1].recursion.as_ref().unwrap();
                assert_eq!(next.tag(), "merge_place");
                assert_eq!(steps[idx + 1].swapping.len(), 1);
            }
        }
    }

    #[test]
    fn ties_take_the_left_element_first() {
        let trace = generate(&[1, 1]).unwrap();
        let place = trace.with_tag("merge_place").next().unwrap();
        assert_eq!(place.swapping, IndexSet::single(0));
        let remaining = trace.with_tag("merge_remaining").next().unwrap();
        assert_eq!(
            remaining.recursion.as_ref().unwrap().message,
            "Copying remaining element 1 from right array"
        );
    }

    #[test]
    fn merge_complete_settles_merged_range() {
        let trace = generate(&[3, 1, 2]).unwrap();
        let complete: Vec<_> = trace.with_tag("merge_complete").collect();
        assert_eq!(complete.last().unwrap().sorted, IndexSet::span(0, 3));
    }

    #[test]
    fn single_element_is_a_base_case() {
        let trace = generate(&[42]).unwrap();
        assert_eq!(trace.len(), 2);
        assert_eq!(trace.get(0).unwrap().sorted, IndexSet::single(0));
        assert!(trace.last().unwrap().sorted.covers(1));
    }
}
