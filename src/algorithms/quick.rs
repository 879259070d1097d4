//! Quick Sort step generator
//!
//! Lomuto partitioning with the last element of each range as pivot. Every
//! step carries a [`RecursionInfo`]; the per-range sequence is:
//!
//! ```text
//! divide → partition_start → (partition_compare → partition_swap?)*
//!        → pivot_placement → partition_complete
//!        → [recurse_left → ...] → [recurse_right → ...] → conquer_complete
//! ```
//!
//! Sub-ranges with fewer than two elements are never entered, so no marker is
//! emitted for them. The trace ends with a `complete` step settling every index.

use super::errors::TraceError;
use super::tracer::{Marks, Tracer};
use super::ensure_non_empty;
use crate::step::{IndexRange, IndexSet, RecursionInfo, RecursionKind, StepSequence};

/// Trace Quick Sort over `input`
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
            "Quick Sort Complete!".to_string(),
        ),
    );
    Ok(tracer.finish())
}

fn sort_range(tracer: &mut Tracer, low: usize, high: usize, level: usize) {
    if low >= high {
        return;
    }
    let range = IndexRange(low, high);

    tracer.annotate(
        Marks::none(),
        RecursionInfo::new(
            RecursionKind::Divide { range, split: None },
            level,
            format!("Level {}: Dividing range {}", level, range),
        ),
    );

    let pivot = partition(tracer, low, high, level);

    if low + 1 < pivot {
        let left = IndexRange(low, pivot - 1);
        tracer.annotate(
            Marks::none(),
            RecursionInfo::new(
                RecursionKind::RecurseLeft { range: left },
                level + 1,
                format!("Level {}: Sorting left part {}", level + 1, left),
            ),
        );
        sort_range(tracer, low, pivot - 1, level + 1);
    }

    if pivot + 1 < high {
        let right = IndexRange(pivot + 1, high);
        tracer.annotate(
            Marks::none(),
            RecursionInfo::new(
                RecursionKind::RecurseRight { range: right },
                level + 1,
                format!("Level {}: Sorting right part {}", level + 1, right),
            ),
        );
        sort_range(tracer, pivot + 1, high, level + 1);
    }

    tracer.annotate(
        Marks::none(),
        RecursionInfo::new(
            RecursionKind::ConquerComplete { range },
            level,
            format!("Level {}: Range {} is now sorted", level, range),
        ),
    );
}

/// Partition `low..=high` around `array[high]` and return the pivot's final index
fn partition(tracer: &mut Tracer, low: usize, high: usize, level: usize) -> usize {
    let range = IndexRange(low, high);
    let pivot_value = tracer.get(high);

    tracer.annotate(
        Marks::none(),
        RecursionInfo::new(
            RecursionKind::PartitionStart { range, pivot: high },
            level,
            format!(
                "Level {}: Partitioning {} with pivot {} (value: {})",
                level, range, pivot_value, pivot_value
            ),
        ),
    );

    // Next free slot left of the boundary; the boundary index itself is `store - 1`
    let mut store = low;

    for j in low..high {
        let current = tracer.get(j);
        tracer.annotate(
            Marks::comparing(IndexSet::pair(j, high)),
            RecursionInfo::new(
                RecursionKind::PartitionCompare {
                    range,
                    pivot: high,
                    current: j,
                },
                level,
                format!("Comparing {} with pivot {}", current, pivot_value),
            ),
        );

        if current < pivot_value {
            let boundary = store;
            store += 1;
            if boundary != j {
                tracer.swap(boundary, j);
                let message = format!(
                    "Swapping {} and {} (moving smaller element left)",
                    tracer.get(j),
                    tracer.get(boundary)
                );
                tracer.annotate(
                    Marks::swapping(IndexSet::pair(boundary, j)),
                    RecursionInfo::new(
                        RecursionKind::PartitionSwap { range, pivot: high },
                        level,
                        message,
                    ),
                );
            }
        }
    }

    tracer.swap(store, high);
    tracer.annotate(
        Marks::swapping(IndexSet::pair(store, high)),
        RecursionInfo::new(
            RecursionKind::PivotPlacement {
                range,
                pivot: store,
            },
            level,
            format!("Placing pivot in final position {}", store),
        ),
    );

    let placed = tracer.get(store);
    tracer.annotate(
        Marks::sorted(IndexSet::single(store)),
        RecursionInfo::new(
            RecursionKind::PartitionComplete {
                range,
                pivot: store,
            },
            level,
            format!(
                "Partition complete! Pivot {} is in correct position",
                placed
            ),
        ),
    );

    store
}
