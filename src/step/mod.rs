//! Step trace data model
//!
//! Every sorting algorithm in [`crate::algorithms`] produces a [`StepSequence`]:
//! an ordered, immutable list of [`Step`] snapshots. Each step carries the full
//! array state after the operation it represents, plus the index sets that the
//! presentation layer highlights.
//!
//! # Recursion metadata
//!
//! Merge Sort and Quick Sort attach a [`RecursionInfo`] to every step. The
//! variant-specific fields live in [`RecursionKind`], so a `divide` step can
//! never be missing its range and a `merge_remaining` step never carries one.
//!
//! # Serialization
//!
//! Steps serialize to the same JSON shape the web front end consumes:
//!
//! ```text
//! { "array": [..], "comparing": [..], "swapping": [..], "sorted": [..],
//!   "recursionInfo": { "type": "divide", "level": 0, "range": [0, 3], .. } }
//! ```

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use std::fmt;

/// Ordered set of array indices (0-2 entries for comparing/swapping, up to `n` for sorted)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct IndexSet(Vec<usize>);

impl IndexSet {
    pub fn new() -> Self {
        IndexSet(Vec::new())
    }

    pub fn single(index: usize) -> Self {
        IndexSet(vec![index])
    }

    pub fn pair(a: usize, b: usize) -> Self {
        IndexSet(vec![a, b])
    }

    /// Every index in `start..end`
    pub fn span(start: usize, end: usize) -> Self {
        IndexSet((start..end).collect())
    }

    /// The trailing `count` indices of an array of length `len`, last index first
    pub fn suffix(len: usize, count: usize) -> Self {
        IndexSet((0..count).map(|offset| len - 1 - offset).collect())
    }

    pub fn contains(&self, index: usize) -> bool {
        self.0.contains(&index)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.iter().copied()
    }

    /// True when this set holds exactly the indices `0..len`
    pub fn covers(&self, len: usize) -> bool {
        self.0.len() == len && (0..len).all(|i| self.contains(i))
    }
}

/// Inclusive `[low, high]` index range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IndexRange(pub usize, pub usize);

impl IndexRange {
    pub fn low(&self) -> usize {
        self.0
    }

    pub fn high(&self) -> usize {
        self.1
    }

    pub fn contains(&self, index: usize) -> bool {
        index >= self.0 && index <= self.1
    }
}

impl fmt::Display for IndexRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}...{}]", self.0, self.1)
    }
}

/// Divide/conquer phase a recursion step belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Divide,
    Conquer,
    Complete,
    Process,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Phase::Divide => "DIVIDE",
            Phase::Conquer => "CONQUER",
            Phase::Complete => "COMPLETE",
            Phase::Process => "PROCESS",
        };
        f.write_str(label)
    }
}

/// Midpoint split recorded by Merge Sort's divide step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Split {
    pub mid: usize,
    pub left_range: IndexRange,
    pub right_range: IndexRange,
}

/// Operation tag plus the fields that tag requires
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecursionKind {
    /// Quick Sort divides without a split; Merge Sort records its midpoint
    Divide {
        range: IndexRange,
        split: Option<Split>,
    },
    RecurseLeft {
        range: IndexRange,
    },
    RecurseRight {
        range: IndexRange,
    },
    ConquerComplete {
        range: IndexRange,
    },
    BaseCase {
        range: IndexRange,
    },
    MergeStart {
        left_range: IndexRange,
        right_range: IndexRange,
    },
    MergeCompare {
        left_range: IndexRange,
        right_range: IndexRange,
    },
    MergePlace {
        left_range: IndexRange,
        right_range: IndexRange,
    },
    MergeRemaining,
    MergeComplete {
        range: IndexRange,
    },
    PartitionStart {
        range: IndexRange,
        pivot: usize,
    },
    PartitionCompare {
        range: IndexRange,
        pivot: usize,
        current: usize,
    },
    PartitionSwap {
        range: IndexRange,
        pivot: usize,
    },
    PivotPlacement {
        range: IndexRange,
        pivot: usize,
    },
    PartitionComplete {
        range: IndexRange,
        pivot: usize,
    },
    Complete,
}

impl RecursionKind {
    /// Wire name of the tag (`divide`, `merge_place`, ...)
    pub fn tag(&self) -> &'static str {
        match self {
            RecursionKind::Divide { .. } => "divide",
            RecursionKind::RecurseLeft { .. } => "recurse_left",
            RecursionKind::RecurseRight { .. } => "recurse_right",
            RecursionKind::ConquerComplete { .. } => "conquer_complete",
            RecursionKind::BaseCase { .. } => "base_case",
            RecursionKind::MergeStart { .. } => "merge_start",
            RecursionKind::MergeCompare { .. } => "merge_compare",
            RecursionKind::MergePlace { .. } => "merge_place",
            RecursionKind::MergeRemaining => "merge_remaining",
            RecursionKind::MergeComplete { .. } => "merge_complete",
            RecursionKind::PartitionStart { .. } => "partition_start",
            RecursionKind::PartitionCompare { .. } => "partition_compare",
            RecursionKind::PartitionSwap { .. } => "partition_swap",
            RecursionKind::PivotPlacement { .. } => "pivot_placement",
            RecursionKind::PartitionComplete { .. } => "partition_complete",
            RecursionKind::Complete => "complete",
        }
    }
}

/// Divide-and-conquer metadata attached to Merge Sort and Quick Sort steps
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecursionInfo {
    pub kind: RecursionKind,
    /// Recursion depth, root = 0
    pub level: usize,
    pub message: String,
}

impl RecursionInfo {
    pub fn new(kind: RecursionKind, level: usize, message: String) -> Self {
        RecursionInfo {
            kind,
            level,
            message,
        }
    }

    pub fn tag(&self) -> &'static str {
        self.kind.tag()
    }

    /// The active range, if this tag has one
    pub fn range(&self) -> Option<IndexRange> {
        match &self.kind {
            RecursionKind::Divide { range, .. }
            | RecursionKind::RecurseLeft { range }
            | RecursionKind::RecurseRight { range }
            | RecursionKind::ConquerComplete { range }
            | RecursionKind::BaseCase { range }
            | RecursionKind::MergeComplete { range }
            | RecursionKind::PartitionStart { range, .. }
            | RecursionKind::PartitionCompare { range, .. }
            | RecursionKind::PartitionSwap { range, .. }
            | RecursionKind::PivotPlacement { range, .. }
            | RecursionKind::PartitionComplete { range, .. } => Some(*range),
            _ => None,
        }
    }

    pub fn left_range(&self) -> Option<IndexRange> {
        match &self.kind {
            RecursionKind::Divide { split, .. } => split.map(|s| s.left_range),
            RecursionKind::MergeStart { left_range, .. }
            | RecursionKind::MergeCompare { left_range, .. }
            | RecursionKind::MergePlace { left_range, .. } => Some(*left_range),
            _ => None,
        }
    }

    pub fn right_range(&self) -> Option<IndexRange> {
        match &self.kind {
            RecursionKind::Divide { split, .. } => split.map(|s| s.right_range),
            RecursionKind::MergeStart { right_range, .. }
            | RecursionKind::MergeCompare { right_range, .. }
            | RecursionKind::MergePlace { right_range, .. } => Some(*right_range),
            _ => None,
        }
    }

    /// Pivot index: the candidate before placement, its final slot afterwards
    pub fn pivot(&self) -> Option<usize> {
        match &self.kind {
            RecursionKind::PartitionStart { pivot, .. }
            | RecursionKind::PartitionCompare { pivot, .. }
            | RecursionKind::PartitionSwap { pivot, .. }
            | RecursionKind::PivotPlacement { pivot, .. }
            | RecursionKind::PartitionComplete { pivot, .. } => Some(*pivot),
            _ => None,
        }
    }

    pub fn phase(&self) -> Phase {
        let tag = self.tag();
        if tag.contains("divide") || tag.contains("recurse") {
            Phase::Divide
        } else if tag.contains("merge") || tag.contains("partition") {
            Phase::Conquer
        } else if tag == "complete" {
            Phase::Complete
        } else {
            Phase::Process
        }
    }
}

/// Flat map: `type`, `level`, then the tag's own fields, then `message`
impl Serialize for RecursionInfo {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("type", self.tag())?;
        map.serialize_entry("level", &self.level)?;
        match &self.kind {
            RecursionKind::Divide { range, split } => {
                map.serialize_entry("range", range)?;
                if let Some(split) = split {
                    map.serialize_entry("mid", &split.mid)?;
                    map.serialize_entry("leftRange", &split.left_range)?;
                    map.serialize_entry("rightRange", &split.right_range)?;
                }
            }
            RecursionKind::MergeStart {
                left_range,
                right_range,
            }
            | RecursionKind::MergeCompare {
                left_range,
                right_range,
            }
            | RecursionKind::MergePlace {
                left_range,
                right_range,
            } => {
                map.serialize_entry("leftRange", left_range)?;
                map.serialize_entry("rightRange", right_range)?;
            }
            RecursionKind::PartitionCompare {
                range,
                pivot,
                current,
            } => {
                map.serialize_entry("range", range)?;
                map.serialize_entry("pivot", pivot)?;
                map.serialize_entry("current", current)?;
            }
            _ => {
                if let Some(range) = self.range() {
                    map.serialize_entry("range", &range)?;
                }
                if let Some(pivot) = self.pivot() {
                    map.serialize_entry("pivot", &pivot)?;
                }
            }
        }
        map.serialize_entry("message", &self.message)?;
        map.end()
    }
}

/// One immutable snapshot of the array and its highlighted indices
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Step {
    /// Array state after this step's mutation (if any)
    pub array: Vec<i64>,
    pub comparing: IndexSet,
    pub swapping: IndexSet,
    /// Indices known to hold their final value
    pub sorted: IndexSet,
    #[serde(rename = "recursionInfo", skip_serializing_if = "Option::is_none")]
    pub recursion: Option<RecursionInfo>,
}

/// The complete, precomputed trace of one sort invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct StepSequence {
    steps: Vec<Step>,
}

impl StepSequence {
    pub(crate) fn new(steps: Vec<Step>) -> Self {
        StepSequence { steps }
    }

    pub fn get(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn last(&self) -> Option<&Step> {
        self.steps.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Step> {
        self.steps.iter()
    }

    /// Steps carrying the given recursion tag, in trace order
    pub fn with_tag<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a Step> + 'a {
        self.steps.iter().filter(move |step| {
            step.recursion
                .as_ref()
                .is_some_and(|info| info.tag() == tag)
        })
    }
}

impl<'a> IntoIterator for &'a StepSequence {
    type Item = &'a Step;
    type IntoIter = std::slice::Iter<'a, Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suffix_lists_trailing_indices_from_the_end() {
        let set = IndexSet::suffix(5, 2);
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![4, 3]);
    }

    #[test]
    fn covers_requires_every_index() {
        assert!(IndexSet::span(0, 4).covers(4));
        assert!(!IndexSet::span(1, 4).covers(4));
        assert!(!IndexSet::span(0, 4).covers(5));
    }

    #[test]
    fn phase_follows_tag_family() {
        let range = IndexRange(0, 3);
        let info = |kind| RecursionInfo::new(kind, 0, String::new());
        assert_eq!(info(RecursionKind::RecurseLeft { range }).phase(), Phase::Divide);
        assert_eq!(
            info(RecursionKind::PartitionSwap { range, pivot: 3 }).phase(),
            Phase::Conquer
        );
        assert_eq!(info(RecursionKind::MergeRemaining).phase(), Phase::Conquer);
        assert_eq!(info(RecursionKind::Complete).phase(), Phase::Complete);
        assert_eq!(info(RecursionKind::BaseCase { range }).phase(), Phase::Process);
        assert_eq!(
            info(RecursionKind::PivotPlacement { range, pivot: 1 }).phase(),
            Phase::Process
        );
    }

    #[test]
    fn recursion_info_serializes_flat_with_type_tag() {
        let info = RecursionInfo::new(
            RecursionKind::Divide {
                range: IndexRange(0, 3),
                split: Some(Split {
                    mid: 1,
                    left_range: IndexRange(0, 1),
                    right_range: IndexRange(2, 3),
                }),
            },
            0,
            "Level 0: Dividing".to_string(),
        );
        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(json["type"], "divide");
        assert_eq!(json["level"], 0);
        assert_eq!(json["mid"], 1);
        assert_eq!(json["leftRange"], serde_json::json!([0, 1]));
        assert_eq!(json["rightRange"], serde_json::json!([2, 3]));
    }

    #[test]
    fn step_without_recursion_omits_the_field() {
        let step = Step {
            array: vec![2, 1],
            comparing: IndexSet::pair(0, 1),
            swapping: IndexSet::new(),
            sorted: IndexSet::new(),
            recursion: None,
        };
        let json = serde_json::to_value(&step).unwrap();
        assert!(json.get("recursionInfo").is_none());
        assert_eq!(json["comparing"], serde_json::json!([0, 1]));
    }
}
