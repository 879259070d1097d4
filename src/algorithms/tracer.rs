//! Step recorder shared by all generators

use crate::step::{IndexSet, RecursionInfo, Step, StepSequence};

/// Highlight sets for a single step
#[derive(Debug, Clone, Default)]
pub(crate) struct Marks {
    pub comparing: IndexSet,
    pub swapping: IndexSet,
    pub sorted: IndexSet,
}

impl Marks {
    pub fn none() -> Self {
        Marks::default()
    }

    pub fn comparing(indices: IndexSet) -> Self {
        Marks {
            comparing: indices,
            ..Marks::default()
        }
    }

    pub fn swapping(indices: IndexSet) -> Self {
        Marks {
            swapping: indices,
            ..Marks::default()
        }
    }

    pub fn sorted(indices: IndexSet) -> Self {
        Marks {
            sorted: indices,
            ..Marks::default()
        }
    }

    pub fn with_sorted(mut self, indices: IndexSet) -> Self {
        self.sorted = indices;
        self
    }
}

/// Owns the working copy of the array and records a step per operation.
///
/// The caller's slice is copied once in [`Tracer::new`]; generators only ever
/// mutate the copy.
#[derive(Debug)]
pub(crate) struct Tracer {
    array: Vec<i64>,
    steps: Vec<Step>,
}

impl Tracer {
    pub fn new(input: &[i64]) -> Self {
        Tracer {
            array: input.to_vec(),
            steps: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.array.len()
    }

    pub fn get(&self, index: usize) -> i64 {
        self.array[index]
    }

    pub fn set(&mut self, index: usize, value: i64) {
        self.array[index] = value;
    }

    pub fn swap(&mut self, a: usize, b: usize) {
        self.array.swap(a, b);
    }

    /// Record a plain step
    pub fn mark(&mut self, marks: Marks) {
        self.record(marks, None);
    }

    /// Record a step carrying recursion metadata
    pub fn annotate(&mut self, marks: Marks, info: RecursionInfo) {
        self.record(marks, Some(info));
    }

    fn record(&mut self, marks: Marks, recursion: Option<RecursionInfo>) {
        self.steps.push(Step {
            array: self.array.clone(),
            comparing: marks.comparing,
            swapping: marks.swapping,
            sorted: marks.sorted,
            recursion,
        });
    }

    pub fn finish(self) -> StepSequence {
        StepSequence::new(self.steps)
    }
}
