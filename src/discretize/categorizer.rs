//! Class-distribution accounting over a subset of rows.

use std::collections::BTreeMap;

use crate::frame::Instance;

/// Groups a subset of rows by the value of the answer column and tracks
/// per-class counts.
///
/// The categorizer borrows the row slice under analysis and records
/// members as indices into it; it never owns row data. One categorizer is
/// built per split evaluation and dropped when the evaluation returns,
/// except the winning left/right pair which seeds the next recursion.
#[derive(Debug, Clone)]
pub struct ClassCategorizer<'a> {
    rows: &'a [Instance],
    answer_idx: usize,
    members: Vec<usize>,
    counts: BTreeMap<String, usize>,
}

impl<'a> ClassCategorizer<'a> {
    pub fn new(rows: &'a [Instance], answer_idx: usize) -> Self {
        Self {
            rows,
            answer_idx,
            members: Vec::new(),
            counts: BTreeMap::new(),
        }
    }

    /// Record one row, keyed by the class label in its answer column.
    pub fn add(&mut self, row: usize) {
        let label = self.rows[row].attribute(self.answer_idx).as_text().to_string();
        *self.counts.entry(label).or_insert(0) += 1;
        self.members.push(row);
    }

    /// Member row indices, in insertion order.
    pub fn members(&self) -> &[usize] {
        &self.members
    }

    /// Number of distinct class labels observed.
    pub fn class_count(&self) -> usize {
        self.counts.len()
    }

    /// Per-class counts in a stable order. Only the multiset of values
    /// matters downstream.
    pub fn entropy_vector(&self) -> Vec<usize> {
        self.counts.values().copied().collect()
    }
}
