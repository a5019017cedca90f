//! Recursive entropy-minimization discretizer with an MDL stopping rule.

use std::cmp::Ordering;

use crate::frame::Instance;

use super::{entropy, information_gain, ClassCategorizer, DiscretizeError};

/// Discretizes one numeric attribute against a class column.
///
/// [`build`](Self::build) runs once over a row set and discovers cut
/// points by recursive binary splitting: each partition is split at the
/// boundary with maximal information gain, and the split is kept only
/// when the gain clears the minimum-description-length threshold.
/// [`discretize`](Self::discretize) then maps any instance to an ordered
/// category label.
#[derive(Debug)]
pub struct MdlDiscretizer {
    attribute_idx: usize,
    answer_idx: usize,
    cut_points: Vec<f64>,
}

/// The winning candidate of one boundary scan.
struct BestSplit<'a> {
    gain: f64,
    cut_point: f64,
    left: ClassCategorizer<'a>,
    right: ClassCategorizer<'a>,
}

impl MdlDiscretizer {
    pub fn new(attribute_idx: usize, answer_idx: usize) -> Self {
        Self {
            attribute_idx,
            answer_idx,
            cut_points: Vec::new(),
        }
    }

    /// Column index of the attribute being discretized.
    pub fn attribute_index(&self) -> usize {
        self.attribute_idx
    }

    /// Cut thresholds in ascending order; empty until `build` has run.
    pub fn cut_points(&self) -> &[f64] {
        &self.cut_points
    }

    /// Discover cut points for the attribute over `rows`.
    pub fn build(&mut self, rows: &[Instance]) -> Result<(), DiscretizeError> {
        if rows.is_empty() {
            return Err(DiscretizeError::EmptyInput);
        }

        let mut root = ClassCategorizer::new(rows, self.answer_idx);
        for row in 0..rows.len() {
            root.add(row);
        }
        self.split(rows, &root)?;

        // The left-first recursion already emits cut points in ascending
        // order; sorting pins the invariant `discretize` depends on.
        self.cut_points
            .sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
        Ok(())
    }

    /// Category label for the instance's attribute value.
    pub fn discretize(&self, instance: &Instance) -> Result<String, DiscretizeError> {
        let value = instance.attribute(self.attribute_idx).as_number()?;
        Ok(self.category_of(value))
    }

    /// Category index for a raw value: the index of the first cut point
    /// strictly above it, or the bin past the last cut point.
    pub fn category_index(&self, value: f64) -> usize {
        self.cut_points
            .iter()
            .position(|cut| value < *cut)
            .unwrap_or(self.cut_points.len())
    }

    /// Category label for a raw value.
    pub fn category_of(&self, value: f64) -> String {
        format!("Category {}", self.category_index(value))
    }

    fn split(
        &mut self,
        rows: &[Instance],
        parent: &ClassCategorizer<'_>,
    ) -> Result<(), DiscretizeError> {
        let mut ordered: Vec<(usize, f64)> = Vec::with_capacity(parent.members().len());
        for &row in parent.members() {
            let value = rows[row].attribute(self.attribute_idx).as_number()?;
            ordered.push((row, value));
        }
        ordered.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(Ordering::Equal));

        let parent_counts = parent.entropy_vector();

        // Scan every boundary between two distinct adjacent values; the
        // candidate threshold is their midpoint. Equal values never split.
        // Strict improvement keeps the first (lowest) maximum on ties.
        let mut best: Option<BestSplit> = None;
        for i in 1..ordered.len() {
            if ordered[i - 1].1 == ordered[i].1 {
                continue;
            }
            let cut_point = (ordered[i - 1].1 + ordered[i].1) * 0.5;

            let mut left = ClassCategorizer::new(rows, self.answer_idx);
            for &(row, _) in &ordered[..i] {
                left.add(row);
            }
            let mut right = ClassCategorizer::new(rows, self.answer_idx);
            for &(row, _) in &ordered[i..] {
                right.add(row);
            }

            let gain = information_gain(
                &parent_counts,
                &[left.entropy_vector(), right.entropy_vector()],
            );
            if best.as_ref().map_or(true, |b| gain > b.gain) {
                best = Some(BestSplit {
                    gain,
                    cut_point,
                    left,
                    right,
                });
            }
        }

        // A partition whose values are all equal has no legal boundary.
        let Some(best) = best else {
            return Ok(());
        };

        if !accept_split(&parent_counts, &best) {
            return Ok(());
        }

        if best.left.class_count() > 1 {
            self.split(rows, &best.left)?;
        }
        self.cut_points.push(best.cut_point);
        if best.right.class_count() > 1 {
            self.split(rows, &best.right)?;
        }
        Ok(())
    }
}

/// MDL acceptance test for the best candidate of a partition of size `n`
/// with `k` classes: the gain must exceed
/// `(log2(n-1) + log2(3^k - 2) - (k·E + k1·E1 + k2·E2)) / n`,
/// where `E`, `E1`, `E2` are the entropies of the parent and the two
/// children and `k1`, `k2` their class counts.
fn accept_split(parent_counts: &[usize], best: &BestSplit<'_>) -> bool {
    let n = parent_counts.iter().sum::<usize>() as f64;
    let k = parent_counts.len();
    let k1 = best.left.class_count();
    let k2 = best.right.class_count();

    let parent_entropy = entropy(parent_counts);
    let left_entropy = entropy(&best.left.entropy_vector());
    let right_entropy = entropy(&best.right.entropy_vector());

    let threshold = ((n - 1.0).log2() + (3f64.powi(k as i32) - 2.0).log2()
        - (k as f64 * parent_entropy + k1 as f64 * left_entropy + k2 as f64 * right_entropy))
        / n;

    best.gain > threshold
}
