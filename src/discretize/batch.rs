//! Parallel discretization of several attributes of one dataframe.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;

use crate::frame::Dataframe;

use super::{DiscretizeError, MdlDiscretizer};

/// The outcome of discretizing one attribute over a whole dataframe.
#[derive(Debug)]
pub struct AttributeDiscretization {
    /// Column index of the discretized attribute
    pub attribute_idx: usize,
    /// Column name of the discretized attribute
    pub attribute: String,
    /// Cut thresholds in ascending order
    pub cut_points: Vec<f64>,
    /// Category label per row, in row order
    pub labels: Vec<String>,
    /// Row count per category index
    pub category_counts: Vec<usize>,
}

/// Discretize each listed attribute against the answer column.
///
/// Attributes are independent, so they are processed on the rayon pool
/// with a progress bar across attributes. The first failing attribute
/// aborts the whole batch.
pub fn discretize_attributes(
    df: &Dataframe,
    answer_idx: usize,
    attribute_idxs: &[usize],
) -> Result<Vec<AttributeDiscretization>, DiscretizeError> {
    if attribute_idxs.is_empty() {
        return Ok(Vec::new());
    }

    let pb = ProgressBar::new(attribute_idxs.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template(
                "   Discretizing [{bar:40.cyan/blue}] {pos}/{len} attributes ({percent}%) [{eta}]",
            )
            .unwrap()
            .progress_chars("=>-"),
    );

    let progress_counter = Arc::new(AtomicU64::new(0));

    let results: Result<Vec<AttributeDiscretization>, DiscretizeError> = attribute_idxs
        .par_iter()
        .map(|&attribute_idx| {
            let result = discretize_single_attribute(df, attribute_idx, answer_idx);

            let count = progress_counter.fetch_add(1, Ordering::Relaxed);
            pb.set_position(count + 1);

            result
        })
        .collect();

    match &results {
        Ok(outcomes) => pb.finish_with_message(format!(
            "   [OK] Discretized {} attributes",
            outcomes.len()
        )),
        Err(_) => pb.abandon(),
    }

    results
}

fn discretize_single_attribute(
    df: &Dataframe,
    attribute_idx: usize,
    answer_idx: usize,
) -> Result<AttributeDiscretization, DiscretizeError> {
    let mut discretizer = MdlDiscretizer::new(attribute_idx, answer_idx);
    discretizer.build(df.instances())?;

    let mut labels = Vec::with_capacity(df.instance_count());
    let mut category_counts = vec![0usize; discretizer.cut_points().len() + 1];
    for instance in df.instances() {
        let value = instance.attribute(attribute_idx).as_number()?;
        let index = discretizer.category_index(value);
        category_counts[index] += 1;
        labels.push(discretizer.category_of(value));
    }

    Ok(AttributeDiscretization {
        attribute_idx,
        attribute: df.column_name(attribute_idx).to_string(),
        cut_points: discretizer.cut_points().to_vec(),
        labels,
        category_counts,
    })
}
