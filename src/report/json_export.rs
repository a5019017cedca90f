//! Discretization analysis export functionality

use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;
use serde::Serialize;

use crate::discretize::AttributeDiscretization;

/// One category of a discretized attribute with its population.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryCount {
    /// Category label ("Category 0", "Category 1", ...)
    pub label: String,
    /// Rows assigned to this category
    pub count: usize,
}

/// Analysis of one discretized attribute.
#[derive(Debug, Clone, Serialize)]
pub struct AttributeAnalysis {
    /// Attribute (column) name
    pub attribute: String,
    /// Cut thresholds in ascending order
    pub cut_points: Vec<f64>,
    /// Categories in ascending order with their populations
    pub categories: Vec<CategoryCount>,
}

impl AttributeAnalysis {
    /// Summarize one batch outcome.
    pub fn from_outcome(outcome: &AttributeDiscretization) -> Self {
        let categories = outcome
            .category_counts
            .iter()
            .enumerate()
            .map(|(i, &count)| CategoryCount {
                label: format!("Category {}", i),
                count,
            })
            .collect();
        Self {
            attribute: outcome.attribute.clone(),
            cut_points: outcome.cut_points.clone(),
            categories,
        }
    }
}

/// Metadata about the analysis run
#[derive(Debug, Serialize)]
pub struct AnalysisMetadata {
    /// Timestamp of the analysis (ISO 8601 format)
    pub timestamp: String,
    /// Entrobin version
    pub entrobin_version: String,
    /// Input file path
    pub input_file: String,
    /// Class (answer) column name
    pub answer_column: String,
}

/// Complete analysis export with metadata
#[derive(Debug, Serialize)]
pub struct AnalysisExport {
    /// Metadata about the analysis run
    pub metadata: AnalysisMetadata,
    /// Per-attribute analyses
    pub attributes: Vec<AttributeAnalysis>,
}

/// Export the discretization analysis to a JSON file.
///
/// # Arguments
/// * `analyses` - Per-attribute analyses from the discretization step
/// * `output_path` - Path to write the JSON file
/// * `input_file` - Source dataset path, recorded as metadata
/// * `answer_column` - Class column name, recorded as metadata
pub fn export_analysis(
    analyses: &[AttributeAnalysis],
    output_path: &Path,
    input_file: &str,
    answer_column: &str,
) -> Result<()> {
    let export = AnalysisExport {
        metadata: AnalysisMetadata {
            timestamp: Utc::now().to_rfc3339(),
            entrobin_version: env!("CARGO_PKG_VERSION").to_string(),
            input_file: input_file.to_string(),
            answer_column: answer_column.to_string(),
        },
        attributes: analyses.to_vec(),
    };

    let json = serde_json::to_string_pretty(&export)
        .context("Failed to serialize discretization analysis to JSON")?;

    std::fs::write(output_path, json)
        .with_context(|| format!("Failed to write analysis to {}", output_path.display()))?;

    Ok(())
}
