//! Command-line interface: argument definitions and the pipeline driver.

pub mod args;

pub use args::Cli;

use std::fs::File;
use std::io::BufWriter;
use std::time::Instant;

use anyhow::{Context, Result};

use crate::discretize::{discretize_attributes, AttributeDiscretization};
use crate::frame::{load_csv, Dataframe};
use crate::report::{display_analyses, export_analysis, AttributeAnalysis};
use crate::utils::{
    print_banner, print_completion, print_config, print_info, print_step_header, print_step_time,
    print_success,
};

/// Run the full discretization pipeline for the parsed arguments.
pub fn run(cli: &Cli) -> Result<()> {
    print_banner(env!("CARGO_PKG_VERSION"));

    let output_path = (!cli.dry_run).then(|| cli.output_path());
    print_config(&cli.input, &cli.answer, output_path.as_deref());

    // Step 1: Load dataset
    print_step_header(1, "Load dataset");
    let step_start = Instant::now();
    let mut df = load_csv(&cli.input, !cli.no_header)
        .with_context(|| format!("Failed to load {}", cli.input.display()))?;
    print_success("Dataset loaded");
    print_info(&format!(
        "{} rows, {} columns",
        df.instance_count(),
        df.column_count()
    ));
    print_step_time(step_start.elapsed());

    let answer_idx = df.column_index(&cli.answer).with_context(|| {
        format!(
            "Class column '{}' not found in {}",
            cli.answer,
            cli.input.display()
        )
    })?;

    let attribute_idxs = resolve_attributes(&df, answer_idx, &cli.attributes)?;
    if attribute_idxs.is_empty() {
        anyhow::bail!("No numeric attributes to discretize");
    }

    // Step 2: Discretize attributes
    print_step_header(2, "Discretize attributes");
    let step_start = Instant::now();
    println!();
    let outcomes =
        discretize_attributes(&df, answer_idx, &attribute_idxs).context("Discretization failed")?;
    print_success(&format!("Discretized {} attributes", outcomes.len()));
    print_step_time(step_start.elapsed());

    apply_labels(&mut df, &outcomes);

    // Step 3: Report
    print_step_header(3, "Report");
    let analyses: Vec<AttributeAnalysis> = outcomes
        .iter()
        .map(AttributeAnalysis::from_outcome)
        .collect();
    display_analyses(&analyses, &cli.answer);
    println!();

    if let Some(json_path) = &cli.json {
        export_analysis(
            &analyses,
            json_path,
            &cli.input.display().to_string(),
            &cli.answer,
        )?;
        print_success(&format!("Analysis written to {}", json_path.display()));
    }

    if let Some(output_path) = &output_path {
        let file = File::create(output_path)
            .with_context(|| format!("Failed to create {}", output_path.display()))?;
        let mut writer = BufWriter::new(file);
        df.write_csv(&mut writer)
            .with_context(|| format!("Failed to write {}", output_path.display()))?;
        print_success(&format!(
            "Discretized dataset written to {}",
            output_path.display()
        ));
    }

    print_completion();
    Ok(())
}

/// Resolve the requested attribute names to column indices, defaulting to
/// every numeric column except the class column.
fn resolve_attributes(
    df: &Dataframe,
    answer_idx: usize,
    requested: &[String],
) -> Result<Vec<usize>> {
    if requested.is_empty() {
        return Ok(df
            .numeric_columns()
            .into_iter()
            .filter(|&idx| idx != answer_idx)
            .collect());
    }
    requested
        .iter()
        .map(|name| {
            df.column_index(name)
                .with_context(|| format!("Attribute column '{}' not found", name))
        })
        .collect()
}

/// Replace each discretized attribute's values with its category labels.
fn apply_labels(df: &mut Dataframe, outcomes: &[AttributeDiscretization]) {
    for outcome in outcomes {
        for (row, label) in outcome.labels.iter().enumerate() {
            df.instance_mut(row)
                .set_attribute(outcome.attribute_idx, label.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_frame() -> Dataframe {
        let mut df = Dataframe::new();
        df.add_column("name");
        df.add_column("hours");
        df.add_column("passed");
        let rows = [
            ("a", "1", "no"),
            ("b", "2", "no"),
            ("c", "10", "yes"),
            ("d", "11", "yes"),
        ];
        for (name, hours, passed) in rows {
            let row = df.create_instance();
            row.add_attribute(name);
            row.add_attribute(hours);
            row.add_attribute(passed);
        }
        df
    }

    #[test]
    fn test_resolve_attributes_defaults_to_numeric_columns() {
        let df = sample_frame();
        let idxs = resolve_attributes(&df, 2, &[]).unwrap();
        assert_eq!(idxs, [1]);
    }

    #[test]
    fn test_resolve_attributes_excludes_numeric_class_column() {
        let mut df = Dataframe::new();
        df.add_column("x");
        df.add_column("label");
        let row = df.create_instance();
        row.add_attribute("1.0");
        row.add_attribute("0");

        let idxs = resolve_attributes(&df, 1, &[]).unwrap();
        assert_eq!(idxs, [0]);
    }

    #[test]
    fn test_resolve_attributes_unknown_name_fails() {
        let df = sample_frame();
        assert!(resolve_attributes(&df, 2, &["missing".to_string()]).is_err());
    }

    #[test]
    fn test_apply_labels_rewrites_cells_in_place() {
        let mut df = sample_frame();
        let outcome = AttributeDiscretization {
            attribute_idx: 1,
            attribute: "hours".to_string(),
            cut_points: vec![6.0],
            labels: vec![
                "Category 0".to_string(),
                "Category 0".to_string(),
                "Category 1".to_string(),
                "Category 1".to_string(),
            ],
            category_counts: vec![2, 2],
        };

        apply_labels(&mut df, &[outcome]);
        assert_eq!(df.instance(0).attribute(1).as_text(), "Category 0");
        assert_eq!(df.instance(3).attribute(1).as_text(), "Category 1");
        assert_eq!(df.instance(0).attribute(0).as_text(), "a");
    }
}
