//! Discretization summary report generation

use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Color, Table};
use console::style;

use super::AttributeAnalysis;

/// Print a styled summary of every discretized attribute: its cut points
/// and how the rows distribute across the resulting categories.
pub fn display_analyses(analyses: &[AttributeAnalysis], answer_column: &str) {
    println!();
    println!(
        "    {} {}",
        style("▣").cyan(),
        style("DISCRETIZATION SUMMARY").white().bold()
    );
    println!(
        "    {}",
        style(format!("class column: {}", answer_column)).dim()
    );
    println!("    {}", style("─".repeat(50)).dim());
    println!();

    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec![
        Cell::new("Attribute").add_attribute(Attribute::Bold),
        Cell::new("Cut points").add_attribute(Attribute::Bold),
        Cell::new("Categories").add_attribute(Attribute::Bold),
    ]);

    for analysis in analyses {
        let cuts = if analysis.cut_points.is_empty() {
            "(none)".to_string()
        } else {
            analysis
                .cut_points
                .iter()
                .map(|cut| format!("{}", cut))
                .collect::<Vec<_>>()
                .join(", ")
        };

        let categories = analysis
            .categories
            .iter()
            .map(|category| format!("{}: {}", category.label, category.count))
            .collect::<Vec<_>>()
            .join(", ");

        table.add_row(vec![
            Cell::new(&analysis.attribute),
            Cell::new(cuts).fg(if analysis.cut_points.is_empty() {
                Color::Yellow
            } else {
                Color::Green
            }),
            Cell::new(categories),
        ]);
    }

    // Indent the table
    for line in table.to_string().lines() {
        println!("    {}", line);
    }
}
