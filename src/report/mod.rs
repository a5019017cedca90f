//! Reporting: terminal summaries and JSON export of discretization
//! analyses.

pub mod json_export;
pub mod summary;

pub use json_export::{export_analysis, AnalysisExport, AttributeAnalysis, CategoryCount};
pub use summary::display_analyses;
