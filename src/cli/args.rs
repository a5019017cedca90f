//! Command-line argument definitions using clap

use clap::Parser;
use std::path::PathBuf;

/// Entrobin - discretize continuous attributes against a class column
#[derive(Parser, Debug)]
#[command(name = "entrobin")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Input CSV file path
    #[arg(short, long)]
    pub input: PathBuf,

    /// Class (answer) column name; attributes are discretized against it
    #[arg(short, long)]
    pub answer: String,

    /// Attributes to discretize (comma-separated).
    /// Defaults to every fully numeric column except the class column.
    #[arg(long, value_delimiter = ',')]
    pub attributes: Vec<String>,

    /// Output path for the discretized CSV.
    /// Defaults to the input directory with a '_discretized' suffix
    /// (e.g., data.csv -> data_discretized.csv).
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Write the analysis (cut points, category populations) to this JSON file
    #[arg(long)]
    pub json: Option<PathBuf>,

    /// Treat the first line as data; columns are named by position
    #[arg(long, default_value = "false")]
    pub no_header: bool,

    /// Analyze and report only; skip writing the discretized CSV
    #[arg(long, default_value = "false")]
    pub dry_run: bool,
}

impl Cli {
    /// Get the output path, deriving from the input when not explicitly
    /// provided. The derived path sits next to the input with a
    /// '_discretized' suffix.
    pub fn output_path(&self) -> PathBuf {
        self.output.clone().unwrap_or_else(|| {
            let parent = self
                .input
                .parent()
                .unwrap_or_else(|| std::path::Path::new("."));
            let stem = self
                .input
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("output");
            let extension = self
                .input
                .extension()
                .and_then(|e| e.to_str())
                .unwrap_or("csv");
            parent.join(format!("{}_discretized.{}", stem, extension))
        })
    }
}
