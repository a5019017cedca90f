//! Entrobin: supervised discretization CLI
//!
//! Converts continuous attributes of a delimited dataset into ordered
//! categories, with bin boundaries chosen by entropy minimization under
//! an MDL stopping rule.

use anyhow::Result;
use clap::Parser;

use entrobin::cli::{self, Cli};

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli::run(&cli)
}
