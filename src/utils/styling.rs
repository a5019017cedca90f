//! Terminal styling utilities for the CLI pipeline

use std::path::Path;
use std::time::Duration;

use console::style;

/// Print the application banner
pub fn print_banner(version: &str) {
    println!();
    println!(
        "    {} {}",
        style("entrobin").cyan().bold(),
        style("─ entropy-guided discretization").dim()
    );
    println!("    {}", style(format!("v{}", version)).dim());
    println!("    {}", style("━".repeat(50)).dim());
    println!();
}

/// Print the configuration card
pub fn print_config(input: &Path, answer: &str, output: Option<&Path>) {
    println!("    {} Configuration", style("⚙").cyan());
    println!("      Input:  {}", input.display());
    println!("      Class:  {}", style(answer).yellow());
    match output {
        Some(path) => println!("      Output: {}", path.display()),
        None => println!("      Output: {}", style("(not written)").dim()),
    }
    println!();
}

/// Print a step header with styling
pub fn print_step_header(step_num: u8, title: &str) {
    println!();
    println!(
        "    {} {} {}",
        style(format!("STEP {}", step_num)).cyan().bold(),
        style("│").dim(),
        style(title).white().bold()
    );
    println!("    {}", style("─".repeat(50)).dim());
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("    {} {}", style("✓").green().bold(), style(message).green());
}

/// Print an info message
pub fn print_info(message: &str) {
    println!("    {} {}", style("·").cyan(), message);
}

/// Print the elapsed time of a pipeline step
pub fn print_step_time(elapsed: Duration) {
    println!(
        "    {}",
        style(format!("({:.2}s)", elapsed.as_secs_f64())).dim()
    );
}

/// Print the final completion message
pub fn print_completion() {
    println!();
    println!(
        "    {} {}",
        style("»").cyan(),
        style("Discretization complete!").green().bold()
    );
    println!();
}
