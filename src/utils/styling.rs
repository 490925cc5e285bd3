//! Terminal styling utilities for the script-mode output

use console::style;
use std::path::Path;
use std::time::Duration;

/// Print the application banner
pub fn print_banner(version: &str) {
    let banner = r#"
    ██████╗ ██╗  ██╗ ██████╗
    ██╔══██╗██║  ██║██╔═══██╗
    ██████╔╝███████║██║   ██║
    ██╔══██╗██╔══██║██║   ██║
    ██║  ██║██║  ██║╚██████╔╝
    ╚═╝  ╚═╝╚═╝  ╚═╝ ╚═════╝
    "#;

    println!();
    println!("{}", style(banner).cyan().bold());
    println!(
        "    {} {}",
        style("ρ").magenta().bold(),
        style("One dataset in, one profile report out").dim()
    );
    println!("    {}", style(format!("v{}", version)).dim());
    println!("    {}", style("━".repeat(50)).dim());
    println!();
}

/// Print the run configuration card
pub fn print_config(title: &str, output: &Path, minimal: bool, head: usize, tail: usize) {
    println!("    {}", style("⚙️  Configuration").cyan().bold());
    println!("    {}", style("─".repeat(50)).dim());
    println!("      Title:   {}", style(title).yellow());
    println!("      Output:  {}", style(output.display()).yellow());
    println!(
        "      Depth:   {}",
        if minimal {
            style("minimal (no correlations or interactions)").yellow()
        } else {
            style("full").yellow()
        }
    );
    println!(
        "      Samples: {} head / {} tail rows",
        style(head).yellow(),
        style(tail).yellow()
    );
    println!();
}

/// Print a numbered step header
pub fn print_step_header(step: usize, title: &str) {
    println!();
    println!(
        "    {} {}",
        style(format!("[{}]", step)).cyan().bold(),
        style(title).white().bold()
    );
    println!("    {}", style("─".repeat(50)).dim());
}

/// Print a success line
pub fn print_success(message: &str) {
    println!("    {} {}", style("✔").green().bold(), message);
}

/// Print an informational line
pub fn print_info(message: &str) {
    println!("    {} {}", style("ℹ").cyan(), message);
}

/// Print a warning line
pub fn print_warning(message: &str) {
    println!("    {} {}", style("⚠").yellow().bold(), message);
}

/// Print elapsed time for a step
pub fn print_step_time(elapsed: Duration) {
    println!(
        "    {}",
        style(format!("took {:.2}s", elapsed.as_secs_f64())).dim()
    );
}

/// Final completion message
pub fn print_completion() {
    println!();
    println!(
        "    {} {}",
        style("✦").magenta().bold(),
        style("Profile complete").white().bold()
    );
    println!();
}
