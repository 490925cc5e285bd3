//! Terminal summary of a script-mode run

use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Color, Table};
use console::style;
use std::path::PathBuf;
use std::time::Duration;

/// What a script-mode run produced, for the closing terminal table
#[derive(Debug, Default)]
pub struct RunSummary {
    pub rows: usize,
    pub variables: usize,
    pub report_bytes: usize,
    pub output: PathBuf,
    pub load_time: Duration,
    pub build_time: Duration,
    pub save_time: Duration,
}

impl RunSummary {
    pub fn display(&self) {
        println!();
        println!(
            "    {} {}",
            style("📋").cyan(),
            style("PROFILE SUMMARY").white().bold()
        );
        println!("    {}", style("─".repeat(50)).dim());
        println!();

        let mut table = Table::new();
        table.load_preset(UTF8_FULL_CONDENSED);
        table.set_header(vec![
            Cell::new("Metric").add_attribute(Attribute::Bold),
            Cell::new("Value").add_attribute(Attribute::Bold),
        ]);

        table.add_row(vec![Cell::new("Rows profiled"), Cell::new(self.rows)]);
        table.add_row(vec![Cell::new("Variables"), Cell::new(self.variables)]);
        table.add_row(vec![
            Cell::new("Report size"),
            Cell::new(format!("{:.1} KB", self.report_bytes as f64 / 1024.0))
                .fg(Color::Green)
                .add_attribute(Attribute::Bold),
        ]);
        table.add_row(vec![
            Cell::new("Report file"),
            Cell::new(self.output.display()),
        ]);
        table.add_row(vec![
            Cell::new("Total time"),
            Cell::new(format!(
                "{:.2}s",
                (self.load_time + self.build_time + self.save_time).as_secs_f64()
            )),
        ]);

        // Indent the table
        for line in table.to_string().lines() {
            println!("    {}", line);
        }
    }
}
