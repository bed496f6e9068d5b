use crate::presentation::view_models::{CellViewModel, StatusViewModel, TableViewModel};
use anyhow::Result;
use owo_colors::OwoColorize;
use std::io::Write;
use tabled::builder::Builder;
use tabled::settings::Style;
use xjs_types::{Controller, Tone};

/// Cell text, wrapped in the tone's color when coloring is on
pub fn paint(cell: &CellViewModel, color: bool) -> String {
    let text = cell.text.as_str();
    match (color, cell.tone) {
        (true, Some(Tone::Good)) => text.green().to_string(),
        (true, Some(Tone::Bad)) => text.red().to_string(),
        (true, Some(Tone::Pending)) => text.red().bold().to_string(),
        (true, Some(Tone::Warning)) => text.yellow().to_string(),
        _ => text.to_string(),
    }
}

pub struct ConsoleRenderer {
    color: bool,
}

impl ConsoleRenderer {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    pub fn render_table(&self, table: &TableViewModel) -> String {
        let mut builder = Builder::default();
        builder.push_record(table.columns.iter().cloned());
        for row in &table.rows {
            builder.push_record(row.iter().map(|cell| paint(cell, self.color)));
        }

        let mut rendered = builder.build();
        rendered.with(Style::psql());
        rendered.to_string()
    }

    /// Warnings, then every table separated by a blank line
    pub fn render_status(&self, status: &StatusViewModel) -> String {
        let mut out = String::new();

        for warning in &status.warnings {
            if self.color {
                out.push_str(&warning.yellow().to_string());
            } else {
                out.push_str(warning);
            }
            out.push('\n');
        }

        let tables: Vec<String> = status
            .tables
            .iter()
            .map(|table| self.render_table(table))
            .collect();
        out.push_str(&tables.join("\n\n"));
        out.push('\n');
        out
    }

    pub fn print_status(&self, status: &StatusViewModel) -> Result<()> {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(self.render_status(status).as_bytes())?;
        stdout.flush()?;
        Ok(())
    }

    /// The normalized graph, one element per controller
    pub fn print_json(&self, controllers: &[Controller]) -> Result<()> {
        println!("{}", serde_json::to_string_pretty(controllers)?);
        Ok(())
    }
}
