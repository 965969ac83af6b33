//! Output renderers: terminal, plain text, JSON.

pub mod json;
pub mod plain;
pub mod terminal;

use crate::models::{BirthdaysPerWeek, OutputFormat};

/// Trait for rendering a weekly birthday result to an output format.
pub trait OutputRenderer {
    /// Render the result to a string.
    fn render(&self, week: &BirthdaysPerWeek) -> String;
}

/// Render `week` with the renderer for `format`.
pub fn render(format: OutputFormat, week: &BirthdaysPerWeek) -> String {
    match format {
        OutputFormat::Terminal => terminal::TerminalRenderer.render(week),
        OutputFormat::Plain => plain::PlainRenderer.render(week),
        OutputFormat::Json => json::JsonRenderer.render(week),
    }
}
