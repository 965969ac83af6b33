//! Terminal renderer: styled weekday headings with the names beside them.

use colored::Colorize;

use crate::models::BirthdaysPerWeek;
use crate::output::OutputRenderer;

/// Terminal output renderer with colored text.
pub struct TerminalRenderer;

impl OutputRenderer for TerminalRenderer {
    fn render(&self, week: &BirthdaysPerWeek) -> String {
        if week.is_empty() {
            return format!("{}\n", "  No birthdays in the coming week.".dimmed());
        }

        let mut output = String::new();
        for (day, names) in week.iter() {
            // Pad before styling so ANSI codes don't skew the alignment.
            let heading = format!("{:<10}", format!("{day}:"));
            output.push_str(&format!("  {} {}\n", heading.cyan().bold(), names.join(", ")));
        }

        let total = week.total();
        output.push_str(&format!("{}\n", "───────────────────────────────────".dimmed()));
        output.push_str(&format!(
            "  {} {} this week\n",
            total.to_string().bold(),
            if total == 1 { "birthday" } else { "birthdays" },
        ));

        output
    }
}
