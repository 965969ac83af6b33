//! Plain renderer: one `<Weekday>: <names>` line per bucket, no styling.

use crate::models::BirthdaysPerWeek;
use crate::output::OutputRenderer;

/// Unstyled line-per-weekday renderer. Empty results render as nothing.
pub struct PlainRenderer;

impl OutputRenderer for PlainRenderer {
    fn render(&self, week: &BirthdaysPerWeek) -> String {
        let mut output = String::new();
        for (day, names) in week.iter() {
            output.push_str(&format!("{}: {}\n", day, names.join(", ")));
        }
        output
    }
}
