//! JSON output renderer.
//!
//! Outputs `{"Monday": [...], "Thursday": [...]}` with only non-empty
//! weekdays, in weekday order.

use crate::models::BirthdaysPerWeek;
use crate::output::OutputRenderer;

/// JSON output renderer.
pub struct JsonRenderer;

impl OutputRenderer for JsonRenderer {
    fn render(&self, week: &BirthdaysPerWeek) -> String {
        serde_json::to_string_pretty(week).unwrap_or_else(|_| "{}".to_string())
    }
}
