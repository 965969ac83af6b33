//! CLI command definitions and argument parsing.
//!
//! Uses clap derive macros for ergonomic argument definitions.

pub mod args;

use chrono::NaiveDate;

/// Parse a `YYYY-MM-DD` date for `--today`.
pub fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|e| format!("invalid date '{s}' (expected YYYY-MM-DD): {e}"))
}

/// The reference date, falling back to the local system date.
pub fn resolve_today(explicit: Option<NaiveDate>) -> NaiveDate {
    explicit.unwrap_or_else(|| chrono::Local::now().date_naive())
}
