//! Shared types used across all modules.
//!
//! This module defines the core data structures for users, workdays,
//! the grouped weekly result and the user-selectable policies. Other
//! modules import from here rather than reaching into each other's
//! internals.

pub mod user;
pub mod week;
pub mod workday;

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub use user::User;
pub use week::BirthdaysPerWeek;
pub use workday::Workday;

/// How a February 29 birthday is placed in a year without a leap day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LeapDayPolicy {
    /// Celebrate on February 28.
    #[default]
    #[value(name = "feb28")]
    Feb28,
    /// Celebrate on March 1.
    #[value(name = "mar1")]
    Mar1,
    /// Refuse to guess and fail the whole computation.
    Strict,
}

impl fmt::Display for LeapDayPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LeapDayPolicy::Feb28 => write!(f, "feb28"),
            LeapDayPolicy::Mar1 => write!(f, "mar1"),
            LeapDayPolicy::Strict => write!(f, "strict"),
        }
    }
}

impl std::str::FromStr for LeapDayPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "feb28" => Ok(LeapDayPolicy::Feb28),
            "mar1" => Ok(LeapDayPolicy::Mar1),
            "strict" => Ok(LeapDayPolicy::Strict),
            other => Err(format!(
                "unsupported leap day policy: '{other}'. Supported: feb28, mar1, strict"
            )),
        }
    }
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Colored, human-friendly listing.
    #[default]
    Terminal,
    /// `<Weekday>: <names>` lines without styling.
    Plain,
    /// Pretty-printed JSON object keyed by weekday.
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Terminal => write!(f, "terminal"),
            OutputFormat::Plain => write!(f, "plain"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "terminal" => Ok(OutputFormat::Terminal),
            "plain" => Ok(OutputFormat::Plain),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!(
                "unsupported output format: '{other}'. Supported: terminal, plain, json"
            )),
        }
    }
}
