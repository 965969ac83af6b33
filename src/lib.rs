//! birthweek — who has a birthday in the coming week (library crate).
//!
//! Re-exports public modules for integration tests and external use.

pub mod config;
pub mod constants;
pub mod demo;
pub mod env;
pub mod models;
pub mod output;
pub mod roster;
pub mod schedule;

pub use models::{BirthdaysPerWeek, LeapDayPolicy, User, Workday};
pub use schedule::{get_birthdays_per_week, get_birthdays_per_week_with};
