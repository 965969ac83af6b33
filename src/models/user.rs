//! User records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A person whose birthday we track.
///
/// Only the month and day of `birthday` matter for recurrence; the year is
/// kept as given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Display name. Not required to be unique.
    pub name: String,
    /// Date of birth, serialized as `YYYY-MM-DD`.
    pub birthday: NaiveDate,
}

impl User {
    pub fn new(name: impl Into<String>, birthday: NaiveDate) -> Self {
        Self {
            name: name.into(),
            birthday,
        }
    }
}
