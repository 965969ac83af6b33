//! The grouped result of a weekly birthday lookup.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

use super::Workday;

/// Names with an upcoming birthday, bucketed by workday.
///
/// Buckets are kept in Monday→Friday order and only non-empty buckets are
/// present. Names inside a bucket keep the order they were added in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BirthdaysPerWeek {
    buckets: IndexMap<Workday, Vec<String>>,
}

impl BirthdaysPerWeek {
    /// Build from per-workday buckets, dropping the empty ones and
    /// restoring weekday order.
    pub fn from_buckets(buckets: impl IntoIterator<Item = (Workday, Vec<String>)>) -> Self {
        let mut template: IndexMap<Workday, Vec<String>> =
            Workday::iter().map(|day| (day, Vec::new())).collect();
        for (day, names) in buckets {
            template[&day].extend(names);
        }
        template.retain(|_, names| !names.is_empty());
        Self { buckets: template }
    }

    /// Names for a single workday, if any.
    pub fn get(&self, day: Workday) -> Option<&[String]> {
        self.buckets.get(&day).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Workday, &[String])> {
        self.buckets.iter().map(|(day, names)| (*day, names.as_slice()))
    }

    pub fn days(&self) -> impl Iterator<Item = Workday> + '_ {
        self.buckets.keys().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Total number of names across all buckets.
    pub fn total(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    pub fn into_inner(self) -> IndexMap<Workday, Vec<String>> {
        self.buckets
    }
}
