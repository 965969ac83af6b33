//! Working weekdays, the only keys a weekly result can have.

use chrono::Weekday;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// Monday through Friday, in calendar order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
pub enum Workday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl Workday {
    /// Map a calendar weekday onto a workday, folding the weekend onto Monday.
    pub fn from_weekday(weekday: Weekday) -> Self {
        match weekday {
            Weekday::Mon | Weekday::Sat | Weekday::Sun => Workday::Monday,
            Weekday::Tue => Workday::Tuesday,
            Weekday::Wed => Workday::Wednesday,
            Weekday::Thu => Workday::Thursday,
            Weekday::Fri => Workday::Friday,
        }
    }

    /// English weekday name, e.g. `"Monday"`.
    pub fn name(self) -> &'static str {
        self.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn weekend_folds_onto_monday() {
        assert_eq!(Workday::from_weekday(Weekday::Sat), Workday::Monday);
        assert_eq!(Workday::from_weekday(Weekday::Sun), Workday::Monday);
    }

    #[test]
    fn working_days_map_to_themselves() {
        let weekdays = [Weekday::Mon, Weekday::Tue, Weekday::Wed, Weekday::Thu, Weekday::Fri];
        for (weekday, workday) in weekdays.into_iter().zip(Workday::iter()) {
            assert_eq!(Workday::from_weekday(weekday), workday);
        }
    }

    #[test]
    fn iteration_is_monday_to_friday() {
        let names: Vec<_> = Workday::iter().map(Workday::name).collect();
        assert_eq!(names, ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"]);
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("friday".parse::<Workday>().unwrap(), Workday::Friday);
        assert_eq!("WEDNESDAY".parse::<Workday>().unwrap(), Workday::Wednesday);
        assert!("Saturday".parse::<Workday>().is_err());
    }

    #[test]
    fn serializes_as_name() {
        assert_eq!(serde_json::to_string(&Workday::Thursday).unwrap(), "\"Thursday\"");
        assert_eq!(Workday::Thursday.to_string(), "Thursday");
    }
}
