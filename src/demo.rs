//! Built-in sample roster for `birthweek demo`.

use chrono::NaiveDate;

use crate::models::{BirthdaysPerWeek, User};
use crate::schedule;

/// The single sample user shown by the demo.
pub fn sample_users() -> Vec<User> {
    let birthday = NaiveDate::from_ymd_opt(1976, 1, 1).expect("1976-01-01 is a valid date");
    vec![User::new("Jan Koum", birthday)]
}

/// Group the sample roster against `today`.
pub fn run(today: NaiveDate) -> BirthdaysPerWeek {
    schedule::get_birthdays_per_week(&sample_users(), today)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Workday;

    #[test]
    fn sample_has_one_new_year_birthday() {
        let users = sample_users();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].birthday, NaiveDate::from_ymd_opt(1976, 1, 1).unwrap());
    }

    #[test]
    fn demo_shows_new_year_in_late_december() {
        // 2026-01-01 is a Thursday.
        let week = run(NaiveDate::from_ymd_opt(2025, 12, 28).unwrap());
        assert_eq!(week.get(Workday::Thursday), Some(&["Jan Koum".to_string()][..]));
    }

    #[test]
    fn demo_is_empty_mid_year() {
        assert!(run(NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()).is_empty());
    }
}
