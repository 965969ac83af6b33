//! Upcoming-birthday grouping.
//!
//! Given a list of users and a reference date, finds everyone whose next
//! birthday falls within the [`WINDOW_DAYS`]-day window starting today
//! (inclusive) and buckets their names by the weekday of that occurrence.
//! Saturday and Sunday occurrences are reported on Monday.
//!
//! The reference date is always passed in; nothing here reads the clock.

use chrono::{Datelike, NaiveDate};
use thiserror::Error;
use tracing::{debug, trace};

use crate::constants::WINDOW_DAYS;
use crate::models::{BirthdaysPerWeek, LeapDayPolicy, User, Workday};

/// Errors while grouping birthdays.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("{name} was born on February 29, which does not exist in {year} (leap day policy is strict)")]
    LeapDay { name: String, year: i32 },

    #[error("cannot place the birthday of {name} in year {year}")]
    OutOfRange { name: String, year: i32 },
}

/// Group upcoming birthdays using the default leap day policy.
///
/// Equivalent to [`get_birthdays_per_week_with`] with
/// [`LeapDayPolicy::Feb28`], which can never fail.
pub fn get_birthdays_per_week(users: &[User], today: NaiveDate) -> BirthdaysPerWeek {
    get_birthdays_per_week_with(users, today, LeapDayPolicy::Feb28)
        .unwrap_or_else(|e| unreachable!("feb28 places every birthday in a supported year: {e}"))
}

/// Group upcoming birthdays with an explicit leap day policy.
///
/// A single user that cannot be placed aborts the whole call; no partial
/// result is returned.
pub fn get_birthdays_per_week_with(
    users: &[User],
    today: NaiveDate,
    policy: LeapDayPolicy,
) -> Result<BirthdaysPerWeek, ScheduleError> {
    let mut buckets: Vec<(Workday, Vec<String>)> = Vec::new();
    for user in users {
        if let Some(day) = upcoming_workday(user, today, policy)? {
            buckets.push((day, vec![user.name.clone()]));
        }
    }
    let week = BirthdaysPerWeek::from_buckets(buckets);
    debug!(
        users = users.len(),
        upcoming = week.total(),
        %today,
        %policy,
        "grouped upcoming birthdays"
    );
    Ok(week)
}

/// The workday bucket for `user`, or `None` if the birthday is not within
/// the window.
///
/// In the last year chrono can represent there is no next year to roll
/// into, so a birthday already passed that year is simply not upcoming.
fn upcoming_workday(
    user: &User,
    today: NaiveDate,
    policy: LeapDayPolicy,
) -> Result<Option<Workday>, ScheduleError> {
    let this_year = birthday_in_year(user, today.year(), policy)?;

    let occurrence = if this_year < today {
        let next_year = today.year() + 1;
        if next_year > NaiveDate::MAX.year() {
            trace!(name = %user.name, %this_year, "no later year to roll into");
            return Ok(None);
        }
        birthday_in_year(user, next_year, policy)?
    } else {
        this_year
    };

    let days_until = (occurrence - today).num_days();
    if !(0..WINDOW_DAYS).contains(&days_until) {
        trace!(name = %user.name, %occurrence, days_until, "birthday outside window");
        return Ok(None);
    }

    let day = Workday::from_weekday(occurrence.weekday());
    debug!(name = %user.name, %occurrence, days_until, %day, "upcoming birthday");
    Ok(Some(day))
}

/// The user's birthday moved into `year`, resolving February 29 per `policy`.
pub fn birthday_in_year(
    user: &User,
    year: i32,
    policy: LeapDayPolicy,
) -> Result<NaiveDate, ScheduleError> {
    let birthday = user.birthday;
    if let Some(date) = birthday.with_year(year) {
        return Ok(date);
    }

    let shifted = if birthday.month() == 2 && birthday.day() == 29 {
        match policy {
            LeapDayPolicy::Feb28 => NaiveDate::from_ymd_opt(year, 2, 28),
            LeapDayPolicy::Mar1 => NaiveDate::from_ymd_opt(year, 3, 1),
            LeapDayPolicy::Strict => {
                return Err(ScheduleError::LeapDay {
                    name: user.name.clone(),
                    year,
                });
            }
        }
    } else {
        None
    };

    shifted.ok_or_else(|| ScheduleError::OutOfRange {
        name: user.name.clone(),
        year,
    })
}
