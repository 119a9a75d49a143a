//!
//! Date arithmetic.
//!
//! Months are 0-based (0 = January), weekdays are counted from Sunday
//! (0 = Sunday, 6 = Saturday).
//!

use crate::CalendarError;
use chrono::{Datelike, NaiveDate, Weekday};

/// Gregorian leap year.
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Number of days of the month.
pub fn days_in_month(year: i32, month0: u32) -> Result<u32, CalendarError> {
    let days = match month0 {
        0 | 2 | 4 | 6 | 7 | 9 | 11 => 31,
        3 | 5 | 8 | 10 => 30,
        1 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => return Err(CalendarError::InvalidMonth(month0)),
    };
    Ok(days)
}

/// Weekday of the first day of the month. 0 = Sunday.
pub fn first_weekday_of_month(year: i32, month0: u32) -> Result<u32, CalendarError> {
    let first = date_from_ymd0(year, month0, 1)?;
    Ok(first.weekday().num_days_from_sunday())
}

/// Offset of the weekday `day` within a week starting with `first_weekday`.
///
/// Both are counted from Sunday.
pub fn rotate_weekday(day: u32, first_weekday: u32) -> u32 {
    (day % 7 + 7 - first_weekday % 7) % 7
}

/// Weekday for a Sunday based index.
pub fn weekday_from_sunday(day: i64) -> Option<Weekday> {
    if (0..=6).contains(&day) {
        let mut wd = Weekday::Sun;
        for _ in 0..day {
            wd = wd.succ();
        }
        Some(wd)
    } else {
        None
    }
}

/// Same calendar day. Time of day is ignored.
pub fn is_same_day(a: &impl Datelike, b: &impl Datelike) -> bool {
    a.year() == b.year() && a.ordinal() == b.ordinal()
}

/// Same month of the same year.
pub fn is_same_month(a: &impl Datelike, b: &impl Datelike) -> bool {
    a.year() == b.year() && a.month() == b.month()
}

/// Same year.
pub fn is_same_year(a: &impl Datelike, b: &impl Datelike) -> bool {
    a.year() == b.year()
}

/// Creates a date with a 0-based month.
pub fn date_from_ymd0(year: i32, month0: u32, day: u32) -> Result<NaiveDate, CalendarError> {
    if month0 > 11 {
        return Err(CalendarError::InvalidMonth(month0));
    }
    NaiveDate::from_ymd_opt(year, month0 + 1, day).ok_or_else(|| {
        CalendarError::ParseDate(format!("{:04}-{:02}-{:02}", year, month0 + 1, day))
    })
}

/// First day of the month of the given date.
pub fn first_day_of_month(date: NaiveDate) -> NaiveDate {
    date - chrono::Days::new(date.day0() as u64)
}

/// Last day of the month of the given date.
pub fn last_day_of_month(date: NaiveDate) -> NaiveDate {
    let len = days_in_month(date.year(), date.month0()).unwrap_or(28);
    first_day_of_month(date) + chrono::Days::new(len as u64 - 1)
}

/// Adds `n` months (may be negative) to the given year/month0.
pub fn add_months(year: i32, month0: u32, n: i32) -> (i32, u32) {
    let total = year * 12 + month0 as i32 + n;
    (total.div_euclid(12), total.rem_euclid(12) as u32)
}

/// Moves the date by `n` months and clamps the day to the length
/// of the target month. Jan 31 + 1 month gives Feb 28/29.
pub fn shift_months(date: NaiveDate, n: i32) -> Option<NaiveDate> {
    let (year, month0) = add_months(date.year(), date.month0(), n);
    let len = days_in_month(year, month0).ok()?;
    NaiveDate::from_ymd_opt(year, month0 + 1, date.day().min(len))
}
