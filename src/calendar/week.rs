use crate::calendar::math::rotate_weekday;
use chrono::{Datelike, Days, NaiveDate, Weekday};

/// Minimal days of the first week for ISO 8601.
pub const ISO_MINIMAL_DAYS: u8 = 4;

/// Start of week 1 of the given year.
///
/// Week 1 is the first week starting with `first_weekday` that has
/// at least `minimal_days` days in the new year.
pub fn first_week_start(year: i32, first_weekday: Weekday, minimal_days: u8) -> Option<NaiveDate> {
    let minimal_days = minimal_days.clamp(1, 7) as u32;

    let jan1 = NaiveDate::from_ymd_opt(year, 1, 1)?;
    let offset = rotate_weekday(
        jan1.weekday().num_days_from_sunday(),
        first_weekday.num_days_from_sunday(),
    );
    let start = jan1.checked_sub_days(Days::new(offset as u64))?;
    if 7 - offset >= minimal_days {
        Some(start)
    } else {
        start.checked_add_days(Days::new(7))
    }
}

/// Week based year and week number.
///
/// The first days of January may belong to the last week of the
/// previous year, the last days of December to week 1 of the next one.
pub fn week_of_year(date: NaiveDate, first_weekday: Weekday, minimal_days: u8) -> (i32, u32) {
    let year = date.year();

    if let Some(next_start) = first_week_start(year + 1, first_weekday, minimal_days) {
        if date >= next_start {
            return (year + 1, 1);
        }
    }

    let Some(start) = first_week_start(year, first_weekday, minimal_days) else {
        return (year, 1);
    };
    if date >= start {
        return (year, weeks_between(start, date));
    }

    // belongs to the last week of the previous year. week 1 of the
    // previous year always starts before this date.
    match first_week_start(year - 1, first_weekday, minimal_days) {
        Some(prev_start) => (year - 1, weeks_between(prev_start, date)),
        None => (year, 1),
    }
}

/// Week number of the date.
pub fn week_number(date: NaiveDate, first_weekday: Weekday, minimal_days: u8) -> u32 {
    week_of_year(date, first_weekday, minimal_days).1
}

fn weeks_between(week_start: NaiveDate, date: NaiveDate) -> u32 {
    ((date - week_start).num_days() / 7) as u32 + 1
}
