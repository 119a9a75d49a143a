use crate::calendar::math::{date_from_ymd0, days_in_month, weekday_from_sunday};
use chrono::{Datelike, NaiveDate, Weekday};
use std::collections::HashSet;

/// Decides which dates can be selected.
///
/// A date is disabled if it is before the min-date, after the
/// max-date, is one of the disabled dates or falls on one of the
/// disabled weekdays.
///
/// Months and years use a relaxed rule: they are disabled only if
/// they lie completely outside min/max.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Constraints {
    min_date: Option<NaiveDate>,
    max_date: Option<NaiveDate>,
    disabled_dates: HashSet<NaiveDate>,
    disabled_weekdays: HashSet<Weekday>,
}

impl Constraints {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inclusive lower bound.
    pub fn min_date(&self) -> Option<NaiveDate> {
        self.min_date
    }

    /// Inclusive lower bound.
    pub fn set_min_date(&mut self, date: Option<NaiveDate>) {
        self.min_date = date;
    }

    /// Inclusive upper bound.
    pub fn max_date(&self) -> Option<NaiveDate> {
        self.max_date
    }

    /// Inclusive upper bound.
    pub fn set_max_date(&mut self, date: Option<NaiveDate>) {
        self.max_date = date;
    }

    /// Explicitly disabled dates.
    pub fn disabled_dates(&self) -> &HashSet<NaiveDate> {
        &self.disabled_dates
    }

    /// Replaces the disabled dates.
    pub fn set_disabled_dates(&mut self, dates: impl IntoIterator<Item = NaiveDate>) {
        self.disabled_dates = dates.into_iter().collect();
    }

    /// Disable one more date.
    pub fn add_disabled_date(&mut self, date: NaiveDate) -> bool {
        self.disabled_dates.insert(date)
    }

    /// Enable a date again.
    pub fn remove_disabled_date(&mut self, date: NaiveDate) -> bool {
        self.disabled_dates.remove(&date)
    }

    /// Disabled weekdays.
    pub fn disabled_weekdays(&self) -> &HashSet<Weekday> {
        &self.disabled_weekdays
    }

    /// Replaces the disabled weekdays. Weekdays are counted from
    /// Sunday = 0. Anything outside 0..=6 is ignored.
    pub fn set_disabled_weekdays(&mut self, days: impl IntoIterator<Item = i64>) {
        self.disabled_weekdays = days
            .into_iter()
            .filter_map(|v| {
                let wd = weekday_from_sunday(v);
                if wd.is_none() {
                    log::debug!("ignore disabled weekday {}", v);
                }
                wd
            })
            .collect();
    }

    /// Is the date within min/max.
    pub fn is_in_bounds(&self, date: NaiveDate) -> bool {
        if let Some(min_date) = self.min_date {
            if date < min_date {
                return false;
            }
        }
        if let Some(max_date) = self.max_date {
            if date > max_date {
                return false;
            }
        }
        true
    }

    /// Can the date not be selected?
    pub fn is_disabled(&self, date: NaiveDate) -> bool {
        !self.is_in_bounds(date)
            || self.disabled_dates.contains(&date)
            || self.disabled_weekdays.contains(&date.weekday())
    }

    /// Is the whole month outside of min/max?
    ///
    /// Disabled dates and weekdays are not considered.
    pub fn is_month_disabled(&self, year: i32, month0: u32) -> bool {
        let Ok(first) = date_from_ymd0(year, month0, 1) else {
            return true;
        };
        let Ok(len) = days_in_month(year, month0) else {
            return true;
        };
        let last = first + chrono::Days::new(len as u64 - 1);
        self.is_span_outside(first, last)
    }

    /// Is the whole year outside of min/max?
    pub fn is_year_disabled(&self, year: i32) -> bool {
        let (Some(first), Some(last)) = (
            NaiveDate::from_ymd_opt(year, 1, 1),
            NaiveDate::from_ymd_opt(year, 12, 31),
        ) else {
            return true;
        };
        self.is_span_outside(first, last)
    }

    /// Is any day between start and end (inclusive) disabled?
    pub fn contains_disabled(&self, start: NaiveDate, end: NaiveDate) -> bool {
        let (start, end) = if start <= end {
            (start, end)
        } else {
            (end, start)
        };
        start.iter_days().take_while(|v| *v <= end).any(|v| self.is_disabled(v))
    }

    fn is_span_outside(&self, first: NaiveDate, last: NaiveDate) -> bool {
        if let Some(min_date) = self.min_date {
            if last < min_date {
                return true;
            }
        }
        if let Some(max_date) = self.max_date {
            if first > max_date {
                return true;
            }
        }
        false
    }
}
