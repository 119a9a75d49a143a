use crate::calendar::event::CalOutcome;
use crate::calendar::math::{add_months, date_from_ymd0};
use crate::calendar::{CalendarState, MAX_YEAR_RANGE_SIZE};
use crate::CalendarError;
use chrono::{Datelike, NaiveDate};
use std::ops::RangeInclusive;

impl<Fmt> CalendarState<Fmt> {
    /// Moves the cursor to the given month.
    ///
    /// This is the one place where the cursor changes. It updates
    /// the year range unless that is pinned.
    pub(crate) fn set_cursor(&mut self, year: i32, month0: u32) -> bool {
        let Ok(cursor) = date_from_ymd0(year, month0, 1) else {
            log::debug!("cursor {}-{} out of range", year, month0 + 1);
            return false;
        };
        let old = self.cursor;
        self.cursor = cursor;
        self.update_year_range();
        old != self.cursor
    }

    /// Recalculate the year range base from the cursor.
    pub(crate) fn update_year_range(&mut self) {
        if !self.year_range_pinned {
            self.year_range_base = year_bucket(self.cursor.year(), self.year_range_size);
        }
    }

    /// Show the month.
    pub fn go_to_month(&mut self, month0: u32, year: i32) -> Result<CalOutcome, CalendarError> {
        if month0 > 11 {
            return Err(CalendarError::InvalidMonth(month0));
        }
        Ok(self.set_cursor(year, month0).into())
    }

    /// Show the same month in another year.
    pub fn go_to_year(&mut self, year: i32) -> CalOutcome {
        self.set_cursor(year, self.cursor.month0()).into()
    }

    /// Show the month of the date.
    ///
    /// Dates outside min/max are ignored.
    pub fn go_to_date(&mut self, date: NaiveDate) -> CalOutcome {
        if !self.constraints.is_in_bounds(date) {
            log::debug!("go to {} rejected, out of bounds", date);
            return CalOutcome::Unchanged;
        }
        self.set_cursor(date.year(), date.month0()).into()
    }

    /// Show the current month.
    pub fn go_to_today(&mut self) -> CalOutcome {
        let today = self.today();
        self.set_cursor(today.year(), today.month0()).into()
    }

    /// Show the next month.
    pub fn go_to_next_month(&mut self) -> CalOutcome {
        self.move_cursor(1)
    }

    /// Show the previous month.
    pub fn go_to_previous_month(&mut self) -> CalOutcome {
        self.move_cursor(-1)
    }

    /// Show the same month of the next year.
    pub fn go_to_next_year(&mut self) -> CalOutcome {
        self.move_cursor(12)
    }

    /// Show the same month of the previous year.
    pub fn go_to_previous_year(&mut self) -> CalOutcome {
        self.move_cursor(-12)
    }

    fn move_cursor(&mut self, months: i32) -> CalOutcome {
        let (year, month0) = add_months(self.cursor.year(), self.cursor.month0(), months);
        self.set_cursor(year, month0).into()
    }

    /// Pick a month from the month grid.
    ///
    /// Shows this month. Months completely outside min/max are
    /// ignored. Doesn't change the date selection.
    pub fn select_month(&mut self, month0: u32, year: i32) -> Result<CalOutcome, CalendarError> {
        if month0 > 11 {
            return Err(CalendarError::InvalidMonth(month0));
        }
        if self.constraints.is_month_disabled(year, month0) {
            log::debug!("select month {}-{} rejected", year, month0 + 1);
            return Ok(CalOutcome::Unchanged);
        }
        Ok(self.set_cursor(year, month0).into())
    }

    /// Pick a year from the year grid.
    ///
    /// Shows the same month in this year. Years completely outside
    /// min/max are ignored.
    pub fn select_year(&mut self, year: i32) -> CalOutcome {
        if self.constraints.is_year_disabled(year) {
            log::debug!("select year {} rejected", year);
            return CalOutcome::Unchanged;
        }
        self.go_to_year(year)
    }

    /// First year of the year grid.
    pub fn year_range_base(&self) -> i32 {
        self.year_range_base
    }

    /// Number of years in the year grid.
    pub fn year_range_size(&self) -> u32 {
        self.year_range_size
    }

    /// Years shown in the year grid.
    pub fn current_year_range(&self) -> RangeInclusive<i32> {
        let last = self
            .year_range_base
            .saturating_add(self.year_range_size as i32 - 1);
        self.year_range_base..=last
    }

    /// Is the year range fixed, or does it follow the cursor.
    pub fn is_year_range_pinned(&self) -> bool {
        self.year_range_pinned
    }

    /// Show the year range containing the date. The range stays
    /// there until [unpin_year_range](Self::unpin_year_range) or
    /// [set_year_range_size](Self::set_year_range_size).
    pub fn set_current_year_range(&mut self, date: NaiveDate) -> CalOutcome {
        let old = self.year_range_base;
        self.year_range_base = year_bucket(date.year(), self.year_range_size);
        self.year_range_pinned = true;
        (old != self.year_range_base).into()
    }

    /// The year range follows the cursor again.
    pub fn unpin_year_range(&mut self) -> CalOutcome {
        let old = self.year_range_base;
        self.year_range_pinned = false;
        self.update_year_range();
        (old != self.year_range_base).into()
    }

    /// Show the next range of years.
    pub fn go_to_next_year_range(&mut self) -> CalOutcome {
        let old = self.year_range_base;
        self.year_range_base = self
            .year_range_base
            .saturating_add(self.year_range_size as i32);
        (old != self.year_range_base).into()
    }

    /// Show the previous range of years.
    ///
    /// A range starting at or after year 0 stops at year 0.
    /// Ranges before year 0 move back freely.
    pub fn go_to_previous_year_range(&mut self) -> CalOutcome {
        let old = self.year_range_base;
        let base = self
            .year_range_base
            .saturating_sub(self.year_range_size as i32);
        self.year_range_base = if old >= 0 { base.max(0) } else { base };
        (old != self.year_range_base).into()
    }

    /// Number of years in the year grid. Must be in
    /// `1..=MAX_YEAR_RANGE_SIZE`.
    ///
    /// Releases a pinned year range and recalculates it from the cursor.
    pub fn set_year_range_size(&mut self, size: i64) -> Result<CalOutcome, CalendarError> {
        if size <= 0 || size > MAX_YEAR_RANGE_SIZE as i64 {
            return Err(CalendarError::InvalidYearRangeSize(size));
        }
        let old = (self.year_range_base, self.year_range_size);
        self.year_range_size = size as u32;
        self.year_range_pinned = false;
        self.update_year_range();
        Ok((old != (self.year_range_base, self.year_range_size)).into())
    }
}

/// First year of the bucket containing the year.
pub(crate) fn year_bucket(year: i32, size: u32) -> i32 {
    let size = size.max(1) as i32;
    year - year.rem_euclid(size)
}
