use crate::calendar::math::{date_from_ymd0, first_weekday_of_month, rotate_weekday};
use crate::calendar::{week, CalendarState};
use crate::CalendarError;
use chrono::{Datelike, Days, NaiveDate};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Days per week.
pub const WEEK_LEN: usize = 7;
/// Rows of the day grid.
pub const WEEKS_PER_GRID: usize = 6;
/// The day grid always has 6 full weeks.
pub const DAY_GRID_LEN: usize = WEEK_LEN * WEEKS_PER_GRID;

/// One cell of the day grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CalendarDay {
    pub date: NaiveDate,
    /// Day of month, 1-based.
    pub day: u32,
    /// Month, 0-based.
    pub month0: u32,
    pub year: i32,
    /// False for the leading/trailing days of the adjacent months.
    pub is_current_month: bool,
    pub is_today: bool,
    /// The selected date, or one of the range endpoints.
    pub is_selected: bool,
    pub is_focused: bool,
    pub is_disabled: bool,
    /// Strictly between the range endpoints.
    pub is_in_range: bool,
    pub is_range_start: bool,
    pub is_range_end: bool,
}

impl<Fmt> CalendarState<Fmt> {
    /// Day grid for the displayed month.
    ///
    /// Always [DAY_GRID_LEN] cells, starting with the first day of
    /// the week. Days of the adjacent months are None if
    /// [hide_other_month_days](CalendarState::hide_other_month_days)
    /// is set.
    pub fn calendar_days(&self) -> Vec<Option<CalendarDay>> {
        self.days_of(self.cursor.year(), self.cursor.month0())
            .unwrap_or_default()
    }

    /// Day grid for any month.
    pub fn days_of(
        &self,
        year: i32,
        month0: u32,
    ) -> Result<Vec<Option<CalendarDay>>, CalendarError> {
        let grid_start = self.grid_start(year, month0)?;
        let today = self.today();

        let mut days = Vec::with_capacity(DAY_GRID_LEN);
        for i in 0..DAY_GRID_LEN {
            let Some(date) = grid_start.checked_add_days(Days::new(i as u64)) else {
                days.push(None);
                continue;
            };
            let in_month = date.year() == year && date.month0() == month0;
            if !in_month && self.hide_other_month_days {
                days.push(None);
            } else {
                days.push(Some(self.day_cell(date, in_month, today)));
            }
        }
        Ok(days)
    }

    /// Week numbers for the rows of the displayed day grid.
    pub fn week_numbers(&self) -> Vec<u32> {
        self.week_numbers_of(self.cursor.year(), self.cursor.month0())
            .unwrap_or_default()
    }

    /// Week numbers for the rows of the day grid of any month.
    ///
    /// Rows start with the first day of the week, which is the start
    /// of the week for numbering too.
    pub fn week_numbers_of(&self, year: i32, month0: u32) -> Result<Vec<u32>, CalendarError> {
        let grid_start = self.grid_start(year, month0)?;
        Ok(grid_start
            .iter_weeks()
            .take(WEEKS_PER_GRID)
            .map(|v| week::week_number(v, self.first_weekday, self.week_minimal_days))
            .collect())
    }

    /// First date shown in the day grid.
    fn grid_start(&self, year: i32, month0: u32) -> Result<NaiveDate, CalendarError> {
        let first = date_from_ymd0(year, month0, 1)?;
        let leading = rotate_weekday(
            first_weekday_of_month(year, month0)?,
            self.first_weekday.num_days_from_sunday(),
        );
        first
            .checked_sub_days(Days::new(leading as u64))
            .ok_or_else(|| CalendarError::ParseDate(format!("{}", first)))
    }

    fn day_cell(&self, date: NaiveDate, in_month: bool, today: NaiveDate) -> CalendarDay {
        let (is_selected, is_range_start, is_range_end, is_in_range) = if self.range_mode {
            let start = self.range.is_start(date);
            let end = self.range.is_end(date);
            (start || end, start, end, self.range.is_between(date))
        } else {
            (self.single.selected() == Some(date), false, false, false)
        };

        CalendarDay {
            date,
            day: date.day(),
            month0: date.month0(),
            year: date.year(),
            is_current_month: in_month,
            is_today: date == today,
            is_selected,
            is_focused: self.focused == Some(date),
            is_disabled: self.constraints.is_disabled(date),
            is_in_range,
            is_range_start,
            is_range_end,
        }
    }
}
