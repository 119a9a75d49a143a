use crate::calendar::math::is_same_month;
use crate::calendar::{CalendarState, DateFormatter};
use chrono::{Datelike, NaiveDate};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One cell of the month grid.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CalendarMonth {
    /// Month, 0-based.
    pub month0: u32,
    pub year: i32,
    /// Month name for the locale.
    pub name: String,
    /// The selection touches this month.
    pub is_selected: bool,
    /// This is the month of today.
    pub is_current: bool,
    /// The whole month is outside min/max.
    pub is_disabled: bool,
    pub is_focused: bool,
}

/// One cell of the year grid.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CalendarYear {
    pub year: i32,
    pub label: String,
    /// The selection touches this year.
    pub is_selected: bool,
    /// This is the year of today.
    pub is_current: bool,
    /// The whole year is outside min/max.
    pub is_disabled: bool,
    pub is_focused: bool,
}

impl<Fmt> CalendarState<Fmt>
where
    Fmt: DateFormatter,
{
    /// Month grid for the displayed year.
    pub fn calendar_months(&self) -> Vec<CalendarMonth> {
        self.months_of(self.cursor.year())
    }

    /// Month grid for any year. Always 12 months.
    pub fn months_of(&self, year: i32) -> Vec<CalendarMonth> {
        let names = self.month_names(false);
        let today = self.today();
        let anchors = self.selection_anchors();

        (0..12u32)
            .map(|month0| {
                let name = names.get(month0 as usize).cloned().unwrap_or_default();
                // only fails at the very ends of the chrono range
                let first = NaiveDate::from_ymd_opt(year, month0 + 1, 1);
                let in_month = |v: &NaiveDate| first.is_some_and(|f| is_same_month(v, &f));
                CalendarMonth {
                    month0,
                    year,
                    name,
                    is_selected: anchors.iter().flatten().any(in_month),
                    is_current: in_month(&today),
                    is_disabled: self.constraints.is_month_disabled(year, month0),
                    is_focused: self.focused.as_ref().is_some_and(in_month),
                }
            })
            .collect()
    }
}

impl<Fmt> CalendarState<Fmt> {
    /// Year grid for the current year range.
    pub fn calendar_years(&self) -> Vec<CalendarYear> {
        let today = self.today();
        let anchors = self.selection_anchors();

        self.current_year_range()
            .map(|year| CalendarYear {
                year,
                label: year.to_string(),
                is_selected: anchors.iter().flatten().any(|v| v.year() == year),
                is_current: today.year() == year,
                is_disabled: self.constraints.is_year_disabled(year),
                is_focused: self.focused.is_some_and(|v| v.year() == year),
            })
            .collect()
    }

    /// Does the year range contain the displayed year.
    pub fn is_cursor_in_year_range(&self) -> bool {
        self.current_year_range().contains(&self.cursor.year())
    }
}
