use crate::_private::NonExhaustive;
use crate::calendar::FormatOptions;
use chrono::NaiveDate;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Composite configuration for the calendar.
///
/// Used with [CalendarState::with_options](crate::calendar::CalendarState::with_options)
/// and [CalendarState::apply_options](crate::calendar::CalendarState::apply_options).
/// All fields are validated before anything is changed.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CalendarOptions {
    /// Selected at startup. The calendar shows this month.
    pub initial_selected_date: Option<NaiveDate>,
    /// Inclusive lower bound.
    pub min_date: Option<NaiveDate>,
    /// Inclusive upper bound.
    pub max_date: Option<NaiveDate>,
    /// Dates that can't be selected.
    pub disabled_dates: Vec<NaiveDate>,
    /// Weekdays that can't be selected. 0 = Sunday.
    /// Invalid entries are ignored.
    pub disabled_days_of_week: Vec<i64>,
    /// First day of the week. 0 = Sunday.
    pub first_day_of_week: i64,
    /// Locale tag like `en-US`.
    pub locale: String,
    /// chrono date pattern. Wins over everything else.
    pub date_format: Option<String>,
    /// Parts of the date. Wins over the locale default.
    pub date_format_options: Option<FormatOptions>,
    /// Select a range instead of a single date.
    pub is_range_selection: bool,
    /// Leave the days of the adjacent months empty.
    pub hide_other_month_days: bool,
    /// Number of years in the year grid.
    pub year_range_size: i64,
    /// Minimal days of week 1 of a year.
    pub week_minimal_days: u8,

    #[cfg_attr(feature = "serde", serde(skip))]
    pub non_exhaustive: NonExhaustive,
}

impl Default for CalendarOptions {
    fn default() -> Self {
        Self {
            initial_selected_date: None,
            min_date: None,
            max_date: None,
            disabled_dates: Default::default(),
            disabled_days_of_week: Default::default(),
            first_day_of_week: 0,
            locale: "en-US".to_string(),
            date_format: None,
            date_format_options: None,
            is_range_selection: false,
            hide_other_month_days: false,
            year_range_size: 12,
            week_minimal_days: 4,
            non_exhaustive: NonExhaustive,
        }
    }
}
