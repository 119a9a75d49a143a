use crate::_private::NonExhaustive;
use crate::calendar::event::CalOutcome;
use crate::calendar::math::{first_day_of_month, weekday_from_sunday};
use crate::calendar::selection::{RangeSelection, SingleSelection};
use crate::calendar::{
    resolve_locale, validate_pattern, CalendarOptions, CalendarSelection, ChronoFormatter,
    Constraints, DateFormat, DateFormatter, FormatOptions, ISO_MINIMAL_DAYS,
};
use crate::{CalendarError, Locale};
use chrono::{Datelike, Local, NaiveDate, Weekday};
use std::ops::RangeInclusive;

/// Default number of years in the year grid.
pub const DEFAULT_YEAR_RANGE_SIZE: u32 = 12;
/// Largest accepted year-range size.
pub const MAX_YEAR_RANGE_SIZE: u32 = 1000;

///
/// All the state of a calendar.
///
/// Holds the displayed month (the cursor), the selection, the focused
/// date for keyboard navigation and all constraints. The views are
/// generated on demand with [calendar_days](CalendarState::calendar_days),
/// [calendar_months](CalendarState::calendar_months) and
/// [calendar_years](CalendarState::calendar_years). Nothing is cached.
///
/// Commands that are not allowed by the constraints don't fail, they
/// return [CalOutcome::Unchanged] and leave the state as it is.
///
#[derive(Debug, Clone)]
pub struct CalendarState<Fmt = ChronoFormatter> {
    /// First of the displayed month.
    pub(crate) cursor: NaiveDate,
    /// Selection when not in range mode.
    pub(crate) single: SingleSelection,
    /// Selection in range mode.
    pub(crate) range: RangeSelection,
    /// Keyboard focus.
    pub(crate) focused: Option<NaiveDate>,
    pub(crate) range_mode: bool,

    pub(crate) constraints: Constraints,

    pub(crate) first_weekday: Weekday,
    pub(crate) hide_other_month_days: bool,
    pub(crate) week_minimal_days: u8,

    /// Locale tag as given.
    pub(crate) locale_tag: String,
    pub(crate) locale: Locale,
    pub(crate) date_format: Option<String>,
    pub(crate) date_format_options: Option<FormatOptions>,

    /// First year of the year grid.
    pub(crate) year_range_base: i32,
    pub(crate) year_range_size: u32,
    /// The base doesn't follow the cursor.
    pub(crate) year_range_pinned: bool,

    /// Replaces the clock.
    pub(crate) today: Option<NaiveDate>,

    /// Formatting capability.
    pub formatter: Fmt,

    pub non_exhaustive: NonExhaustive,
}

impl<Fmt> Default for CalendarState<Fmt>
where
    Fmt: Default,
{
    fn default() -> Self {
        Self::with_formatter(Fmt::default())
    }
}

impl CalendarState<ChronoFormatter> {
    /// New state with the chrono formatter.
    pub fn new() -> Self {
        Self::with_formatter(ChronoFormatter)
    }

    /// New state with the given options.
    pub fn with_options(options: &CalendarOptions) -> Result<Self, CalendarError> {
        let mut z = Self::new();
        z.apply_options(options)?;
        Ok(z)
    }
}

impl<Fmt> CalendarState<Fmt> {
    /// New state with a different formatter.
    ///
    /// Shows the current month, no selection, weeks start on sunday
    /// and the locale is `en-US`.
    pub fn with_formatter(formatter: Fmt) -> Self {
        let today = Local::now().date_naive();
        let cursor = first_day_of_month(today);
        let size = DEFAULT_YEAR_RANGE_SIZE;

        Self {
            cursor,
            single: Default::default(),
            range: Default::default(),
            focused: None,
            range_mode: false,
            constraints: Default::default(),
            first_weekday: Weekday::Sun,
            hide_other_month_days: false,
            week_minimal_days: ISO_MINIMAL_DAYS,
            locale_tag: "en-US".to_string(),
            locale: Locale::en_US,
            date_format: None,
            date_format_options: None,
            year_range_base: cursor.year() - cursor.year().rem_euclid(size as i32),
            year_range_size: size,
            year_range_pinned: false,
            today: None,
            formatter,
            non_exhaustive: NonExhaustive,
        }
    }

    /// Apply all the options.
    ///
    /// Everything is validated first, if anything is invalid
    /// the state is not changed.
    ///
    /// An initial_selected_date is selected and shown if the
    /// constraints allow it.
    pub fn apply_options(&mut self, options: &CalendarOptions) -> Result<(), CalendarError> {
        let first_weekday = weekday_from_sunday(options.first_day_of_week)
            .ok_or(CalendarError::InvalidWeekday(options.first_day_of_week))?;
        if options.year_range_size <= 0 || options.year_range_size > MAX_YEAR_RANGE_SIZE as i64 {
            return Err(CalendarError::InvalidYearRangeSize(options.year_range_size));
        }
        if !(1..=7).contains(&options.week_minimal_days) {
            return Err(CalendarError::InvalidMinimalDays(options.week_minimal_days));
        }
        let locale = resolve_locale(&options.locale);
        if let Some(pattern) = &options.date_format {
            validate_pattern(pattern, locale)?;
        }

        self.constraints.set_min_date(options.min_date);
        self.constraints.set_max_date(options.max_date);
        self.constraints
            .set_disabled_dates(options.disabled_dates.iter().copied());
        self.constraints
            .set_disabled_weekdays(options.disabled_days_of_week.iter().copied());

        self.first_weekday = first_weekday;
        self.week_minimal_days = options.week_minimal_days;
        self.hide_other_month_days = options.hide_other_month_days;

        self.locale_tag = options.locale.clone();
        self.locale = locale;
        self.date_format = options.date_format.clone();
        self.date_format_options = options.date_format_options;

        self.set_range_mode(options.is_range_selection);
        self.year_range_size = options.year_range_size as u32;
        self.year_range_pinned = false;
        self.update_year_range();

        if let Some(date) = options.initial_selected_date {
            if self.select(date) == CalOutcome::Selected {
                self.set_cursor(date.year(), date.month0());
            }
        }

        Ok(())
    }

    /// Today. Uses the local clock unless it has been replaced
    /// with [set_today](Self::set_today).
    pub fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }

    /// Replace the clock with a fixed date. None uses the local clock.
    pub fn set_today(&mut self, today: Option<NaiveDate>) {
        self.today = today;
    }

    /// First day of the displayed month.
    pub fn cursor_date(&self) -> NaiveDate {
        self.cursor
    }

    /// Displayed year.
    pub fn cursor_year(&self) -> i32 {
        self.cursor.year()
    }

    /// Displayed month. 0-based.
    pub fn cursor_month0(&self) -> u32 {
        self.cursor.month0()
    }

    /// Constraints.
    pub fn constraints(&self) -> &Constraints {
        &self.constraints
    }

    /// Change the constraints.
    ///
    /// Changing the constraints doesn't touch an existing selection.
    pub fn constraints_mut(&mut self) -> &mut Constraints {
        &mut self.constraints
    }

    /// Inclusive lower bound.
    pub fn set_min_date(&mut self, date: Option<NaiveDate>) {
        self.constraints.set_min_date(date);
    }

    /// Inclusive upper bound.
    pub fn set_max_date(&mut self, date: Option<NaiveDate>) {
        self.constraints.set_max_date(date);
    }

    /// Replaces the disabled dates.
    pub fn set_disabled_dates(&mut self, dates: impl IntoIterator<Item = NaiveDate>) {
        self.constraints.set_disabled_dates(dates);
    }

    /// Replaces the disabled weekdays. 0 = Sunday. Invalid entries
    /// are ignored.
    pub fn set_disabled_weekdays(&mut self, days: impl IntoIterator<Item = i64>) {
        self.constraints.set_disabled_weekdays(days);
    }

    /// Can this date be selected?
    pub fn is_date_disabled(&self, date: NaiveDate) -> bool {
        self.constraints.is_disabled(date)
    }

    /// Is the month completely outside min/max?
    pub fn is_month_disabled(&self, year: i32, month0: u32) -> bool {
        self.constraints.is_month_disabled(year, month0)
    }

    /// Is the year completely outside min/max?
    pub fn is_year_disabled(&self, year: i32) -> bool {
        self.constraints.is_year_disabled(year)
    }

    /// First day of the week.
    pub fn first_weekday(&self) -> Weekday {
        self.first_weekday
    }

    /// First day of the week. 0 = Sunday.
    pub fn first_day_of_week(&self) -> u32 {
        self.first_weekday.num_days_from_sunday()
    }

    /// First day of the week. 0 = Sunday.
    /// Anything outside 0..=6 is rejected.
    pub fn set_first_day_of_week(&mut self, day: i64) -> Result<(), CalendarError> {
        self.first_weekday = weekday_from_sunday(day).ok_or(CalendarError::InvalidWeekday(day))?;
        Ok(())
    }

    /// Minimal days of week 1 of a year.
    pub fn week_minimal_days(&self) -> u8 {
        self.week_minimal_days
    }

    /// Minimal days of week 1 of a year. 4 gives ISO 8601 weeks
    /// if the week starts on monday. Must be in 1..=7.
    pub fn set_week_minimal_days(&mut self, days: u8) -> Result<(), CalendarError> {
        if !(1..=7).contains(&days) {
            return Err(CalendarError::InvalidMinimalDays(days));
        }
        self.week_minimal_days = days;
        Ok(())
    }

    /// Leave the days of the adjacent months empty.
    pub fn hide_other_month_days(&self) -> bool {
        self.hide_other_month_days
    }

    /// Leave the days of the adjacent months empty.
    pub fn set_hide_other_month_days(&mut self, hide: bool) {
        self.hide_other_month_days = hide;
    }

    /// Locale tag as it was set.
    pub fn locale_tag(&self) -> &str {
        self.locale_tag.as_str()
    }

    /// Resolved locale.
    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Set the locale. Unknown tags use the platform locale.
    ///
    /// Explicit date formats stay in place.
    pub fn set_locale(&mut self, tag: &str) {
        self.locale_tag = tag.to_string();
        self.locale = resolve_locale(tag);
    }

    /// Explicit chrono date pattern.
    pub fn date_format(&self) -> Option<&str> {
        self.date_format.as_deref()
    }

    /// Explicit chrono date pattern. Wins over the format options
    /// and the locale default. Invalid patterns are rejected.
    pub fn set_date_format(&mut self, pattern: Option<String>) -> Result<(), CalendarError> {
        if let Some(pattern) = &pattern {
            validate_pattern(pattern, self.locale)?;
        }
        self.date_format = pattern;
        Ok(())
    }

    /// Explicit format options.
    pub fn date_format_options(&self) -> Option<FormatOptions> {
        self.date_format_options
    }

    /// Explicit format options. They are used instead of the locale
    /// default until they are cleared with None.
    pub fn set_date_format_options(&mut self, options: Option<FormatOptions>) {
        self.date_format_options = options;
    }

    /// The format actually used.
    pub fn effective_format(&self) -> DateFormat {
        if let Some(pattern) = &self.date_format {
            DateFormat::Pattern(pattern.clone())
        } else if let Some(options) = self.date_format_options {
            DateFormat::Options(options)
        } else {
            DateFormat::locale_default(&self.locale_tag, self.locale)
        }
    }

    /// Range selection active?
    pub fn is_range_mode(&self) -> bool {
        self.range_mode
    }

    /// Switch between single and range selection.
    ///
    /// Leaving range mode clears the range. Entering range mode keeps
    /// the single selection, the next select starts a new range.
    pub fn set_range_mode(&mut self, range_mode: bool) -> CalOutcome {
        if self.range_mode == range_mode {
            return CalOutcome::Unchanged;
        }
        self.range_mode = range_mode;
        if !range_mode {
            self.range.clear();
        }
        CalOutcome::Changed
    }

    /// Selected date in single mode.
    pub fn selected_date(&self) -> Option<NaiveDate> {
        self.single.selected()
    }

    /// Selected range as (start, end).
    pub fn selected_range(&self) -> (Option<NaiveDate>, Option<NaiveDate>) {
        self.range.selected()
    }

    /// Selected range. A lone start counts as one day.
    pub fn selected_range_inclusive(&self) -> Option<RangeInclusive<NaiveDate>> {
        self.range.selected_range()
    }

    /// Number of selected days.
    pub fn selection_len(&self) -> usize {
        if self.range_mode {
            self.range.count()
        } else {
            self.single.count()
        }
    }

    /// Is the date selected with the active selection.
    pub fn is_selected(&self, date: NaiveDate) -> bool {
        if self.range_mode {
            self.range.is_selected(date)
        } else {
            self.single.is_selected(date)
        }
    }

    /// Lead of the active selection.
    pub fn lead_selection(&self) -> Option<NaiveDate> {
        if self.range_mode {
            self.range.lead_selection()
        } else {
            self.single.lead_selection()
        }
    }

    /// Dates of the active selection that are used for month and year
    /// flags. The selected date, or both endpoints of a range.
    pub(crate) fn selection_anchors(&self) -> [Option<NaiveDate>; 2] {
        if self.range_mode {
            [self.range.start(), self.range.end()]
        } else {
            [self.single.selected(), None]
        }
    }

    /// Select the date.
    ///
    /// In single mode this replaces the selection. In range mode the
    /// first call sets the start, the second the end (swapped if
    /// before the start), a third call starts a new range.
    ///
    /// Disabled dates are ignored. The focus moves to the date.
    pub fn select(&mut self, date: NaiveDate) -> CalOutcome {
        if self.constraints.is_disabled(date) {
            log::debug!("select {} rejected, date is disabled", date);
            return CalOutcome::Unchanged;
        }

        let changed = if self.range_mode {
            self.range.select(date)
        } else {
            self.single.select(date)
        };
        self.focused = Some(date);

        if changed {
            CalOutcome::Selected
        } else {
            CalOutcome::Unchanged
        }
    }

    /// Sets a complete range. Endpoints are swapped if necessary.
    ///
    /// Only in range mode. Rejected if one of the endpoints is
    /// disabled. Focus moves to the end.
    pub fn set_selected_range(&mut self, start: NaiveDate, end: NaiveDate) -> CalOutcome {
        if !self.range_mode {
            return CalOutcome::Continue;
        }
        if self.constraints.is_disabled(start) || self.constraints.is_disabled(end) {
            log::debug!("select range {}..={} rejected, disabled endpoint", start, end);
            return CalOutcome::Unchanged;
        }
        if self.range.set_range(start, end) {
            self.focused = self.range.end();
            CalOutcome::Selected
        } else {
            CalOutcome::Unchanged
        }
    }

    /// Does the selected range contain any disabled day.
    pub fn selected_range_has_disabled(&self) -> bool {
        match self.range.selected() {
            (Some(start), Some(end)) => self.constraints.contains_disabled(start, end),
            _ => false,
        }
    }

    /// Clears the single selection and the range, whatever the mode.
    pub fn clear_selection(&mut self) -> CalOutcome {
        if self.single.count() == 0 && self.range.count() == 0 {
            return CalOutcome::Unchanged;
        }
        self.single.clear();
        self.range.clear();
        CalOutcome::Selected
    }
}

impl<Fmt> CalendarState<Fmt>
where
    Fmt: DateFormatter,
{
    /// Format the date with the effective format.
    pub fn format_date(&self, date: NaiveDate) -> Result<String, CalendarError> {
        self.formatter.format(date, &self.effective_format(), self.locale)
    }

    /// Parse a date with the effective format.
    pub fn parse_date(&self, text: &str) -> Result<NaiveDate, CalendarError> {
        self.formatter.parse(text, &self.effective_format(), self.locale)
    }

    /// Text for the date input. The selected date or `start - end`.
    ///
    /// An unfinished range shows only the start.
    pub fn formatted_value(&self) -> Result<String, CalendarError> {
        if self.range_mode {
            match self.range.selected() {
                (Some(start), Some(end)) => Ok(format!(
                    "{} - {}",
                    self.format_date(start)?,
                    self.format_date(end)?
                )),
                (Some(start), None) => self.format_date(start),
                _ => Ok(String::new()),
            }
        } else {
            match self.single.selected() {
                Some(date) => self.format_date(date),
                None => Ok(String::new()),
            }
        }
    }

    /// Long label for screen readers, with weekday and month name.
    pub fn accessible_label(&self, date: NaiveDate) -> Result<String, CalendarError> {
        self.formatter
            .format(date, &DateFormat::Options(FormatOptions::long()), self.locale)
    }

    /// Month names for the locale.
    pub fn month_names(&self, short: bool) -> Vec<String> {
        self.formatter.month_names(short, self.locale)
    }

    /// Weekday names for the locale, starting with the first day
    /// of the week.
    pub fn weekday_names(&self, short: bool) -> Vec<String> {
        self.formatter.weekday_names(short, self.first_weekday, self.locale)
    }

    /// Week number of the date with the configured first weekday
    /// and minimal days.
    pub fn week_number(&self, date: NaiveDate) -> u32 {
        self.formatter.week_number(date, self.first_weekday, self.week_minimal_days)
    }
}
