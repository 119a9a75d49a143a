use crate::calendar::CalendarSelection;
use chrono::NaiveDate;
use std::ops::RangeInclusive;

/// Can select a date range.
///
/// The first click sets the start, the second one the end.
/// If the second date is before the start both are swapped.
/// A third click starts a new range.
///
/// If there is an end there is always a start, and start <= end.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RangeSelection {
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
}

impl CalendarSelection for RangeSelection {
    fn clear(&mut self) {
        self.start = None;
        self.end = None;
    }

    fn count(&self) -> usize {
        match (self.start, self.end) {
            (Some(start), Some(end)) => (end - start).num_days() as usize + 1,
            (Some(_), None) => 1,
            _ => 0,
        }
    }

    fn is_selected(&self, date: NaiveDate) -> bool {
        match (self.start, self.end) {
            (Some(start), Some(end)) => date >= start && date <= end,
            (Some(start), None) => date == start,
            _ => false,
        }
    }

    fn lead_selection(&self) -> Option<NaiveDate> {
        self.end.or(self.start)
    }
}

impl RangeSelection {
    /// Next step of the click sequence.
    ///
    /// Returns true if this changed the selection.
    pub fn select(&mut self, date: NaiveDate) -> bool {
        let old = (self.start, self.end);

        match (self.start, self.end) {
            (None, _) => {
                self.start = Some(date);
                self.end = None;
            }
            (Some(start), None) => {
                if date < start {
                    self.start = Some(date);
                    self.end = Some(start);
                } else {
                    self.end = Some(date);
                }
            }
            (Some(_), Some(_)) => {
                self.start = Some(date);
                self.end = None;
            }
        }

        old != (self.start, self.end)
    }

    /// Set both endpoints. They are swapped if necessary.
    pub fn set_range(&mut self, start: NaiveDate, end: NaiveDate) -> bool {
        let old = (self.start, self.end);

        if end < start {
            self.start = Some(end);
            self.end = Some(start);
        } else {
            self.start = Some(start);
            self.end = Some(end);
        }

        old != (self.start, self.end)
    }

    /// Start of the range.
    pub fn start(&self) -> Option<NaiveDate> {
        self.start
    }

    /// End of the range. Is None while the second click is pending.
    pub fn end(&self) -> Option<NaiveDate> {
        self.end
    }

    /// Is the range complete.
    pub fn is_complete(&self) -> bool {
        self.end.is_some()
    }

    /// Selection as (start, end) pair.
    pub fn selected(&self) -> (Option<NaiveDate>, Option<NaiveDate>) {
        (self.start, self.end)
    }

    /// Selection as date-range. A lone start gives a one day range.
    pub fn selected_range(&self) -> Option<RangeInclusive<NaiveDate>> {
        match (self.start, self.end) {
            (Some(start), Some(end)) => Some(start..=end),
            (Some(start), None) => Some(start..=start),
            _ => None,
        }
    }

    /// Is the date an endpoint of the range?
    pub fn is_start(&self, date: NaiveDate) -> bool {
        self.start == Some(date)
    }

    /// Is the date an endpoint of the range?
    pub fn is_end(&self, date: NaiveDate) -> bool {
        self.end == Some(date)
    }

    /// Is the date strictly between start and end.
    pub fn is_between(&self, date: NaiveDate) -> bool {
        match (self.start, self.end) {
            (Some(start), Some(end)) => date > start && date < end,
            _ => false,
        }
    }
}
