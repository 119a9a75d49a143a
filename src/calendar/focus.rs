use crate::calendar::event::CalOutcome;
use crate::calendar::math::{
    first_day_of_month, is_same_month, last_day_of_month, rotate_weekday, shift_months,
};
use crate::calendar::{CalendarState, DateFormatter};
use chrono::{Datelike, Days, NaiveDate};

/// Keyboard movements of the focused date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FocusMove {
    /// One day back.
    Left,
    /// One day forward.
    Right,
    /// One week back.
    Up,
    /// One week forward.
    Down,
    /// First day of the week.
    StartOfWeek,
    /// Last day of the week.
    EndOfWeek,
    /// First of the month.
    StartOfMonth,
    /// Last day of the month.
    EndOfMonth,
    /// Same day of the previous month.
    PreviousMonth,
    /// Same day of the next month.
    NextMonth,
    /// Same day of the previous year.
    PreviousYear,
    /// Same day of the next year.
    NextYear,
}

impl<Fmt> CalendarState<Fmt> {
    /// Focused date.
    pub fn focused_date(&self) -> Option<NaiveDate> {
        self.focused
    }

    /// Focus a date. The calendar shows the month of this date.
    ///
    /// The date is clamped to min/max.
    pub fn set_focused_date(&mut self, date: NaiveDate) -> CalOutcome {
        self.focus_to(date)
    }

    /// Remove the focus.
    pub fn clear_focus(&mut self) -> CalOutcome {
        if self.focused.take().is_some() {
            CalOutcome::Changed
        } else {
            CalOutcome::Unchanged
        }
    }

    /// Starting point for a focus movement.
    ///
    /// Uses the focused date, or the lead selection if it is in the
    /// displayed month, or the displayed month itself.
    fn focus_origin(&self) -> NaiveDate {
        if let Some(focused) = self.focused {
            return focused;
        }
        if let Some(lead) = self.lead_selection() {
            if is_same_month(&lead, &self.cursor) {
                return lead;
            }
        }
        self.cursor
    }

    /// Sets the focus and lets the cursor follow.
    fn focus_to(&mut self, date: NaiveDate) -> CalOutcome {
        let mut date = date;
        if let Some(min_date) = self.constraints.min_date() {
            date = date.max(min_date);
        }
        if let Some(max_date) = self.constraints.max_date() {
            date = date.min(max_date);
        }

        let mut r = CalOutcome::Unchanged;
        if self.focused != Some(date) {
            self.focused = Some(date);
            r = CalOutcome::Changed;
        }
        if !is_same_month(&date, &self.cursor) {
            if self.set_cursor(date.year(), date.month0()) {
                r = CalOutcome::Changed;
            }
        }
        r
    }

    /// Move the focused date.
    ///
    /// If nothing is focused the movement starts at the selection or
    /// the displayed month. Crossing into another month changes the
    /// displayed month too.
    pub fn move_focus(&mut self, movement: FocusMove) -> CalOutcome {
        let origin = self.focus_origin();

        let target = match movement {
            FocusMove::Left => origin.checked_sub_days(Days::new(1)),
            FocusMove::Right => origin.checked_add_days(Days::new(1)),
            FocusMove::Up => origin.checked_sub_days(Days::new(7)),
            FocusMove::Down => origin.checked_add_days(Days::new(7)),
            FocusMove::StartOfWeek => {
                let offset = self.week_offset(origin);
                origin.checked_sub_days(Days::new(offset as u64))
            }
            FocusMove::EndOfWeek => {
                let offset = self.week_offset(origin);
                origin.checked_add_days(Days::new(6 - offset as u64))
            }
            FocusMove::StartOfMonth => Some(first_day_of_month(origin)),
            FocusMove::EndOfMonth => Some(last_day_of_month(origin)),
            FocusMove::PreviousMonth => shift_months(origin, -1),
            FocusMove::NextMonth => shift_months(origin, 1),
            FocusMove::PreviousYear => shift_months(origin, -12),
            FocusMove::NextYear => shift_months(origin, 12),
        };

        match target {
            Some(target) => self.focus_to(target),
            None => CalOutcome::Unchanged,
        }
    }

    fn week_offset(&self, date: NaiveDate) -> u32 {
        rotate_weekday(
            date.weekday().num_days_from_sunday(),
            self.first_weekday.num_days_from_sunday(),
        )
    }

    /// Focus the previous day.
    pub fn focus_prev_day(&mut self) -> CalOutcome {
        self.move_focus(FocusMove::Left)
    }

    /// Focus the next day.
    pub fn focus_next_day(&mut self) -> CalOutcome {
        self.move_focus(FocusMove::Right)
    }

    /// Focus the same weekday one week back.
    pub fn focus_prev_week(&mut self) -> CalOutcome {
        self.move_focus(FocusMove::Up)
    }

    /// Focus the same weekday one week ahead.
    pub fn focus_next_week(&mut self) -> CalOutcome {
        self.move_focus(FocusMove::Down)
    }

    /// Focus the first day of the week.
    pub fn focus_start_of_week(&mut self) -> CalOutcome {
        self.move_focus(FocusMove::StartOfWeek)
    }

    /// Focus the last day of the week.
    pub fn focus_end_of_week(&mut self) -> CalOutcome {
        self.move_focus(FocusMove::EndOfWeek)
    }

    /// Focus the first of the month.
    pub fn focus_start_of_month(&mut self) -> CalOutcome {
        self.move_focus(FocusMove::StartOfMonth)
    }

    /// Focus the last day of the month.
    pub fn focus_end_of_month(&mut self) -> CalOutcome {
        self.move_focus(FocusMove::EndOfMonth)
    }

    /// Same day in the previous month. The day is clamped to the
    /// length of the month.
    pub fn focus_prev_month(&mut self) -> CalOutcome {
        self.move_focus(FocusMove::PreviousMonth)
    }

    /// Same day in the next month. The day is clamped to the
    /// length of the month.
    pub fn focus_next_month(&mut self) -> CalOutcome {
        self.move_focus(FocusMove::NextMonth)
    }

    /// Same day in the previous year. Feb 29 becomes Feb 28.
    pub fn focus_prev_year(&mut self) -> CalOutcome {
        self.move_focus(FocusMove::PreviousYear)
    }

    /// Same day in the next year. Feb 29 becomes Feb 28.
    pub fn focus_next_year(&mut self) -> CalOutcome {
        self.move_focus(FocusMove::NextYear)
    }

    /// Select the focused date. Does nothing without focus.
    pub fn select_focused_date(&mut self) -> CalOutcome {
        match self.focused {
            Some(date) => self.select(date),
            None => CalOutcome::Continue,
        }
    }
}

impl<Fmt> CalendarState<Fmt>
where
    Fmt: DateFormatter,
{
    /// Label for the focused date, for screen readers.
    pub fn focused_label(&self) -> Option<String> {
        let focused = self.focused?;
        self.accessible_label(focused).ok()
    }
}
