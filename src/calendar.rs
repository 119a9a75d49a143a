//!
//! Calendar state engine.
//!
//! [CalendarState] holds the displayed month, the selection, the
//! keyboard focus and all the constraints. It generates the data for
//! a day grid, a month grid and a year grid. How these are rendered
//! is left to the user.
//!

use chrono::NaiveDate;

mod calendar;
mod constraint;
pub(crate) mod event;
mod focus;
mod format;
pub mod math;
mod month;
mod navigation;
mod options;
mod range_selection;
mod single_selection;
mod week;
mod year;

pub use calendar::*;
pub use constraint::*;
pub use focus::*;
pub use format::*;
pub use month::*;
pub use options::*;
pub use week::*;
pub use year::*;

/// Selection model for a calendar.
pub trait CalendarSelection {
    /// Clear all selections.
    fn clear(&mut self);

    /// Number of selected days.
    fn count(&self) -> usize;

    /// Is the given day selected.
    fn is_selected(&self, date: NaiveDate) -> bool;

    /// Selection lead, or the sole selected day.
    fn lead_selection(&self) -> Option<NaiveDate>;
}

pub mod selection {
    pub use super::range_selection::*;
    pub use super::single_selection::*;
}
