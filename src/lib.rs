#![doc = include_str!("../readme.md")]
//
#![allow(clippy::collapsible_else_if)]
#![allow(clippy::collapsible_if)]
#![allow(clippy::module_inception)]

use std::error::Error;
use std::fmt::{Display, Formatter};

pub use pure_rust_locales::Locale;

pub mod event {
    //!
    //! Results of the calendar operations.
    //!

    pub use crate::calendar::event::CalOutcome;
}

pub mod calendar;

/// Errors for invalid arguments.
///
/// Requests that are valid but not allowed by the current constraints
/// (disabled dates, min/max) are no errors, they just return
/// [CalOutcome::Unchanged](crate::event::CalOutcome::Unchanged).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalendarError {
    /// Month index outside 0..=11.
    InvalidMonth(u32),
    /// Weekday outside 0..=6.
    InvalidWeekday(i64),
    /// Year range size must be positive.
    InvalidYearRangeSize(i64),
    /// Minimal days of the first week must be in 1..=7.
    InvalidMinimalDays(u8),
    /// The date-pattern can not be used by chrono.
    InvalidPattern(String),
    /// Text could not be parsed as a date.
    ParseDate(String),
}

impl Display for CalendarError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            CalendarError::InvalidMonth(v) => write!(f, "invalid month {} (must be 0..=11)", v),
            CalendarError::InvalidWeekday(v) => write!(f, "invalid weekday {} (must be 0..=6)", v),
            CalendarError::InvalidYearRangeSize(v) => {
                write!(f, "invalid year range size {} (must be > 0)", v)
            }
            CalendarError::InvalidMinimalDays(v) => {
                write!(f, "invalid minimal days {} (must be 1..=7)", v)
            }
            CalendarError::InvalidPattern(v) => write!(f, "invalid date pattern {:?}", v),
            CalendarError::ParseDate(v) => write!(f, "can't parse date {:?}", v),
        }
    }
}

impl Error for CalendarError {}

mod _private {
    #[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct NonExhaustive;
}
