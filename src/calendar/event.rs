/// Result of a calendar operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum CalOutcome {
    /// The operation doesn't apply in the current state.
    Continue,
    /// The operation has been recognized, but the result was nil.
    /// Requests rejected by the constraints end up here too.
    Unchanged,
    /// The displayed month/year or the focus has changed.
    /// Regenerating the views is advised.
    Changed,
    /// The selection has changed.
    Selected,
}

impl CalOutcome {
    /// Did the operation do something at all?
    pub fn is_consumed(&self) -> bool {
        *self != CalOutcome::Continue
    }

    /// Did the operation change any state?
    pub fn is_changed(&self) -> bool {
        *self >= CalOutcome::Changed
    }
}

// Useful for converting most navigation results.
impl From<bool> for CalOutcome {
    fn from(value: bool) -> Self {
        if value {
            CalOutcome::Changed
        } else {
            CalOutcome::Unchanged
        }
    }
}
