use crate::calendar::CalendarSelection;
use chrono::NaiveDate;

/// Can select a single date.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SingleSelection {
    selected: Option<NaiveDate>,
}

impl CalendarSelection for SingleSelection {
    fn clear(&mut self) {
        self.selected = None;
    }

    fn count(&self) -> usize {
        if self.selected.is_some() {
            1
        } else {
            0
        }
    }

    fn is_selected(&self, date: NaiveDate) -> bool {
        self.selected == Some(date)
    }

    fn lead_selection(&self) -> Option<NaiveDate> {
        self.selected
    }
}

impl SingleSelection {
    /// Select the date. Returns true if this changed the selection.
    pub fn select(&mut self, date: NaiveDate) -> bool {
        let old = self.selected;
        self.selected = Some(date);
        old != self.selected
    }

    pub fn selected(&self) -> Option<NaiveDate> {
        self.selected
    }
}
