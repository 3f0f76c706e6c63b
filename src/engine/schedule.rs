use chrono::{Datelike, NaiveDate};

use super::HabitStore;
use crate::models::{DayCode, Habit};

/// A habit scheduled on some calendar date, with a marker for whether its
/// most recent completion landed on exactly that date.
#[derive(Debug, Clone, Copy)]
pub struct ScheduledHabit<'a> {
    pub habit: &'a Habit,
    /// True iff the habit's last completion is this exact date. A
    /// historical marker only; past completions are not reconciled
    /// against later frequency changes.
    pub done_on_date: bool,
}

impl HabitStore {
    /// Habits whose frequency contains the weekday of `date`, in
    /// collection order. An empty collection yields an empty match set.
    pub fn habits_for_date(&self, date: NaiveDate) -> Vec<ScheduledHabit<'_>> {
        let code = DayCode::from(date.weekday());
        self.habits()
            .iter()
            .filter(|h| h.is_scheduled_on(code))
            .map(|habit| ScheduledHabit {
                habit,
                done_on_date: habit.last_completed == Some(date),
            })
            .collect()
    }
}
