pub mod schedule;

use chrono::NaiveDate;
use thiserror::Error;
use uuid::Uuid;

use crate::models::{DayCode, Habit, ProgressSummary};
use crate::models::habit::dedup_frequency;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("habit name must not be empty")]
    EmptyName,
}

/// The in-memory habit collection. Owns every `Habit` record; callers read
/// through `habits()` and mutate only through the commands below. Each
/// command takes `today` explicitly so behavior is reproducible in tests.
#[derive(Debug, Clone, Default)]
pub struct HabitStore {
    habits: Vec<Habit>,
}

impl HabitStore {
    pub fn new() -> Self {
        Self { habits: Vec::new() }
    }

    /// Build a store from previously persisted records, restoring the
    /// collection invariants: a habit whose id was already seen is dropped,
    /// and duplicate frequency codes are collapsed.
    pub fn from_habits(habits: Vec<Habit>) -> Self {
        let mut out: Vec<Habit> = Vec::with_capacity(habits.len());
        for mut habit in habits {
            if out.iter().any(|h| h.id == habit.id) {
                log::warn!("Dropping habit '{}' with duplicate id {}", habit.name, habit.id);
                continue;
            }
            habit.frequency = dedup_frequency(&habit.frequency);
            out.push(habit);
        }
        Self { habits: out }
    }

    pub fn habits(&self) -> &[Habit] {
        &self.habits
    }

    pub fn is_empty(&self) -> bool {
        self.habits.is_empty()
    }

    pub fn find(&self, id: Uuid) -> Option<&Habit> {
        self.habits.iter().find(|h| h.id == id)
    }

    // ─── Creation ────────────────────────────────────────────────────────

    /// Append a new habit and return its id. The name is trimmed first and
    /// a blank result is rejected without touching the store. Frequency may
    /// be empty ("no day selected yet"); the reminder string is stored
    /// verbatim.
    pub fn create_habit(
        &mut self,
        name: &str,
        frequency: &[DayCode],
        reminder_time: &str,
    ) -> Result<Uuid, EngineError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(EngineError::EmptyName);
        }
        let habit = Habit::new(name, frequency, reminder_time);
        let id = habit.id;
        self.habits.push(habit);
        Ok(id)
    }

    // ─── Completion toggle ───────────────────────────────────────────────

    /// Toggle a habit's done-today state. Marking done credits the streak
    /// for at most one distinct calendar day: an unbroken run (last
    /// completion was yesterday) extends it, a gap restarts it at 1, and
    /// re-marking on a day already credited leaves it alone. Un-marking
    /// clears the flag but keeps the streak and last-completed date, so an
    /// accidental double toggle costs nothing.
    ///
    /// An unknown id is a silent no-op; the store is returned unchanged.
    pub fn toggle_completion(&mut self, id: Uuid, today: NaiveDate) {
        let Some(habit) = self.habits.iter_mut().find(|h| h.id == id) else {
            log::debug!("toggle_completion: no habit with id {}", id);
            return;
        };

        if habit.completed_today {
            habit.completed_today = false;
            return;
        }

        let extends_run = today
            .pred_opt()
            .is_some_and(|yesterday| habit.last_completed == Some(yesterday));
        if extends_run {
            habit.streak += 1;
        } else if habit.last_completed != Some(today) {
            habit.streak = 1;
        }
        habit.completed_today = true;
        habit.last_completed = Some(today);
    }

    // ─── Daily rollover ──────────────────────────────────────────────────

    /// Clear the done-today flag on every habit last completed before
    /// `today`. Streaks and completion dates are untouched; running it
    /// again on the same date changes nothing. Returns whether any habit
    /// was touched so the caller knows to persist.
    pub fn apply_daily_rollover(&mut self, today: NaiveDate) -> bool {
        let mut changed = false;
        for habit in &mut self.habits {
            if habit.completed_today && habit.last_completed != Some(today) {
                habit.completed_today = false;
                changed = true;
            }
        }
        if changed {
            log::debug!("Rollover cleared stale completion flags for {}", today);
        }
        changed
    }

    // ─── Progress summary ────────────────────────────────────────────────

    pub fn progress_summary(&self) -> ProgressSummary {
        ProgressSummary {
            completed: self.habits.iter().filter(|h| h.completed_today).count(),
            total: self.habits.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn store_with(names: &[&str]) -> (HabitStore, Vec<Uuid>) {
        let mut store = HabitStore::new();
        let ids = names
            .iter()
            .map(|n| store.create_habit(n, &[DayCode::M], "").unwrap())
            .collect();
        (store, ids)
    }

    #[test]
    fn blank_name_is_rejected_and_store_unchanged() {
        let mut store = HabitStore::new();
        assert_eq!(store.create_habit("", &[], ""), Err(EngineError::EmptyName));
        assert_eq!(store.create_habit("   \t", &[], ""), Err(EngineError::EmptyName));
        assert!(store.is_empty());
    }

    #[test]
    fn creation_trims_name_and_preserves_order() {
        let mut store = HabitStore::new();
        store.create_habit("  Read  ", &[], "").unwrap();
        store.create_habit("Run", &[], "08:00").unwrap();
        let names: Vec<&str> = store.habits().iter().map(|h| h.name.as_str()).collect();
        assert_eq!(names, vec!["Read", "Run"]);
        assert_eq!(store.habits()[1].reminder_time, "08:00");
    }

    #[test]
    fn first_completion_starts_streak_at_one() {
        let (mut store, ids) = store_with(&["Read"]);
        store.toggle_completion(ids[0], date("2025-01-01"));
        let habit = store.find(ids[0]).unwrap();
        assert_eq!(habit.streak, 1);
        assert!(habit.completed_today);
        assert_eq!(habit.last_completed, Some(date("2025-01-01")));
    }

    #[test]
    fn three_consecutive_days_reach_streak_three() {
        let (mut store, ids) = store_with(&["Read"]);
        for day in ["2025-01-01", "2025-01-02", "2025-01-03"] {
            store.apply_daily_rollover(date(day));
            store.toggle_completion(ids[0], date(day));
        }
        assert_eq!(store.find(ids[0]).unwrap().streak, 3);
    }

    #[test]
    fn gap_resets_streak_to_one() {
        let (mut store, ids) = store_with(&["Read"]);
        store.toggle_completion(ids[0], date("2025-01-01"));
        store.apply_daily_rollover(date("2025-01-05"));
        store.toggle_completion(ids[0], date("2025-01-05"));
        assert_eq!(store.find(ids[0]).unwrap().streak, 1);
    }

    #[test]
    fn double_toggle_same_day_is_inverse_on_flag_only() {
        let (mut store, ids) = store_with(&["Read"]);
        store.toggle_completion(ids[0], date("2025-01-01"));
        let after_first = store.find(ids[0]).unwrap().clone();

        store.toggle_completion(ids[0], date("2025-01-01"));
        let habit = store.find(ids[0]).unwrap();
        assert!(!habit.completed_today);
        assert_eq!(habit.streak, after_first.streak);
        assert_eq!(habit.last_completed, after_first.last_completed);

        // Re-marking the same day keeps the already-credited streak.
        store.toggle_completion(ids[0], date("2025-01-01"));
        let habit = store.find(ids[0]).unwrap();
        assert!(habit.completed_today);
        assert_eq!(habit.streak, 1);
    }

    #[test]
    fn unknown_id_is_a_silent_no_op() {
        let (mut store, _) = store_with(&["Read"]);
        let before = store.clone();
        store.toggle_completion(Uuid::new_v4(), date("2025-01-01"));
        assert_eq!(store.habits().len(), before.habits().len());
        assert_eq!(store.habits()[0].streak, before.habits()[0].streak);
        assert_eq!(store.habits()[0].completed_today, before.habits()[0].completed_today);
    }

    #[test]
    fn toggle_touches_only_the_targeted_habit() {
        let (mut store, ids) = store_with(&["Read", "Run"]);
        store.toggle_completion(ids[0], date("2025-01-01"));
        assert!(store.find(ids[0]).unwrap().completed_today);
        assert!(!store.find(ids[1]).unwrap().completed_today);
        assert_eq!(store.find(ids[1]).unwrap().streak, 0);
    }

    #[test]
    fn rollover_clears_yesterdays_flag_and_is_idempotent() {
        let (mut store, ids) = store_with(&["Read"]);
        store.toggle_completion(ids[0], date("2025-01-01"));

        assert!(store.apply_daily_rollover(date("2025-01-02")));
        let habit = store.find(ids[0]).unwrap();
        assert!(!habit.completed_today);
        assert_eq!(habit.streak, 1);
        assert_eq!(habit.last_completed, Some(date("2025-01-01")));

        assert!(!store.apply_daily_rollover(date("2025-01-02")));
    }

    #[test]
    fn rollover_keeps_todays_completion() {
        let (mut store, ids) = store_with(&["Read"]);
        store.toggle_completion(ids[0], date("2025-01-02"));
        assert!(!store.apply_daily_rollover(date("2025-01-02")));
        assert!(store.find(ids[0]).unwrap().completed_today);
    }

    #[test]
    fn progress_summary_counts_done_habits() {
        let (mut store, ids) = store_with(&["Read", "Run", "Stretch"]);
        store.toggle_completion(ids[0], date("2025-01-01"));
        let summary = store.progress_summary();
        assert_eq!(summary.completed, 1);
        assert_eq!(summary.total, 3);
        assert_eq!(summary.percentage(), 33);
    }

    #[test]
    fn progress_summary_on_empty_store() {
        let store = HabitStore::new();
        let summary = store.progress_summary();
        assert_eq!((summary.completed, summary.total, summary.percentage()), (0, 0, 0));
    }

    #[test]
    fn from_habits_drops_duplicate_ids() {
        let mut a = Habit::new("Read", &[DayCode::M], "");
        let b = a.clone();
        a.streak = 2;
        let store = HabitStore::from_habits(vec![a, b]);
        assert_eq!(store.habits().len(), 1);
        assert_eq!(store.habits()[0].streak, 2);
    }
}
