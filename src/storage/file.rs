use anyhow::{Context, Result};
use std::path::Path;

use crate::engine::HabitStore;
use crate::models::Habit;

/// Load the habit store from the given JSON file.
///
/// Fails closed: a missing file is a fresh start, and unreadable or
/// malformed contents are logged and replaced by an empty store rather
/// than surfaced as an error. Nothing downstream has to handle a
/// half-parsed collection.
pub fn load_habits(path: &Path) -> HabitStore {
    if !path.exists() {
        return HabitStore::new();
    }
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            log::warn!("Could not read {:?}: {} — starting with an empty store", path, e);
            return HabitStore::new();
        }
    };
    match serde_json::from_str::<Vec<Habit>>(&content) {
        Ok(habits) => HabitStore::from_habits(habits),
        Err(e) => {
            log::warn!("Malformed habits file {:?}: {} — starting with an empty store", path, e);
            HabitStore::new()
        }
    }
}

/// Write the habit store to disk as a single ordered JSON array.
pub fn save_habits(path: &Path, store: &HabitStore) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let content = serde_json::to_string_pretty(store.habits()).context("Serializing habits")?;
    std::fs::write(path, content).with_context(|| format!("Writing {:?}", path))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DayCode;

    #[test]
    fn round_trips_habits_preserving_order_and_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("habits.json");

        let mut store = HabitStore::new();
        let id = store.create_habit("Read", &[DayCode::M, DayCode::Th], "21:00").unwrap();
        store.create_habit("Run", &[DayCode::Sa], "").unwrap();
        store.toggle_completion(id, "2025-01-06".parse().unwrap());

        save_habits(&path, &store).unwrap();
        let loaded = load_habits(&path);

        assert_eq!(loaded.habits().len(), 2);
        assert_eq!(loaded.habits()[0].name, "Read");
        assert_eq!(loaded.habits()[0].streak, 1);
        assert!(loaded.habits()[0].completed_today);
        assert_eq!(loaded.habits()[0].reminder_time, "21:00");
        assert_eq!(loaded.habits()[1].name, "Run");
        assert_eq!(loaded.habits()[1].frequency, vec![DayCode::Sa]);
    }

    #[test]
    fn missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = load_habits(&dir.path().join("nope.json"));
        assert!(store.is_empty());
    }

    #[test]
    fn malformed_json_fails_closed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("habits.json");
        std::fs::write(&path, "{ not json ]").unwrap();
        assert!(load_habits(&path).is_empty());

        // Valid JSON of the wrong shape is just as malformed.
        std::fs::write(&path, r#"{"habits": 3}"#).unwrap();
        assert!(load_habits(&path).is_empty());
    }

    #[test]
    fn save_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/data/habits.json");
        save_habits(&path, &HabitStore::new()).unwrap();
        assert!(path.exists());
    }
}
