use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::weekday::DayCode;

/// A single tracked habit. Field names and the empty-string date sentinel
/// follow the persisted JSON layout, so an existing habits file loads as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Habit {
    pub id: Uuid,
    pub name: String,
    pub streak: u32,
    pub completed_today: bool,
    /// Most recent completion date; `None` means never completed.
    #[serde(with = "date_sentinel")]
    pub last_completed: Option<NaiveDate>,
    pub frequency: Vec<DayCode>,
    /// Advisory "HH:MM" reminder, or empty. Never validated or enforced.
    pub reminder_time: String,
}

impl Habit {
    /// Build a fresh habit: zero streak, not completed, never completed.
    /// Duplicate frequency codes are collapsed, first occurrence wins.
    pub fn new(name: &str, frequency: &[DayCode], reminder_time: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            streak: 0,
            completed_today: false,
            last_completed: None,
            frequency: dedup_frequency(frequency),
            reminder_time: reminder_time.to_string(),
        }
    }

    /// True iff this habit is scheduled on the given weekday code.
    pub fn is_scheduled_on(&self, day: DayCode) -> bool {
        self.frequency.contains(&day)
    }
}

pub fn dedup_frequency(days: &[DayCode]) -> Vec<DayCode> {
    let mut out = Vec::with_capacity(days.len());
    for &day in days {
        if !out.contains(&day) {
            out.push(day);
        }
    }
    out
}

/// Serialize `Option<NaiveDate>` as "YYYY-MM-DD", with "" standing in for
/// "never" in the stored record.
mod date_sentinel {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%d";

    pub fn serialize<S>(date: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match date {
            Some(d) => serializer.serialize_str(&d.format(FORMAT).to_string()),
            None => serializer.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        if s.is_empty() {
            return Ok(None);
        }
        NaiveDate::parse_from_str(&s, FORMAT)
            .map(Some)
            .map_err(serde::de::Error::custom)
    }
}
