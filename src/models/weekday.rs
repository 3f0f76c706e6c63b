use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Weekday codes used in habit schedules. Thursday is "Th" and Saturday
/// "Sa" so they cannot be confused with Tuesday and Sunday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DayCode {
    Su,
    M,
    T,
    W,
    Th,
    F,
    Sa,
}

impl DayCode {
    /// All codes in calendar order, Sunday first.
    pub fn all() -> [DayCode; 7] {
        [
            DayCode::Su,
            DayCode::M,
            DayCode::T,
            DayCode::W,
            DayCode::Th,
            DayCode::F,
            DayCode::Sa,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DayCode::Su => "Su",
            DayCode::M => "M",
            DayCode::T => "T",
            DayCode::W => "W",
            DayCode::Th => "Th",
            DayCode::F => "F",
            DayCode::Sa => "Sa",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            DayCode::Su => "Sunday",
            DayCode::M => "Monday",
            DayCode::T => "Tuesday",
            DayCode::W => "Wednesday",
            DayCode::Th => "Thursday",
            DayCode::F => "Friday",
            DayCode::Sa => "Saturday",
        }
    }
}

impl std::fmt::Display for DayCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DayCode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "su" | "sun" | "sunday" => Ok(DayCode::Su),
            "m" | "mo" | "mon" | "monday" => Ok(DayCode::M),
            "t" | "tu" | "tue" | "tuesday" => Ok(DayCode::T),
            "w" | "we" | "wed" | "wednesday" => Ok(DayCode::W),
            "th" | "thu" | "thursday" => Ok(DayCode::Th),
            "f" | "fr" | "fri" | "friday" => Ok(DayCode::F),
            "sa" | "sat" | "saturday" => Ok(DayCode::Sa),
            _ => Err(anyhow::anyhow!("Unknown weekday: {}", s)),
        }
    }
}

impl From<Weekday> for DayCode {
    fn from(w: Weekday) -> Self {
        match w {
            Weekday::Sun => DayCode::Su,
            Weekday::Mon => DayCode::M,
            Weekday::Tue => DayCode::T,
            Weekday::Wed => DayCode::W,
            Weekday::Thu => DayCode::Th,
            Weekday::Fri => DayCode::F,
            Weekday::Sat => DayCode::Sa,
        }
    }
}
