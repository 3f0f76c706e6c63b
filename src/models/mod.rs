pub mod habit;
pub mod summary;
pub mod weekday;

pub use habit::Habit;
pub use summary::ProgressSummary;
pub use weekday::DayCode;
