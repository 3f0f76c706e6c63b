use serde::{Deserialize, Serialize};

/// Today's completion tally across the whole collection. Derived on every
/// read, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressSummary {
    pub completed: usize,
    pub total: usize,
}

impl ProgressSummary {
    /// Completion percentage rounded to the nearest whole number.
    /// An empty collection reads as 0%, not a division error.
    pub fn percentage(&self) -> u32 {
        if self.total == 0 {
            0
        } else {
            ((self.completed as f64 / self.total as f64) * 100.0).round() as u32
        }
    }
}
