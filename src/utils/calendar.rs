use chrono::{Datelike, NaiveDate};

use crate::models::DayCode;

/// Weekday header order for a grid whose first column is `week_start`.
pub fn week_columns(week_start: DayCode) -> [DayCode; 7] {
    let all = DayCode::all();
    let start = all.iter().position(|&d| d == week_start).unwrap_or(0);
    let mut out = [DayCode::Su; 7];
    for (i, slot) in out.iter_mut().enumerate() {
        *slot = all[(start + i) % 7];
    }
    out
}

/// The days of `month`, laid into a 7-column grid: `None` pads the cells
/// before the 1st so every date lands in its weekday column.
pub fn month_cells(year: i32, month: u32, week_start: DayCode) -> Vec<Option<NaiveDate>> {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return Vec::new();
    };
    let columns = week_columns(week_start);
    let first_col = columns
        .iter()
        .position(|&d| d == DayCode::from(first.weekday()))
        .unwrap_or(0);

    let mut cells: Vec<Option<NaiveDate>> = vec![None; first_col];
    let mut day = first;
    while day.month() == month {
        cells.push(Some(day));
        match day.succ_opt() {
            Some(next) => day = next,
            None => break,
        }
    }
    cells
}
