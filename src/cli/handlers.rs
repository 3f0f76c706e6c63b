use anyhow::{anyhow, Result};
use chrono::{Datelike, Duration, NaiveDate};
use std::path::Path;
use std::str::FromStr;
use uuid::Uuid;

use crate::config::AppConfig;
use crate::engine::HabitStore;
use crate::models::DayCode;
use crate::storage;
use crate::utils::calendar::{month_cells, week_columns};
use crate::utils::format::{progress_bar, truncate_name};

// ─── ANSI helpers ────────────────────────────────────────────────────────────

macro_rules! println_colored {
    ($color:expr, $($arg:tt)*) => {{
        print!("{}", $color);
        print!($($arg)*);
        println!("\x1b[0m");
    }};
}

const GREEN: &str = "\x1b[32m";
const AMBER: &str = "\x1b[33m";
const DIM: &str = "\x1b[2m";
const BOLD: &str = "\x1b[1m";

// ─── Add habit ───────────────────────────────────────────────────────────────

pub fn handle_add(
    store: &mut HabitStore,
    habits_path: &Path,
    name: &str,
    days: &[String],
    remind: &str,
) -> Result<()> {
    let mut frequency = Vec::with_capacity(days.len());
    for day in days {
        let code = DayCode::from_str(day)
            .map_err(|_| anyhow!("Unknown weekday '{}'. Use: Su, M, T, W, Th, F, Sa", day))?;
        frequency.push(code);
    }

    let id = store.create_habit(name, &frequency, remind)?;
    storage::save_habits(habits_path, store)?;

    let Some(habit) = store.find(id) else {
        return Ok(());
    };
    if habit.frequency.is_empty() {
        println_colored!(GREEN, "  ✓ Added habit: {} (no days scheduled yet)", habit.name);
    } else {
        let days: Vec<&str> = habit.frequency.iter().map(|d| d.as_str()).collect();
        println_colored!(GREEN, "  ✓ Added habit: {} ({})", habit.name, days.join(", "));
    }
    Ok(())
}

// ─── Toggle completion ───────────────────────────────────────────────────────

pub fn handle_done(
    store: &mut HabitStore,
    habits_path: &Path,
    selector: &str,
    today: NaiveDate,
) -> Result<()> {
    let id = resolve_habit(store, selector)?;
    store.toggle_completion(id, today);
    storage::save_habits(habits_path, store)?;

    let Some(habit) = store.find(id) else {
        return Ok(());
    };
    if habit.completed_today {
        println_colored!(
            GREEN,
            "  ✓ {} — done ({} day streak)",
            habit.name,
            habit.streak
        );
    } else {
        println_colored!(DIM, "  ○ {} — unmarked", habit.name);
    }
    Ok(())
}

/// Resolve a user-typed selector to a habit id by case-insensitive name
/// prefix. Exact matches win; an ambiguous prefix lists the candidates.
fn resolve_habit(store: &HabitStore, selector: &str) -> Result<Uuid> {
    let needle = selector.trim().to_lowercase();
    if needle.is_empty() {
        return Err(anyhow!("Habit name is required"));
    }

    if let Some(habit) = store
        .habits()
        .iter()
        .find(|h| h.name.to_lowercase() == needle)
    {
        return Ok(habit.id);
    }

    let matches: Vec<_> = store
        .habits()
        .iter()
        .filter(|h| h.name.to_lowercase().starts_with(&needle))
        .collect();

    match matches.len() {
        0 => Err(anyhow!("No habit matches '{}'", selector)),
        1 => Ok(matches[0].id),
        _ => {
            let names: Vec<&str> = matches.iter().map(|h| h.name.as_str()).collect();
            Err(anyhow!(
                "'{}' is ambiguous. Candidates: {}",
                selector,
                names.join(", ")
            ))
        }
    }
}

// ─── Today view ──────────────────────────────────────────────────────────────

pub fn handle_list(store: &HabitStore, config: &AppConfig, today: NaiveDate) -> Result<()> {
    let summary = store.progress_summary();

    println!();
    println_colored!(BOLD, "  {}", today.format("%A, %b %-d"));
    println!();

    if store.is_empty() {
        println_colored!(DIM, "  No habits yet. Try: ember add \"Read\" --day M --day Th");
        println!();
        return Ok(());
    }

    println_colored!(
        AMBER,
        "  Today  {}/{}  {}  {}%",
        summary.completed,
        summary.total,
        progress_bar(summary.completed, summary.total, 10),
        summary.percentage()
    );
    println!();

    for habit in store.habits() {
        let mark = if habit.completed_today {
            format!("{}✓\x1b[0m", GREEN)
        } else {
            "○".to_string()
        };
        let reminder = if config.display.show_reminders && !habit.reminder_time.is_empty() {
            format!("  {}{}\x1b[0m", DIM, habit.reminder_time)
        } else {
            String::new()
        };
        println!(
            "  {} {:<24} {} day streak{}",
            mark,
            truncate_name(&habit.name, 24),
            habit.streak,
            reminder
        );
    }
    println!();
    Ok(())
}

// ─── Month calendar ──────────────────────────────────────────────────────────

pub fn handle_calendar(
    store: &HabitStore,
    config: &AppConfig,
    month: Option<&str>,
    today: NaiveDate,
) -> Result<()> {
    let (year, month) = match month {
        Some(s) => parse_year_month(s)?,
        None => (today.year(), today.month()),
    };
    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| anyhow!("Invalid month: {}-{:02}", year, month))?;
    let week_start = config.display.week_start_day();

    println!();
    println_colored!(BOLD, "  {}", first.format("%B %Y"));
    println!();

    print!("  ");
    for col in week_columns(week_start) {
        print!("{:<7}", col.as_str());
    }
    println!();

    for week in month_cells(year, month, week_start).chunks(7) {
        print!("  ");
        for cell in week {
            match cell {
                None => print!("{:<7}", ""),
                Some(date) => print!("{:<7}", day_cell(store, *date)),
            }
        }
        println!();
    }

    println!();
    println_colored!(DIM, "  ● completed that day   ○ scheduled");
    println!();
    Ok(())
}

/// One grid cell: day number plus a dot per scheduled habit, capped so the
/// column stays aligned.
fn day_cell(store: &HabitStore, date: NaiveDate) -> String {
    let scheduled = store.habits_for_date(date);
    let mut markers = String::new();
    for entry in scheduled.iter().take(3) {
        markers.push(if entry.done_on_date { '●' } else { '○' });
    }
    if scheduled.len() > 3 {
        markers.push('+');
    }
    format!("{:>2}{}", date.day(), markers)
}

fn parse_year_month(s: &str) -> Result<(i32, u32)> {
    let parsed = NaiveDate::parse_from_str(&format!("{}-01", s), "%Y-%m-%d")
        .map_err(|_| anyhow!("Expected month as YYYY-MM, got '{}'", s))?;
    Ok((parsed.year(), parsed.month()))
}

// ─── Stats ───────────────────────────────────────────────────────────────────

pub fn handle_stats(store: &HabitStore) -> Result<()> {
    let summary = store.progress_summary();

    println!();
    println_colored!(BOLD, "  Statistics");
    println!();
    println_colored!(
        AMBER,
        "  Today: {}/{} habits done ({}%)",
        summary.completed,
        summary.total,
        summary.percentage()
    );
    println!();

    for habit in store.habits() {
        let last = match habit.last_completed {
            Some(date) => date.format("%Y-%m-%d").to_string(),
            None => "never".to_string(),
        };
        let days: Vec<&str> = habit.frequency.iter().map(|d| d.as_str()).collect();
        println!(
            "  {:<24} {:>3} day streak   last: {:<10}  [{}]",
            truncate_name(&habit.name, 24),
            habit.streak,
            last,
            days.join(" ")
        );
    }
    if store.is_empty() {
        println_colored!(DIM, "  No habits yet");
    }
    println!();
    Ok(())
}

// ─── Export ──────────────────────────────────────────────────────────────────

pub fn handle_export(store: &HabitStore, today: NaiveDate) -> Result<()> {
    println!("# ember — Weekly Summary");
    println!("# {}", today.format("%Y-%m-%d"));
    println!();

    println!("## Last 7 days");
    for offset in (0..7).rev() {
        let date = today - Duration::days(offset);
        println!();
        println!(
            "{} ({})",
            date.format("%Y-%m-%d"),
            DayCode::from(date.weekday()).display_name()
        );
        let scheduled = store.habits_for_date(date);
        if scheduled.is_empty() {
            println!("  (nothing scheduled)");
        }
        for entry in scheduled {
            let mark = if entry.done_on_date { "x" } else { " " };
            println!("  [{}] {}", mark, entry.habit.name);
        }
    }

    println!();
    println!("## Streaks");
    for habit in store.habits() {
        println!("  {}: {} days", habit.name, habit.streak);
    }
    Ok(())
}
