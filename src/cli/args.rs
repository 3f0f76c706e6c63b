use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "ember", version, about = "A tiny terminal habit tracker with daily streaks")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new habit
    Add {
        /// Habit name
        name: String,
        /// Scheduled weekday (Su, M, T, W, Th, F, Sa or full name); repeatable
        #[arg(long = "day", value_name = "DAY")]
        days: Vec<String>,
        /// Reminder time (HH:MM), shown in listings only
        #[arg(long, default_value = "")]
        remind: String,
    },
    /// Toggle a habit's done-today mark
    Done {
        /// Habit name or unambiguous name prefix
        habit: String,
    },
    /// Show today's habits and progress (default when no command is given)
    List,
    /// Show a month calendar of scheduled habits
    Calendar {
        /// Month to show as YYYY-MM (defaults to the current month)
        month: Option<String>,
    },
    /// Show per-habit streaks
    Stats,
    /// Export a weekly text summary to stdout
    Export,
}
