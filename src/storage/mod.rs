pub mod file;

pub use file::{load_habits, save_habits};
