use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::models::DayCode;

fn default_week_start() -> String {
    "Su".to_string()
}
fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Weekday code the calendar grid's first column uses ("Su", "M", ...).
    #[serde(default = "default_week_start")]
    pub week_start: String,
    #[serde(default = "default_true")]
    pub show_reminders: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            week_start: default_week_start(),
            show_reminders: true,
        }
    }
}

impl DisplayConfig {
    /// Parsed week-start column, falling back to Sunday on a bad code.
    pub fn week_start_day(&self) -> DayCode {
        self.week_start.parse().unwrap_or(DayCode::Su)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub display: DisplayConfig,
}

impl AppConfig {
    fn project_dirs() -> Result<ProjectDirs> {
        ProjectDirs::from("", "", "ember").context("Could not determine project directories")
    }

    pub fn config_path() -> Result<PathBuf> {
        let dirs = Self::project_dirs()?;
        Ok(dirs.config_dir().join("config.toml"))
    }

    pub fn data_dir() -> Result<PathBuf> {
        let dirs = Self::project_dirs()?;
        Ok(dirs.data_dir().to_path_buf())
    }

    pub fn habits_path() -> Result<PathBuf> {
        Ok(Self::data_dir()?.join("habits.json"))
    }

    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        let content =
            std::fs::read_to_string(&path).with_context(|| format!("Reading {:?}", path))?;
        let config: AppConfig = toml::from_str(&content).context("Parsing config.toml")?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self).context("Serializing config")?;
        std::fs::write(&path, content).with_context(|| format!("Writing {:?}", path))?;
        Ok(())
    }

    pub fn ensure_data_dir() -> Result<PathBuf> {
        let dir = Self::data_dir()?;
        std::fs::create_dir_all(&dir)?;
        Ok(dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_to_missing_fields() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.display.week_start, "Su");
        assert!(config.display.show_reminders);
    }

    #[test]
    fn week_start_parses_and_falls_back() {
        let config: AppConfig = toml::from_str("[display]\nweek_start = \"M\"").unwrap();
        assert_eq!(config.display.week_start_day(), DayCode::M);

        let config: AppConfig = toml::from_str("[display]\nweek_start = \"zz\"").unwrap();
        assert_eq!(config.display.week_start_day(), DayCode::Su);
    }
}
