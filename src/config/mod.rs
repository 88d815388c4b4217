use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

use crate::errors::{AppError, AppResult};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// First day of the reporting week, lowercase English day name.
    #[serde(default = "default_week_starts_on")]
    pub week_starts_on: String,
    /// Row cap for the dashboard recent-entries table.
    #[serde(default = "default_recent_entries_limit")]
    pub recent_entries_limit: usize,
}

fn default_week_starts_on() -> String {
    "monday".to_string()
}
fn default_recent_entries_limit() -> usize {
    10
}

impl Default for Config {
    fn default() -> Self {
        Self {
            week_starts_on: default_week_starts_on(),
            recent_entries_limit: default_recent_entries_limit(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("crewtime")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".crewtime")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("crewtime.conf")
    }

    /// Load configuration from the standard file, or return defaults if
    /// it does not exist.
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &PathBuf) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        serde_yaml::from_str(&content).map_err(|e| AppError::Config(e.to_string()))
    }

    pub fn save(&self) -> AppResult<()> {
        fs::create_dir_all(Self::config_dir())?;
        let yaml = serde_yaml::to_string(self).map_err(|_| AppError::ConfigSave)?;
        let mut file = fs::File::create(Self::config_file())?;
        file.write_all(yaml.as_bytes())?;
        Ok(())
    }

    /// Parsed week start. A bad value is a configuration error surfaced
    /// at the boundary, not coerced to a default.
    pub fn week_start(&self) -> AppResult<Weekday> {
        self.week_starts_on
            .parse()
            .map_err(|_| AppError::InvalidWeekStart(self.week_starts_on.clone()))
    }
}
