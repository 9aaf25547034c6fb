//! User settings for the money tracker
//!
//! Display preferences and the transaction file name, kept as JSON next to
//! the data. Every field has a default, so a missing or partial file is fine.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::Write;

use super::paths::TrackerPaths;
use crate::error::TrackerError;

/// User settings for the money tracker
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol shown in front of amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format for display rows (strftime format). The stored file always
    /// uses ISO dates.
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Transaction file name inside the data directory
    #[serde(default = "default_data_file")]
    pub data_file: String,

    /// Category used when none is given
    #[serde(default = "default_category")]
    pub default_category: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "₹".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_data_file() -> String {
    "transactions.txt".to_string()
}

fn default_category() -> String {
    "Other".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            data_file: default_data_file(),
            default_category: default_category(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or return defaults if the file doesn't exist
    pub fn load_or_create(paths: &TrackerPaths) -> Result<Self, TrackerError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            // Don't save yet - let caller decide when to persist
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| TrackerError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents)
            .map_err(|e| TrackerError::Config(format!("Failed to parse settings file: {}", e)))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &TrackerPaths) -> Result<(), TrackerError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| TrackerError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| TrackerError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// Reject values that would break formatting or the stored file
    pub fn validate(&self) -> Result<(), TrackerError> {
        // Unknown specifiers and time-of-day fields both fail to format a date
        let mut sample = String::new();
        if write!(sample, "{}", NaiveDate::default().format(&self.date_format)).is_err() {
            return Err(TrackerError::Config(format!(
                "Invalid date format '{}'",
                self.date_format
            )));
        }
        if self.data_file.trim().is_empty() {
            return Err(TrackerError::Config("Data file name is empty".into()));
        }
        if self.default_category.is_empty() || self.default_category.contains(',') {
            return Err(TrackerError::Config(format!(
                "Invalid default category '{}'",
                self.default_category
            )));
        }
        Ok(())
    }
}
