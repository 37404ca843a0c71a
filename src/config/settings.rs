//! User settings for moodspend
//!
//! Manages display preferences and the recovery policies for bad amounts
//! and unreadable persisted data.

use serde::{Deserialize, Serialize};

use super::paths::MoodspendPaths;
use crate::error::MoodspendError;

/// What to do with an amount that cannot be read as a number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AmountPolicy {
    /// Refuse the whole import and name the offending rows
    #[default]
    Reject,
    /// Keep the record with an amount of zero
    Zero,
}

/// What to do when the persisted expense list cannot be parsed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CorruptDataPolicy {
    /// Log a warning and continue with an empty list
    #[default]
    TreatAsEmpty,
    /// Report the error on every operation until the file is fixed
    Refuse,
}

/// User settings for moodspend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol shown in front of amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format for table rows (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    #[serde(default)]
    pub amount_policy: AmountPolicy,

    #[serde(default)]
    pub corrupt_data_policy: CorruptDataPolicy,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "₹".to_string()
}

fn default_date_format() -> String {
    "%b %-d, %Y".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            amount_policy: AmountPolicy::default(),
            corrupt_data_policy: CorruptDataPolicy::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &MoodspendPaths) -> Result<Self, MoodspendError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                MoodspendError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                MoodspendError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &MoodspendPaths) -> Result<(), MoodspendError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            MoodspendError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents).map_err(|e| {
            MoodspendError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.currency_symbol, "₹");
        assert_eq!(settings.amount_policy, AmountPolicy::Reject);
        assert_eq!(settings.corrupt_data_policy, CorruptDataPolicy::TreatAsEmpty);
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = MoodspendPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.currency_symbol = "$".into();
        settings.amount_policy = AmountPolicy::Zero;
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.currency_symbol, "$");
        assert_eq!(loaded.amount_policy, AmountPolicy::Zero);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let json = r#"{"corrupt_data_policy": "refuse"}"#;
        let settings: Settings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.corrupt_data_policy, CorruptDataPolicy::Refuse);
        assert_eq!(settings.date_format, "%b %-d, %Y");
        assert_eq!(settings.schema_version, 1);
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = MoodspendPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "{ nope").unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, MoodspendError::Config(_)));
    }
}
