//! Path management for moodspend
//!
//! ## Path Resolution Order
//!
//! 1. `MOODSPEND_DATA_DIR` environment variable (if set)
//! 2. The platform config directory joined with `moodspend`
//!    (`~/.config/moodspend` on Linux, `%APPDATA%\moodspend` on Windows)

use std::path::PathBuf;

use directories::BaseDirs;

use crate::error::MoodspendError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "MOODSPEND_DATA_DIR";

/// Manages all paths used by moodspend
#[derive(Debug, Clone)]
pub struct MoodspendPaths {
    base_dir: PathBuf,
}

impl MoodspendPaths {
    /// Resolve the base directory from the environment or the platform default
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, MoodspendError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.trim().is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create paths rooted at a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (`<base>/data/`)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the persisted expense list
    pub fn expenses_file(&self) -> PathBuf {
        self.data_dir().join("expenses.json")
    }

    /// Where an unreadable expense list is moved before it gets overwritten
    pub fn quarantine_file(&self) -> PathBuf {
        self.data_dir().join("expenses.json.corrupt")
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), MoodspendError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| MoodspendError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| MoodspendError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }

    /// Check if moodspend has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

fn resolve_default_path() -> Result<PathBuf, MoodspendError> {
    let dirs = BaseDirs::new()
        .ok_or_else(|| MoodspendError::Config("Could not determine home directory".into()))?;
    Ok(dirs.config_dir().join("moodspend"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = MoodspendPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.data_dir(), temp_dir.path().join("data"));
    }

    #[test]
    fn test_env_var_override() {
        let temp_dir = TempDir::new().unwrap();
        let custom_path = temp_dir.path().to_str().unwrap();

        env::set_var(DATA_DIR_ENV, custom_path);
        let paths = MoodspendPaths::new().unwrap();
        env::remove_var(DATA_DIR_ENV);

        assert_eq!(paths.base_dir(), temp_dir.path());
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = MoodspendPaths::with_base_dir(temp_dir.path().join("nested"));

        paths.ensure_directories().unwrap();

        assert!(paths.data_dir().exists());
        assert!(!paths.is_initialized());
    }

    #[test]
    fn test_file_paths() {
        let temp_dir = TempDir::new().unwrap();
        let paths = MoodspendPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert_eq!(
            paths.expenses_file(),
            temp_dir.path().join("data").join("expenses.json")
        );
        assert_eq!(
            paths.quarantine_file(),
            temp_dir.path().join("data").join("expenses.json.corrupt")
        );
    }
}
