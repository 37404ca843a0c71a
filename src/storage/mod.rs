//! Storage layer for moodspend
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation.

pub mod expenses;
pub mod file_io;

pub use expenses::ExpenseRepository;
pub use file_io::{json_file_valid, read_json, write_json_atomic};

use crate::config::paths::MoodspendPaths;
use crate::error::MoodspendError;

/// Storage coordinator that owns the paths and the expense repository
pub struct Storage {
    paths: MoodspendPaths,
    pub expenses: ExpenseRepository,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: MoodspendPaths) -> Result<Self, MoodspendError> {
        paths.ensure_directories()?;

        Ok(Self {
            expenses: ExpenseRepository::new(paths.expenses_file(), paths.quarantine_file()),
            paths,
        })
    }

    pub fn paths(&self) -> &MoodspendPaths {
        &self.paths
    }

    /// Check if storage has been initialized
    pub fn is_initialized(&self) -> bool {
        self.paths.is_initialized()
    }

    /// Create an empty expense file if none exists yet
    pub fn initialize(&self) -> Result<(), MoodspendError> {
        if !self.paths.expenses_file().exists() {
            self.expenses.clear()?;
        }
        Ok(())
    }
}
