//! Expense service
//!
//! Business logic between the CLI and the repository: form submission,
//! deletion, filtered listing, reset, and the recovery policy for an
//! unreadable expense file.

use tracing::{debug, info, warn};

use crate::config::settings::{CorruptDataPolicy, Settings};
use crate::error::{MoodspendError, MoodspendResult};
use crate::models::{ExpenseForm, ExpenseRecord};
use crate::query::{filter, sort_by_date_descending, ExpenseFilter};
use crate::storage::Storage;

/// Service for expense management
pub struct ExpenseService<'a> {
    storage: &'a Storage,
    settings: &'a Settings,
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service
    pub fn new(storage: &'a Storage, settings: &'a Settings) -> Self {
        Self { storage, settings }
    }

    /// All persisted expenses, in storage order
    ///
    /// An unreadable file reads as empty under `CorruptDataPolicy::TreatAsEmpty`.
    pub fn records(&self) -> MoodspendResult<Vec<ExpenseRecord>> {
        match self.storage.expenses.load_all() {
            Err(e) if e.is_corrupt_data() && self.degrades_on_corrupt_data() => {
                warn!(error = %e, "expense data unreadable, showing an empty list");
                Ok(Vec::new())
            }
            other => other,
        }
    }

    /// Filtered expenses, newest first
    pub fn list(&self, criteria: &ExpenseFilter) -> MoodspendResult<Vec<ExpenseRecord>> {
        let records = self.records()?;
        Ok(sort_by_date_descending(filter(&records, criteria)))
    }

    /// Submit an "add expense" form
    ///
    /// Returns `Ok(None)` without touching storage when a required field is
    /// blank. Values that are present but invalid are an error.
    pub fn submit(&self, form: ExpenseForm) -> MoodspendResult<Option<ExpenseRecord>> {
        let record = match form.into_record() {
            Ok(record) => record,
            Err(MoodspendError::IncompleteSubmission(missing)) => {
                debug!(?missing, "ignoring incomplete expense submission");
                return Ok(None);
            }
            Err(e) => return Err(e),
        };

        self.prepare_write()?;
        self.storage.expenses.append(record.clone())?;
        info!(id = %record.id, amount = %record.amount, mood = %record.mood, "added expense");

        Ok(Some(record))
    }

    /// Find an expense by full id or by an unambiguous id prefix
    pub fn find(&self, id: &str) -> MoodspendResult<Option<ExpenseRecord>> {
        let id = id.trim();
        if id.is_empty() {
            return Ok(None);
        }

        let records = self.records()?;
        if let Some(exact) = records.iter().find(|r| r.id.as_str() == id) {
            return Ok(Some(exact.clone()));
        }

        let mut matches = records.into_iter().filter(|r| r.id.as_str().starts_with(id));
        match (matches.next(), matches.next()) {
            (Some(only), None) => Ok(Some(only)),
            (Some(_), Some(_)) => Err(MoodspendError::Validation(format!(
                "Id prefix '{}' matches more than one expense",
                id
            ))),
            (None, _) => Ok(None),
        }
    }

    /// Delete an expense by id or id prefix
    ///
    /// Returns the removed expense, or `None` when nothing matched.
    pub fn delete(&self, id: &str) -> MoodspendResult<Option<ExpenseRecord>> {
        let Some(record) = self.find(id)? else {
            debug!(id, "delete requested for unknown expense");
            return Ok(None);
        };

        self.prepare_write()?;
        let removed = self.storage.expenses.delete_by_id(&record.id)?;
        if removed {
            info!(id = %record.id, "deleted expense");
            Ok(Some(record))
        } else {
            Ok(None)
        }
    }

    /// Wipe every expense, returning how many were removed
    ///
    /// Works under either corrupt-data policy so it can be used to recover.
    pub fn reset(&self) -> MoodspendResult<usize> {
        let count = match self.storage.expenses.load_all() {
            Ok(records) => records.len(),
            Err(e) if e.is_corrupt_data() => 0,
            Err(e) => return Err(e),
        };

        self.storage.expenses.clear()?;
        info!(count, "reset expense data");
        Ok(count)
    }

    fn degrades_on_corrupt_data(&self) -> bool {
        self.settings.corrupt_data_policy == CorruptDataPolicy::TreatAsEmpty
    }

    /// Make sure the next write won't clobber unreadable data
    fn prepare_write(&self) -> MoodspendResult<()> {
        match self.storage.expenses.load_all() {
            Ok(_) => Ok(()),
            Err(e) if e.is_corrupt_data() && self.degrades_on_corrupt_data() => {
                warn!(error = %e, "expense data unreadable, starting a fresh list");
                self.storage.expenses.quarantine()?;
                Ok(())
            }
            Err(e) => Err(e),
        }
    }
}
