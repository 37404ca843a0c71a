//! Expense repository for JSON storage
//!
//! The whole collection lives in `expenses.json` as a bare JSON array. Every
//! operation reads and rewrites the file; collections are small enough that
//! replace-all is the write primitive.

use std::fs;
use std::path::PathBuf;

use tracing::warn;

use crate::error::MoodspendError;
use crate::models::{ExpenseId, ExpenseRecord};

use super::file_io::{read_json, write_json_atomic};

/// Repository for expense persistence
pub struct ExpenseRepository {
    path: PathBuf,
    quarantine_path: PathBuf,
}

impl ExpenseRepository {
    /// Create a repository over `path`, moving corrupt files to `quarantine_path`
    pub fn new(path: PathBuf, quarantine_path: PathBuf) -> Self {
        Self {
            path,
            quarantine_path,
        }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Load every persisted expense
    ///
    /// A missing file is an empty collection. An unparseable file is
    /// `MoodspendError::CorruptData`.
    pub fn load_all(&self) -> Result<Vec<ExpenseRecord>, MoodspendError> {
        read_json(&self.path)
    }

    /// Overwrite the whole collection
    pub fn replace_all(&self, records: &[ExpenseRecord]) -> Result<(), MoodspendError> {
        write_json_atomic(&self.path, records)
    }

    /// Add one expense to the end of the collection
    pub fn append(&self, record: ExpenseRecord) -> Result<(), MoodspendError> {
        let mut records = self.load_all()?;
        records.push(record);
        self.replace_all(&records)
    }

    /// Remove the expense with the given id
    ///
    /// Returns `false` and leaves the file untouched when no expense matches.
    pub fn delete_by_id(&self, id: &ExpenseId) -> Result<bool, MoodspendError> {
        let mut records = self.load_all()?;
        match records.iter().position(|r| &r.id == id) {
            Some(index) => {
                records.remove(index);
                self.replace_all(&records)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Find an expense by its full id
    pub fn get(&self, id: &ExpenseId) -> Result<Option<ExpenseRecord>, MoodspendError> {
        Ok(self.load_all()?.into_iter().find(|r| &r.id == id))
    }

    /// Remove every expense
    pub fn clear(&self) -> Result<(), MoodspendError> {
        self.replace_all(&[])
    }

    /// Move an unreadable file aside so the next write can't destroy it
    ///
    /// The first quarantine goes to the configured path; later ones get a
    /// numeric suffix (`.1`, `.2`, ...) so earlier files are never replaced.
    /// Returns the quarantine path if a file was moved.
    pub fn quarantine(&self) -> Result<Option<PathBuf>, MoodspendError> {
        if !self.path.exists() {
            return Ok(None);
        }

        let target = self.next_quarantine_path();
        fs::rename(&self.path, &target).map_err(|e| {
            MoodspendError::Storage(format!(
                "Failed to move {} to {}: {}",
                self.path.display(),
                target.display(),
                e
            ))
        })?;

        warn!(
            from = %self.path.display(),
            to = %target.display(),
            "moved unreadable expense data aside"
        );
        Ok(Some(target))
    }

    fn next_quarantine_path(&self) -> PathBuf {
        if !self.quarantine_path.exists() {
            return self.quarantine_path.clone();
        }
        let base = self.quarantine_path.as_os_str().to_os_string();
        (1u32..)
            .map(|n| {
                let mut candidate = base.clone();
                candidate.push(format!(".{}", n));
                PathBuf::from(candidate)
            })
            .find(|candidate| !candidate.exists())
            .unwrap_or_else(|| self.quarantine_path.clone())
    }

    pub fn count(&self) -> Result<usize, MoodspendError> {
        Ok(self.load_all()?.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, Mood};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, ExpenseRepository) {
        let temp_dir = TempDir::new().unwrap();
        let repo = ExpenseRepository::new(
            temp_dir.path().join("expenses.json"),
            temp_dir.path().join("expenses.json.corrupt"),
        );
        (temp_dir, repo)
    }

    fn expense(cents: i64, day: u32, mood: Mood) -> ExpenseRecord {
        ExpenseRecord::new(
            Money::from_cents(cents),
            NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
            mood,
        )
    }

    #[test]
    fn test_empty_load() {
        let (_temp_dir, repo) = create_test_repo();
        assert!(repo.load_all().unwrap().is_empty());
        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    fn test_append_and_get() {
        let (_temp_dir, repo) = create_test_repo();
        let record = expense(5000, 15, Mood::Happy).with_category("Books");
        let id = record.id.clone();

        repo.append(record.clone()).unwrap();

        assert_eq!(repo.get(&id).unwrap(), Some(record));
        assert_eq!(repo.count().unwrap(), 1);
    }

    #[test]
    fn test_append_keeps_insertion_order() {
        let (_temp_dir, repo) = create_test_repo();
        let first = expense(100, 20, Mood::Calm);
        let second = expense(200, 1, Mood::Sad);

        repo.append(first.clone()).unwrap();
        repo.append(second.clone()).unwrap();

        assert_eq!(repo.load_all().unwrap(), vec![first, second]);
    }

    #[test]
    fn test_replace_all_round_trip_is_noop() {
        let (_temp_dir, repo) = create_test_repo();
        repo.append(expense(100, 1, Mood::Calm)).unwrap();
        repo.append(expense(250, 2, Mood::Stressed).with_description("taxi, late"))
            .unwrap();

        let before = repo.load_all().unwrap();
        let raw_before = fs::read_to_string(repo.path()).unwrap();

        repo.replace_all(&repo.load_all().unwrap()).unwrap();

        assert_eq!(repo.load_all().unwrap(), before);
        assert_eq!(fs::read_to_string(repo.path()).unwrap(), raw_before);
    }

    #[test]
    fn test_delete() {
        let (_temp_dir, repo) = create_test_repo();
        let keep = expense(100, 1, Mood::Calm);
        let gone = expense(200, 2, Mood::Happy);
        repo.append(keep.clone()).unwrap();
        repo.append(gone.clone()).unwrap();

        assert!(repo.delete_by_id(&gone.id).unwrap());
        assert_eq!(repo.load_all().unwrap(), vec![keep]);
    }

    #[test]
    fn test_delete_missing_id_changes_nothing() {
        let (_temp_dir, repo) = create_test_repo();
        repo.append(expense(100, 1, Mood::Calm)).unwrap();
        repo.append(expense(200, 2, Mood::Happy)).unwrap();
        let before = repo.load_all().unwrap();

        let missing = ExpenseId::parse("does-not-exist").unwrap();
        assert!(!repo.delete_by_id(&missing).unwrap());

        assert_eq!(repo.load_all().unwrap(), before);
    }

    #[test]
    fn test_clear() {
        let (_temp_dir, repo) = create_test_repo();
        repo.append(expense(100, 1, Mood::Calm)).unwrap();
        repo.clear().unwrap();
        assert!(repo.load_all().unwrap().is_empty());
    }

    #[test]
    fn test_corrupt_file_and_quarantine() {
        let (temp_dir, repo) = create_test_repo();
        fs::write(repo.path(), "{ this is not an array").unwrap();

        assert!(repo.load_all().unwrap_err().is_corrupt_data());
        assert!(repo.append(expense(1, 1, Mood::Calm)).is_err());

        let moved = repo.quarantine().unwrap().unwrap();
        assert_eq!(moved, temp_dir.path().join("expenses.json.corrupt"));
        assert!(moved.exists());
        assert!(repo.load_all().unwrap().is_empty());
        assert_eq!(repo.quarantine().unwrap(), None);
    }

    #[test]
    fn test_repeated_quarantine_keeps_earlier_files() {
        let (temp_dir, repo) = create_test_repo();

        fs::write(repo.path(), "FIRST-CORRUPT").unwrap();
        let first = repo.quarantine().unwrap().unwrap();
        repo.append(expense(100, 1, Mood::Calm)).unwrap();

        fs::write(repo.path(), "SECOND-CORRUPT").unwrap();
        let second = repo.quarantine().unwrap().unwrap();

        fs::write(repo.path(), "THIRD-CORRUPT").unwrap();
        let third = repo.quarantine().unwrap().unwrap();

        assert_eq!(first, temp_dir.path().join("expenses.json.corrupt"));
        assert_eq!(second, temp_dir.path().join("expenses.json.corrupt.1"));
        assert_eq!(third, temp_dir.path().join("expenses.json.corrupt.2"));
        assert_eq!(fs::read_to_string(&first).unwrap(), "FIRST-CORRUPT");
        assert_eq!(fs::read_to_string(&second).unwrap(), "SECOND-CORRUPT");
        assert_eq!(fs::read_to_string(&third).unwrap(), "THIRD-CORRUPT");
    }

    #[test]
    fn test_reads_records_written_by_other_tools() {
        let (_temp_dir, repo) = create_test_repo();
        let json = r#"[
            {"id":"1","amount":100,"date":"2024-01-01","category":"","description":"","payment":"","mood":"Stressed"},
            {"id":"2","amount":"12.5","date":"2024-01-02","mood":"Calm"}
        ]"#;
        fs::write(repo.path(), json).unwrap();

        let records = repo.load_all().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].mood, Mood::Stressed);
        assert!(records[0].category.is_none());
        assert_eq!(records[1].amount.cents(), 1250);
    }
}
