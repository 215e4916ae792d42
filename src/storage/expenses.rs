//! Expense repository for JSON storage
//!
//! Holds the `expenses` table in memory and persists it to `expenses.json`
//! on every append. Records are kept in ascending id order.

use std::path::{Path, PathBuf};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde::{Deserialize, Serialize};

use crate::error::LedgerError;
use crate::models::{ExpenseDraft, ExpenseId, ExpenseRecord, Money};

use super::file_io::{read_json, write_json_atomic};

/// Serializable ledger file layout
#[derive(Debug, Clone, Serialize, Deserialize)]
struct LedgerData {
    /// Id the next append will receive; persisted so ids are never reused
    #[serde(default = "first_id")]
    next_id: ExpenseId,

    #[serde(default)]
    expenses: Vec<ExpenseRecord>,

    /// Sum of every stored amount; always fits in `Money`
    #[serde(skip)]
    total: Money,
}

fn first_id() -> ExpenseId {
    ExpenseId::FIRST
}

impl Default for LedgerData {
    fn default() -> Self {
        Self {
            next_id: first_id(),
            expenses: Vec::new(),
            total: Money::zero(),
        }
    }
}

impl LedgerData {
    /// Check ordering and record invariants, repairing a lagging `next_id`
    fn verified(mut self, path: &Path) -> Result<Self, LedgerError> {
        let corrupt = |detail: String| {
            LedgerError::Storage(format!("Corrupt ledger {}: {}", path.display(), detail))
        };

        let mut previous: Option<ExpenseId> = None;
        let mut total = Money::zero();
        for record in &self.expenses {
            if previous.is_some_and(|p| record.id <= p) {
                return Err(corrupt(format!("expense id {} is out of order", record.id)));
            }
            record
                .validate()
                .map_err(|e| corrupt(format!("expense {}: {}", record.id, e)))?;
            total = total
                .checked_add(record.amount)
                .ok_or_else(|| corrupt("sum of amounts is out of range".to_string()))?;
            previous = Some(record.id);
        }
        self.total = total;

        if let Some(last) = previous {
            if self.next_id <= last {
                self.next_id = last
                    .checked_next()
                    .ok_or_else(|| corrupt(format!("no id left after {}", last)))?;
            }
        }

        Ok(self)
    }
}

/// Repository for expense persistence
pub struct ExpenseRepository {
    path: PathBuf,
    data: RwLock<LedgerData>,
}

impl ExpenseRepository {
    /// Open the ledger at `path`, loading whatever is already stored there
    pub fn open(path: PathBuf) -> Result<Self, LedgerError> {
        let repo = Self {
            path,
            data: RwLock::new(LedgerData::default()),
        };
        repo.load()?;
        Ok(repo)
    }

    /// Reload the ledger from disk, replacing the in-memory copy
    pub fn load(&self) -> Result<(), LedgerError> {
        let file_data: LedgerData = read_json(&self.path)?;
        let file_data = file_data.verified(&self.path)?;

        tracing::debug!(
            path = %self.path.display(),
            records = file_data.expenses.len(),
            next_id = %file_data.next_id,
            "loaded expense ledger"
        );

        *self.write_lock()? = file_data;
        Ok(())
    }

    /// Append a validated draft, assigning the next id
    ///
    /// The write lock is held across id assignment and persistence, so
    /// appends are serialized. If the file cannot be written, neither the
    /// file nor the in-memory ledger changes.
    ///
    /// An append that would push the ledger total out of range is rejected
    /// as a validation error, so every sum over `scan()` is representable.
    pub fn append(&self, draft: ExpenseDraft) -> Result<ExpenseRecord, LedgerError> {
        let mut data = self.write_lock()?;

        let id = data.next_id;
        let record = ExpenseRecord::from_draft(id, draft);
        record
            .validate()
            .map_err(|e| LedgerError::Validation(e.to_string()))?;

        let total = data.total.checked_add(record.amount).ok_or_else(|| {
            LedgerError::Validation(format!(
                "Adding {} would exceed the largest ledger total",
                record.amount
            ))
        })?;
        let next_id = id.checked_next().ok_or_else(|| {
            LedgerError::Storage(format!(
                "Corrupt ledger {}: no id left after {}",
                self.path.display(),
                id
            ))
        })?;

        let previous_total = data.total;
        data.expenses.push(record.clone());
        data.next_id = next_id;
        data.total = total;

        if let Err(err) = write_json_atomic(&self.path, &*data) {
            data.expenses.pop();
            data.next_id = id;
            data.total = previous_total;
            tracing::warn!(path = %self.path.display(), error = %err, "failed to persist expense");
            return Err(err);
        }

        tracing::debug!(id = %record.id, amount = %record.amount, category = %record.category, "appended expense");
        Ok(record)
    }

    /// All records in ascending id order
    pub fn scan(&self) -> Result<Vec<ExpenseRecord>, LedgerError> {
        Ok(self.read_lock()?.expenses.clone())
    }

    pub fn count(&self) -> Result<usize, LedgerError> {
        Ok(self.read_lock()?.expenses.len())
    }

    /// Id of the most recently appended record
    pub fn last_id(&self) -> Result<Option<ExpenseId>, LedgerError> {
        Ok(self.read_lock()?.expenses.last().map(|r| r.id))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_lock(&self) -> Result<RwLockReadGuard<'_, LedgerData>, LedgerError> {
        self.data
            .read()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire read lock: {}", e)))
    }

    fn write_lock(&self) -> Result<RwLockWriteGuard<'_, LedgerData>, LedgerError> {
        self.data
            .write()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire write lock: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MAX_AMOUNT;
    use crate::reports::total_amount;
    use chrono::NaiveDate;
    use std::fs;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, ExpenseRepository) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.json");
        let repo = ExpenseRepository::open(path).unwrap();
        (temp_dir, repo)
    }

    fn draft(cents: i64, category: &str, date: &str, note: &str) -> ExpenseDraft {
        ExpenseDraft::with_date_str(Money::from_cents(cents), category, date, note).unwrap()
    }

    #[test]
    fn test_empty_ledger() {
        let (_temp_dir, repo) = create_test_repo();
        assert!(repo.scan().unwrap().is_empty());
        assert_eq!(repo.count().unwrap(), 0);
        assert_eq!(repo.last_id().unwrap(), None);
        // Opening does not create the file
        assert!(!repo.path().exists());
    }

    #[test]
    fn test_append_assigns_sequential_ids() {
        let (_temp_dir, repo) = create_test_repo();

        let first = repo.append(draft(1000, "Food", "2024-01-15", "")).unwrap();
        let second = repo.append(draft(2550, "Travel", "2024-01-20", "taxi")).unwrap();

        assert_eq!(first.id, ExpenseId::FIRST);
        assert!(second.id > first.id);
        assert_eq!(repo.last_id().unwrap(), Some(second.id));
    }

    #[test]
    fn test_append_preserves_fields() {
        let (_temp_dir, repo) = create_test_repo();
        let record = repo.append(draft(2550, "Travel", "2024-01-20", "taxi")).unwrap();

        let scanned = repo.scan().unwrap();
        assert_eq!(scanned, vec![record.clone()]);
        assert_eq!(record.amount, Money::from_cents(2550));
        assert_eq!(record.category, "Travel");
        assert_eq!(record.date, NaiveDate::from_ymd_opt(2024, 1, 20).unwrap());
        assert_eq!(record.note, "taxi");
    }

    #[test]
    fn test_scan_is_idempotent() {
        let (_temp_dir, repo) = create_test_repo();
        repo.append(draft(500, "Food", "2024-02-01", "")).unwrap();

        assert_eq!(repo.scan().unwrap(), repo.scan().unwrap());
    }

    #[test]
    fn test_reopen_keeps_records_and_ids() {
        let (temp_dir, repo) = create_test_repo();
        repo.append(draft(1000, "Food", "2024-01-15", "")).unwrap();
        repo.append(draft(500, "Food", "2024-02-01", "")).unwrap();
        let before = repo.scan().unwrap();
        drop(repo);

        let repo2 = ExpenseRepository::open(temp_dir.path().join("expenses.json")).unwrap();
        assert_eq!(repo2.scan().unwrap(), before);

        let third = repo2.append(draft(100, "Bills", "2024-03-01", "")).unwrap();
        assert_eq!(third.id, ExpenseId::new(3));
    }

    #[test]
    fn test_ids_not_reused_after_out_of_band_truncation() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.json");
        fs::write(&path, r#"{"next_id": 10, "expenses": []}"#).unwrap();

        let repo = ExpenseRepository::open(path).unwrap();
        let record = repo.append(draft(100, "Food", "2024-01-01", "")).unwrap();
        assert_eq!(record.id, ExpenseId::new(10));
    }

    #[test]
    fn test_lagging_next_id_is_repaired() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.json");
        fs::write(
            &path,
            r#"{"next_id": 1, "expenses": [
                {"id": 4, "amount": 100, "category": "Food", "date": "2024-01-01", "note": ""}
            ]}"#,
        )
        .unwrap();

        let repo = ExpenseRepository::open(path).unwrap();
        let record = repo.append(draft(100, "Food", "2024-01-02", "")).unwrap();
        assert_eq!(record.id, ExpenseId::new(5));
    }

    #[test]
    fn test_corrupt_file_is_storage_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.json");
        fs::write(&path, "{ truncated").unwrap();

        let err = ExpenseRepository::open(path).err().unwrap();
        assert!(err.is_storage());
    }

    #[test]
    fn test_out_of_order_ids_are_corruption() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.json");
        fs::write(
            &path,
            r#"{"next_id": 3, "expenses": [
                {"id": 2, "amount": 100, "category": "Food", "date": "2024-01-01", "note": ""},
                {"id": 2, "amount": 100, "category": "Food", "date": "2024-01-01", "note": ""}
            ]}"#,
        )
        .unwrap();

        let err = ExpenseRepository::open(path).err().unwrap();
        assert!(err.is_storage());
        assert!(err.to_string().contains("out of order"));
    }

    #[test]
    fn test_non_positive_stored_amount_is_corruption() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.json");
        fs::write(
            &path,
            r#"{"expenses": [
                {"id": 1, "amount": -5, "category": "Food", "date": "2024-01-01", "note": ""}
            ]}"#,
        )
        .unwrap();

        assert!(ExpenseRepository::open(path).err().unwrap().is_storage());
    }

    fn write_max_amount_ledger(path: &Path, records: u64) {
        let expenses: Vec<String> = (1..=records)
            .map(|id| {
                format!(
                    r#"{{"id": {}, "amount": {}, "category": "Food", "date": "2024-01-01", "note": ""}}"#,
                    id,
                    MAX_AMOUNT.cents()
                )
            })
            .collect();
        fs::write(path, format!(r#"{{"expenses": [{}]}}"#, expenses.join(","))).unwrap();
    }

    #[test]
    fn test_append_that_would_overflow_total_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.json");
        // 92 maximum amounts still fit in an i64 of cents, a 93rd does not
        write_max_amount_ledger(&path, 92);
        let on_disk = fs::read_to_string(&path).unwrap();

        let repo = ExpenseRepository::open(path.clone()).unwrap();
        let before = repo.scan().unwrap();
        assert_eq!(total_amount(&before), Money::from_cents(92 * MAX_AMOUNT.cents()));

        let over = ExpenseDraft::new(
            MAX_AMOUNT,
            "Food",
            NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
            "",
        )
        .unwrap();
        let err = repo.append(over).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(repo.scan().unwrap(), before);
        assert_eq!(fs::read_to_string(&path).unwrap(), on_disk);

        // Smaller amounts that still fit are accepted
        let record = repo.append(draft(100, "Food", "2024-01-02", "")).unwrap();
        assert_eq!(record.id, ExpenseId::new(93));
    }

    #[test]
    fn test_stored_total_out_of_range_is_corruption() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.json");
        write_max_amount_ledger(&path, 93);

        let err = ExpenseRepository::open(path).err().unwrap();
        assert!(err.is_storage());
        assert!(err.to_string().contains("out of range"));
    }

    #[test]
    fn test_exhausted_next_id_is_storage_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.json");
        fs::write(&path, r#"{"next_id": 18446744073709551615, "expenses": []}"#).unwrap();

        let repo = ExpenseRepository::open(path).unwrap();
        let err = repo.append(draft(100, "Food", "2024-01-01", "")).unwrap_err();
        assert!(err.is_storage());
        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    fn test_max_stored_id_is_corruption() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.json");
        fs::write(
            &path,
            r#"{"next_id": 1, "expenses": [
                {"id": 18446744073709551615, "amount": 100, "category": "Food", "date": "2024-01-01", "note": ""}
            ]}"#,
        )
        .unwrap();

        let err = ExpenseRepository::open(path).err().unwrap();
        assert!(err.is_storage());
        assert!(err.to_string().contains("no id left"));
    }

    #[test]
    fn test_failed_persist_leaves_ledger_unchanged() {
        let (temp_dir, repo) = create_test_repo();
        repo.append(draft(1000, "Food", "2024-01-15", "")).unwrap();
        let before = repo.scan().unwrap();

        fs::create_dir(temp_dir.path().join("expenses.json.tmp")).unwrap();
        let err = repo.append(draft(500, "Food", "2024-02-01", "")).unwrap_err();
        assert!(err.is_storage());
        assert_eq!(repo.scan().unwrap(), before);

        // Once the obstruction is gone the id that failed is handed out again
        fs::remove_dir(temp_dir.path().join("expenses.json.tmp")).unwrap();
        let record = repo.append(draft(500, "Food", "2024-02-01", "")).unwrap();
        assert_eq!(record.id, ExpenseId::new(2));

        repo.load().unwrap();
        assert_eq!(repo.count().unwrap(), 2);
    }
}
