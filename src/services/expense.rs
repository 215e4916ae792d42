//! Expense service
//!
//! The boundary the presentation layer talks to: validates submitted
//! expenses, appends them, and derives summaries from a fresh scan.

use std::collections::BTreeMap;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{ExpenseDraft, ExpenseId, ExpenseRecord, Money, MonthKey};
use crate::reports::{self, ExpenseOverview};
use crate::storage::Storage;

/// Service for expense management
pub struct ExpenseService<'a> {
    storage: &'a Storage,
}

impl<'a> ExpenseService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Log a new expense and return its id
    ///
    /// Fails with `Validation` if `amount` is not positive, `date` is not a
    /// `YYYY-MM-DD` date or `category` is blank. The ledger is unchanged in
    /// that case. `category` and `note` are stored exactly as given.
    pub fn append(
        &self,
        amount: Money,
        category: &str,
        date: &str,
        note: &str,
    ) -> LedgerResult<ExpenseId> {
        let draft = ExpenseDraft::with_date_str(amount, category, date, note)
            .map_err(|e| LedgerError::Validation(e.to_string()))?;

        Ok(self.append_draft(draft)?.id)
    }

    /// Append an already-built draft, returning the stored record
    pub fn append_draft(&self, draft: ExpenseDraft) -> LedgerResult<ExpenseRecord> {
        let record = self.storage.expenses.append(draft)?;

        // The record is durable at this point; a broken audit log must not
        // make the caller believe the append failed.
        if let Err(err) = self.storage.log_append(&record) {
            tracing::warn!(id = %record.id, error = %err, "failed to write audit entry");
        }

        Ok(record)
    }

    /// All records in ascending id order
    pub fn scan(&self) -> LedgerResult<Vec<ExpenseRecord>> {
        self.storage.expenses.scan()
    }

    /// The `limit` most recently appended records, oldest first
    pub fn recent(&self, limit: usize) -> LedgerResult<Vec<ExpenseRecord>> {
        let mut records = self.scan()?;
        let start = records.len().saturating_sub(limit);
        Ok(records.split_off(start))
    }

    pub fn total(&self) -> LedgerResult<Money> {
        Ok(reports::total_amount(&self.scan()?))
    }

    pub fn monthly_summary(&self) -> LedgerResult<BTreeMap<MonthKey, Money>> {
        Ok(reports::monthly_summary(&self.scan()?))
    }

    pub fn category_summary(&self) -> LedgerResult<BTreeMap<String, Money>> {
        Ok(reports::category_summary(&self.scan()?))
    }

    pub fn overview(&self) -> LedgerResult<ExpenseOverview> {
        Ok(ExpenseOverview::from_records(&self.scan()?))
    }
}
