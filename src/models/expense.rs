//! Expense record model
//!
//! An `ExpenseDraft` is what a caller submits; the store turns it into an
//! `ExpenseRecord` by assigning the next id. Records are never mutated after
//! that.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::{Money, MoneyParseError};

/// Date format used for input and for the persisted `date` column
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Largest amount a single expense may carry (one quadrillion units)
pub const MAX_AMOUNT: Money = Money::from_cents(100_000_000_000_000_000);

/// Identifier assigned by the store, strictly increasing and never reused
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseId(u64);

impl ExpenseId {
    /// The first id handed out by an empty ledger
    pub const FIRST: ExpenseId = ExpenseId(1);

    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub const fn value(&self) -> u64 {
        self.0
    }

    /// The id following this one, `None` once the id space is exhausted
    pub fn checked_next(&self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One logged expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    pub id: ExpenseId,

    /// Always strictly positive
    pub amount: Money,

    pub category: String,

    #[serde(with = "iso_date")]
    pub date: NaiveDate,

    #[serde(default)]
    pub note: String,
}

impl ExpenseRecord {
    /// Attach an id to a validated draft
    pub(crate) fn from_draft(id: ExpenseId, draft: ExpenseDraft) -> Self {
        Self {
            id,
            amount: draft.amount,
            category: draft.category,
            date: draft.date,
            note: draft.note,
        }
    }

    /// Re-check the invariants of a record read back from storage
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        validate_fields(self.amount, &self.category)
    }
}

impl fmt::Display for ExpenseRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} {} {} {}",
            self.id,
            self.date.format(DATE_FORMAT),
            self.category,
            self.amount
        )
    }
}

/// A not-yet-stored expense
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseDraft {
    pub amount: Money,
    pub category: String,
    pub date: NaiveDate,
    pub note: String,
}

impl ExpenseDraft {
    /// Build a draft from typed values, validating amount and category
    pub fn new(
        amount: Money,
        category: impl Into<String>,
        date: NaiveDate,
        note: impl Into<String>,
    ) -> Result<Self, ExpenseValidationError> {
        let category = category.into();
        validate_fields(amount, &category)?;
        Ok(Self {
            amount,
            category,
            date,
            note: note.into(),
        })
    }

    /// Build a draft from a `YYYY-MM-DD` date string
    pub fn with_date_str(
        amount: Money,
        category: impl Into<String>,
        date: &str,
        note: impl Into<String>,
    ) -> Result<Self, ExpenseValidationError> {
        let date = parse_date(date)?;
        Self::new(amount, category, date, note)
    }

    /// Build a draft entirely from user-entered strings
    pub fn parse(
        amount: &str,
        category: impl Into<String>,
        date: &str,
        note: impl Into<String>,
    ) -> Result<Self, ExpenseValidationError> {
        let amount = Money::parse(amount).map_err(ExpenseValidationError::InvalidAmount)?;
        Self::with_date_str(amount, category, date, note)
    }
}

/// Parse a `YYYY-MM-DD` date
pub fn parse_date(s: &str) -> Result<NaiveDate, ExpenseValidationError> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)
        .map_err(|_| ExpenseValidationError::InvalidDate(s.to_string()))
}

fn validate_fields(amount: Money, category: &str) -> Result<(), ExpenseValidationError> {
    if !amount.is_positive() {
        return Err(ExpenseValidationError::NonPositiveAmount(amount));
    }
    if amount > MAX_AMOUNT {
        return Err(ExpenseValidationError::AmountTooLarge(amount));
    }
    if category.trim().is_empty() {
        return Err(ExpenseValidationError::EmptyCategory);
    }
    Ok(())
}

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExpenseValidationError {
    #[error("Amount must be greater than zero, got {0}")]
    NonPositiveAmount(Money),

    #[error("Amount {0} exceeds the maximum of {}", MAX_AMOUNT)]
    AmountTooLarge(Money),

    #[error("{0}")]
    InvalidAmount(MoneyParseError),

    #[error("Invalid date '{0}'. Use YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Category cannot be empty")]
    EmptyCategory,
}

/// Serde adapter keeping dates as ISO `YYYY-MM-DD` text on disk
mod iso_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::DATE_FORMAT;

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&date.format(DATE_FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let s = String::deserialize(deserializer)?;
        NaiveDate::parse_from_str(&s, DATE_FORMAT).map_err(serde::de::Error::custom)
    }
}
