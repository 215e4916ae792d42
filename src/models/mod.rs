//! Core data models for the expense ledger
//!
//! Expense records, the fixed-point `Money` type, the month bucket key and
//! the standard category list.

pub mod category;
pub mod expense;
pub mod money;
pub mod month;

pub use category::{Category, UnknownCategory};
pub use expense::{
    parse_date, ExpenseDraft, ExpenseId, ExpenseRecord, ExpenseValidationError, DATE_FORMAT,
    MAX_AMOUNT,
};
pub use money::{Money, MoneyParseError};
pub use month::{MonthKey, MonthParseError};
