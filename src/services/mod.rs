//! Service layer
//!
//! Business logic on top of the storage layer: input validation, audit
//! logging and on-demand summaries.

pub mod expense;

pub use expense::ExpenseService;
