//! Expense Ledger - personal expense logging with monthly and category summaries
//!
//! # Architecture
//!
//! - `config`: Data directory resolution and user settings
//! - `error`: Custom error types
//! - `models`: Expense records, money, month keys, standard categories
//! - `storage`: Append-only JSON ledger with atomic writes
//! - `reports`: Aggregation engine (totals, monthly, per category)
//! - `services`: Business logic used by the CLI
//! - `audit`: Append-only audit log of logged expenses
//! - `display` / `cli`: Terminal front end
//!
//! # Example
//!
//! ```rust,no_run
//! use expense_ledger::config::LedgerPaths;
//! use expense_ledger::models::Money;
//! use expense_ledger::services::ExpenseService;
//! use expense_ledger::storage::Storage;
//!
//! # fn main() -> Result<(), expense_ledger::LedgerError> {
//! let storage = Storage::new(LedgerPaths::new()?)?;
//! let service = ExpenseService::new(&storage);
//! service.append(Money::from_cents(1250), "Food", "2024-03-02", "lunch")?;
//! println!("{}", service.total()?);
//! # Ok(())
//! # }
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{LedgerError, LedgerResult};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install the global tracing subscriber (stderr, filtered by `RUST_LOG`)
///
/// Defaults to warnings from this crate only. Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("expense_ledger=warn"));

        fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    });
}
