//! Aggregation engine
//!
//! Turns a flat list of expense records into totals grouped by month and by
//! category. Nothing here is cached or stored; callers re-derive summaries
//! from a fresh scan whenever they need them.

pub mod aggregate;
pub mod overview;

pub use aggregate::{category_shares, category_summary, monthly_summary, total_amount, CategoryShare};
pub use overview::ExpenseOverview;
