//! Audit logging
//!
//! Every appended expense is recorded in an append-only, line-delimited JSON
//! audit log next to the ledger.

mod entry;
mod logger;

pub use entry::{AuditEntry, Operation};
pub use logger::AuditLogger;
