//! Storage layer for the expense ledger
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation. `Storage` is constructed once at startup and handed to whatever
//! needs it; nothing else touches the files directly.

pub mod expenses;
pub mod file_io;

pub use expenses::ExpenseRepository;
pub use file_io::{read_json, write_json_atomic};

use crate::audit::{AuditEntry, AuditLogger};
use crate::config::paths::LedgerPaths;
use crate::error::LedgerError;
use crate::models::ExpenseRecord;

/// Main storage coordinator
pub struct Storage {
    paths: LedgerPaths,
    pub expenses: ExpenseRepository,
    audit: AuditLogger,
    audit_enabled: bool,
}

impl Storage {
    /// Create the data directories if needed and open the ledger
    pub fn new(paths: LedgerPaths) -> Result<Self, LedgerError> {
        paths.ensure_directories()?;

        Ok(Self {
            expenses: ExpenseRepository::open(paths.ledger_file())?,
            audit: AuditLogger::new(paths.audit_log()),
            audit_enabled: true,
            paths,
        })
    }

    /// Turn audit logging of appends on or off
    pub fn with_audit(mut self, enabled: bool) -> Self {
        self.audit_enabled = enabled;
        self
    }

    pub fn paths(&self) -> &LedgerPaths {
        &self.paths
    }

    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }

    /// Record an appended expense in the audit log, if enabled
    pub fn log_append(&self, record: &ExpenseRecord) -> Result<(), LedgerError> {
        if !self.audit_enabled {
            return Ok(());
        }
        self.audit.log(&AuditEntry::append(record))
    }
}
