//! Audit entry data structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{ExpenseId, ExpenseRecord};

/// Types of operations that can be audited
///
/// The ledger is append-only, so appending is the only mutation there is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Append,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Append => write!(f, "APPEND"),
        }
    }
}

/// A single audit log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    pub operation: Operation,

    pub expense_id: ExpenseId,

    /// Snapshot of the record as stored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record: Option<serde_json::Value>,
}

impl AuditEntry {
    /// Create an entry for a freshly appended record
    pub fn append(record: &ExpenseRecord) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Append,
            expense_id: record.id,
            record: serde_json::to_value(record).ok(),
        }
    }

    /// One-line human readable form
    pub fn summary(&self) -> String {
        let detail = self
            .record
            .as_ref()
            .and_then(|r| serde_json::from_value::<ExpenseRecord>(r.clone()).ok())
            .map(|r| r.to_string())
            .unwrap_or_else(|| format!("#{}", self.expense_id));

        format!(
            "{} {} {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S"),
            self.operation,
            detail
        )
    }
}
