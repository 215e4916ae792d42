//! CLI command for viewing the audit log

use crate::error::LedgerResult;
use crate::storage::Storage;

/// Handle `log`
pub fn handle_log_command(storage: &Storage, limit: usize) -> LedgerResult<()> {
    let entries = storage.audit().read_recent(limit)?;

    if entries.is_empty() {
        println!("Audit log is empty.");
        return Ok(());
    }

    for entry in entries {
        println!("{}", entry.summary());
    }
    Ok(())
}
