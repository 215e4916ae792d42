//! CLI command handlers
//!
//! Bridges clap argument parsing with the service layer.

pub mod expense;
pub mod log;
pub mod report;

pub use expense::{handle_add, handle_categories, handle_list, handle_total, AddArgs};
pub use log::handle_log_command;
pub use report::{handle_report_command, ReportCommands};
