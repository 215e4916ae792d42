//! CLI commands for reports

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::error::LedgerResult;
use crate::services::ExpenseService;
use crate::storage::Storage;

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Totals per calendar month
    #[command(alias = "month")]
    Monthly,

    /// Totals per category with share of total spending
    #[command(alias = "categories")]
    Category,

    /// Total, monthly and category breakdown together
    Overview,
}

/// Handle report commands
pub fn handle_report_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ReportCommands,
) -> LedgerResult<()> {
    let overview = ExpenseService::new(storage).overview()?;
    let symbol = settings.currency_symbol.as_str();

    if overview.is_empty() {
        println!("No expenses recorded yet.");
        return Ok(());
    }

    match cmd {
        ReportCommands::Monthly => {
            println!("Monthly Expenses\n");
            print!("{}", overview.format_monthly(symbol));
        }
        ReportCommands::Category => {
            println!("Expenses by Category\n");
            print!("{}", overview.format_categories(symbol));
        }
        ReportCommands::Overview => {
            print!("{}", overview.format_terminal(symbol));
        }
    }

    Ok(())
}
