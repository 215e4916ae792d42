use anyhow::Result;
use clap::{Parser, Subcommand};

use expense_ledger::cli::{
    handle_add, handle_categories, handle_list, handle_log_command, handle_report_command,
    handle_total, AddArgs, ReportCommands,
};
use expense_ledger::config::{paths::LedgerPaths, settings::Settings};
use expense_ledger::storage::Storage;

#[derive(Parser)]
#[command(
    name = "expenses",
    version,
    about = "Personal expense tracker",
    long_about = "Log expenses with an amount, category, date and note, then \
                  review totals per month and per category."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Log a new expense
    Add(AddArgs),

    /// List logged expenses
    #[command(alias = "ls")]
    List {
        /// Number of most recent expenses to show
        #[arg(short, long)]
        limit: Option<usize>,

        /// Show every expense
        #[arg(short, long, conflicts_with = "limit")]
        all: bool,
    },

    /// Show the total of all expenses
    Total,

    /// Summary reports
    #[command(subcommand)]
    Report(ReportCommands),

    /// List the standard categories
    Categories,

    /// Show recent audit log entries
    Log {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    expense_ledger::init_tracing();
    let cli = Cli::parse();

    let paths = LedgerPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let storage = Storage::new(paths.clone())?.with_audit(settings.audit_enabled);

    match cli.command {
        Some(Commands::Add(args)) => handle_add(&storage, &settings, args)?,
        Some(Commands::List { limit, all }) => handle_list(&storage, &settings, limit, all)?,
        Some(Commands::Total) => handle_total(&storage, &settings)?,
        Some(Commands::Report(cmd)) => handle_report_command(&storage, &settings, cmd)?,
        Some(Commands::Categories) => handle_categories(),
        Some(Commands::Log { limit }) => handle_log_command(&storage, limit)?,
        Some(Commands::Config) => {
            println!("Expense Ledger Configuration");
            println!("============================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Ledger file:    {}", paths.ledger_file().display());
            println!("Audit log:      {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:    {}", settings.currency_symbol);
            println!("  Audit log enabled:  {}", settings.audit_enabled);
            println!("  Default list limit: {}", settings.default_list_limit);
        }
        None => {
            println!("Expense Ledger - personal expense tracker");
            println!();
            println!("Run 'expenses --help' for usage information.");
            println!("Run 'expenses add 12.50 Food' to log your first expense.");
        }
    }

    Ok(())
}
