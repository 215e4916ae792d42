//! CLI commands for logging and listing expenses

use chrono::Local;
use clap::Args;

use crate::config::settings::Settings;
use crate::display::{format_expense_details, format_expense_table};
use crate::error::{LedgerError, LedgerResult};
use crate::models::{Category, ExpenseDraft, Money, DATE_FORMAT};
use crate::services::ExpenseService;
use crate::storage::Storage;

/// Arguments for `add`
#[derive(Args, Debug)]
pub struct AddArgs {
    /// Amount spent (e.g. 12.50)
    #[arg(allow_hyphen_values = true)]
    pub amount: String,

    /// Category: Food, Travel, Bills, Shopping, Entertainment or Others
    pub category: String,

    /// Expense date (YYYY-MM-DD), defaults to today
    #[arg(short, long)]
    pub date: Option<String>,

    /// Optional note
    #[arg(short, long, default_value = "")]
    pub note: String,

    /// Accept a category outside the standard list
    #[arg(long)]
    pub custom: bool,
}

/// Handle `add`
pub fn handle_add(storage: &Storage, settings: &Settings, args: AddArgs) -> LedgerResult<()> {
    let amount = Money::parse(&args.amount).map_err(|e| LedgerError::Validation(e.to_string()))?;
    let category = resolve_category(&args.category, args.custom)?;
    let date = args
        .date
        .unwrap_or_else(|| Local::now().date_naive().format(DATE_FORMAT).to_string());

    let draft = ExpenseDraft::with_date_str(amount, category, &date, args.note)
        .map_err(|e| LedgerError::Validation(e.to_string()))?;
    let stored = ExpenseService::new(storage).append_draft(draft)?;

    println!("Expense added successfully!");
    print!("{}", format_expense_details(&stored, &settings.currency_symbol));
    Ok(())
}

/// Handle `list`
pub fn handle_list(
    storage: &Storage,
    settings: &Settings,
    limit: Option<usize>,
    all: bool,
) -> LedgerResult<()> {
    let service = ExpenseService::new(storage);
    let records = if all {
        service.scan()?
    } else {
        service.recent(limit.unwrap_or(settings.default_list_limit))?
    };

    print!("{}", format_expense_table(&records, &settings.currency_symbol));
    Ok(())
}

/// Handle `total`
pub fn handle_total(storage: &Storage, settings: &Settings) -> LedgerResult<()> {
    let total = ExpenseService::new(storage).total()?;
    println!(
        "Total Expense: {}",
        total.format_with_symbol(&settings.currency_symbol)
    );
    Ok(())
}

/// Handle `categories`
pub fn handle_categories() {
    println!("Standard categories:");
    for category in Category::ALL {
        println!("  {}", category);
    }
    println!();
    println!("Use --custom with 'add' to log any other category.");
}

/// Map user input onto a standard category name, unless custom names are allowed
fn resolve_category(input: &str, custom: bool) -> LedgerResult<String> {
    if custom {
        return Ok(input.trim().to_string());
    }
    input
        .parse::<Category>()
        .map(|c| c.name().to_string())
        .map_err(|e| LedgerError::Validation(e.to_string()))
}
