//! Expense display formatting
//!
//! Formats ledger records as a terminal table.

use crate::models::{ExpenseRecord, Money, DATE_FORMAT};

/// Format a list of expenses as a table, with a total row
pub fn format_expense_table(records: &[ExpenseRecord], symbol: &str) -> String {
    if records.is_empty() {
        return "No expenses recorded yet.\n".to_string();
    }

    let id_width = records
        .iter()
        .map(|r| r.id.to_string().len())
        .max()
        .unwrap_or(2)
        .max(2);

    let category_width = records
        .iter()
        .map(|r| r.category.chars().count())
        .max()
        .unwrap_or(8)
        .clamp(8, 20);

    let mut output = String::new();
    output.push_str(&format!(
        "{:>id_width$}  {:<10}  {:<category_width$}  {:>12}  {}\n",
        "ID",
        "Date",
        "Category",
        "Amount",
        "Note",
        id_width = id_width,
        category_width = category_width,
    ));

    output.push_str(&format!(
        "{:->id_width$}  {:-<10}  {:-<category_width$}  {:->12}  {:-<10}\n",
        "",
        "",
        "",
        "",
        "",
        id_width = id_width,
        category_width = category_width,
    ));

    for record in records {
        output.push_str(&format!(
            "{:>id_width$}  {:<10}  {:<category_width$}  {:>12}  {}\n",
            record.id,
            record.date.format(DATE_FORMAT).to_string(),
            record.category,
            record.amount.format_with_symbol(symbol),
            record.note,
            id_width = id_width,
            category_width = category_width,
        ));
    }

    let total: Money = records.iter().map(|r| r.amount).sum();
    output.push('\n');
    output.push_str(&format!(
        "{} expense(s), total {}\n",
        records.len(),
        total.format_with_symbol(symbol)
    ));

    output
}

/// Format a single expense for confirmation messages
pub fn format_expense_details(record: &ExpenseRecord, symbol: &str) -> String {
    let mut output = String::new();
    output.push_str(&format!("Expense:  #{}\n", record.id));
    output.push_str(&format!("Date:     {}\n", record.date.format(DATE_FORMAT)));
    output.push_str(&format!(
        "Amount:   {}\n",
        record.amount.format_with_symbol(symbol)
    ));
    output.push_str(&format!("Category: {}\n", record.category));
    if !record.note.is_empty() {
        output.push_str(&format!("Note:     {}\n", record.note));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseDraft, ExpenseId};

    fn record(id: u64, cents: i64, category: &str, note: &str) -> ExpenseRecord {
        let draft =
            ExpenseDraft::with_date_str(Money::from_cents(cents), category, "2024-01-20", note)
                .unwrap();
        ExpenseRecord::from_draft(ExpenseId::new(id), draft)
    }

    #[test]
    fn test_empty_table() {
        assert_eq!(format_expense_table(&[], "$"), "No expenses recorded yet.\n");
    }

    #[test]
    fn test_table_rows_and_total() {
        let records = vec![record(1, 1000, "Food", ""), record(2, 2550, "Travel", "taxi")];
        let output = format_expense_table(&records, "$");

        assert!(output.starts_with("ID  Date"));
        assert!(output.contains("2024-01-20"));
        assert!(output.contains("$25.50  taxi"));
        assert!(output.contains("2 expense(s), total $35.50"));
    }

    #[test]
    fn test_details_skip_empty_note() {
        let details = format_expense_details(&record(3, 500, "Food", ""), "$");
        assert!(details.contains("Expense:  #3"));
        assert!(details.contains("Amount:   $5.00"));
        assert!(!details.contains("Note:"));

        let details = format_expense_details(&record(4, 500, "Food", "lunch"), "$");
        assert!(details.contains("Note:     lunch"));
    }
}
