//! Expense overview report
//!
//! Bundles the total, the monthly breakdown and the category breakdown of a
//! record set, with terminal formatting for each part.

use std::collections::BTreeMap;

use crate::models::{ExpenseRecord, Money, MonthKey};

use super::aggregate::{category_shares, monthly_summary, total_amount, CategoryShare};

const RULE_WIDTH: usize = 44;

/// Summary of a whole ledger, recomputed on demand
#[derive(Debug, Clone)]
pub struct ExpenseOverview {
    pub record_count: usize,
    pub total: Money,
    pub monthly: BTreeMap<MonthKey, Money>,
    pub categories: Vec<CategoryShare>,
}

impl ExpenseOverview {
    pub fn from_records(records: &[ExpenseRecord]) -> Self {
        Self {
            record_count: records.len(),
            total: total_amount(records),
            monthly: monthly_summary(records),
            categories: category_shares(records),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.record_count == 0
    }

    /// Monthly totals, one row per month that has expenses
    pub fn format_monthly(&self, symbol: &str) -> String {
        let mut output = String::new();
        output.push_str(&format!("{:<10} {:>15}\n", "Month", "Amount"));
        output.push_str(&"-".repeat(26));
        output.push('\n');

        for (month, amount) in &self.monthly {
            output.push_str(&format!(
                "{:<10} {:>15}\n",
                month.to_string(),
                amount.format_with_symbol(symbol)
            ));
        }

        output
    }

    /// Category totals with counts and share of the total
    pub fn format_categories(&self, symbol: &str) -> String {
        let mut output = String::new();
        output.push_str(&format!(
            "{:<16} {:>15} {:>5} {:>6}\n",
            "Category", "Amount", "Count", "%"
        ));
        output.push_str(&"-".repeat(RULE_WIDTH));
        output.push('\n');

        for share in &self.categories {
            output.push_str(&format!(
                "{:<16} {:>15} {:>5} {:>5.1}%\n",
                truncate(&share.category, 16),
                share.total.format_with_symbol(symbol),
                share.count,
                share.percentage
            ));
        }

        output
    }

    /// Format the full report for terminal display
    pub fn format_terminal(&self, symbol: &str) -> String {
        if self.is_empty() {
            return "No expenses recorded yet.\n".to_string();
        }

        let mut output = String::new();
        output.push_str("Expense Overview\n");
        output.push_str(&"=".repeat(RULE_WIDTH));
        output.push('\n');
        output.push_str(&format!(
            "Total Expense: {}\n",
            self.total.format_with_symbol(symbol)
        ));
        output.push_str(&format!("Expenses:      {}\n\n", self.record_count));

        output.push_str("MONTHLY\n");
        output.push_str(&self.format_monthly(symbol));
        output.push('\n');

        output.push_str("BY CATEGORY\n");
        output.push_str(&self.format_categories(symbol));

        output
    }

    /// The category with the largest total, if any
    pub fn top_category(&self) -> Option<&CategoryShare> {
        self.categories.first()
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", cut)
    }
}
