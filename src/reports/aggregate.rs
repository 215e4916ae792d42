//! Grouping and summing over the full record set
//!
//! Pure functions: same input, same output, no I/O. Buckets with no records
//! are never emitted.

use std::collections::BTreeMap;

use crate::models::{ExpenseRecord, Money, MonthKey};

/// Sum of all amounts, zero for an empty slice
pub fn total_amount(records: &[ExpenseRecord]) -> Money {
    records.iter().map(|r| r.amount).sum()
}

/// Totals per calendar month, in chronological order
pub fn monthly_summary(records: &[ExpenseRecord]) -> BTreeMap<MonthKey, Money> {
    let mut summary = BTreeMap::new();
    for record in records {
        *summary.entry(MonthKey::of(record.date)).or_insert_with(Money::zero) += record.amount;
    }
    summary
}

/// Totals per category (exact, case-sensitive match), in alphabetical order
pub fn category_summary(records: &[ExpenseRecord]) -> BTreeMap<String, Money> {
    let mut summary: BTreeMap<String, Money> = BTreeMap::new();
    for record in records {
        match summary.get_mut(record.category.as_str()) {
            Some(total) => *total += record.amount,
            None => {
                summary.insert(record.category.clone(), record.amount);
            }
        }
    }
    summary
}

/// A category's slice of total spending
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryShare {
    pub category: String,
    pub total: Money,
    pub count: usize,
    /// Percentage of the grand total
    pub percentage: f64,
}

/// Category totals with counts and percentages, largest first
///
/// Ties are broken by category name so the order is stable.
pub fn category_shares(records: &[ExpenseRecord]) -> Vec<CategoryShare> {
    let grand_total = total_amount(records);

    let mut buckets: BTreeMap<&str, (Money, usize)> = BTreeMap::new();
    for record in records {
        let entry = buckets
            .entry(record.category.as_str())
            .or_insert((Money::zero(), 0));
        entry.0 += record.amount;
        entry.1 += 1;
    }

    let mut shares: Vec<CategoryShare> = buckets
        .into_iter()
        .map(|(category, (total, count))| CategoryShare {
            category: category.to_string(),
            total,
            count,
            percentage: total.percent_of(grand_total),
        })
        .collect();

    shares.sort_by(|a, b| b.total.cmp(&a.total).then_with(|| a.category.cmp(&b.category)));
    shares
}
