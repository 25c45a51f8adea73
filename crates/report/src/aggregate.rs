use std::collections::HashMap;

use spendview_core::{Money, Transaction};

/// The dashboard pies show at most this many slices.
pub const TOP_CATEGORIES: usize = 10;

/// Selects transactions by amount sign before grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Keeps `amount >= 0`.
    Income,
    /// Keeps `amount < 0`; totals are negated so expenses read as
    /// positive magnitudes.
    Expense,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Amount,
    Count,
}

/// One pie slice. `value` is chart-facing: a summed amount or a
/// frequency count depending on the mode.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    pub label: String,
    pub value: f64,
}

/// Group cleaned records by label and return up to `limit` categories,
/// largest value first. Labels are the post-truncation text, so distinct
/// descriptions that truncate identically merge into one slice. Equal
/// values keep first-encountered order (the sort is stable).
pub fn top_categories(
    records: &[Transaction],
    direction: Direction,
    mode: Mode,
    limit: usize,
) -> Vec<CategoryTotal> {
    let mut order: Vec<&str> = Vec::new();
    let mut totals: HashMap<&str, (Money, u64)> = HashMap::new();

    for tx in records {
        let amount = match direction {
            Direction::Income if !tx.amount.is_negative() => tx.amount,
            Direction::Expense if tx.amount.is_negative() => -tx.amount,
            _ => continue,
        };
        let entry = totals.entry(tx.description.as_str()).or_insert_with(|| {
            order.push(tx.description.as_str());
            (Money::zero(), 0)
        });
        entry.0 = entry.0 + amount;
        entry.1 += 1;
    }

    let mut out: Vec<CategoryTotal> = order
        .into_iter()
        .map(|label| {
            let (sum, count) = totals[label];
            CategoryTotal {
                label: label.to_string(),
                value: match mode {
                    Mode::Amount => sum.to_f64(),
                    Mode::Count => count as f64,
                },
            }
        })
        .collect();

    out.sort_by(|a, b| {
        b.value
            .partial_cmp(&a.value)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    out.truncate(limit);
    out
}
