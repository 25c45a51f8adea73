pub mod aggregate;
pub mod series;

pub use aggregate::{top_categories, CategoryTotal, Direction, Mode, TOP_CATEGORIES};
pub use series::{account_series, combined_series, Flow, SeriesPoint};

use spendview_core::Transaction;

/// First `n` raw rows of an account, for the snapshot table.
pub fn preview(records: &[Transaction], n: usize) -> &[Transaction] {
    &records[..records.len().min(n)]
}
