use serde::Serialize;

use spendview_core::Transaction;
use spendview_import::BreakdownMode;
use spendview_report::{
    account_series, combined_series, preview, top_categories, CategoryTotal, Direction, Mode,
    SeriesPoint, TOP_CATEGORIES,
};

use crate::AppState;

const PREVIEW_ROWS: usize = 5;

/// The whole dashboard in one response: snapshot tables, the combined
/// time series and both category breakdowns.
#[derive(Debug, Serialize)]
pub struct DashboardPayload {
    pub previews: Vec<AccountPreview>,
    pub series: Vec<ChartPoint>,
    pub income: Vec<CategorySlice>,
    pub expenses: Vec<CategorySlice>,
}

#[derive(Debug, Serialize)]
pub struct AccountPreview {
    pub account: String,
    pub rows: Vec<PreviewRow>,
}

#[derive(Debug, Serialize)]
pub struct PreviewRow {
    pub date: String,
    pub amount: f64,
    pub description: String,
}

#[derive(Debug, Serialize)]
pub struct ChartPoint {
    pub date: String,
    pub amount: f64,
    pub label: String,
    pub flow: &'static str,
}

#[derive(Debug, Serialize)]
pub struct CategorySlice {
    pub label: String,
    pub value: f64,
}

impl DashboardPayload {
    pub fn build(state: &AppState) -> DashboardPayload {
        let mut previews = vec![account_preview("checking", &state.checking_raw)];
        if let Some(savings_raw) = &state.savings_raw {
            previews.push(account_preview("savings", savings_raw));
        }

        // With both accounts loaded the chart follows the combination
        // rule; with checking alone it shows that account in full.
        let series = match &state.savings {
            Some(savings) => combined_series(&state.checking, savings),
            None => account_series(&state.checking),
        };

        // Income is read from savings when that export is present, the
        // same transfer-double-count reasoning as the series; expenses
        // always come from checking.
        let income_source: &[Transaction] = match &state.savings {
            Some(savings) => savings,
            None => &state.checking,
        };
        let mode = match state.breakdown_mode {
            BreakdownMode::Amount => Mode::Amount,
            BreakdownMode::Count => Mode::Count,
        };
        let income = top_categories(income_source, Direction::Income, mode, TOP_CATEGORIES);
        let expenses = top_categories(&state.checking, Direction::Expense, mode, TOP_CATEGORIES);

        DashboardPayload {
            previews,
            series: series.iter().map(ChartPoint::from_point).collect(),
            income: income.into_iter().map(CategorySlice::from_total).collect(),
            expenses: expenses.into_iter().map(CategorySlice::from_total).collect(),
        }
    }
}

fn account_preview(account: &str, raw: &[Transaction]) -> AccountPreview {
    AccountPreview {
        account: account.to_string(),
        rows: preview(raw, PREVIEW_ROWS)
            .iter()
            .map(|tx| PreviewRow {
                date: tx.date.to_string(),
                amount: tx.amount.to_f64(),
                description: tx.description.clone(),
            })
            .collect(),
    }
}

impl ChartPoint {
    fn from_point(point: &SeriesPoint) -> ChartPoint {
        ChartPoint {
            date: point.date.to_string(),
            amount: point.amount.to_f64(),
            label: point.label.clone(),
            flow: match point.flow {
                spendview_report::Flow::Inflow => "inflow",
                spendview_report::Flow::Outflow => "outflow",
            },
        }
    }
}

impl CategorySlice {
    fn from_total(total: CategoryTotal) -> CategorySlice {
        CategorySlice {
            label: total.label,
            value: total.value,
        }
    }
}
